use error_stack::Report;
use kernel::prelude::entity::PriceCategory;
use kernel::KernelError;

/// Price category as it arrives from outside: a legacy numeric code or a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryDto {
    Code(i32),
    Name(String),
}

impl TryFrom<CategoryDto> for PriceCategory {
    type Error = Report<KernelError>;

    fn try_from(value: CategoryDto) -> Result<Self, Self::Error> {
        match value {
            CategoryDto::Code(code) => PriceCategory::try_from(code),
            CategoryDto::Name(name) => name.parse(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRentalDto {
    pub title: String,
    pub category: CategoryDto,
    pub days_rented: i32,
}

#[derive(Debug, Clone)]
pub struct CreateCustomerDto {
    pub name: String,
    pub rentals: Vec<CreateRentalDto>,
}
