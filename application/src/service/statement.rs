use std::collections::HashMap;
use std::sync::Arc;

use error_stack::ResultExt;
use kernel::interface::render::StatementFormat;
use kernel::prelude::entity::{
    Customer, CustomerName, DaysRented, Movie, MovieTitle, PriceCategory, Rental,
};
use kernel::KernelError;

use crate::transfer::{CreateCustomerDto, StatementDto};

pub trait StatementService: 'static + Sync + Send {
    /// Builds a customer with its rentals in the given order.
    ///
    /// Rentals naming the same title and category share one `Movie`.
    #[tracing::instrument(skip_all, fields(customer = %dto.name))]
    fn open_account(&self, dto: CreateCustomerDto) -> error_stack::Result<Customer, KernelError> {
        let mut catalogue: HashMap<(String, PriceCategory), Arc<Movie>> = HashMap::new();
        let mut customer = Customer::new(CustomerName::new(dto.name));

        for rental in dto.rentals {
            let title = rental.title;
            let category = PriceCategory::try_from(rental.category)
                .attach_printable_lazy(|| format!("Rental of {title}"))?;
            let movie = catalogue
                .entry((title.clone(), category))
                .or_insert_with(|| Arc::new(Movie::new(MovieTitle::new(title), category)));
            customer.add_rental(Rental::new(
                Arc::clone(movie),
                DaysRented::new(rental.days_rented),
            ));
        }

        tracing::debug!(
            rentals = customer.rentals().len(),
            movies = catalogue.len(),
            "Account opened"
        );
        Ok(customer)
    }

    fn render_statement(
        &self,
        dto: CreateCustomerDto,
        format: StatementFormat,
    ) -> error_stack::Result<String, KernelError> {
        let customer = self.open_account(dto)?;
        let statement = format.render(&customer);
        tracing::info!(
            customer = %customer.name().as_ref(),
            ?format,
            total = %customer.total_charge(),
            "Statement rendered"
        );
        Ok(statement)
    }

    fn summarize(&self, dto: CreateCustomerDto) -> error_stack::Result<StatementDto, KernelError> {
        let customer = self.open_account(dto)?;
        Ok(StatementDto::from(customer))
    }
}
