use application::service::StatementService;
use application::transfer::{CategoryDto, CreateCustomerDto, CreateRentalDto};
use driver::config::{OutputFormat, StatementConfig};
use error_stack::ResultExt;
use kernel::interface::render::StatementFormat;
use kernel::KernelError;
use vodca::References;

#[derive(References)]
pub struct AppModule {
    config: StatementConfig,
}

impl AppModule {
    pub fn new(config: StatementConfig) -> Self {
        Self { config }
    }

    /// Customers from the configured ledger, or the sample customer when none is set.
    pub fn customers(&self) -> error_stack::Result<Vec<CreateCustomerDto>, KernelError> {
        match &self.config.ledger {
            Some(path) => driver::ledger::load(path)
                .change_context(KernelError::Internal)
                .attach_printable_lazy(|| format!("Failed to read ledger {}", path.display())),
            None => {
                tracing::info!("No ledger configured, using sample customer");
                Ok(vec![sample_customer()])
            }
        }
    }

    pub fn emit(&self, dto: CreateCustomerDto) -> error_stack::Result<String, KernelError> {
        match self.config.format {
            OutputFormat::Statement(format) => self.render_statement(dto, format),
            OutputFormat::Json => {
                let summary = self.summarize(dto)?;
                serde_json::to_string_pretty(&summary)
                    .change_context(KernelError::Internal)
                    .attach_printable("Failed to serialize statement")
            }
            OutputFormat::All => {
                let text = self.render_statement(dto.clone(), StatementFormat::Text)?;
                let html = self.render_statement(dto, StatementFormat::Html)?;
                Ok(format!("{text}\n{html}"))
            }
        }
    }
}

impl StatementService for AppModule {}

fn sample_customer() -> CreateCustomerDto {
    CreateCustomerDto {
        name: "Adam Culp".into(),
        rentals: vec![
            CreateRentalDto {
                title: "Gladiator".into(),
                category: CategoryDto::Code(0),
                days_rented: 1,
            },
            CreateRentalDto {
                title: "Spiderman".into(),
                category: CategoryDto::Code(1),
                days_rented: 2,
            },
        ],
    }
}
