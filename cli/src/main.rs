use crate::error::StackTrace;
use crate::handler::AppModule;
use driver::config::StatementConfig;
use error_stack::ResultExt;
use kernel::KernelError;
use std::io::Write;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod error;
mod handler;

fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "statement.log");
            let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "kernel=info,application=debug,driver=debug,cli=debug".into()
                    }),
                )),
        )
        .with(file_layer)
        .init();

    guard
}

fn main() -> Result<(), StackTrace> {
    let config = StatementConfig::from_env()
        .change_context(KernelError::Internal)
        .attach_printable("Failed to load statement config")?;
    let _guard = init_tracing(config.log_dir.as_deref());

    let app = AppModule::new(config);
    tracing::debug!(format = ?app.config().format, "Starting statement run");

    let mut stdout = std::io::stdout().lock();
    for customer in app.customers()? {
        let statement = app.emit(customer)?;
        writeln!(stdout, "{statement}")
            .change_context(KernelError::Internal)
            .attach_printable("Failed to write statement")?;
    }

    Ok(())
}
