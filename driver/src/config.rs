use std::path::PathBuf;
use std::str::FromStr;

use kernel::interface::render::StatementFormat;

use crate::error::DriverError;

const FORMAT_KEY: &str = "STATEMENT_FORMAT";
const LEDGER_KEY: &str = "RENTAL_LEDGER";
const LOG_DIR_KEY: &str = "STATEMENT_LOG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Statement(StatementFormat),
    Json,
    /// Text followed by HTML.
    All,
}

impl FromStr for OutputFormat {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "all" => Ok(OutputFormat::All),
            _ => s
                .parse::<StatementFormat>()
                .map(OutputFormat::Statement)
                .map_err(|_| DriverError::InvalidValue {
                    key: FORMAT_KEY,
                    value: s.to_string(),
                }),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Statement(StatementFormat::Text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementConfig {
    pub format: OutputFormat,
    pub ledger: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl StatementConfig {
    /// Reads the process environment, honouring a `.env` file if present.
    #[tracing::instrument]
    pub fn from_env() -> Result<Self, DriverError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e.into());
            }
        }
        let config = Self::from_lookup(|key| crate::env(key))?;
        tracing::debug!(?config, "Loaded statement config");
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DriverError>
    where
        F: Fn(&'static str) -> Result<Option<String>, DriverError>,
    {
        let format = match lookup(FORMAT_KEY)? {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        let path = |key: &'static str| -> Result<Option<PathBuf>, DriverError> {
            Ok(lookup(key)?
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from))
        };
        Ok(Self {
            format,
            ledger: path(LEDGER_KEY)?,
            log_dir: path(LOG_DIR_KEY)?,
        })
    }
}
