use crate::error::DriverError;

pub mod config;
pub mod error;
pub mod ledger;

pub(crate) fn env(key: &str) -> Result<Option<String>, DriverError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(e) => Err(DriverError::from(e)),
    }
}
