use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MainError {
    #[error("Invalid configuration")]
    Config,
    #[error("Mint parameters failed validation")]
    InvalidParams,
    #[error("Can't serialize mint parameters")]
    Serialization,
}

pub trait AsConfigError<T> {
    fn into_config_error(self) -> Result<T, MainError>;
}

impl<T> AsConfigError<T> for anyhow::Result<T> {
    #[inline]
    fn into_config_error(self) -> Result<T, MainError> {
        self.map_err(|reason| {
            tracing::error!(?reason, "Configuration error");
            MainError::Config
        })
    }
}

pub trait AsValidationError<T> {
    fn into_validation_error(self) -> Result<T, MainError>;
}

impl<T, E: Display> AsValidationError<T> for Result<T, E> {
    #[inline]
    fn into_validation_error(self) -> Result<T, MainError> {
        self.map_err(|reason| {
            tracing::error!(%reason, "{}", MainError::InvalidParams);
            MainError::InvalidParams
        })
    }
}

pub trait AsSerializationError<T> {
    fn into_serialization_error(self) -> Result<T, MainError>;
}

impl<T, E: Display> AsSerializationError<T> for Result<T, E> {
    #[inline]
    fn into_serialization_error(self) -> Result<T, MainError> {
        self.map_err(|reason| {
            tracing::error!(%reason, "{}", MainError::Serialization);
            MainError::Serialization
        })
    }
}
