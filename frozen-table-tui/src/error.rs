//! Application error type.

use std::io;

use thiserror::Error;

/// Errors that end the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("data source error: {0}")]
    Source(#[from] frozen_table_lib::error::ApiError),
    #[error("logging error: {0}")]
    Logging(#[from] log::SetLoggerError),
}
