//! Error types

mod api;
mod row;

pub use api::*;
pub use row::*;

/// Top-level error for loading and validating a dataset.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The data source request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A fetched record could not be turned into a row.
    #[error(transparent)]
    Row(#[from] RowError),
}
