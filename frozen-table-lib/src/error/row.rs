//! RowError for record validation

/// Error raised while turning a fetched record into a [`Row`](crate::model::Row).
#[derive(Debug, Clone, thiserror::Error)]
pub enum RowError {
    /// The record at `index` was not a JSON object.
    #[error("Record {index} is not an object (got {actual})")]
    NotAnObject { index: usize, actual: &'static str },

    /// A column holds a value that cannot be shown in a cell.
    #[error("Column '{column}' holds an unsupported {actual} value")]
    Unsupported {
        column: String,
        actual: &'static str,
    },
}

impl RowError {
    /// Creates a new not-an-object error.
    pub fn not_an_object(index: usize, actual: &'static str) -> Self {
        Self::NotAnObject { index, actual }
    }

    /// Creates a new unsupported value error.
    pub fn unsupported(column: impl Into<String>, actual: &'static str) -> Self {
        Self::Unsupported {
            column: column.into(),
            actual,
        }
    }
}
