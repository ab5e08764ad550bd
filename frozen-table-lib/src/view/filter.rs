//! Search filter stage.

use crate::config::SearchColumns;
use crate::model::Dataset;
use crate::model::Row;

/// A prepared search query.
///
/// Holds the lowercase form of the query so each row comparison does not
/// fold it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    /// Creates a query. The text is used verbatim, whitespace included.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// Returns the query as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if the query is empty and matches every row.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns `true` if `row` satisfies at least one search rule.
    ///
    /// - a `prefix` column whose text starts with the query (case-sensitive)
    /// - a `contains` column whose text contains the query, ignoring case
    pub fn matches(&self, row: &Row, columns: &SearchColumns) -> bool {
        if self.is_empty() {
            return true;
        }

        let by_prefix = columns
            .prefix
            .iter()
            .any(|column| row.text(column).starts_with(&self.raw));

        by_prefix
            || columns
                .contains
                .iter()
                .any(|column| row.text(column).to_lowercase().contains(&self.folded))
    }
}

/// Returns the indices of the rows matching `query`, in dataset order.
pub fn filter_rows(dataset: &Dataset, columns: &SearchColumns, query: &SearchQuery) -> Vec<usize> {
    if query.is_empty() {
        return (0..dataset.len()).collect();
    }

    dataset
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| query.matches(row, columns))
        .map(|(index, _)| index)
        .collect()
}
