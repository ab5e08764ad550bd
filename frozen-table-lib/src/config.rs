//! Table configuration

use crate::model::{PRACTICE_NAME, SNO, TASK_CATEGORY_NAME};

/// Default number of pinned leading columns.
pub const FROZEN_COLUMNS: usize = 2;

/// Default number of rows revealed per batch.
pub const BATCH_SIZE: usize = 10;

/// Default width of one column in terminal cells.
pub const COLUMN_WIDTH: u16 = 18;

/// Columns consulted by the search filter.
///
/// A row matches a query when any `prefix` column starts with the query, or
/// any `contains` column contains it ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchColumns {
    /// Columns matched by string prefix.
    pub prefix: Vec<String>,
    /// Columns matched by case-insensitive substring.
    pub contains: Vec<String>,
}

impl Default for SearchColumns {
    fn default() -> Self {
        Self {
            prefix: vec![SNO.to_string()],
            contains: vec![PRACTICE_NAME.to_string(), TASK_CATEGORY_NAME.to_string()],
        }
    }
}

/// Configuration for one table view.
///
/// The optional capabilities of the table are flags here rather than
/// separate table types.
///
/// # Example
///
/// ```
/// use frozen_table_lib::TableConfig;
///
/// let config = TableConfig::default()
///     .with_frozen_columns(3)
///     .with_batch_size(25)
///     .without_search();
///
/// assert_eq!(config.frozen_columns, 3);
/// assert!(!config.searchable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of leading columns pinned during horizontal scroll.
    ///
    /// Default: 2
    pub frozen_columns: usize,

    /// Rows exposed per reveal step.
    ///
    /// Default: 10
    pub batch_size: usize,

    /// Whether header activation sorts.
    pub sortable: bool,

    /// Whether the search box is shown and applied.
    pub searchable: bool,

    /// Whether rows are revealed in batches instead of all at once.
    pub incremental: bool,

    /// Columns consulted by the search filter.
    pub search: SearchColumns,

    /// Width of every column in terminal cells.
    ///
    /// Default: 18
    pub column_width: u16,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            frozen_columns: FROZEN_COLUMNS,
            batch_size: BATCH_SIZE,
            sortable: true,
            searchable: true,
            incremental: true,
            search: SearchColumns::default(),
            column_width: COLUMN_WIDTH,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of pinned columns.
    pub fn with_frozen_columns(mut self, count: usize) -> Self {
        self.frozen_columns = count;
        self
    }

    /// Sets the reveal batch size. Zero is raised to one.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Sets the searched columns.
    pub fn with_search_columns(mut self, search: SearchColumns) -> Self {
        self.search = search;
        self
    }

    /// Sets the column width in terminal cells. Zero is raised to one.
    pub fn with_column_width(mut self, width: u16) -> Self {
        self.column_width = width.max(1);
        self
    }

    /// Disables header sorting.
    pub fn without_sort(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Disables the search box.
    pub fn without_search(mut self) -> Self {
        self.searchable = false;
        self
    }

    /// Reveals every row at once.
    pub fn without_incremental(mut self) -> Self {
        self.incremental = false;
        self
    }
}
