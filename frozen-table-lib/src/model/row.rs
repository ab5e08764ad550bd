//! Structured table row

use super::Value;

/// Column holding the numeric row identifier.
pub const SNO: &str = "SNo";

/// Column holding the practice name.
pub const PRACTICE_NAME: &str = "PracticeName";

/// Column holding the task category name.
pub const TASK_CATEGORY_NAME: &str = "TaskCategoryName";

/// One record of the dataset.
///
/// The three columns every record is expected to carry are named fields;
/// anything else lands in `extra`, keeping the order the source sent it in.
/// A required column missing from the source is stored as [`Value::Null`]
/// and displayed as an empty cell.
///
/// # Example
///
/// ```
/// use frozen_table_lib::model::{Row, Value};
///
/// let row = Row::new("1", "Alpha", "Audit").set("Region", "North");
///
/// assert_eq!(row.get("PracticeName"), Some(&Value::from("Alpha")));
/// assert_eq!(row.get("Region"), Some(&Value::from("North")));
/// assert_eq!(row.get("Missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    /// Numeric identifier (`SNo`).
    pub s_no: Value,
    /// Practice name (`PracticeName`).
    pub practice_name: Value,
    /// Task category name (`TaskCategoryName`).
    pub task_category_name: Value,
    /// Additional columns in source order.
    pub extra: Vec<(String, Value)>,
}

impl Row {
    /// Creates a row from its required columns.
    pub fn new(
        s_no: impl Into<Value>,
        practice_name: impl Into<Value>,
        task_category_name: impl Into<Value>,
    ) -> Self {
        Self {
            s_no: s_no.into(),
            practice_name: practice_name.into(),
            task_category_name: task_category_name.into(),
            extra: Vec::new(),
        }
    }

    /// Builds a row from `(column, value)` pairs.
    ///
    /// Later duplicates of a column overwrite earlier ones.
    pub fn from_fields(fields: impl IntoIterator<Item = (String, Value)>) -> Self {
        let mut row = Row::default();
        for (column, value) in fields {
            row.insert(column, value);
        }
        row
    }

    /// Sets a column value (builder pattern).
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Inserts a column value, replacing any previous one.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match column.as_str() {
            SNO => self.s_no = value,
            PRACTICE_NAME => self.practice_name = value,
            TASK_CATEGORY_NAME => self.task_category_name = value,
            _ => match self.extra.iter_mut().find(|(name, _)| *name == column) {
                Some((_, slot)) => *slot = value,
                None => self.extra.push((column, value)),
            },
        }
    }

    /// Returns the value of a column.
    ///
    /// Required columns always resolve, possibly to [`Value::Null`].
    pub fn get(&self, column: &str) -> Option<&Value> {
        match column {
            SNO => Some(&self.s_no),
            PRACTICE_NAME => Some(&self.practice_name),
            TASK_CATEGORY_NAME => Some(&self.task_category_name),
            _ => self
                .extra
                .iter()
                .find(|(name, _)| name == column)
                .map(|(_, value)| value),
        }
    }

    /// Returns the display text of a column, empty when the column is absent.
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(|v| v.to_string()).unwrap_or_default()
    }

    /// Returns the column names this row carries: required first, then extra.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        [SNO, PRACTICE_NAME, TASK_CATEGORY_NAME]
            .into_iter()
            .chain(self.extra.iter().map(|(name, _)| name.as_str()))
    }
}
