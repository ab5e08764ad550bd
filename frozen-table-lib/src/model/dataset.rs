//! Immutable dataset as fetched from the data source

use std::sync::Arc;

use super::Row;
use super::Value;
use super::row_serde::RawRecord;
use crate::error::ApiError;
use crate::error::Error;
use crate::error::RowError;

/// The full, unfiltered set of rows.
///
/// Column order comes from the first record and is extended with any column
/// a later record introduces, in first-seen order. Rows lacking a column
/// display it as empty. Cloning is cheap; rows are shared behind an `Arc`.
///
/// # Example
///
/// ```
/// use frozen_table_lib::model::Dataset;
///
/// let dataset = Dataset::from_json(
///     r#"[{"SNo": "2", "PracticeName": "Beta", "TaskCategoryName": "X"}]"#,
/// )?;
/// assert_eq!(dataset.columns(), ["SNo", "PracticeName", "TaskCategoryName"]);
/// assert_eq!(dataset.len(), 1);
/// # Ok::<(), frozen_table_lib::error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Arc<[String]>,
    rows: Arc<[Row]>,
}

impl Dataset {
    /// Creates a dataset with explicit column order.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            columns: columns.into(),
            rows: rows.into(),
        }
    }

    /// Creates a dataset whose columns are the union of the rows' columns.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for name in row.column_names() {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }
        }
        Self::new(columns, rows)
    }

    /// Parses a JSON array of row objects.
    ///
    /// A body that is not a JSON array yields [`ApiError::Parse`]; an array
    /// element that is not an object, or a cell holding an array or object,
    /// yields a [`RowError`].
    pub fn from_json(body: &str) -> Result<Self, Error> {
        let records: Vec<RawRecord> = serde_json::from_str(body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), body))?;
        Ok(Self::from_records(records)?)
    }

    pub(crate) fn from_records(records: Vec<RawRecord>) -> Result<Self, RowError> {
        let mut columns: Vec<String> = Vec::new();
        let mut rows = Vec::with_capacity(records.len());
        let mut ragged = 0usize;

        for (index, record) in records.into_iter().enumerate() {
            let fields = match record {
                RawRecord::Object(fields) => fields,
                RawRecord::Other(actual) => return Err(RowError::not_an_object(index, actual)),
            };

            if index > 0 && !same_keys(&columns, &fields) {
                ragged += 1;
            }

            let mut values = Vec::with_capacity(fields.len());
            for (column, json) in fields {
                let value = Value::from_json(&column, json)?;
                if !columns.iter().any(|c| *c == column) {
                    columns.push(column.clone());
                }
                values.push((column, value));
            }
            rows.push(Row::from_fields(values));
        }

        if ragged > 0 {
            log::warn!(
                "{} of {} records deviate from the column set of the first record",
                ragged,
                rows.len()
            );
        }

        Ok(Self::new(columns, rows))
    }

    /// Returns the column names in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns all rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the row at `index`.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn same_keys(columns: &[String], fields: &[(String, serde_json::Value)]) -> bool {
    columns.len() == fields.len()
        && columns
            .iter()
            .zip(fields)
            .all(|(column, (key, _))| column == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_first_record() {
        let dataset = Dataset::from_json(
            r#"[
                {"TaskCategoryName": "X", "SNo": "1", "PracticeName": "A", "Hours": 3},
                {"TaskCategoryName": "Y", "SNo": "2", "PracticeName": "B", "Hours": 4}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            dataset.columns(),
            ["TaskCategoryName", "SNo", "PracticeName", "Hours"]
        );
        assert_eq!(dataset.row(1).unwrap().get("Hours"), Some(&Value::Int(4)));
    }

    #[test]
    fn test_ragged_records_extend_columns() {
        let dataset = Dataset::from_json(
            r#"[
                {"SNo": "1", "PracticeName": "A"},
                {"SNo": "2", "PracticeName": "B", "TaskCategoryName": "Z", "Notes": "n"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            dataset.columns(),
            ["SNo", "PracticeName", "TaskCategoryName", "Notes"]
        );
        assert_eq!(dataset.row(0).unwrap().text("TaskCategoryName"), "");
        assert_eq!(dataset.row(0).unwrap().text("Notes"), "");
    }

    #[test]
    fn test_empty_array() {
        let dataset = Dataset::from_json("[]").unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.columns().is_empty());
    }

    #[test]
    fn test_non_array_body_is_parse_error() {
        let err = Dataset::from_json("<html>oops</html>").unwrap_err();
        match err {
            Error::Api(api) => assert_eq!(api.body(), Some("<html>oops</html>")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_record_reports_index() {
        let err = Dataset::from_json(r#"[{"SNo": "1"}, "oops"]"#).unwrap_err();
        assert!(matches!(
            err,
            Error::Row(RowError::NotAnObject { index: 1, actual: "string" })
        ));
    }

    #[test]
    fn test_from_rows_unions_columns() {
        let dataset = Dataset::from_rows(vec![
            Row::new("1", "A", "X").set("Owner", "kim"),
            Row::new("2", "B", "Y").set("Due", "mon"),
        ]);
        assert_eq!(
            dataset.columns(),
            ["SNo", "PracticeName", "TaskCategoryName", "Owner", "Due"]
        );
    }
}
