//! Presentation model for the table painter.

use crate::model::Row;

use super::SortConfig;
use super::SortDirection;

/// Placeholder shown when no row is left to display.
pub const NO_DATA: &str = "No data found!";

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column name; also the key passed back on activation.
    pub column: String,
    /// Direction marker when this column is the sorted one.
    pub sort: Option<SortDirection>,
    /// Whether the column stays pinned during horizontal scroll.
    pub pinned: bool,
}

impl HeaderCell {
    /// Text shown in the header: the column name plus the sort arrow.
    pub fn title(&self) -> String {
        match self.sort.and_then(SortDirection::glyph) {
            Some(glyph) => format!("{} {}", self.column, glyph),
            None => self.column.clone(),
        }
    }

    /// Accessible description, e.g. `"SNo column, sorted ascending"`.
    pub fn label(&self) -> String {
        let state = self.sort.unwrap_or(SortDirection::Unsorted).describe();
        format!("{} column, {}", self.column, state)
    }
}

/// One body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Display text.
    pub text: String,
    /// Whether the cell belongs to a pinned column.
    pub pinned: bool,
}

/// Table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridBody {
    /// One entry per row, cells in column order.
    Rows(Vec<Vec<GridCell>>),
    /// Single placeholder row spanning `span` columns.
    Empty {
        /// Placeholder text.
        message: &'static str,
        /// Columns the placeholder spans.
        span: usize,
    },
}

/// What the painter draws: header, body and pin boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    /// Header cells in display order.
    pub header: Vec<HeaderCell>,
    /// Body rows, or the placeholder.
    pub body: GridBody,
    /// Number of pinned leading columns, clamped to the column count.
    pub frozen: usize,
    /// Whether header cells accept activation.
    pub sortable: bool,
}

impl GridModel {
    /// Builds the model for `rows` laid out over `columns`.
    ///
    /// Cells for columns a row lacks are empty. With no rows the body is the
    /// [`NO_DATA`] placeholder.
    pub fn build<'a>(
        columns: &[String],
        rows: impl IntoIterator<Item = &'a Row>,
        frozen: usize,
        sort: Option<&SortConfig>,
    ) -> Self {
        let frozen = frozen.min(columns.len());

        let header = columns
            .iter()
            .enumerate()
            .map(|(index, column)| HeaderCell {
                column: column.clone(),
                sort: sort
                    .and_then(|s| s.direction_of(column))
                    .filter(|d| *d != SortDirection::Unsorted),
                pinned: index < frozen,
            })
            .collect();

        let body: Vec<Vec<GridCell>> = rows
            .into_iter()
            .map(|row| {
                columns
                    .iter()
                    .enumerate()
                    .map(|(index, column)| GridCell {
                        text: row.text(column),
                        pinned: index < frozen,
                    })
                    .collect()
            })
            .collect();

        let body = if body.is_empty() {
            GridBody::Empty {
                message: NO_DATA,
                span: columns.len().max(1),
            }
        } else {
            GridBody::Rows(body)
        };

        Self {
            header,
            body,
            frozen,
            sortable: sort.is_some(),
        }
    }

    /// Returns the number of body rows, zero for the placeholder.
    pub fn row_count(&self) -> usize {
        match &self.body {
            GridBody::Rows(rows) => rows.len(),
            GridBody::Empty { .. } => 0,
        }
    }

    /// Returns `true` when the placeholder is shown.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, GridBody::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<String> {
        ["SNo", "PracticeName", "TaskCategoryName", "Hours"]
            .map(String::from)
            .to_vec()
    }

    #[test]
    fn test_pinned_flags_follow_frozen_count() {
        let rows = [Row::new("1", "Alpha", "X").set("Hours", 3i64)];
        let grid = GridModel::build(&columns(), &rows, 2, None);

        let pinned: Vec<_> = grid.header.iter().map(|h| h.pinned).collect();
        assert_eq!(pinned, [true, true, false, false]);

        let GridBody::Rows(body) = &grid.body else {
            panic!("expected rows");
        };
        assert_eq!(body[0][1], GridCell { text: "Alpha".into(), pinned: true });
        assert_eq!(body[0][3], GridCell { text: "3".into(), pinned: false });
        assert!(!grid.sortable);
    }

    #[test]
    fn test_frozen_is_clamped() {
        let grid = GridModel::build(&columns(), &[] as &[Row], 9, None);
        assert_eq!(grid.frozen, 4);
    }

    #[test]
    fn test_empty_body_is_placeholder() {
        let grid = GridModel::build(&columns(), &[] as &[Row], 1, None);
        assert_eq!(
            grid.body,
            GridBody::Empty {
                message: "No data found!",
                span: 4
            }
        );
        assert!(grid.is_empty());
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn test_header_marks_sort() {
        let sort = SortConfig::new("PracticeName", SortDirection::Descending);
        let grid = GridModel::build(&columns(), &[] as &[Row], 0, Some(&sort));

        assert!(grid.sortable);
        assert_eq!(grid.header[1].title(), "PracticeName ↓");
        assert_eq!(grid.header[1].label(), "PracticeName column, sorted descending");
        assert_eq!(grid.header[0].title(), "SNo");
        assert_eq!(grid.header[0].label(), "SNo column, not sorted");
    }

    #[test]
    fn test_unsorted_key_shows_no_marker() {
        let sort = SortConfig::new("SNo", SortDirection::Unsorted);
        let grid = GridModel::build(&columns(), &[] as &[Row], 0, Some(&sort));
        assert_eq!(grid.header[0].sort, None);
        assert_eq!(grid.header[0].label(), "SNo column, not sorted");
    }
}
