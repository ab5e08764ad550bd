//! Paints a [`GridModel`] with pinned leading columns.

use std::ops::Range;

use frozen_table_lib::view::{GridBody, GridModel};

use super::Rect;
use super::buffer::{Buffer, Pen, TextStyle};
use super::text::fit;
use super::theme;

/// Scroll and cursor state the painter needs besides the grid itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableViewport {
    /// Selected body row.
    pub selected: Option<usize>,
    /// Header cell under the column cursor.
    pub header_cursor: Option<usize>,
    /// Revealed-row index of the grid's first body row.
    pub first_row: usize,
    /// Horizontal offset of the scrollable columns.
    pub scroll_x: u16,
    /// Cells per column.
    pub column_width: u16,
}

/// Horizontal placement of the columns inside a table area.
struct Columns {
    area: Rect,
    frozen: usize,
    width: u16,
    scroll_x: u16,
}

impl Columns {
    /// Right edge of the pinned block, clamped to the area.
    fn pinned_right(&self) -> u16 {
        let pinned = (self.frozen as u16).saturating_mul(self.width);
        self.area.x.saturating_add(pinned.min(self.area.width))
    }

    /// Start column and clip range of column `index`.
    ///
    /// Pinned columns sit at `index * width` and never move. Scrollable ones
    /// are shifted by the scroll offset and clipped to the area right of the
    /// pinned block.
    fn span(&self, index: usize) -> (i32, Range<u16>) {
        let origin = i32::from(self.area.x);
        let width = i32::from(self.width);
        if index < self.frozen {
            (origin + index as i32 * width, self.area.x..self.pinned_right())
        } else {
            let x = origin + self.frozen as i32 * width + (index - self.frozen) as i32 * width
                - i32::from(self.scroll_x);
            (x, self.pinned_right()..self.area.right())
        }
    }

    /// Paints the backgrounds of line `y` and the pin divider.
    fn paint_line(&self, buf: &mut Buffer, y: u16, pinned: Pen, scrolling: Pen) {
        buf.fill(self.area.x, y, self.area.width, scrolling);
        let right = self.pinned_right();
        if right > self.area.x {
            buf.fill(self.area.x, y, right - self.area.x, pinned);
            buf.put_str(
                i32::from(right) - 1,
                y,
                "│",
                self.area.x..right,
                theme::PIN_EDGE.with_bg(pinned.bg),
            );
        }
    }

    /// Writes `text` into column `index` on line `y`, with one cell of
    /// padding on each side.
    fn put(&self, buf: &mut Buffer, index: usize, y: u16, text: &str, pen: Pen) {
        let (x, clip) = self.span(index);
        let text = fit(text, self.width.saturating_sub(2) as usize);
        buf.put_str(x + 1, y, &text, clip, pen);
    }
}

/// Paints the header on the first line of `area` and body rows below it.
///
/// The grid holds only the rows in view, the first of them being revealed row
/// `first_row`; rows past the bottom of the area are skipped.
pub fn paint_grid(buf: &mut Buffer, area: Rect, grid: &GridModel, viewport: TableViewport) {
    if area.is_empty() {
        return;
    }
    let columns = Columns {
        area,
        frozen: grid.frozen,
        width: viewport.column_width.max(1),
        scroll_x: viewport.scroll_x,
    };

    columns.paint_line(buf, area.y, theme::PINNED_HEADER, theme::HEADER);
    for (index, cell) in grid.header.iter().enumerate() {
        let mut pen = if cell.pinned {
            theme::PINNED_HEADER
        } else {
            theme::HEADER
        };
        if viewport.header_cursor == Some(index) {
            pen = pen.with_style(TextStyle::new().bold().reverse());
        }
        columns.put(buf, index, area.y, &cell.title(), pen);
    }

    let body_top = area.y + 1;
    let body_height = area.height - 1;

    match &grid.body {
        GridBody::Empty { message, span } => {
            if body_height == 0 {
                return;
            }
            columns.paint_line(buf, body_top, theme::PINNED_CELL, theme::CELL);
            let span_width = (*span as u16).saturating_mul(columns.width);
            let right = area.x.saturating_add(span_width).min(area.right());
            buf.fill(area.x, body_top, right - area.x, theme::PLACEHOLDER);
            buf.put_str(
                i32::from(area.x) + 1,
                body_top,
                message,
                area.x..right,
                theme::PLACEHOLDER,
            );
        }
        GridBody::Rows(rows) => {
            for (line, row) in rows.iter().take(body_height as usize).enumerate() {
                let index = viewport.first_row + line;
                let y = body_top + line as u16;
                let (pinned, scrolling) = if viewport.selected == Some(index) {
                    (
                        theme::PINNED_CELL.with_bg(theme::SELECTED_BG),
                        theme::CELL.with_bg(theme::SELECTED_BG),
                    )
                } else {
                    (theme::PINNED_CELL, theme::CELL)
                };
                columns.paint_line(buf, y, pinned, scrolling);
                for (column, cell) in row.iter().enumerate() {
                    let pen = if cell.pinned { pinned } else { scrolling };
                    columns.put(buf, column, y, &cell.text, pen);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use frozen_table_lib::model::Row;
    use frozen_table_lib::view::{SortConfig, SortDirection};

    use super::*;

    fn columns() -> Vec<String> {
        ["SNo", "PracticeName", "TaskCategoryName", "Owner"]
            .map(String::from)
            .to_vec()
    }

    fn rows() -> Vec<Row> {
        (1..=5)
            .map(|i| Row::new(i, format!("Practice {i}"), "Audit").set("Owner", "kim"))
            .collect()
    }

    fn viewport() -> TableViewport {
        TableViewport {
            column_width: 10,
            ..TableViewport::default()
        }
    }

    #[test]
    fn test_header_and_rows() {
        let rows = rows();
        let sort = SortConfig::new("SNo", SortDirection::Ascending);
        let grid = GridModel::build(&columns(), &rows, 2, Some(&sort));
        let mut buf = Buffer::new(40, 4);

        paint_grid(&mut buf, Rect::from_size(40, 4), &grid, viewport());

        assert_eq!(buf.row_text(0), " SNo ↑     Practic…│ TaskCat…  Owner    ");
        assert_eq!(buf.row_text(1), " 1         Practic…│ Audit     kim      ");
        assert_eq!(buf.row_text(3), " 3         Practic…│ Audit     kim      ");
    }

    #[test]
    fn test_scrollable_columns_never_cover_pinned() {
        let rows = rows();
        let grid = GridModel::build(&columns(), &rows, 2, None);
        let mut buf = Buffer::new(40, 2);
        let viewport = TableViewport {
            scroll_x: 5,
            ..viewport()
        };

        paint_grid(&mut buf, Rect::from_size(40, 2), &grid, viewport);

        // "Audit" moves from 21 to 16; only the part right of the pin survives.
        assert_eq!(buf.row_text(1), " 1         Practic…│t     kim           ");
    }

    #[test]
    fn test_window_rows_keep_their_index() {
        let rows = rows();
        let grid = GridModel::build(&columns(), &rows[3..], 1, None);
        let mut buf = Buffer::new(40, 3);
        let viewport = TableViewport {
            first_row: 3,
            selected: Some(3),
            ..viewport()
        };

        paint_grid(&mut buf, Rect::from_size(40, 3), &grid, viewport);

        assert!(buf.row_text(1).starts_with(" 4       │"));
        assert!(buf.row_text(2).starts_with(" 5       │"));
        let selected = buf.get(15, 1).map(|cell| cell.bg);
        assert_eq!(selected, Some(theme::SELECTED_BG));
        let other = buf.get(15, 2).map(|cell| cell.bg);
        assert_eq!(other, Some(theme::BACKGROUND));
    }

    #[test]
    fn test_placeholder_spans_columns() {
        let grid = GridModel::build(&columns(), std::iter::empty(), 2, None);
        let mut buf = Buffer::new(50, 3);

        paint_grid(&mut buf, Rect::from_size(50, 3), &grid, viewport());

        assert!(buf.row_text(0).starts_with(" SNo"));
        assert!(buf.row_text(1).starts_with(" No data found!"));
        // Nothing below the placeholder row.
        assert_eq!(buf.row_text(2).trim(), "");
    }

    #[test]
    fn test_header_cursor_is_reversed() {
        let grid = GridModel::build(&columns(), &rows(), 2, None);
        let mut buf = Buffer::new(40, 2);
        let viewport = TableViewport {
            header_cursor: Some(1),
            ..viewport()
        };

        paint_grid(&mut buf, Rect::from_size(40, 2), &grid, viewport);

        let style = |x| buf.get(x, 0).map(|cell| cell.style.reverse);
        assert_eq!(style(11), Some(true));
        assert_eq!(style(1), Some(false));
    }
}
