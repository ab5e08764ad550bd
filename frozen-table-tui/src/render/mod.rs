//! Screen painting.

mod buffer;
mod table;
mod text;
pub mod theme;

pub use buffer::{Buffer, Rgb, TextStyle};
pub use table::{TableViewport, paint_grid};
pub use text::char_width;

use crate::app::{App, Focus, Status};

/// Title shown on the first line.
pub const TITLE: &str = "Data Table with frozen columns";

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }
}

/// Paints the whole screen for `app`.
///
/// Layout, top to bottom: title, search box (when searchable), table header
/// and body, status line.
pub fn draw(app: &App, buf: &mut Buffer) {
    let screen = Rect::from_size(buf.width(), buf.height());
    if screen.is_empty() {
        return;
    }
    for y in 0..screen.height {
        buf.fill(0, y, screen.width, theme::TEXT);
    }
    let full = 0..screen.width;

    buf.put_str(1, 0, TITLE, full.clone(), theme::TITLE);
    let mut top = 1;

    if app.config().searchable {
        draw_search(app, buf, top);
        top += 1;
    }

    let status_y = screen.height - 1;
    let table = Rect::new(0, top, screen.width, status_y.saturating_sub(top));

    match app.status() {
        Status::Loading => {
            let frame = SPINNER[app.tick() % SPINNER.len()];
            let text = format!("{frame} Loading data…");
            buf.put_str(1, table.y, &text, full.clone(), theme::HINT);
        }
        Status::Failed(message) => {
            let text = format!("Failed to load data: {message}");
            buf.put_str(1, table.y, &text, full.clone(), theme::FAILURE);
        }
        Status::Ready => {
            let viewport = TableViewport {
                selected: app.selected(),
                header_cursor: Some(app.header_cursor()),
                first_row: app.scroll_y(),
                scroll_x: app.scroll_x(),
                column_width: app.config().column_width,
            };
            let rows = table.height.saturating_sub(1) as usize;
            let grid = app.view().grid_window(app.scroll_y(), rows);
            paint_grid(buf, table, &grid, viewport);
        }
    }

    if status_y >= top {
        draw_status(app, buf, status_y);
    }
}

fn draw_search(app: &App, buf: &mut Buffer, y: u16) {
    let full = 0..buf.width();
    let end = buf.put_str(1, y, "Search: ", full.clone(), theme::HINT);
    let focused = app.focus() == Focus::Search;

    if app.search().is_empty() && !focused {
        buf.put_str(end, y, "press / to search", full, theme::HINT);
        return;
    }
    let end = buf.put_str(end, y, app.search(), full.clone(), theme::TEXT);
    if focused {
        let caret = theme::TEXT.with_style(TextStyle::new().reverse());
        buf.put_str(end, y, " ", full, caret);
    }
}

fn draw_status(app: &App, buf: &mut Buffer, y: u16) {
    let full = 0..buf.width();
    let view = app.view();
    match app.status() {
        Status::Loading => {
            buf.put_str(1, y, "Fetching rows…", full, theme::HINT);
        }
        Status::Failed(_) => {
            buf.put_str(1, y, "Load failed · q quit", full, theme::FAILURE);
        }
        Status::Ready => {
            let mut text = format!(
                "{} / {} / {} rows",
                view.revealed_len(),
                view.matching_len(),
                view.total_len()
            );
            if let Some(column) = view.dataset().columns().get(app.header_cursor()) {
                let direction = view
                    .config()
                    .sortable
                    .then(|| view.sort().direction_of(column))
                    .flatten()
                    .unwrap_or_default();
                text.push_str(&format!(" · {} column, {}", column, direction.describe()));
            }
            buf.put_str(1, y, &text, full, theme::HINT);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use frozen_table_lib::error::{ApiError, Error};
    use frozen_table_lib::model::{Dataset, Row};
    use frozen_table_lib::{LoadState, TableConfig};

    use super::*;
    use crate::input::Action;

    fn app(width: u16, height: u16) -> App {
        let mut app = App::new(TableConfig::default());
        app.set_viewport(width, height);
        app
    }

    fn render(app: &App, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::new(width, height);
        draw(app, &mut buf);
        buf
    }

    #[test]
    fn test_loading_screen() {
        let app = app(50, 8);
        let buf = render(&app, 50, 8);

        assert_eq!(buf.row_text(0).trim_end(), " Data Table with frozen columns");
        assert_eq!(buf.row_text(1).trim_end(), " Search: press / to search");
        assert_eq!(buf.row_text(2).trim_end(), " ⠋ Loading data…");
        assert_eq!(buf.row_text(7).trim_end(), " Fetching rows…");
    }

    #[test]
    fn test_failure_screen() {
        let mut app = app(60, 8);
        let error = Error::from(ApiError::http(500, "boom"));
        app.on_load(LoadState::Failed(Arc::new(error)));
        let buf = render(&app, 60, 8);

        assert_eq!(
            buf.row_text(2).trim_end(),
            " Failed to load data: HTTP 500: boom"
        );
    }

    #[test]
    fn test_loaded_screen() {
        let mut app = app(80, 8);
        let rows = vec![Row::new("2", "Beta", "X"), Row::new("1", "Alpha", "Y")];
        app.on_load(LoadState::Loaded(Dataset::from_rows(rows)));
        app.apply(Action::Right);
        app.apply(Action::Activate);
        let buf = render(&app, 80, 8);

        assert!(buf.row_text(2).contains("PracticeName ↑"));
        let first = buf.row_text(3);
        assert!(first.starts_with(" 1 ") && first.contains(" Alpha "));
        let second = buf.row_text(4);
        assert!(second.starts_with(" 2 ") && second.contains(" Beta "));
        assert_eq!(
            buf.row_text(7).trim_end(),
            " 2 / 2 / 2 rows · PracticeName column, sorted ascending"
        );
    }

    #[test]
    fn test_scrolled_screen_shows_window() {
        let mut app = app(80, 14);
        let rows = (1..=40)
            .map(|i| Row::new(i.to_string(), format!("Practice {i}"), "Task"))
            .collect();
        app.on_load(LoadState::Loaded(Dataset::from_rows(rows)));
        app.apply(Action::End);
        app.apply(Action::End);
        assert_eq!(app.selected(), Some(19));
        let buf = render(&app, 80, 14);

        // Ten body rows, revealed rows 10..20.
        assert!(buf.row_text(3).starts_with(" 11 "));
        assert!(buf.row_text(12).starts_with(" 20 "));
        let selected = buf.get(30, 12).map(|cell| cell.bg);
        assert_eq!(selected, Some(theme::SELECTED_BG));
        assert!(buf.row_text(13).starts_with(" 30 / 40 / 40 rows · SNo column, not sorted"));
    }

    #[test]
    fn test_empty_result_screen() {
        let mut app = app(80, 8);
        app.on_load(LoadState::Loaded(Dataset::from_rows(vec![Row::new(
            "1", "Alpha", "Y",
        )])));
        app.apply(Action::FocusSearch);
        app.apply(Action::Insert('z'));
        let buf = render(&app, 80, 8);

        assert_eq!(buf.row_text(1).trim_end(), " Search: z");
        assert!(buf.row_text(2).starts_with(" SNo"));
        assert!(buf.row_text(3).starts_with(" No data found!"));
        assert!(buf.row_text(7).starts_with(" 0 / 0 / 1 rows"));
    }

    #[test]
    fn test_tiny_screen_does_not_panic() {
        let app = app(3, 1);
        let buf = render(&app, 3, 1);
        assert_eq!(buf.row_text(0), " Da");
    }
}
