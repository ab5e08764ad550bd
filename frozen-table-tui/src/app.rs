//! Application state and event handling.
//!
//! Everything here is synchronous: the event loop feeds [`Action`]s and load
//! results in, the painter reads the state out.

use frozen_table_lib::LoadState;
use frozen_table_lib::TableConfig;
use frozen_table_lib::model::Dataset;
use frozen_table_lib::view::TableView;

use crate::input::Action;

/// Which part of the screen receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Table,
}

/// Where the start-up fetch stands, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Ready,
    Failed(String),
}

/// Lines taken by the title, search box, header and status line.
fn chrome_height(searchable: bool) -> u16 {
    if searchable { 4 } else { 3 }
}

#[derive(Debug)]
pub struct App {
    view: TableView,
    status: Status,
    focus: Focus,
    search: String,
    /// Selected body row, an index into the revealed rows.
    selected: usize,
    /// Column under the header cursor.
    header: usize,
    /// First body row inside the viewport.
    scroll_y: usize,
    /// Horizontal offset of the scrollable columns, in cells.
    scroll_x: u16,
    width: u16,
    height: u16,
    tick: usize,
    quit: bool,
}

impl App {
    pub fn new(config: TableConfig) -> Self {
        Self {
            view: TableView::new(config, Dataset::default()),
            status: Status::Loading,
            focus: Focus::Table,
            search: String::new(),
            selected: 0,
            header: 0,
            scroll_y: 0,
            scroll_x: 0,
            width: 0,
            height: 0,
            tick: 0,
            quit: false,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn config(&self) -> &TableConfig {
        self.view.config()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected(&self) -> Option<usize> {
        (self.view.revealed_len() > 0).then_some(self.selected)
    }

    pub fn header_cursor(&self) -> usize {
        self.header
    }

    pub fn scroll_y(&self) -> usize {
        self.scroll_y
    }

    pub fn scroll_x(&self) -> u16 {
        self.scroll_x
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Number of body rows that fit on screen.
    pub fn body_height(&self) -> usize {
        self.height
            .saturating_sub(chrome_height(self.config().searchable)) as usize
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Records the terminal size.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.clamp_scroll_x();
        self.ensure_selected_visible();
        self.sync_reveal();
    }

    /// Applies the outcome of the start-up fetch.
    pub fn on_load(&mut self, state: LoadState) {
        match state {
            LoadState::Pending => {}
            LoadState::Loaded(dataset) => {
                log::info!("Showing {} rows", dataset.len());
                self.view.set_dataset(dataset);
                self.status = Status::Ready;
                self.header = 0;
                self.reset_position();
            }
            LoadState::Failed(error) => {
                self.status = Status::Failed(error.to_string());
            }
        }
    }

    /// Marks the load as failed when the fetch task ended without a result.
    pub fn on_load_lost(&mut self) {
        if self.is_loading() {
            self.status = Status::Failed("load task stopped without a result".into());
        }
    }

    /// Advances the loading animation.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit = true,
            Action::FocusSearch => {
                if self.config().searchable {
                    self.focus = Focus::Search;
                }
            }
            Action::FocusTable => self.focus = Focus::Table,
            Action::Insert(ch) => {
                self.search.push(ch);
                self.apply_query();
            }
            Action::Backspace => {
                if self.search.pop().is_some() {
                    self.apply_query();
                }
            }
            Action::ClearSearch => {
                if !self.search.is_empty() {
                    self.search.clear();
                    self.apply_query();
                }
            }
            Action::Up => self.move_selection(-1),
            Action::Down => self.move_selection(1),
            Action::PageUp => self.move_selection(-(self.body_height().max(1) as isize)),
            Action::PageDown => self.move_selection(self.body_height().max(1) as isize),
            Action::Home => self.move_selection(isize::MIN),
            Action::End => self.move_selection(isize::MAX),
            Action::Left => self.move_header(-1),
            Action::Right => self.move_header(1),
            Action::Activate => self.activate_header(),
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn apply_query(&mut self) {
        if self.view.set_query(&self.search) {
            self.reset_position();
        }
    }

    fn activate_header(&mut self) {
        let Some(column) = self.view.dataset().columns().get(self.header).cloned() else {
            return;
        };
        if self.view.activate_sort(&column) {
            self.reset_position();
        }
    }

    /// A new sequence starts at the top.
    fn reset_position(&mut self) {
        self.selected = 0;
        self.scroll_y = 0;
        self.sync_reveal();
    }

    fn move_selection(&mut self, delta: isize) {
        let revealed = self.view.revealed_len();
        if revealed == 0 {
            return;
        }
        let last = revealed - 1;
        self.selected = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected.saturating_add(delta as usize).min(last)
        };
        self.ensure_selected_visible();
        self.sync_reveal();
    }

    fn ensure_selected_visible(&mut self) {
        let height = self.body_height().max(1);
        if self.selected < self.scroll_y {
            self.scroll_y = self.selected;
        } else if self.selected >= self.scroll_y + height {
            self.scroll_y = self.selected + 1 - height;
        }
    }

    /// Reveals batches while the end of the revealed rows is in reach.
    ///
    /// The end is in reach when the viewport has room below the last revealed
    /// row, or when the selection sits on that row.
    fn sync_reveal(&mut self) {
        loop {
            let revealed = self.view.revealed_len();
            let room_below = revealed < self.scroll_y + self.body_height();
            let at_end = revealed > 0 && self.selected + 1 >= revealed;
            if !(room_below || at_end) || !self.view.reveal_more() {
                break;
            }
        }
    }

    fn move_header(&mut self, delta: isize) {
        let count = self.view.dataset().columns().len();
        if count == 0 {
            return;
        }
        self.header = self
            .header
            .saturating_add_signed(delta)
            .min(count - 1);
        self.ensure_header_visible();
    }

    fn pinned_width(&self) -> u16 {
        let frozen = self.frozen_count() as u16;
        frozen.saturating_mul(self.config().column_width)
    }

    fn frozen_count(&self) -> usize {
        self.config()
            .frozen_columns
            .min(self.view.dataset().columns().len())
    }

    /// Width available to the scrollable columns.
    fn scroll_region(&self) -> u16 {
        self.width.saturating_sub(self.pinned_width())
    }

    fn max_scroll_x(&self) -> u16 {
        let scrollable = self.view.dataset().columns().len() - self.frozen_count();
        let content = (scrollable as u16).saturating_mul(self.config().column_width);
        content.saturating_sub(self.scroll_region())
    }

    fn clamp_scroll_x(&mut self) {
        self.scroll_x = self.scroll_x.min(self.max_scroll_x());
    }

    fn ensure_header_visible(&mut self) {
        let frozen = self.frozen_count();
        if self.header < frozen {
            return;
        }
        let width = self.config().column_width;
        let start = ((self.header - frozen) as u16).saturating_mul(width);
        let region = self.scroll_region();
        if start < self.scroll_x {
            self.scroll_x = start;
        } else if start.saturating_add(width) > self.scroll_x.saturating_add(region) {
            self.scroll_x = start.saturating_add(width).saturating_sub(region);
        }
        self.clamp_scroll_x();
    }
}
