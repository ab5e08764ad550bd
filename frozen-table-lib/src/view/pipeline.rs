//! The filter → sort → reveal pipeline.

use crate::config::TableConfig;
use crate::model::Dataset;
use crate::model::Row;

use super::GridModel;
use super::Reveal;
use super::SearchQuery;
use super::SortConfig;
use super::filter_rows;
use super::sort_rows;

/// Table state derived from one dataset.
///
/// Every input change (dataset, query, sort activation) recomputes the
/// filtered and sorted order from scratch, bumps the sequence generation and
/// restarts the reveal cursor. Reads never see a partially updated order.
///
/// # Example
///
/// ```
/// use frozen_table_lib::TableConfig;
/// use frozen_table_lib::model::{Dataset, Row};
/// use frozen_table_lib::view::TableView;
///
/// let dataset = Dataset::from_rows(vec![
///     Row::new("2", "Beta", "X"),
///     Row::new("1", "Alpha", "Y"),
/// ]);
/// let mut view = TableView::new(TableConfig::default(), dataset);
///
/// view.activate_sort("PracticeName");
/// let names: Vec<_> = view.visible_rows().map(|r| r.text("PracticeName")).collect();
/// assert_eq!(names, ["Alpha", "Beta"]);
/// ```
#[derive(Debug, Clone)]
pub struct TableView {
    config: TableConfig,
    dataset: Dataset,
    query: SearchQuery,
    sort: SortConfig,
    /// Dataset positions of the matching rows, in display order.
    order: Vec<usize>,
    generation: u64,
    reveal: Reveal,
}

impl TableView {
    /// Creates a view over `dataset`.
    pub fn new(config: TableConfig, dataset: Dataset) -> Self {
        let reveal = if config.incremental {
            Reveal::batched(config.batch_size)
        } else {
            Reveal::all()
        };
        let mut view = Self {
            config,
            dataset,
            query: SearchQuery::new(""),
            sort: SortConfig::default(),
            order: Vec::new(),
            generation: 0,
            reveal,
        };
        view.recompute();
        view
    }

    /// Replaces the dataset, keeping the query and sort.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.recompute();
    }

    /// Sets the search query.
    ///
    /// Returns `true` if the displayed sequence was recomputed. Ignored when
    /// search is disabled or the query is unchanged.
    pub fn set_query(&mut self, query: &str) -> bool {
        if !self.config.searchable || self.query.as_str() == query {
            return false;
        }
        self.query = SearchQuery::new(query);
        self.recompute();
        true
    }

    /// Handles activation of a header.
    ///
    /// Returns `true` if the sort changed. Ignored when sorting is disabled
    /// or `column` is not a dataset column.
    pub fn activate_sort(&mut self, column: &str) -> bool {
        if !self.config.sortable || !self.dataset.columns().iter().any(|c| c == column) {
            return false;
        }
        self.sort.activate(column);
        log::debug!(
            "Sort {:?} {:?}",
            self.sort.key().unwrap_or_default(),
            self.sort.direction()
        );
        self.recompute();
        true
    }

    /// Reveals one more batch. Returns `true` if rows were added.
    pub fn reveal_more(&mut self) -> bool {
        let grew = self.reveal.reveal_more();
        if grew {
            log::debug!(
                "Revealed {} of {} rows",
                self.reveal.cursor(),
                self.order.len()
            );
        }
        grew
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the current query text.
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Returns the sort state.
    pub fn sort(&self) -> &SortConfig {
        &self.sort
    }

    /// Returns the generation of the current sequence.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the number of rows in the dataset.
    pub fn total_len(&self) -> usize {
        self.dataset.len()
    }

    /// Returns the number of rows matching the query.
    pub fn matching_len(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of revealed rows.
    pub fn revealed_len(&self) -> usize {
        self.reveal.cursor()
    }

    /// Returns `true` when every matching row is revealed.
    pub fn is_fully_revealed(&self) -> bool {
        self.reveal.is_complete()
    }

    /// Returns the full filtered and sorted sequence.
    pub fn matching_rows(&self) -> impl Iterator<Item = &Row> {
        self.order.iter().map(|&index| &self.dataset.rows()[index])
    }

    /// Returns the revealed prefix of the sequence.
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.matching_rows().take(self.reveal.cursor())
    }

    /// Builds the grid for the revealed rows.
    pub fn grid(&self) -> GridModel {
        self.grid_window(0, usize::MAX)
    }

    /// Builds the grid for at most `len` revealed rows starting at `start`.
    ///
    /// The header always covers every column. The placeholder body appears
    /// only when no row is revealed at all.
    pub fn grid_window(&self, start: usize, len: usize) -> GridModel {
        let sort = self.config.sortable.then_some(&self.sort);
        let start = if self.revealed_len() == 0 {
            0
        } else {
            start.min(self.revealed_len() - 1)
        };
        GridModel::build(
            self.dataset.columns(),
            self.visible_rows().skip(start).take(len),
            self.config.frozen_columns,
            sort,
        )
    }

    fn recompute(&mut self) {
        let mut order = filter_rows(&self.dataset, &self.config.search, &self.query);
        sort_rows(&self.dataset, &mut order, &self.sort);
        self.order = order;
        self.generation += 1;
        self.reveal.observe(self.generation, self.order.len());
        log::debug!(
            "Sequence {}: {} of {} rows match {:?}",
            self.generation,
            self.order.len(),
            self.dataset.len(),
            self.query.as_str()
        );
    }
}
