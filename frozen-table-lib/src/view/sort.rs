//! Header-driven sorting.

use std::cmp::Ordering;
use std::cmp::Reverse;

use crate::model::Dataset;
use crate::model::SNO;
use crate::model::Value;

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
    /// Sorting cleared; rows fall back to ascending identifier order.
    #[default]
    Unsorted,
}

impl SortDirection {
    /// Direction after activating the same column again.
    pub fn next(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
            SortDirection::Unsorted => SortDirection::Ascending,
        }
    }

    /// Arrow shown beside a sorted header.
    pub fn glyph(self) -> Option<char> {
        match self {
            SortDirection::Ascending => Some('↑'),
            SortDirection::Descending => Some('↓'),
            SortDirection::Unsorted => None,
        }
    }

    /// Spoken form used in header labels.
    pub fn describe(self) -> &'static str {
        match self {
            SortDirection::Ascending => "sorted ascending",
            SortDirection::Descending => "sorted descending",
            SortDirection::Unsorted => "not sorted",
        }
    }
}

/// Which column the rows are sorted by, and how.
///
/// Starts with no key. Activating a header cycles
/// ascending → descending → unsorted → ascending on the same column and
/// restarts at ascending when a different column is activated.
///
/// # Example
///
/// ```
/// use frozen_table_lib::view::{SortConfig, SortDirection};
///
/// let mut sort = SortConfig::default();
/// sort.activate("PracticeName");
/// sort.activate("PracticeName");
/// assert_eq!(sort.direction_of("PracticeName"), Some(SortDirection::Descending));
///
/// sort.activate("SNo");
/// assert_eq!(sort.direction_of("SNo"), Some(SortDirection::Ascending));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortConfig {
    key: Option<String>,
    direction: SortDirection,
}

impl SortConfig {
    /// Creates a config sorted by `key` in `direction`.
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    /// Applies one header activation.
    pub fn activate(&mut self, column: &str) {
        if self.key.as_deref() == Some(column) {
            self.direction = self.direction.next();
        } else {
            self.key = Some(column.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    /// Returns the last activated column.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns the current direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Returns the direction if `column` is the last activated column.
    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        (self.key.as_deref() == Some(column)).then_some(self.direction)
    }
}

/// Ordering key of one cell.
///
/// Numbers compare numerically, text compares by its displayed form, and
/// every number sorts before every text value. This keeps the order total
/// for columns that mix both.
#[derive(Debug, Clone)]
enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(value: &Value) -> Self {
        match value.as_number() {
            Some(n) => SortKey::Number(n),
            None => SortKey::Text(value.to_string()),
        }
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Compares two cell values by their natural ordering.
///
/// Numeric when both sides read as numbers, lexicographic on the displayed
/// text when neither does. A number sorts before text.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    SortKey::of(a).cmp(&SortKey::of(b))
}

/// Reorders `indices` (positions into `dataset`) according to `config`.
///
/// - no key ever set: order left untouched
/// - unsorted: ascending by the identifier column
/// - otherwise by the key column in the configured direction
///
/// The sort is stable, so rows with equal keys keep their relative order.
pub fn sort_rows(dataset: &Dataset, indices: &mut [usize], config: &SortConfig) {
    let Some(key) = config.key() else { return };

    let (column, descending) = match config.direction() {
        SortDirection::Unsorted => (SNO, false),
        SortDirection::Ascending => (key, false),
        SortDirection::Descending => (key, true),
    };

    let rows = dataset.rows();
    let key_of = |index: usize| {
        rows[index]
            .get(column)
            .map(SortKey::of)
            .unwrap_or_else(|| SortKey::Text(String::new()))
    };
    if descending {
        indices.sort_by_cached_key(|&index| Reverse(key_of(index)));
    } else {
        indices.sort_by_cached_key(|&index| key_of(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn sorted(dataset: &Dataset, config: &SortConfig) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..dataset.len()).collect();
        sort_rows(dataset, &mut indices, config);
        indices
    }

    #[test]
    fn test_cycle() {
        let mut sort = SortConfig::default();
        assert_eq!(sort.key(), None);

        sort.activate("A");
        assert_eq!(sort.direction(), SortDirection::Ascending);
        sort.activate("A");
        assert_eq!(sort.direction(), SortDirection::Descending);
        sort.activate("A");
        assert_eq!(sort.direction(), SortDirection::Unsorted);
        sort.activate("A");
        assert_eq!(sort.direction(), SortDirection::Ascending);

        sort.activate("A");
        sort.activate("B");
        assert_eq!(sort, SortConfig::new("B", SortDirection::Ascending));
    }

    #[test]
    fn test_numeric_when_both_parse() {
        assert_eq!(compare_values(&"10".into(), &"9".into()), Ordering::Greater);
        assert_eq!(compare_values(&Value::Int(2), &"2.0".into()), Ordering::Equal);
        // Mixed: numbers first.
        assert_eq!(compare_values(&"10".into(), &"x".into()), Ordering::Less);
        assert_eq!(compare_values(&"1a".into(), &"2".into()), Ordering::Greater);
        assert_eq!(compare_values(&"Alpha".into(), &"Beta".into()), Ordering::Less);
    }

    #[test]
    fn test_no_key_keeps_order() {
        let data = Dataset::from_rows(vec![Row::new("2", "B", "X"), Row::new("1", "A", "Y")]);
        assert_eq!(sorted(&data, &SortConfig::default()), vec![0, 1]);
    }

    #[test]
    fn test_unsorted_falls_back_to_identifier() {
        let data = Dataset::from_rows(vec![
            Row::new("10", "A", "X"),
            Row::new("2", "C", "Y"),
            Row::new("1", "B", "Z"),
        ]);
        let config = SortConfig::new("PracticeName", SortDirection::Unsorted);
        assert_eq!(sorted(&data, &config), vec![2, 1, 0]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let data = Dataset::from_rows(vec![
            Row::new("1", "Same", "c"),
            Row::new("2", "Other", "b"),
            Row::new("3", "Same", "a"),
            Row::new("4", "Same", "d"),
        ]);
        let asc = sorted(&data, &SortConfig::new("PracticeName", SortDirection::Ascending));
        assert_eq!(asc, vec![1, 0, 2, 3]);

        let desc = sorted(&data, &SortConfig::new("PracticeName", SortDirection::Descending));
        assert_eq!(desc, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_idempotent() {
        let data = Dataset::from_rows(vec![
            Row::new("3", "b", "x"),
            Row::new("1", "a", "x"),
            Row::new("2", "b", "y"),
        ]);
        for config in [
            SortConfig::new("PracticeName", SortDirection::Ascending),
            SortConfig::new("TaskCategoryName", SortDirection::Descending),
            SortConfig::new("SNo", SortDirection::Unsorted),
        ] {
            let mut once: Vec<usize> = (0..data.len()).collect();
            sort_rows(&data, &mut once, &config);
            let mut twice = once.clone();
            sort_rows(&data, &mut twice, &config);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_missing_column_sorts_as_empty() {
        let data = Dataset::from_rows(vec![
            Row::new("1", "A", "X").set("Due", "b"),
            Row::new("2", "B", "Y"),
            Row::new("3", "C", "Z").set("Due", "a"),
        ]);
        let config = SortConfig::new("Due", SortDirection::Ascending);
        assert_eq!(sorted(&data, &config), vec![1, 2, 0]);
    }

    #[test]
    fn test_mixed_column_is_total() {
        let codes = ["2", "10", "1a", "3", "20", "2b", "100", "1", "9x", "11"];
        let mut state: u32 = 7;
        let rows = (0..64)
            .map(|i| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let code = codes[(state >> 16) as usize % codes.len()];
                Row::new(i, "P", "T").set("Code", code)
            })
            .collect();
        let data = Dataset::from_rows(rows);

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let config = SortConfig::new("Code", direction);
            let once = sorted(&data, &config);
            let mut twice = once.clone();
            sort_rows(&data, &mut twice, &config);
            assert_eq!(once, twice);

            let keys: Vec<String> = once.iter().map(|&i| data.rows()[i].text("Code")).collect();
            let numbers = keys.iter().take_while(|k| k.parse::<f64>().is_ok()).count();
            let (head, tail) = keys.split_at(numbers);
            match direction {
                SortDirection::Ascending => {
                    assert!(tail.iter().all(|k| k.parse::<f64>().is_err()));
                    assert!(head.windows(2).all(|w| {
                        w[0].parse::<f64>().ok() <= w[1].parse::<f64>().ok()
                    }));
                    assert!(tail.windows(2).all(|w| w[0] <= w[1]));
                }
                _ => {
                    // Text first when descending.
                    assert_eq!(numbers, 0);
                    assert!(keys.windows(2).all(|w| compare_values(
                        &w[0].as_str().into(),
                        &w[1].as_str().into()
                    ) != Ordering::Less));
                }
            }
        }
    }
}
