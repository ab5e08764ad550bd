//! Incremental reveal of the derived row sequence.

/// Cursor over the current filtered and sorted sequence.
///
/// The cursor is tied to a sequence generation. Observing a new generation
/// restarts at one batch; within a generation it only grows, one batch per
/// [`reveal_more`](Self::reveal_more), and never passes the sequence length.
///
/// Revealed rows are not evicted when they scroll out of view. The painter
/// only draws the rows inside its viewport, so the cost that grows with the
/// cursor is an index range, not drawn cells.
///
/// # Example
///
/// ```
/// use frozen_table_lib::view::Reveal;
///
/// let mut reveal = Reveal::batched(10);
/// reveal.observe(1, 25);
/// assert_eq!(reveal.cursor(), 10);
///
/// reveal.reveal_more();
/// reveal.reveal_more();
/// assert_eq!(reveal.cursor(), 25);
/// assert!(reveal.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    /// Rows per step; `None` reveals everything at once.
    batch: Option<usize>,
    /// Number of rows currently exposed.
    cursor: usize,
    /// Length of the observed sequence.
    len: usize,
    /// Generation of the observed sequence.
    generation: Option<u64>,
}

impl Reveal {
    /// Creates a cursor that grows `batch` rows at a time. Zero acts as one.
    pub fn batched(batch: usize) -> Self {
        Self {
            batch: Some(batch.max(1)),
            cursor: 0,
            len: 0,
            generation: None,
        }
    }

    /// Creates a cursor that always exposes the whole sequence.
    pub fn all() -> Self {
        Self {
            batch: None,
            cursor: 0,
            len: 0,
            generation: None,
        }
    }

    /// Points the cursor at a sequence.
    ///
    /// A generation not seen before resets the cursor to one batch. For the
    /// same generation only the length is refreshed; the cursor is clamped
    /// but otherwise kept.
    pub fn observe(&mut self, generation: u64, len: usize) {
        self.len = len;
        if self.generation != Some(generation) {
            self.generation = Some(generation);
            self.cursor = self.initial();
        } else {
            self.cursor = self.cursor.min(len);
        }
    }

    /// Advances the cursor by one batch. Returns `true` if rows were added.
    pub fn reveal_more(&mut self) -> bool {
        let next = match self.batch {
            Some(batch) => self.cursor.saturating_add(batch).min(self.len),
            None => self.len,
        };
        let grew = next > self.cursor;
        self.cursor = next;
        grew
    }

    /// Returns the number of exposed rows.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` when every row of the sequence is exposed.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.len
    }

    fn initial(&self) -> usize {
        match self.batch {
            Some(batch) => batch.min(self.len),
            None => self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_batch_is_capped() {
        let mut reveal = Reveal::batched(10);
        reveal.observe(1, 4);
        assert_eq!(reveal.cursor(), 4);
        assert!(reveal.is_complete());
        assert!(!reveal.reveal_more());
        assert_eq!(reveal.cursor(), 4);
    }

    #[test]
    fn test_grows_by_batch_and_stops_at_len() {
        let mut reveal = Reveal::batched(10);
        reveal.observe(1, 23);
        let mut seen = vec![reveal.cursor()];
        while reveal.reveal_more() {
            seen.push(reveal.cursor());
        }
        assert_eq!(seen, vec![10, 20, 23]);
    }

    #[test]
    fn test_new_generation_resets() {
        let mut reveal = Reveal::batched(10);
        reveal.observe(1, 50);
        reveal.reveal_more();
        reveal.reveal_more();
        assert_eq!(reveal.cursor(), 30);

        // Same generation: cursor kept.
        reveal.observe(1, 50);
        assert_eq!(reveal.cursor(), 30);

        reveal.observe(2, 50);
        assert_eq!(reveal.cursor(), 10);

        reveal.observe(3, 0);
        assert_eq!(reveal.cursor(), 0);
    }

    #[test]
    fn test_never_exceeds_len_and_never_shrinks_within_generation() {
        for len in [0usize, 1, 9, 10, 11, 35] {
            let mut reveal = Reveal::batched(10);
            reveal.observe(7, len);
            let mut last = reveal.cursor();
            assert_eq!(last, len.min(10));
            for _ in 0..6 {
                reveal.reveal_more();
                assert!(reveal.cursor() <= len);
                assert!(reveal.cursor() >= last);
                last = reveal.cursor();
            }
        }
    }

    #[test]
    fn test_all_reveals_everything() {
        let mut reveal = Reveal::all();
        reveal.observe(1, 120);
        assert_eq!(reveal.cursor(), 120);
        assert!(!reveal.reveal_more());
    }
}
