//! Cell-width measurement for terminal text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Columns `ch` occupies; zero for control and combining characters.
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Cuts `text` to at most `limit` columns.
///
/// A cut string ends in `…`, which takes the last column.
pub fn fit(text: &str, limit: usize) -> String {
    if text.width() <= limit {
        return text.to_owned();
    }
    let Some(budget) = limit.checked_sub(1) else {
        return String::new();
    };

    let mut used = 0;
    let mut out: String = text
        .chars()
        .take_while(|&ch| {
            used += char_width(ch);
            used <= budget
        })
        .collect();
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_keeps_short_text() {
        assert_eq!(fit("Alpha", 5), "Alpha");
        assert_eq!(fit("Alpha", 9), "Alpha");
    }

    #[test]
    fn test_fit_adds_ellipsis() {
        assert_eq!(fit("PracticeName", 6), "Pract…");
        assert_eq!(fit("abc", 1), "…");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn test_fit_wide_chars() {
        assert_eq!(fit("漢字漢字", 5), "漢字…");
    }
}
