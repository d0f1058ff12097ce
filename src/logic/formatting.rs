//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::NaiveDateTime;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format the navbar clock time: 24-hour `HH:MM:SS`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use itsatui::logic::formatting::format_clock_time;
///
/// let t = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(7, 5, 9).unwrap();
/// assert_eq!(format_clock_time(&t), "07:05:09");
/// ```
pub fn format_clock_time(now: &NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Format the navbar clock date: short weekday, day, short month, year
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use itsatui::logic::formatting::format_clock_date;
///
/// let t = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(format_clock_date(&t), "Sun, 18 Oct 2026");
/// ```
pub fn format_clock_date(now: &NaiveDateTime) -> String {
    now.format("%a, %-d %b %Y").to_string()
}

/// Greedy word wrap to `width` display columns
///
/// Words longer than the width are split. Always returns at least one line.
///
/// # Examples
/// ```
/// use itsatui::logic::formatting::wrap_text;
///
/// assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
/// assert_eq!(wrap_text("", 10), vec![""]);
/// ```
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_width = word.width();
        let current_width = current.width();

        if current.is_empty() {
            if word_width <= width {
                current.push_str(word);
                continue;
            }
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            continue;
        } else {
            lines.push(std::mem::take(&mut current));
            if word_width <= width {
                current.push_str(word);
                continue;
            }
        }

        // Word does not fit on an empty line: hard split
        let mut piece_width = 0;
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if piece_width + ch_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                piece_width = 0;
            }
            current.push(ch);
            piece_width += ch_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pad or truncate `text` to exactly `width` display columns
pub fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Split a bar of `width` cells into (filled, empty) for `fraction` in [0, 1]
///
/// # Examples
/// ```
/// use itsatui::logic::formatting::bar_cells;
///
/// assert_eq!(bar_cells(0.5, 20), (10, 10));
/// assert_eq!(bar_cells(1.5, 20), (20, 0));
/// ```
pub fn bar_cells(fraction: f32, width: usize) -> (usize, usize) {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    (filled, width - filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_clock_time_is_24_hour() {
        let t = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(23, 59, 1)
            .unwrap();
        assert_eq!(format_clock_time(&t), "23:59:01");
    }

    #[test]
    fn test_clock_date_single_digit_day() {
        let t = NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(format_clock_date(&t), "Sat, 7 Mar 2026");
    }

    #[test]
    fn test_wrap_keeps_words_together() {
        assert_eq!(
            wrap_text("Hands-on sessions on the tools", 12),
            vec!["Hands-on", "sessions on", "the tools"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("ab abcdefghij", 4), vec!["ab", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap_text("  a   b  ", 10), vec!["a b"]);
    }

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("abc", 5), "abc  ");
        assert_eq!(fit_width("abcdef", 3), "abc");
        assert_eq!(fit_width("", 2), "  ");
    }

    #[test]
    fn test_bar_cells_bounds() {
        assert_eq!(bar_cells(0.0, 10), (0, 10));
        assert_eq!(bar_cells(-1.0, 10), (0, 10));
        assert_eq!(bar_cells(0.75, 4), (3, 1));
    }
}
