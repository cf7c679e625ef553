//! # Box Layout
//!
//! Panels are plain text wrapped in box-drawing borders ("dabbas"). The layout
//! code has two halves:
//!
//! - [`block`]: builds one bordered [`TextBlock`] from raw lines.
//! - [`compose`]: fuses groups of blocks into a single diagram, joining shared
//!   borders with T-junctions and stacking later levels underneath.
//!
//! ```text
//! ┌──────┬──────┬──────┐
//! │ loc  │ wthr │ moon │
//! ├──────┴──────┴──────┤
//! │     panchanga      │
//! └────────────────────┘
//! ```
//!
//! All widths are display widths (`unicode-width`), so IAST diacritics and box
//! glyphs count as a single column.

pub mod block;
pub mod compose;

pub use block::{measure, BlockOptions, TextBlock};
pub use compose::{BlockGroup, Compositor, Frame, Highlight};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(crate) fn display_width(s: &str) -> usize {
    s.width()
}

/// Left-justify `s` to `width` columns, truncating with an ellipsis if it overflows.
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let fitted = truncate_to_width(s, width);
    let padding = width.saturating_sub(fitted.width());
    format!("{}{}", fitted, " ".repeat(padding))
}

/// Center `s` within `width` columns using `fill`, splitting odd padding the
/// same way on every row so stacked lines stay aligned.
pub(crate) fn center(s: &str, width: usize, fill: char) -> String {
    let len = s.width();
    if len >= width {
        return s.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    let fill = fill.to_string();
    format!("{}{}{}", fill.repeat(left), s, fill.repeat(right))
}

pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}

/// Drop the first `n` characters.
pub(crate) fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

/// Drop the last character.
pub(crate) fn drop_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Interior of a bordered row: everything but the first and last character.
pub(crate) fn interior(s: &str) -> &str {
    drop_last_char(skip_chars(s, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_right_counts_display_columns() {
        assert_eq!(pad_right("Rāśi", 6), "Rāśi  ");
        assert_eq!(display_width(&pad_right("Rāśi", 6)), 6);
    }

    #[test]
    fn pad_right_truncates_overflow() {
        assert_eq!(pad_right("abcdef", 4), "abc…");
    }

    #[test]
    fn center_matches_odd_split() {
        assert_eq!(center("ab", 5, '-'), "--ab-");
        assert_eq!(center("ab", 6, '-'), "--ab--");
        assert_eq!(center("abc", 6, '-'), "-abc--");
        assert_eq!(center("toolong", 3, '-'), "toolong");
    }

    #[test]
    fn char_slicing_is_utf8_safe() {
        assert_eq!(skip_chars("┌─┐", 1), "─┐");
        assert_eq!(drop_last_char("┌─┐"), "┌─");
        assert_eq!(interior("│ ab│"), " ab");
        assert_eq!(interior("x"), "");
    }
}
