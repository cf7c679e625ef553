//! Multi-panel composition.
//!
//! Groups are composed in level order. Every group is first fused side by
//! side into one strip:
//!
//! ```text
//! ┌───┐ ┌───┐      ┌───┬───┐
//! │ a │ │ b │  ->  │ a │ b │
//! └───┘ └───┘      └───┴───┘
//! ```
//!
//! Level 0 strips (or any strip arriving when nothing has been composed yet)
//! are appended as-is. Later levels are stacked underneath the existing output:
//! its bottom border becomes a `├…┤` divider and the strip's content is
//! re-centered inside the established [`Frame`].

use super::{center, display_width, drop_last_char, interior, skip_chars, truncate_to_width};
use super::TextBlock;
use crate::error::{PanchangaError, Result};
use colored::Colorize;

/// How stacked content rows are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Plain,
    Green,
}

impl Highlight {
    fn paint(self, s: &str) -> String {
        match self {
            Highlight::Plain => s.to_string(),
            Highlight::Green => s.green().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlockGroup {
    pub level: usize,
    pub blocks: Vec<TextBlock>,
}

impl BlockGroup {
    pub fn new(level: usize, blocks: Vec<TextBlock>) -> Self {
        Self { level, blocks }
    }
}

/// The outer width, in columns, that stacked rows are aligned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
}

impl Frame {
    /// Derive the frame from already-composed output, if there is any.
    pub fn of(lines: &[String]) -> Option<Self> {
        lines.last().map(|l| Self {
            width: display_width(l),
        })
    }
}

#[derive(Debug, Default)]
pub struct Compositor {
    lines: Vec<String>,
    highlight: Highlight,
}

impl Compositor {
    pub fn new(highlight: Highlight) -> Self {
        Self {
            lines: Vec::new(),
            highlight,
        }
    }

    pub fn push(&mut self, group: &BlockGroup) -> Result<()> {
        let strip = fuse(&group.blocks)?;
        match Frame::of(&self.lines) {
            Some(frame) if group.level > 0 => stack(&mut self.lines, &strip, frame, self.highlight),
            _ => self.lines.extend(strip),
        }
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn finish(self) -> Vec<String> {
        self.lines
    }
}

/// Compose every group, lowest level first.
pub fn compose(groups: &[BlockGroup], highlight: Highlight) -> Result<Vec<String>> {
    let mut ordered: Vec<&BlockGroup> = groups.iter().collect();
    ordered.sort_by_key(|g| g.level);

    let mut compositor = Compositor::new(highlight);
    for group in ordered {
        compositor.push(group)?;
    }
    Ok(compositor.finish())
}

/// Fuse blocks side by side, replacing each shared border with a seam:
/// `┬` on the top row, `┴` on the bottom row and `│` in between.
pub fn fuse(blocks: &[TextBlock]) -> Result<Vec<String>> {
    let first = blocks
        .first()
        .ok_or_else(|| PanchangaError::Layout("cannot compose an empty group".into()))?;
    let height = first.height();
    if let Some(odd) = blocks.iter().find(|b| b.height() != height) {
        return Err(PanchangaError::Layout(format!(
            "blocks on one level must share a row count ({} vs {})",
            height,
            odd.height()
        )));
    }

    let last_block = blocks.len() - 1;
    let fused = (0..height)
        .map(|row| {
            let seam = if row == 0 {
                '┬'
            } else if row + 1 == height {
                '┴'
            } else {
                '│'
            };
            let mut line = String::new();
            for (i, block) in blocks.iter().enumerate() {
                let cell = block.rows()[row].as_str();
                let cell = if i > 0 { skip_chars(cell, 1) } else { cell };
                if i < last_block {
                    line.push_str(drop_last_char(cell));
                    line.push(seam);
                } else {
                    line.push_str(cell);
                }
            }
            line
        })
        .collect();
    Ok(fused)
}

/// Stack a fused strip underneath `base`, aligned to `frame`.
///
/// The strip's own top border is dropped; `base`'s bottom border becomes the
/// divider between the two.
pub fn stack(base: &mut Vec<String>, strip: &[String], frame: Frame, highlight: Highlight) {
    if let Some(last) = base.last_mut() {
        *last = format!("├{}┤", interior(last));
    }

    let inner = frame.width.saturating_sub(2);
    let bottom = strip.len().saturating_sub(1);
    for (no, row) in strip.iter().enumerate().skip(1) {
        if no == bottom {
            base.push(format!("└{}┘", "─".repeat(inner)));
        } else {
            let text = truncate_to_width(interior(row).trim(), inner);
            let centered = center(&text, inner, ' ');
            base.push(format!("│{}│", highlight.paint(&centered)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BlockOptions;

    fn block(lines: &[&str]) -> TextBlock {
        TextBlock::build(lines, &BlockOptions::stripped())
    }

    #[test]
    fn single_block_is_verbatim() {
        let a = block(&["hello"]);
        let out = compose(&[BlockGroup::new(0, vec![a.clone()])], Highlight::Plain).unwrap();
        assert_eq!(out, a.rows());
    }

    #[test]
    fn two_blocks_fuse_with_tees() {
        let out = fuse(&[block(&["x"]), block(&["y"])]).unwrap();
        assert_eq!(out, vec!["┌──┬──┐", "│ x│ y│", "└──┴──┘"]);
    }

    #[test]
    fn two_block_seam_sits_where_borders_met() {
        let a = TextBlock::build(["left", "l2"], &BlockOptions::stripped().with_height(5));
        let b = TextBlock::build(["right"], &BlockOptions::stripped().with_height(5));
        let seam_col = display_width(&a.rows()[0]) - 1;
        let out = fuse(&[a, b]).unwrap();

        assert_eq!(out.len(), 5);
        assert_eq!(out[0].matches('┬').count(), 1);
        assert_eq!(out[4].matches('┴').count(), 1);
        assert_eq!(out[0].chars().position(|c| c == '┬'), Some(seam_col));
        assert_eq!(out[4].chars().position(|c| c == '┴'), Some(seam_col));
        for row in &out[1..4] {
            assert_eq!(row.chars().nth(seam_col), Some('│'));
        }
    }

    #[test]
    fn three_blocks_get_two_independent_seams() {
        let out = fuse(&[block(&["a"]), block(&["bb"]), block(&["c"])]).unwrap();
        assert_eq!(out, vec!["┌──┬───┬──┐", "│ a│ bb│ c│", "└──┴───┴──┘"]);
    }

    #[test]
    fn four_blocks_fuse_like_any_other_count() {
        let blocks: Vec<TextBlock> = ["1", "2", "3", "4"].iter().map(|s| block(&[*s])).collect();
        let out = fuse(&blocks).unwrap();
        assert_eq!(out[0], "┌──┬──┬──┬──┐");
        assert_eq!(out[1], "│ 1│ 2│ 3│ 4│");
        assert_eq!(out[2], "└──┴──┴──┴──┘");
    }

    #[test]
    fn mismatched_heights_are_rejected() {
        let err = fuse(&[block(&["a"]), block(&["b", "c"])]).unwrap_err();
        assert!(matches!(err, PanchangaError::Layout(_)));
    }

    #[test]
    fn empty_group_is_rejected() {
        assert!(matches!(fuse(&[]), Err(PanchangaError::Layout(_))));
    }

    #[test]
    fn second_level_stacks_centered_under_first() {
        let top = vec![block(&["aaaa"]), block(&["bbbb"])];
        let below = vec![block(&["mid"])];
        let out = compose(
            &[BlockGroup::new(1, below), BlockGroup::new(0, top)],
            Highlight::Plain,
        )
        .unwrap();

        assert_eq!(
            out,
            vec![
                "┌─────┬─────┐",
                "│ aaaa│ bbbb│",
                "├─────┴─────┤",
                "│    mid    │",
                "└───────────┘",
            ]
        );
        let widths: Vec<usize> = out.iter().map(|l| display_width(l)).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn stacked_rows_can_be_highlighted() {
        colored::control::set_override(true);
        let mut base = block(&["abcdef"]).into_rows();
        let frame = Frame::of(&base).unwrap();
        let strip = block(&["x"]).into_rows();
        stack(&mut base, &strip, frame, Highlight::Green);
        colored::control::unset_override();

        assert_eq!(base[2], "├───────┤");
        assert!(base[3].starts_with('│'));
        assert!(base[3].contains("\u{1b}[32m"));
        assert!(base[3].contains('x'));
    }

    #[test]
    fn stacked_overflow_is_truncated_to_frame() {
        let mut base = block(&["ab"]).into_rows();
        let frame = Frame::of(&base).unwrap();
        let strip = block(&["a much longer line"]).into_rows();
        stack(&mut base, &strip, frame, Highlight::Plain);
        for line in &base {
            assert_eq!(display_width(line), frame.width);
        }
    }

    #[test]
    fn higher_level_without_base_falls_back_to_fusion() {
        let out = compose(
            &[BlockGroup::new(1, vec![block(&["x"]), block(&["y"])])],
            Highlight::Plain,
        )
        .unwrap();
        assert_eq!(out[0], "┌──┬──┐");
    }
}
