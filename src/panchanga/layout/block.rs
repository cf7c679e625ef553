//! Single bordered panel.
//!
//! ```text
//! ┌──────────┐
//! │ Sunrise  │
//! │ Sunset   │
//! │          │   <- padding rows up to the requested height
//! └──────────┘
//! ```
//!
//! Every row of a built block has the same display width: `width + 3`
//! (left border, one space of gutter, content, right border).

use super::{display_width, pad_right};

const TAB_EXPANSION: &str = "    ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockOptions {
    /// Interior width; computed from the longest line when `None`.
    pub width: Option<usize>,
    /// Total row count including both borders.
    pub height: Option<usize>,
    /// Trim leading/trailing whitespace off every input line.
    pub strip: bool,
}

impl BlockOptions {
    pub fn stripped() -> Self {
        Self {
            strip: true,
            ..Self::default()
        }
    }

    pub fn verbatim() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    rows: Vec<String>,
    width: usize,
}

impl TextBlock {
    pub fn build<I, S>(lines: I, options: &BlockOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let content = normalize(lines, options.strip);
        let width = options
            .width
            .unwrap_or_else(|| content.iter().map(|l| display_width(l)).max().unwrap_or(0));

        let rule = "─".repeat(width + 1);
        let mut rows = Vec::with_capacity(content.len() + 2);
        rows.push(format!("┌{}┐", rule));
        rows.extend(content.iter().map(|line| bordered(line, width)));

        if let Some(height) = options.height {
            while rows.len() + 1 < height {
                rows.push(bordered("", width));
            }
        }
        rows.push(format!("└{}┘", rule));

        Self { rows, width }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// Row count, borders included.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Interior width as declared at build time.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The content rows with the border characters removed, without the
    /// single-space gutter.
    pub fn content(&self) -> Vec<&str> {
        let n = self.rows.len();
        if n < 2 {
            return Vec::new();
        }
        self.rows[1..n - 1]
            .iter()
            .map(|r| super::skip_chars(super::interior(r), 1))
            .collect()
    }
}

/// Display width of the widest line and the line count, after the same
/// normalization `build` applies.
pub fn measure<I, S>(lines: I, strip: bool) -> (usize, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let content = normalize(lines, strip);
    let width = content.iter().map(|l| display_width(l)).max().unwrap_or(0);
    (width, content.len())
}

fn bordered(line: &str, width: usize) -> String {
    format!("│ {}│", pad_right(line, width))
}

fn normalize<I, S>(lines: I, strip: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for line in lines {
        let line = line.as_ref();
        let line = if strip { line.trim() } else { line };
        let line = line.replace('\t', TAB_EXPANSION);
        out.extend(line.split('\n').map(|l| l.trim_end_matches('\r').to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_expands_tabs_and_splits() {
        assert_eq!(measure([" a\tb", "one\ntwo"], false), (7, 3));
        assert_eq!(measure([" a "], true), (1, 1));
        assert_eq!(measure(Vec::<String>::new(), true), (0, 0));
    }

    #[test]
    fn auto_width_from_longest_line() {
        let block = TextBlock::build(["ab", "abcd"], &BlockOptions::stripped());
        assert_eq!(block.width(), 4);
        assert_eq!(
            block.rows(),
            &["┌─────┐", "│ ab  │", "│ abcd│", "└─────┘"]
        );
    }

    #[test]
    fn every_row_has_the_same_display_width() {
        let block = TextBlock::build(
            ["Surya Rāśi: Makara", "x"],
            &BlockOptions::stripped().with_width(20),
        );
        for row in block.rows() {
            assert_eq!(display_width(row), 23, "row {:?}", row);
        }
    }

    #[test]
    fn pads_to_requested_height() {
        let block = TextBlock::build(["a"], &BlockOptions::stripped().with_height(5));
        assert_eq!(block.height(), 5);
        assert_eq!(block.rows()[2], "│  │");
        assert_eq!(block.rows()[4], "└──┘");
    }

    #[test]
    fn height_below_content_is_ignored() {
        let block = TextBlock::build(["a", "b", "c"], &BlockOptions::stripped().with_height(2));
        assert_eq!(block.height(), 5);
    }

    #[test]
    fn row_count_is_borders_plus_max_of_height_and_lines() {
        for lines in 1..6usize {
            for height in [None, Some(3), Some(7)] {
                let input: Vec<String> = (0..lines).map(|i| format!("line {}", i)).collect();
                let mut opts = BlockOptions::stripped();
                opts.height = height;
                let block = TextBlock::build(&input, &opts);
                assert_eq!(block.height(), height.unwrap_or(0).max(lines + 2));
            }
        }
    }

    #[test]
    fn content_round_trips_normalized_lines() {
        let block = TextBlock::build(
            ["  tithi: Pratipat ", "a\tb", "one\ntwo"],
            &BlockOptions::stripped().with_width(12),
        );
        let content: Vec<&str> = block.content();
        assert_eq!(
            content,
            vec![
                "tithi: Prat…",
                "a    b      ",
                "one         ",
                "two         "
            ]
        );
    }

    #[test]
    fn verbatim_keeps_leading_whitespace() {
        let block = TextBlock::build(["  @@  "], &BlockOptions::verbatim());
        assert_eq!(block.rows()[1], "│   @@  │");
    }

    #[test]
    fn empty_input_yields_border_only_block() {
        let block = TextBlock::build(Vec::<String>::new(), &BlockOptions::stripped());
        assert_eq!(block.rows(), &["┌─┐", "└─┘"]);
    }
}
