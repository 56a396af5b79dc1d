//! Greedy word wrapping shared by measurement and drawing
//!
//! Both sides call the same routine so a block never draws more lines than
//! it reserved.

use super::fonts::TextStyle;
use super::text_metrics::TextMeasure;

/// Slack for float comparisons against the wrap width
const WIDTH_EPSILON: f32 = 1e-3;

/// Break `text` into lines no wider than `max_width` mm.
///
/// Lines break at the last whitespace boundary that fits. A `\n` always
/// starts a new line, and an empty source line still yields an empty line.
/// A single word wider than `max_width` is kept whole on its own line.
pub fn wrap_text<M: TextMeasure + ?Sized>(
    text: &str,
    max_width: f32,
    measurer: &M,
    font_size: f32,
) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();

        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }

            let candidate_width = measurer.measure_text(&line, font_size)
                + measurer.measure_text(" ", font_size)
                + measurer.measure_text(word, font_size);

            if candidate_width <= max_width + WIDTH_EPSILON {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            }
        }

        lines.push(line);
    }

    lines
}

/// Break preformatted `text` into rows no wider than `max_width` mm.
///
/// Every source line starts a new row and keeps its spacing. An overlong
/// line breaks at its last space past the indentation, or mid-word when
/// there is none. The space at a break is dropped.
pub fn wrap_preformatted<M: TextMeasure + ?Sized>(
    text: &str,
    max_width: f32,
    measurer: &M,
    font_size: f32,
) -> Vec<String> {
    let mut rows = Vec::new();

    for line in text.lines() {
        // Leading spaces are ASCII, so byte and char offsets agree
        let mut floor = line.len() - line.trim_start_matches(' ').len();
        let mut row = String::new();

        for ch in line.chars() {
            row.push(ch);
            if row.chars().count() == 1
                || measurer.measure_text(&row, font_size) <= max_width + WIDTH_EPSILON
            {
                continue;
            }
            row.pop();

            let search_from = floor.min(row.len());
            match row[search_from..].rfind(' ').map(|i| i + search_from) {
                Some(space) if space > 0 => {
                    let rest = row[space + 1..].to_string();
                    row.truncate(space);
                    rows.push(std::mem::replace(&mut row, rest));
                }
                _ => rows.push(std::mem::take(&mut row)),
            }
            row.push(ch);
            floor = 0;
        }

        rows.push(row);
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

/// Wrap `text` using the metrics of a theme text style
pub fn wrap_styled(text: &str, max_width: f32, style: &TextStyle) -> Vec<String> {
    wrap_text(text, max_width, style.measurer(), style.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is 1 mm wide regardless of size
    struct FixedWidth;

    impl TextMeasure for FixedWidth {
        fn measure_text(&self, text: &str, _font_size: f32) -> f32 {
            text.chars().count() as f32
        }
    }

    #[test]
    fn test_breaks_at_last_fitting_space() {
        let lines = wrap_text("aaa bbb ccc ddd", 7.0, &FixedWidth, 10.0);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_exact_fit_stays_on_one_line() {
        let lines = wrap_text("aaa bbb", 7.0, &FixedWidth, 10.0);
        assert_eq!(lines, vec!["aaa bbb"]);
    }

    #[test]
    fn test_long_word_gets_its_own_line_untruncated() {
        let lines = wrap_text("a abcdefghijkl b", 5.0, &FixedWidth, 10.0);
        assert_eq!(lines, vec!["a", "abcdefghijkl", "b"]);
    }

    #[test]
    fn test_hard_breaks_and_blank_lines() {
        let lines = wrap_text("one\n\ntwo three", 20.0, &FixedWidth, 10.0);
        assert_eq!(lines, vec!["one", "", "two three"]);
    }

    #[test]
    fn test_preformatted_breaks_unspaced_line_mid_word() {
        let rows = wrap_preformatted(&"x".repeat(12), 5.0, &FixedWidth, 10.0);
        assert_eq!(rows, vec!["xxxxx", "xxxxx", "xx"]);
    }

    #[test]
    fn test_preformatted_prefers_space_after_indent() {
        let rows = wrap_preformatted("    let total = a + b;", 16.0, &FixedWidth, 10.0);
        assert_eq!(rows, vec!["    let total =", "a + b;"]);

        // Indentation alone is never a break point
        let rows = wrap_preformatted("  abcdefgh", 6.0, &FixedWidth, 10.0);
        assert_eq!(rows, vec!["  abcd", "efgh"]);
    }

    #[test]
    fn test_preformatted_keeps_short_lines_verbatim() {
        let rows = wrap_preformatted("a\n\n  b\n", 20.0, &FixedWidth, 10.0);
        assert_eq!(rows, vec!["a", "", "  b"]);
        assert_eq!(wrap_preformatted("", 20.0, &FixedWidth, 10.0), vec![""]);
    }

    #[test]
    fn test_no_line_exceeds_width_without_long_words() {
        let text = "The active mode is persisted to Firestore on the user document and cached \
                    in localStorage to prevent visual flash on page load.";
        for line in wrap_text(text, 24.0, &FixedWidth, 10.0) {
            assert!(line.chars().count() <= 24, "line too wide: {line:?}");
        }
    }
}
