//! Greedy word wrapping
//!
//! Tokens are whitespace-delimited. Each token is appended to the
//! current line; when the extended line would exceed the maximum pixel
//! width, the current line is flushed and the token starts the next
//! one. A token wider than the maximum width stays whole on a line of
//! its own, knowingly violating the width bound for that line.
//!
//! The literal two-character sequence `\n` is a forced line break. It
//! is a pure separator that contributes no text; consecutive break
//! tokens produce empty lines, preserving paragraph gaps.

use crate::shaper::MeasureText;
use crate::Result;

/// Forced-break token: a literal backslash followed by `n`
pub const BREAK_TOKEN: &str = "\\n";

/// Wrap text into lines no wider than `max_width` pixels, in reading
/// order.
pub fn wrap_lines<M: MeasureText>(
    text: &str,
    measurer: &M,
    max_width: f32,
) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for token in text.split_whitespace() {
        if token == BREAK_TOKEN {
            lines.push(std::mem::take(&mut current));
            continue;
        }

        let candidate = if current.is_empty() {
            token.to_string()
        } else {
            format!("{current} {token}")
        };

        if measurer.measure_width(&candidate)? > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current.push_str(token);
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    tracing::debug!("wrapped text into {} lines", lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-advance measurer: every character is 10px wide
    struct FixedAdvance;

    impl MeasureText for FixedAdvance {
        fn measure_width(&self, text: &str) -> Result<f32> {
            Ok(text.chars().count() as f32 * 10.0)
        }
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_lines("hello world", &FixedAdvance, 200.0).unwrap();
        assert_eq!(lines, vec!["hello world"]);
    }

    #[test]
    fn lines_respect_max_width() {
        // 80px max = 8 characters per line
        let lines = wrap_lines("aaa bbb ccc ddd", &FixedAdvance, 80.0).unwrap();
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
        for line in &lines {
            assert!(FixedAdvance.measure_width(line).unwrap() <= 80.0);
        }
    }

    #[test]
    fn overlong_token_kept_whole_on_own_line() {
        let lines = wrap_lines("hi incomprehensibility yo", &FixedAdvance, 80.0).unwrap();
        assert_eq!(lines, vec!["hi", "incomprehensibility", "yo"]);
        // the width bound is knowingly violated for the long token
        assert!(FixedAdvance.measure_width(&lines[1]).unwrap() > 80.0);
    }

    #[test]
    fn break_token_forces_a_line_break() {
        let lines = wrap_lines(r"one two \n three", &FixedAdvance, 1000.0).unwrap();
        assert_eq!(lines, vec!["one two", "three"]);
    }

    #[test]
    fn break_token_is_a_separator_not_content() {
        let lines = wrap_lines(r"one \n two", &FixedAdvance, 1000.0).unwrap();
        for line in &lines {
            assert!(!line.contains(BREAK_TOKEN));
        }
    }

    #[test]
    fn consecutive_break_tokens_produce_empty_lines() {
        let lines = wrap_lines(r"one \n \n two", &FixedAdvance, 1000.0).unwrap();
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        let lines = wrap_lines("", &FixedAdvance, 100.0).unwrap();
        assert!(lines.is_empty());

        let lines = wrap_lines("   \t  ", &FixedAdvance, 100.0).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn content_is_preserved_across_wrapping() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap_lines(text, &FixedAdvance, 100.0).unwrap();
        let rejoined = lines.join(" ");
        let normalized: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, normalized.join(" "));
    }
}
