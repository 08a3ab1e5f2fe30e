//! Greedy word wrap against a character budget.
//!
//! Widths are counted in characters (Unicode scalar values), not measured glyphs.
//! Words split on whitespace only; there is no hyphenation. A word longer than the
//! line budget goes on a line of its own rather than being cut.

/// Wraps `text` into lines of at most `chars_per_line` characters.
///
/// `first_line_reserve` characters are held back on the first line (the indent token
/// of an indented paragraph). Empty or whitespace-only text yields no lines.
pub fn wrap_paragraph(text: &str, chars_per_line: usize, first_line_reserve: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let budget = if lines.is_empty() {
            chars_per_line.saturating_sub(first_line_reserve).max(1)
        } else {
            chars_per_line.max(1)
        };

        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len > budget {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }
    if current_len > 0 {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_of(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.split_whitespace().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_empty_text_yields_no_lines() {
        assert!(wrap_paragraph("", 40, 0).is_empty());
        assert!(wrap_paragraph("   \t ", 40, 0).is_empty());
    }

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap_paragraph("Hello world.", 40, 0), vec!["Hello world."]);
    }

    #[test]
    fn test_lines_respect_budget() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(10);
        let lines = wrap_paragraph(&text, 20, 0);
        assert!(lines.len() >= 2);
        for line in &lines {
            assert!(line.chars().count() <= 20, "line too long: {line:?}");
        }
    }

    #[test]
    fn test_word_sequence_is_preserved() {
        let text = "It was a bright cold day in April, and the clocks were striking thirteen. \
                    Winston Smith, his chin nuzzled into his breast in an effort to escape \
                    the vile wind, slipped quickly through the glass doors.";
        let lines = wrap_paragraph(text, 30, 4);
        assert!(lines.len() >= 2);
        let original: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        assert_eq!(words_of(&lines), original);
    }

    #[test]
    fn test_first_line_reserve_shortens_first_line_only() {
        // 12 words of "word": 12 per 62-char line without a reserve
        let text = vec!["word"; 24].join(" ");
        let plain = wrap_paragraph(&text, 62, 0);
        assert_eq!(plain.len(), 2);
        assert_eq!(plain[0].split_whitespace().count(), 12);

        let indented = wrap_paragraph(&text, 62, 4);
        // 58 characters leave room for 11 words on the first line
        assert_eq!(indented[0].split_whitespace().count(), 11);
        assert_eq!(indented[1].split_whitespace().count(), 12);
        assert_eq!(indented.len(), 3);
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let lines = wrap_paragraph("a supercalifragilistic b", 8, 0);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        // 11 characters, 21 bytes
        let lines = wrap_paragraph("éèêëē ààààà", 11, 0);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_one_char_budget_puts_each_word_alone() {
        let lines = wrap_paragraph("to be or not", 1, 0);
        assert_eq!(lines, vec!["to", "be", "or", "not"]);
    }
}
