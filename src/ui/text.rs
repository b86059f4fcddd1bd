//! Width-aware string fitting.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cut `text` to at most `max` columns, ending in an ellipsis when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap to `max` columns; words longer than a line are truncated.
pub fn wrap_words(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if max == 0 {
        return lines;
    }
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word = truncate_to_width(word, max);
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= max {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Left padding that centers `text` in `width` columns.
pub fn center_offset(text: &str, width: u16) -> u16 {
    let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    width.saturating_sub(text_width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_is_unchanged() {
        assert_eq!(truncate_to_width("Tugu Jogja", 20), "Tugu Jogja");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Candi Prambanan", 8), "Candi P…");
        assert_eq!(truncate_to_width("Candi Prambanan", 8).width(), 8);
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        let cut = truncate_to_width("日本語テキスト", 5);
        assert!(cut.width() <= 5);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_wrap_words_breaks_on_spaces() {
        let lines = wrap_words("Deskripsi singkat tentang tempat wisata default.", 20);
        assert_eq!(
            lines,
            vec!["Deskripsi singkat", "tentang tempat", "wisata default."]
        );
    }

    #[test]
    fn test_wrap_words_empty_text() {
        assert!(wrap_words("   ", 10).is_empty());
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset("abcd", 10), 3);
        assert_eq!(center_offset("toolongtext", 4), 0);
    }
}
