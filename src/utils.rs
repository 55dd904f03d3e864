use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_width` terminal columns, ending in `...` when
/// cut. Never splits a character.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_no_truncation() {
        assert_eq!(truncate_to_width("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_with_truncation() {
        let result = truncate_to_width("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert_eq!(result.width(), 20);
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate_to_width("Exactly twenty!!!!!!", 20), "Exactly twenty!!!!!!");
    }

    #[test]
    fn test_truncate_accented_text() {
        // Multi-byte characters must not be split.
        let result = truncate_to_width("Perché è così difficile?", 10);
        assert_eq!(result, "Perché ...");
    }

    #[test]
    fn test_truncate_wide_characters() {
        let result = truncate_to_width("猫猫猫猫猫", 7);
        assert_eq!(result, "猫猫...");
        assert!(result.width() <= 7);
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_to_width("Hello", 2), "..");
        assert_eq!(truncate_to_width("Hello", 0), "");
    }
}
