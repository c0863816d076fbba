//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("breathe", 10), "breathe");
        assert_eq!(truncate("breathe in slowly", 10), "breathe...");
    }

    #[test]
    fn test_truncate_emoji() {
        // Each emoji is 4 bytes; max_len=10 -> target=7 -> boundary at 4
        assert_eq!(truncate("🧘💖🌿", 10), "🧘...");
        assert_eq!(truncate("🧘💖🌿", 12), "🧘💖🌿");
    }
}
