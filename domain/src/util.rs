//! Shared utility functions.

/// Shorten `s` to at most `max_bytes` bytes for log previews, cutting on a
/// UTF-8 character boundary and marking the cut with `...`.
pub fn preview(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_unchanged() {
        assert_eq!(preview("heat", 10), "heat");
    }

    #[test]
    fn long_input_marked() {
        assert_eq!(preview("conduction", 4), "cond...");
    }

    #[test]
    fn multibyte_boundary() {
        // '°' is 2 bytes
        let s = "25°C";
        assert_eq!(preview(s, 3), "25...");
        assert_eq!(preview(s, 4), "25°...");
    }
}
