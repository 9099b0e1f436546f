use std::path::PathBuf;

/// Marker appended to titles cut by [`truncate`].
pub const ELLIPSIS: char = '…';

/// Shorten `text` to at most `max_len` characters.
///
/// Text that fits is returned unchanged. Longer text keeps its first
/// `max_len - 1` characters followed by [`ELLIPSIS`].
pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let mut truncated: String = text.chars().take(max_len - 1).collect();
        truncated.push(ELLIPSIS);
        truncated
    }
}

/// Drop a leading `https://` or `http://`.
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_cuts_and_marks() {
        let cut = truncate("abcdefghij", 5);
        assert_eq!(cut, "abcd…");
        assert_eq!(cut.chars().count(), 5);
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("ab", 5), "ab");
        assert_eq!(truncate("abcde", 5), "abcde");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("ünïcødé", 4), "ünï…");
    }

    #[test]
    fn test_truncate_zero_length() {
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 1), "…");
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://example.com/a"), "example.com/a");
        assert_eq!(strip_scheme("http://example.com"), "example.com");
        assert_eq!(strip_scheme("example.com"), "example.com");
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde("/etc/hosts"), PathBuf::from("/etc/hosts"));
    }
}
