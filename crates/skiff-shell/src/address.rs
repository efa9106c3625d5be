//! Address bar input handling

const SCHEME_SEPARATOR: &str = "://";

/// Scheme assumed for address bar input that names none
pub const DEFAULT_SCHEME: &str = "http://";

/// Turn address bar text into something the engine can load.
///
/// Text without a scheme separator is assumed to be a web address and gets
/// [`DEFAULT_SCHEME`] prepended. Anything else goes to the engine untouched;
/// malformed input is the engine's problem.
pub fn normalize_address(text: &str) -> String {
    if text.contains(SCHEME_SEPARATOR) {
        text.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_scheme() {
        assert_eq!(normalize_address("example.com"), "http://example.com");
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        assert_eq!(normalize_address("https://example.com"), "https://example.com");
        assert_eq!(normalize_address("file:///etc/hosts"), "file:///etc/hosts");
    }

    #[test]
    fn test_prefix_is_always_plain_http() {
        for input in ["example.com", "localhost:8080/path", "www.example.org"] {
            let uri = normalize_address(input);
            assert_eq!(uri.strip_prefix("http://"), Some(input));
        }
    }

    #[test]
    fn test_no_trimming_or_validation() {
        assert_eq!(normalize_address(""), "http://");
        assert_eq!(normalize_address(" two words "), "http:// two words ");
        // A scheme separator anywhere counts
        assert_eq!(normalize_address("search?q=a://b"), "search?q=a://b");
    }

    #[test]
    fn test_scheme_without_separator_still_prefixed() {
        assert_eq!(normalize_address("about:blank"), "http://about:blank");
    }
}
