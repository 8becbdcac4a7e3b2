//! Turns raw URL-bar input into a navigation target.
//!
//! Classification is purely lexical: no DNS lookups, no network. The same
//! input always resolves to the same target.

use std::sync::LazyLock;

use regex::Regex;

/// Target used for empty input.
pub const BLANK_PAGE: &str = "about:blank";

/// Query endpoint used when the input doesn't look like an address.
pub const SEARCH_ENDPOINT: &str = "https://duckduckgo.com/?q=";

static EXPLICIT_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+://").expect("scheme regex"));

// `localhost` or a dotted-quad IPv4 literal, optionally with a port and path.
static LOCAL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(localhost|(\d{1,3}\.){3}\d{1,3})(:\d+)?(/.*)?$").expect("local regex")
});

static BARE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").expect("token regex"));

/// Resolves user input to a fully-qualified navigation target.
///
/// In order: empty input becomes the blank page; anything with an explicit
/// scheme or an `about:` prefix passes through verbatim; local addresses get
/// `http://`; things shaped like a hostname get `https://`; everything else
/// becomes a search query.
pub fn resolve_input(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return BLANK_PAGE.to_string();
    }
    if EXPLICIT_SCHEME.is_match(input) || input.starts_with("about:") {
        return input.to_string();
    }
    if LOCAL_ADDRESS.is_match(input) {
        return format!("http://{input}");
    }
    if input.contains('.')
        && !input.contains(' ')
        && !input.contains('/')
        && !BARE_TOKEN.is_match(input)
    {
        return format!("https://{input}");
    }
    format!("{SEARCH_ENDPOINT}{}", urlencoding::encode(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_blank_page() {
        assert_eq!(resolve_input(""), BLANK_PAGE);
        assert_eq!(resolve_input("   "), BLANK_PAGE);
    }

    #[test]
    fn explicit_scheme_passes_through() {
        assert_eq!(resolve_input("ftp://x"), "ftp://x");
        assert_eq!(resolve_input("https://example.com"), "https://example.com");
        assert_eq!(resolve_input("about:config"), "about:config");
    }

    #[test]
    fn resolution_is_idempotent() {
        let once = resolve_input("openai.com");
        assert_eq!(resolve_input(&once), once);
    }

    #[test]
    fn local_addresses_get_http() {
        assert_eq!(resolve_input("localhost"), "http://localhost");
        assert_eq!(resolve_input("localhost:3000"), "http://localhost:3000");
        assert_eq!(resolve_input("192.168.1.1/path"), "http://192.168.1.1/path");
        assert_eq!(resolve_input("127.0.0.1:8080/a/b"), "http://127.0.0.1:8080/a/b");
    }

    #[test]
    fn hostnames_get_https() {
        assert_eq!(resolve_input("example.com"), "https://example.com");
        assert_eq!(resolve_input("openai.com"), "https://openai.com");
        assert_eq!(resolve_input("sub.domain.co.uk"), "https://sub.domain.co.uk");
    }

    #[test]
    fn everything_else_is_a_search() {
        assert_eq!(
            resolve_input("hello world"),
            format!("{SEARCH_ENDPOINT}hello%20world")
        );
        // A slash keeps a dotted string from being treated as a hostname,
        // unless it matched the local-address form first.
        assert_eq!(
            resolve_input("weird.input/with space"),
            format!("{SEARCH_ENDPOINT}weird.input%2Fwith%20space")
        );
        assert_eq!(resolve_input("rust"), format!("{SEARCH_ENDPOINT}rust"));
    }

    #[test]
    fn input_is_trimmed_before_classification() {
        assert_eq!(resolve_input("  example.com  "), "https://example.com");
    }
}
