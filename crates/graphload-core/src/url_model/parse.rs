//! Graph URL parsing into structured parts.

use std::collections::BTreeMap;

use crate::error::TranslateError;
use crate::protocol::normalize_scheme;

/// Structured view of a graph data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Declared scheme without colon; `None` for protocol-relative input.
    pub scheme: Option<String>,
    pub host: String,
    pub pathname: String,
    pub query: BTreeMap<String, String>,
    /// The URL named no host; `host` holds the default host.
    pub is_relative_host: bool,
    /// The URL began with `//`.
    pub is_relative_protocol: bool,
}

/// Parses `raw` into [`UrlParts`].
///
/// A missing or empty authority (`wikiapi:///...`) falls back to
/// `default_host`. Ports and user info are discarded. The path is read with
/// `https` path rules whatever the declared scheme, so it already has the
/// shape it will have on the wire.
pub fn parse_url(raw: &str, default_host: &str) -> Result<UrlParts, TranslateError> {
    let raw = raw.trim();
    let is_relative_protocol = raw.starts_with("//");
    // Any special scheme works as a stand-in; it is dropped below.
    let absolute = if is_relative_protocol {
        format!("https:{raw}")
    } else {
        raw.to_string()
    };

    let parsed = url::Url::parse(&absolute).map_err(|e| TranslateError::MalformedUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    let scheme = if is_relative_protocol {
        None
    } else {
        Some(normalize_scheme(parsed.scheme()))
    };

    let (host, is_relative_host) = match parsed.host_str().filter(|h| !h.is_empty()) {
        Some(h) => (h.to_string(), false),
        None => (default_host.to_string(), true),
    };

    let pathname = web_path(raw, parsed.path())?;

    let query = parsed.query_pairs().into_owned().collect();

    Ok(UrlParts {
        scheme,
        host,
        pathname,
        query,
        is_relative_host,
        is_relative_protocol,
    })
}

/// Re-reads `path` as an `https` path: `\` separates segments and dot
/// segments are resolved.
fn web_path(raw: &str, path: &str) -> Result<String, TranslateError> {
    let mut web =
        url::Url::parse("https://localhost/").map_err(|e| TranslateError::MalformedUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
    web.set_path(path);
    Ok(web.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_scheme_without_host_uses_default() {
        let parts = parse_url("wikiapi:///?action=query&list=allpages", "en.wikipedia.org").unwrap();
        assert_eq!(parts.scheme.as_deref(), Some("wikiapi"));
        assert_eq!(parts.host, "en.wikipedia.org");
        assert!(parts.is_relative_host);
        assert!(!parts.is_relative_protocol);
        assert_eq!(parts.pathname, "/");
        assert_eq!(parts.query.get("action").map(String::as_str), Some("query"));
        assert_eq!(parts.query.get("list").map(String::as_str), Some("allpages"));
    }

    #[test]
    fn custom_scheme_with_host() {
        let parts = parse_url("geoshape://maps.wikimedia.org/?ids=Q16,Q30", "en.wikipedia.org").unwrap();
        assert_eq!(parts.host, "maps.wikimedia.org");
        assert!(!parts.is_relative_host);
        assert_eq!(parts.query["ids"], "Q16,Q30");
    }

    #[test]
    fn protocol_relative_has_no_scheme() {
        let parts = parse_url("//en.wikipedia.org/Main_Page", "de.wikipedia.org").unwrap();
        assert_eq!(parts.scheme, None);
        assert!(parts.is_relative_protocol);
        assert!(!parts.is_relative_host);
        assert_eq!(parts.host, "en.wikipedia.org");
        assert_eq!(parts.pathname, "/Main_Page");
    }

    #[test]
    fn scheme_is_lowercased_and_port_dropped() {
        let parts = parse_url("HTTPS://en.wikipedia.org:8443/wiki/X", "a.org").unwrap();
        assert_eq!(parts.scheme.as_deref(), Some("https"));
        assert_eq!(parts.host, "en.wikipedia.org");
    }

    #[test]
    fn repeated_query_key_keeps_last() {
        let parts = parse_url("wikiapi:///?a=1&a=2", "a.org").unwrap();
        assert_eq!(parts.query["a"], "2");
    }

    #[test]
    fn backslashes_and_dot_segments_are_resolved() {
        let parts = parse_url(r"wikirest:///api/..\..\w/index.php", "a.org").unwrap();
        assert_eq!(parts.pathname, "/w/index.php");
        let parts = parse_url(r"wikifile:///a\b\..\c.png", "a.org").unwrap();
        assert_eq!(parts.pathname, "/a/c.png");
    }

    #[test]
    fn empty_path_becomes_root() {
        let parts = parse_url("geoshape://maps.wikimedia.org?ids=Q1", "a.org").unwrap();
        assert_eq!(parts.pathname, "/");
    }

    #[test]
    fn relative_path_is_malformed() {
        assert!(matches!(
            parse_url("/w/api.php", "a.org"),
            Err(TranslateError::MalformedUrl { .. })
        ));
    }
}
