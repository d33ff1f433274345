//! URL modeling for graph data requests.
//!
//! Parses pseudo-scheme URLs (`wikiapi:///...`, `//host/...`) into
//! structured parts, formats finalized parts back into absolute URLs, and
//! converts between URL paths and wiki page titles.

mod format;
mod parse;
mod title;

pub use format::format_url;
pub use parse::{parse_url, UrlParts};
pub use title::{decode_title, encode_title, title_from_path};

/// Rewrites `<scheme>:http://...` and `<scheme>:https://...` to
/// `<scheme>://...`.
///
/// Graph authors sometimes paste a full web URL after a custom scheme; the
/// embedded transport scheme is dropped so the custom scheme's rules apply.
pub fn repair_compound_scheme(raw: &str) -> String {
    let Some((scheme, rest)) = raw.split_once(':') else {
        return raw.to_string();
    };
    let is_scheme = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !is_scheme {
        return raw.to_string();
    }

    let lower = rest.to_ascii_lowercase();
    for embedded in ["http://", "https://"] {
        if lower.starts_with(embedded) {
            return format!("{scheme}://{}", &rest[embedded.len()..]);
        }
    }
    raw.to_string()
}
