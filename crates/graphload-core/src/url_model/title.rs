//! Page title extraction and encoding.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by JavaScript's `encodeURIComponent`.
const TITLE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-decodes a path or title; `None` if the bytes are not UTF-8.
pub fn decode_title(raw: &str) -> Option<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|title| title.into_owned())
}

/// Turns a URL pathname into a page title: leading slash removed, decoded.
///
/// Returns `None` for an empty title, one that does not decode to UTF-8, or
/// one containing `|`, which MediaWiki would read as several titles.
pub fn title_from_path(pathname: &str) -> Option<String> {
    let raw = pathname.strip_prefix('/').unwrap_or(pathname);
    decode_title(raw).filter(|title| !title.is_empty() && !title.contains('|'))
}

/// Encodes a title for a `/wiki/<title>` link (spaces become underscores).
pub fn encode_title(title: &str) -> String {
    let underscored = title.replace(' ', "_");
    utf8_percent_encode(&underscored, TITLE_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_from_path_decodes() {
        assert_eq!(title_from_path("/My_Page").as_deref(), Some("My_Page"));
        assert_eq!(
            title_from_path("/Data:Bar%20chart.tab").as_deref(),
            Some("Data:Bar chart.tab")
        );
    }

    #[test]
    fn title_from_path_rejects_pipe_and_empty() {
        assert_eq!(title_from_path("/My|Page"), None);
        assert_eq!(title_from_path("/My%7CPage"), None);
        assert_eq!(title_from_path("/"), None);
    }

    #[test]
    fn invalid_utf8_is_not_a_title() {
        assert_eq!(decode_title("Caf%C3%A9").as_deref(), Some("Café"));
        assert_eq!(decode_title("Caf%FF"), None);
        assert_eq!(title_from_path("/Data:%FF.tab"), None);
    }

    #[test]
    fn encode_title_matches_uri_component() {
        assert_eq!(encode_title("Albert Einstein"), "Albert_Einstein");
        assert_eq!(encode_title("AC/DC"), "AC%2FDC");
        assert_eq!(encode_title("Café (film)"), "Caf%C3%A9_(film)");
        assert_eq!(encode_title("What?"), "What%3F");
    }
}
