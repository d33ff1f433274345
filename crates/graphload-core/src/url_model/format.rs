//! Serializing finalized parts back into an absolute URL.

use std::collections::BTreeMap;

use crate::error::TranslateError;
use crate::protocol::Protocol;

/// Formats `scheme://host/pathname?query`.
///
/// Query keys are emitted in sorted order. Read the final path back from the
/// returned URL; `set_path` may have rewritten `pathname`. With `add_cors_origin` the
/// serialized query also carries `origin=*`, which the wiki API requires for
/// anonymous cross-origin requests.
pub fn format_url(
    scheme: Protocol,
    host: &str,
    pathname: &str,
    query: &BTreeMap<String, String>,
    add_cors_origin: bool,
) -> Result<url::Url, TranslateError> {
    let base = format!("{scheme}://{host}/");
    let mut url = url::Url::parse(&base).map_err(|e| TranslateError::MalformedUrl {
        url: base.clone(),
        reason: e.to_string(),
    })?;
    url.set_path(pathname);

    let mut pairs = query.clone();
    if add_cors_origin {
        pairs.insert("origin".to_string(), "*".to_string());
    }
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs.iter());
    }

    Ok(url)
}
