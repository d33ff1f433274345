//! The "open" action: turn a graph link into a `/wiki/<title>` page link.
//!
//! Only wiki page links are produced, so a graph cannot send readers to an
//! arbitrary URL.

use crate::error::TranslateError;
use crate::protocol::Protocol;
use crate::url_model::{decode_title, encode_title};

use super::request::{ParsedRequest, RoutedRequest};

const WIKI_PREFIX: &str = "/wiki";

pub(super) fn route_open(parsed: ParsedRequest) -> Result<RoutedRequest, TranslateError> {
    let protocol = match parsed.declared.parse::<Protocol>() {
        Ok(p @ (Protocol::Http | Protocol::Https | Protocol::WikiTitle)) => p,
        _ => {
            return Err(TranslateError::UnknownProtocol {
                protocol: parsed.declared.clone(),
                action: "open",
            })
        }
    };

    if !parsed.query.is_empty() {
        return Err(TranslateError::NonEmptyQuery {
            protocol: protocol.to_string(),
        });
    }

    let invalid_title = || TranslateError::InvalidTitle {
        protocol: protocol.to_string(),
        title: parsed.pathname.clone(),
    };

    let mut path = parsed.pathname.as_str();
    if protocol.is_transport() && !parsed.is_relative_protocol {
        if !path.starts_with("/wiki/") {
            return Err(invalid_title());
        }
        path = &path[WIKI_PREFIX.len()..];
    }

    let decoded = decode_title(path).ok_or_else(invalid_title)?;
    let title = decoded
        .trim()
        .strip_prefix('/')
        .filter(|t| !t.is_empty() && !t.starts_with('/') && !t.contains('|'))
        .ok_or_else(invalid_title)?;

    let mut routed = RoutedRequest::from_parsed(&parsed, Protocol::WikiTitle, parsed.host_scheme);
    routed.pathname = format!("{WIKI_PREFIX}/{}", encode_title(title));
    Ok(routed)
}
