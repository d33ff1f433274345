//! MediaWiki action API envelope handling.

use serde_json::Value;

use crate::error::NormalizeError;
use crate::protocol::Protocol;

pub(super) fn parse_json(payload: &str, protocol: Protocol) -> Result<Value, NormalizeError> {
    serde_json::from_str(payload).map_err(|source| NormalizeError::MalformedJson {
        protocol: protocol.to_string(),
        source,
    })
}

/// Parses an API response; `error` aborts, `warnings` are logged.
pub(super) fn unwrap_api_response(
    payload: &str,
    protocol: Protocol,
) -> Result<Value, NormalizeError> {
    let value = parse_json(payload, protocol)?;
    if let Some(error) = value.get("error") {
        return Err(NormalizeError::UpstreamApi(error.clone()));
    }
    if let Some(warnings) = value.get("warnings") {
        tracing::warn!(%protocol, "API warning: {warnings}");
    }
    Ok(value)
}

/// Wikitext of the first revision of the first page.
pub(super) fn page_content(response: &Value, url: &str) -> Result<String, NormalizeError> {
    let revision = response
        .pointer("/query/pages/0/revisions/0")
        .ok_or_else(|| content_unavailable(url))?;
    revision
        .get("content")
        .or_else(|| revision.pointer("/slots/main/content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| content_unavailable(url))
}

fn content_unavailable(url: &str) -> NormalizeError {
    NormalizeError::ContentUnavailable {
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_aborts() {
        let payload = r#"{"error":{"code":"badtitle","info":"Bad title"}}"#;
        match unwrap_api_response(payload, Protocol::WikiApi) {
            Err(NormalizeError::UpstreamApi(err)) => assert_eq!(err["code"], "badtitle"),
            other => panic!("expected UpstreamApi, got {other:?}"),
        }
    }

    #[test]
    fn api_warnings_are_not_fatal() {
        let payload = r#"{"warnings":{"main":{"warnings":"Unrecognized parameter"}},"batchcomplete":true}"#;
        let value = unwrap_api_response(payload, Protocol::WikiApi).unwrap();
        assert_eq!(value["batchcomplete"], json!(true));
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(
            unwrap_api_response("<html>", Protocol::WikiApi),
            Err(NormalizeError::MalformedJson { .. })
        ));
    }

    #[test]
    fn page_content_supports_slots() {
        let response = json!({
            "query": {"pages": [{"revisions": [{"slots": {"main": {"content": "x"}}}]}]}
        });
        assert_eq!(page_content(&response, "u").unwrap(), "x");
    }

    #[test]
    fn page_content_missing_names_url() {
        let response = json!({"query": {"pages": [{"missing": true}]}});
        match page_content(&response, "https://en.wikipedia.org/w/api.php") {
            Err(NormalizeError::ContentUnavailable { url }) => {
                assert_eq!(url, "https://en.wikipedia.org/w/api.php")
            }
            other => panic!("expected ContentUnavailable, got {other:?}"),
        }
    }
}
