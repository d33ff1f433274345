//! Error taxonomy for translation (before any request is issued) and
//! normalization (after a fetch returned a payload).

/// Failure while turning a graph data request into a safe network request.
///
/// Every variant is raised before a URL is formatted, so a failed translation
/// never produces a partial request.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("malformed URL {url}: {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("hostname is not allowlisted: {host} (url {url})")]
    UnlistedHost { host: String, url: String },

    #[error("protocol {protocol} is disabled: no hosts are configured for it")]
    ProtocolDisabled { protocol: String },

    #[error("host {host} is not allowed for protocol {protocol}; allowed hosts: {}", allowed.join(", "))]
    HostNotAllowed {
        protocol: String,
        host: String,
        allowed: Vec<String>,
    },

    #[error("unknown protocol {protocol} for {action} action")]
    UnknownProtocol { protocol: String, action: &'static str },

    #[error("protocol {protocol} is only allowed for trusted graphs")]
    UntrustedProtocol { protocol: String },

    #[error("invalid page title {title:?} for {protocol}")]
    InvalidTitle { protocol: String, title: String },

    #[error("{protocol} link must not have query parameters")]
    NonEmptyQuery { protocol: String },

    #[error("wikirest path must start with /api/: {path}")]
    RestPrefix { path: String },

    #[error("{protocol} requires the {parameter} parameter")]
    MissingParameter {
        protocol: String,
        parameter: &'static str,
    },

    #[error("invalid {field} parameter for {protocol}: {reason}")]
    InvalidParameter {
        protocol: String,
        field: &'static str,
        reason: String,
    },
}

/// Failure while unwrapping a fetched payload into the flat data shape.
///
/// A normalization error always discards whatever was decoded so far.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("payload for {protocol} is not valid JSON: {source}")]
    MalformedJson {
        protocol: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API error: {0}")]
    UpstreamApi(serde_json::Value),

    #[error("page content is unavailable for {url}")]
    ContentUnavailable { url: String },

    #[error("invalid tabular data: {0}")]
    InvalidTabularShape(String),

    #[error("SPARQL query result does not have \"results.bindings\"")]
    InvalidSparqlShape,
}

/// Failure anywhere along translate → fetch → normalize.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("fetch of {url} failed: {source:#}")]
    Transport {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_not_allowed_lists_permitted_hosts() {
        let err = TranslateError::HostNotAllowed {
            protocol: "geoshape".to_string(),
            host: "evil.example.com".to_string(),
            allowed: vec!["maps.wikimedia.org".to_string(), "maps.example.org".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("geoshape"));
        assert!(msg.contains("maps.wikimedia.org, maps.example.org"));
    }

    #[test]
    fn invalid_parameter_names_field() {
        let err = TranslateError::InvalidParameter {
            protocol: "mapsnapshot".to_string(),
            field: "width",
            reason: "5000 is outside 1..=4096".to_string(),
        };
        assert!(err.to_string().contains("width"));
    }
}
