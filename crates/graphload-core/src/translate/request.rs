//! Request values threaded through the translation pipeline.
//!
//! Each stage produces a new value: [`RequestDescriptor`] (caller input) →
//! [`ParsedRequest`] (host validated) → [`RoutedRequest`] (scheme rules
//! applied) → [`SafeRequest`] (formatted, ready to fetch).

use std::collections::BTreeMap;
use std::fmt;

use crate::protocol::Protocol;

/// What the graph wants to do with the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionKind {
    /// Load data.
    #[default]
    Fetch,
    /// Build a link the user may navigate to.
    Open,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Fetch => "fetch",
            ActionKind::Open => "open",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untrusted request as written in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub url: String,
    pub action: ActionKind,
}

impl RequestDescriptor {
    pub fn fetch(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            action: ActionKind::Fetch,
        }
    }

    pub fn open(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            action: ActionKind::Open,
        }
    }
}

/// Request after parsing, host renaming and host validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// URL as received (after compound-scheme repair).
    pub url: String,
    pub action: ActionKind,
    /// Scheme the graph declared; for protocol-relative URLs, the scheme the
    /// host resolved to.
    pub declared: String,
    /// Canonical host, already allowlisted.
    pub host: String,
    /// Transport scheme the host was allowlisted under.
    pub host_scheme: Protocol,
    pub pathname: String,
    pub query: BTreeMap<String, String>,
    pub is_relative_host: bool,
    pub is_relative_protocol: bool,
}

/// Request after the scheme-specific rules were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedRequest {
    /// Logical protocol, used to pick the response normalizer.
    pub protocol: Protocol,
    pub scheme: Protocol,
    pub host: String,
    pub pathname: String,
    pub query: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub add_cors_origin: bool,
}

impl RoutedRequest {
    /// Starts from the parsed request's host, path and query unchanged.
    pub(super) fn from_parsed(parsed: &ParsedRequest, protocol: Protocol, scheme: Protocol) -> Self {
        Self {
            protocol,
            scheme,
            host: parsed.host.clone(),
            pathname: parsed.pathname.clone(),
            query: parsed.query.clone(),
            headers: BTreeMap::new(),
            add_cors_origin: false,
        }
    }
}

/// Request that passed every check and may be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeRequest {
    /// Absolute URL to fetch.
    pub url: String,
    /// Logical protocol tag for the response normalizer.
    pub protocol: Protocol,
    /// Transport scheme (`http` or `https`).
    pub scheme: Protocol,
    pub host: String,
    pub pathname: String,
    pub query: BTreeMap<String, String>,
    /// Extra request headers (e.g. `Accept`).
    pub headers: BTreeMap<String, String>,
    /// The fetch must be made as an anonymous cross-origin request.
    pub add_cors_origin: bool,
}
