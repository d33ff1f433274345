//! Protocol translation: untrusted graph URL → safe absolute request.
//!
//! The pipeline is a chain of pure steps, each returning a new value or an
//! error:
//! 1. repair `<scheme>:http(s)://` URLs
//! 2. parse into parts
//! 3. rename and allowlist the host
//! 4. apply the open or fetch rules for the declared protocol
//! 5. format the final URL
//!
//! Nothing is formatted (let alone fetched) unless every step succeeds.

mod external;
mod fetch;
mod open;
mod request;
mod snapshot;

pub use request::{ActionKind, ParsedRequest, RequestDescriptor, RoutedRequest, SafeRequest};

use crate::config::GraphLoadConfig;
use crate::error::TranslateError;
use crate::host_policy::HostAllowlist;
use crate::url_model::{format_url, parse_url, repair_compound_scheme};

use fetch::FetchContext;

/// Translates graph data URLs under one immutable configuration.
///
/// Cheap to share: translation borrows the translator immutably.
#[derive(Debug, Clone)]
pub struct Translator {
    allowlist: HostAllowlist,
    trusted: bool,
    default_host: String,
    language: Option<String>,
}

impl Translator {
    pub fn new(cfg: &GraphLoadConfig) -> Self {
        Self {
            allowlist: HostAllowlist::from_config(cfg),
            trusted: cfg.trusted,
            default_host: cfg.default_host.clone(),
            language: cfg.language.clone(),
        }
    }

    pub fn allowlist(&self) -> &HostAllowlist {
        &self.allowlist
    }

    pub fn translate(&self, descriptor: &RequestDescriptor) -> Result<SafeRequest, TranslateError> {
        let result = self
            .parse(descriptor)
            .and_then(|parsed| self.route(parsed))
            .and_then(finish);
        match &result {
            Ok(safe) => tracing::trace!(
                from = %descriptor.url,
                to = %safe.url,
                protocol = %safe.protocol,
                "translated graph request"
            ),
            Err(err) => tracing::debug!(
                url = %descriptor.url,
                action = %descriptor.action,
                "rejected graph request: {err}"
            ),
        }
        result
    }

    /// Steps 1-3: repair, parse, and validate the host.
    pub fn parse(&self, descriptor: &RequestDescriptor) -> Result<ParsedRequest, TranslateError> {
        let url = repair_compound_scheme(&descriptor.url);
        let parts = parse_url(&url, &self.default_host)?;

        let resolved = self
            .allowlist
            .resolve_host(&parts.host)
            .ok_or_else(|| TranslateError::UnlistedHost {
                host: parts.host.clone(),
                url: url.clone(),
            })?;

        let (declared, is_relative_protocol) = match parts.scheme {
            Some(scheme) => (scheme, parts.is_relative_protocol),
            None => (resolved.scheme.to_string(), true),
        };

        Ok(ParsedRequest {
            url,
            action: descriptor.action,
            declared,
            host: resolved.host,
            host_scheme: resolved.scheme,
            pathname: parts.pathname,
            query: parts.query,
            is_relative_host: parts.is_relative_host,
            is_relative_protocol,
        })
    }

    /// Step 4: apply the rules of the declared protocol for the action.
    pub fn route(&self, parsed: ParsedRequest) -> Result<RoutedRequest, TranslateError> {
        match parsed.action {
            ActionKind::Open => open::route_open(parsed),
            ActionKind::Fetch => {
                let ctx = FetchContext {
                    allowlist: &self.allowlist,
                    trusted: self.trusted,
                    language: self.language.as_deref(),
                };
                fetch::route_fetch(parsed, &ctx)
            }
        }
    }
}

/// Step 5: format the routed request.
pub fn finish(routed: RoutedRequest) -> Result<SafeRequest, TranslateError> {
    let url = format_url(
        routed.scheme,
        &routed.host,
        &routed.pathname,
        &routed.query,
        routed.add_cors_origin,
    )?;
    Ok(SafeRequest {
        pathname: url.path().to_string(),
        url: url.to_string(),
        protocol: routed.protocol,
        scheme: routed.scheme,
        host: routed.host,
        query: routed.query,
        headers: routed.headers,
        add_cors_origin: routed.add_cors_origin,
    })
}
