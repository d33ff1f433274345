//! Host selection for protocols served by a dedicated external service
//! (map renderer, SPARQL endpoint, upload servers, dataset wiki).

use crate::error::TranslateError;
use crate::host_policy::HostAllowlist;
use crate::protocol::Protocol;

use super::request::{ParsedRequest, RoutedRequest};

/// Routes `parsed` to the external service allowlisted under `service`.
///
/// A URL without a host goes to the first host configured for the service;
/// a URL with a host keeps it. Either way the final host must pass the
/// service's own allowlist.
pub(super) fn resolve_external_service(
    parsed: &ParsedRequest,
    allowlist: &HostAllowlist,
    protocol: Protocol,
    service: Protocol,
) -> Result<RoutedRequest, TranslateError> {
    let allowed = allowlist
        .allowed_hosts(service.as_str())
        .ok_or_else(|| TranslateError::ProtocolDisabled {
            protocol: service.to_string(),
        })?;
    let not_allowed = |host: &str| TranslateError::HostNotAllowed {
        protocol: service.to_string(),
        host: host.to_string(),
        allowed: allowed.to_vec(),
    };

    let (host, scheme) = if parsed.is_relative_host {
        let first = allowed.first().ok_or_else(|| not_allowed(""))?;
        let resolved = allowlist
            .resolve_host(first)
            .ok_or_else(|| not_allowed(first))?;
        (resolved.host, resolved.scheme)
    } else {
        (parsed.host.clone(), parsed.host_scheme)
    };

    if !allowlist.is_allowed(service.as_str(), &host) {
        return Err(not_allowed(&host));
    }

    let mut routed = RoutedRequest::from_parsed(parsed, protocol, scheme);
    routed.host = host;
    Ok(routed)
}
