//! The "fetch" action: one routing rule per data protocol.

use std::collections::BTreeMap;

use crate::error::TranslateError;
use crate::host_policy::HostAllowlist;
use crate::protocol::Protocol;
use crate::url_model::title_from_path;

use super::external::resolve_external_service;
use super::request::{ParsedRequest, RoutedRequest};
use super::snapshot::snapshot_path;

const API_PATH: &str = "/w/api.php";
const FILE_REDIRECT_PATH: &str = "/wiki/Special:Redirect/file";
const SPARQL_PATH: &str = "/bigdata/namespace/wdq/sparql";
const SPARQL_ACCEPT: &str = "application/sparql-results+json";

/// Settings the fetch rules need besides the allowlist.
pub(super) struct FetchContext<'a> {
    pub allowlist: &'a HostAllowlist,
    pub trusted: bool,
    pub language: Option<&'a str>,
}

pub(super) fn route_fetch(
    parsed: ParsedRequest,
    ctx: &FetchContext<'_>,
) -> Result<RoutedRequest, TranslateError> {
    let protocol = parsed
        .declared
        .parse::<Protocol>()
        .map_err(|_| unknown(&parsed.declared))?;

    match protocol {
        Protocol::Http | Protocol::Https => route_http(parsed, protocol, ctx.trusted),
        Protocol::WikiApi => Ok(route_wiki_api(&parsed)),
        Protocol::WikiRest => route_wiki_rest(&parsed),
        Protocol::WikiRaw => route_wiki_raw(&parsed),
        Protocol::Tabular | Protocol::TabularInfo => route_tabular(&parsed, protocol, ctx),
        Protocol::WikiFile => Ok(route_wiki_file(&parsed)),
        Protocol::WikiRawUpload => route_raw_upload(&parsed, ctx.allowlist),
        Protocol::WikidataSparql => route_sparql(&parsed, ctx.allowlist),
        Protocol::Geoshape | Protocol::Geoline => route_geo(&parsed, protocol, ctx.allowlist),
        Protocol::MapSnapshot => route_snapshot(&parsed, ctx.allowlist),
        Protocol::WikiTitle => Err(unknown(&parsed.declared)),
    }
}

fn unknown(declared: &str) -> TranslateError {
    TranslateError::UnknownProtocol {
        protocol: declared.to_string(),
        action: "fetch",
    }
}

fn route_http(
    parsed: ParsedRequest,
    protocol: Protocol,
    trusted: bool,
) -> Result<RoutedRequest, TranslateError> {
    if !trusted {
        return Err(TranslateError::UntrustedProtocol {
            protocol: protocol.to_string(),
        });
    }
    Ok(RoutedRequest::from_parsed(&parsed, protocol, protocol))
}

fn route_wiki_api(parsed: &ParsedRequest) -> RoutedRequest {
    let mut routed = RoutedRequest::from_parsed(parsed, Protocol::WikiApi, parsed.host_scheme);
    routed.pathname = API_PATH.to_string();
    routed.query.insert("format".to_string(), "json".to_string());
    routed.query.insert("formatversion".to_string(), "2".to_string());
    routed.add_cors_origin = true;
    routed
}

fn route_wiki_rest(parsed: &ParsedRequest) -> Result<RoutedRequest, TranslateError> {
    if !parsed.pathname.starts_with("/api/") {
        return Err(TranslateError::RestPrefix {
            path: parsed.pathname.clone(),
        });
    }
    Ok(RoutedRequest::from_parsed(
        parsed,
        Protocol::WikiRest,
        parsed.host_scheme,
    ))
}

fn route_wiki_raw(parsed: &ParsedRequest) -> Result<RoutedRequest, TranslateError> {
    let title = page_title(parsed, Protocol::WikiRaw)?;
    let mut routed = RoutedRequest::from_parsed(parsed, Protocol::WikiRaw, parsed.host_scheme);
    routed.pathname = API_PATH.to_string();
    routed.query = api_query(&[
        ("action", "query"),
        ("prop", "revisions"),
        ("rvprop", "content"),
        ("titles", title.as_str()),
    ]);
    routed.add_cors_origin = true;
    Ok(routed)
}

fn route_tabular(
    parsed: &ParsedRequest,
    protocol: Protocol,
    ctx: &FetchContext<'_>,
) -> Result<RoutedRequest, TranslateError> {
    let title = page_title(parsed, protocol)?;
    let mut routed = resolve_external_service(parsed, ctx.allowlist, protocol, Protocol::Tabular)?;
    routed.pathname = API_PATH.to_string();
    routed.query = api_query(&[("action", "jsondata"), ("title", title.as_str())]);
    if let Some(language) = ctx.language {
        routed.query.insert("uselang".to_string(), language.to_string());
    }
    routed.add_cors_origin = true;
    Ok(routed)
}

fn route_wiki_file(parsed: &ParsedRequest) -> RoutedRequest {
    let mut routed = RoutedRequest::from_parsed(parsed, Protocol::WikiFile, parsed.host_scheme);
    routed.pathname = format!("{FILE_REDIRECT_PATH}{}", parsed.pathname);
    routed
}

fn route_raw_upload(
    parsed: &ParsedRequest,
    allowlist: &HostAllowlist,
) -> Result<RoutedRequest, TranslateError> {
    let mut routed = resolve_external_service(
        parsed,
        allowlist,
        Protocol::WikiRawUpload,
        Protocol::WikiRawUpload,
    )?;
    routed.query.clear();
    Ok(routed)
}

fn route_sparql(
    parsed: &ParsedRequest,
    allowlist: &HostAllowlist,
) -> Result<RoutedRequest, TranslateError> {
    let sparql = parsed
        .query
        .get("query")
        .ok_or(TranslateError::MissingParameter {
            protocol: Protocol::WikidataSparql.to_string(),
            parameter: "query",
        })?;
    let mut routed = resolve_external_service(
        parsed,
        allowlist,
        Protocol::WikidataSparql,
        Protocol::WikidataSparql,
    )?;
    routed.pathname = SPARQL_PATH.to_string();
    routed.query = BTreeMap::from([("query".to_string(), sparql.clone())]);
    routed
        .headers
        .insert("Accept".to_string(), SPARQL_ACCEPT.to_string());
    Ok(routed)
}

fn route_geo(
    parsed: &ParsedRequest,
    protocol: Protocol,
    allowlist: &HostAllowlist,
) -> Result<RoutedRequest, TranslateError> {
    if !parsed.query.contains_key("ids") && !parsed.query.contains_key("query") {
        return Err(TranslateError::MissingParameter {
            protocol: protocol.to_string(),
            parameter: "ids or query",
        });
    }
    let mut routed = resolve_external_service(parsed, allowlist, protocol, Protocol::Geoshape)?;
    routed.pathname = format!("/{protocol}");
    Ok(routed)
}

fn route_snapshot(
    parsed: &ParsedRequest,
    allowlist: &HostAllowlist,
) -> Result<RoutedRequest, TranslateError> {
    let path = snapshot_path(&parsed.query)?;
    let mut routed =
        resolve_external_service(parsed, allowlist, Protocol::MapSnapshot, Protocol::Geoshape)?;
    routed.pathname = path;
    routed.query.clear();
    Ok(routed)
}

fn page_title(parsed: &ParsedRequest, protocol: Protocol) -> Result<String, TranslateError> {
    title_from_path(&parsed.pathname).ok_or_else(|| TranslateError::InvalidTitle {
        protocol: protocol.to_string(),
        title: parsed.pathname.clone(),
    })
}

/// Action API query with the JSON format parameters every call needs.
fn api_query(params: &[(&str, &str)]) -> BTreeMap<String, String> {
    let mut query = BTreeMap::from([
        ("format".to_string(), "json".to_string()),
        ("formatversion".to_string(), "2".to_string()),
    ]);
    query.extend(params.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    query
}
