//! Per-scheme host allowlist, compiled once from configuration.

use std::collections::{BTreeMap, HashMap};

use crate::config::GraphLoadConfig;
use crate::protocol::{normalize_scheme, Protocol};

use super::matcher::{normalize_host, DomainMatcher, MatchPolicy};

/// Host accepted by [`HostAllowlist::resolve_host`], with the transport
/// scheme it was accepted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHost {
    pub host: String,
    pub scheme: Protocol,
}

/// Immutable lookup from scheme to compiled matcher.
///
/// Every configured scheme is compiled up front, so the allowlist can be
/// shared across threads without synchronization. A scheme with no entry (or
/// an empty list) is disabled.
#[derive(Debug, Clone)]
pub struct HostAllowlist {
    matchers: HashMap<String, DomainMatcher>,
    renames: HashMap<String, String>,
}

impl HostAllowlist {
    /// Compile the allowlist.
    ///
    /// Scheme keys may be written with or without a trailing colon; if both
    /// forms are present the colon-suffixed one wins.
    pub fn new(
        domains: &BTreeMap<String, Vec<String>>,
        domain_map: &BTreeMap<String, String>,
        custom_policy: MatchPolicy,
    ) -> Self {
        let mut chosen: HashMap<String, (bool, &Vec<String>)> = HashMap::new();
        for (key, hosts) in domains {
            let scheme = normalize_scheme(key);
            let has_colon = key.trim().ends_with(':');
            match chosen.get(&scheme) {
                Some((true, _)) if !has_colon => {}
                _ => {
                    chosen.insert(scheme, (has_colon, hosts));
                }
            }
        }

        let matchers = chosen
            .into_iter()
            .filter(|(_, (_, hosts))| !hosts.is_empty())
            .map(|(scheme, (_, hosts))| {
                let policy = if scheme == "http" || scheme == "https" {
                    MatchPolicy::Subdomain
                } else {
                    custom_policy
                };
                let matcher = DomainMatcher::new(hosts, policy);
                (scheme, matcher)
            })
            .collect();

        let renames = domain_map
            .iter()
            .map(|(alias, canonical)| (normalize_host(alias), normalize_host(canonical)))
            .collect();

        Self { matchers, renames }
    }

    pub fn from_config(cfg: &GraphLoadConfig) -> Self {
        Self::new(&cfg.domains, &cfg.domain_map, cfg.custom_scheme_matching)
    }

    /// Is `host` permitted for `scheme`? Disabled schemes allow nothing.
    pub fn is_allowed(&self, scheme: &str, host: &str) -> bool {
        self.matcher(scheme).is_some_and(|m| m.matches(host))
    }

    /// Configured host patterns for `scheme`, in order, or `None` when the
    /// scheme is disabled.
    pub fn allowed_hosts(&self, scheme: &str) -> Option<&[String]> {
        self.matcher(scheme).map(DomainMatcher::patterns)
    }

    /// Apply the rename table, then try `https` before `http`.
    pub fn resolve_host(&self, host: &str) -> Option<ResolvedHost> {
        let host = self.rename(host);
        [Protocol::Https, Protocol::Http]
            .into_iter()
            .find(|scheme| self.is_allowed(scheme.as_str(), &host))
            .map(|scheme| ResolvedHost { host, scheme })
    }

    fn rename(&self, host: &str) -> String {
        let host = normalize_host(host);
        self.renames.get(&host).cloned().unwrap_or(host)
    }

    fn matcher(&self, scheme: &str) -> Option<&DomainMatcher> {
        self.matchers.get(&normalize_scheme(scheme))
    }
}
