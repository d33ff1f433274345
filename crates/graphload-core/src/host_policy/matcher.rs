//! Domain pattern matching.

use serde::{Deserialize, Serialize};

/// How a host is compared against a configured pattern.
///
/// `http`/`https` always use [`MatchPolicy::Subdomain`]; other schemes use
/// whatever the configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Host equals the pattern or is a subdomain of it.
    #[default]
    Subdomain,
    /// Host must equal the pattern.
    Exact,
}

/// Compiled matcher for one scheme's list of host patterns.
#[derive(Debug, Clone)]
pub struct DomainMatcher {
    /// Patterns as configured, in order.
    patterns: Vec<String>,
    /// Lowercased, without `*.` or trailing dot.
    normalized: Vec<String>,
    policy: MatchPolicy,
}

impl DomainMatcher {
    pub fn new(patterns: &[String], policy: MatchPolicy) -> Self {
        let normalized = patterns.iter().map(|p| normalize_pattern(p)).collect();
        Self {
            patterns: patterns.to_vec(),
            normalized,
            policy,
        }
    }

    pub fn matches(&self, host: &str) -> bool {
        let host = normalize_host(host);
        if host.is_empty() {
            return false;
        }
        self.normalized.iter().any(|pattern| match self.policy {
            MatchPolicy::Exact => host == *pattern,
            MatchPolicy::Subdomain => is_same_or_subdomain(&host, pattern),
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

fn is_same_or_subdomain(host: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    host == pattern
        || host
            .strip_suffix(pattern)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

pub(crate) fn normalize_host(host: &str) -> String {
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}

fn normalize_pattern(pattern: &str) -> String {
    let p = normalize_host(pattern);
    p.strip_prefix("*.").map(str::to_string).unwrap_or(p)
}
