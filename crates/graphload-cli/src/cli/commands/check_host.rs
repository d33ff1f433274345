//! `graphload check-host <scheme> <host>` – query the allowlist.

use anyhow::Result;
use graphload_core::config::GraphLoadConfig;
use graphload_core::host_policy::HostAllowlist;
use graphload_core::Translator;

pub fn run_check_host(cfg: &GraphLoadConfig, scheme: &str, host: &str) -> Result<()> {
    let translator = Translator::new(cfg);
    print!("{}", report(translator.allowlist(), scheme, host));
    Ok(())
}

pub(crate) fn report(allowlist: &HostAllowlist, scheme: &str, host: &str) -> String {
    let verdict = match allowlist.allowed_hosts(scheme) {
        None => format!("{scheme}: disabled (no hosts configured)"),
        Some(_) if allowlist.is_allowed(scheme, host) => format!("{scheme}: {host} allowed"),
        Some(hosts) => format!(
            "{scheme}: {host} not allowed (allowed: {})",
            hosts.join(", ")
        ),
    };
    let resolved = match allowlist.resolve_host(host) {
        Some(r) => format!("resolves to {}://{}", r.scheme, r.host),
        None => "does not resolve to an allowlisted http/https host".to_string(),
    };
    format!("{verdict}\n{host} {resolved}\n")
}
