use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::host_policy::MatchPolicy;

/// Global configuration loaded from `~/.config/graphload/config.toml`.
///
/// Immutable once loaded; the host allowlist is compiled from it once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLoadConfig {
    /// Allow graphs to fetch raw `http`/`https` URLs (still host-checked).
    #[serde(default)]
    pub trusted: bool,
    /// Host used when a graph URL omits one (the wiki the graph lives on).
    pub default_host: String,
    /// Interface language passed to tabular data requests.
    #[serde(default)]
    pub language: Option<String>,
    /// How non-http schemes match their allowlists.
    #[serde(default)]
    pub custom_scheme_matching: MatchPolicy,
    /// Permitted host patterns per scheme ("https", "geoshape:", ...).
    #[serde(default)]
    pub domains: BTreeMap<String, Vec<String>>,
    /// Alias host -> canonical host, applied before validation.
    #[serde(default)]
    pub domain_map: BTreeMap<String, String>,
}

impl Default for GraphLoadConfig {
    fn default() -> Self {
        let mut domains = BTreeMap::new();
        domains.insert(
            "https".to_string(),
            vec![
                "wikipedia.org".to_string(),
                "wikimedia.org".to_string(),
                "wikidata.org".to_string(),
                "mediawiki.org".to_string(),
            ],
        );
        domains.insert(
            "wikirawupload".to_string(),
            vec!["upload.wikimedia.org".to_string()],
        );
        domains.insert(
            "wikidatasparql".to_string(),
            vec!["query.wikidata.org".to_string()],
        );
        domains.insert(
            "geoshape".to_string(),
            vec!["maps.wikimedia.org".to_string()],
        );
        domains.insert(
            "tabular".to_string(),
            vec!["commons.wikimedia.org".to_string()],
        );

        Self {
            trusted: false,
            default_host: "en.wikipedia.org".to_string(),
            language: None,
            custom_scheme_matching: MatchPolicy::default(),
            domains,
            domain_map: BTreeMap::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("graphload")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GraphLoadConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GraphLoadConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<GraphLoadConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: GraphLoadConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;
    Ok(cfg)
}
