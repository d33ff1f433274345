//! The closed set of pseudo-schemes a graph may use to request data.

use std::fmt;
use std::str::FromStr;

/// A recognised graph data protocol.
///
/// Translation and normalization both dispatch on this enum, so adding a
/// protocol forces every handler to account for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    Https,
    /// MediaWiki action API of the current wiki.
    WikiApi,
    /// MediaWiki REST API (`/api/...`).
    WikiRest,
    /// Raw wikitext content of a page.
    WikiRaw,
    /// Rows of a tabular dataset page.
    Tabular,
    /// Metadata of a tabular dataset page.
    TabularInfo,
    /// File by name, via the file redirect special page.
    WikiFile,
    /// Raw file from the upload servers.
    WikiRawUpload,
    WikidataSparql,
    Geoshape,
    Geoline,
    MapSnapshot,
    /// Page title; only meaningful for the open action.
    WikiTitle,
}

impl Protocol {
    pub const ALL: [Protocol; 14] = [
        Protocol::Http,
        Protocol::Https,
        Protocol::WikiApi,
        Protocol::WikiRest,
        Protocol::WikiRaw,
        Protocol::Tabular,
        Protocol::TabularInfo,
        Protocol::WikiFile,
        Protocol::WikiRawUpload,
        Protocol::WikidataSparql,
        Protocol::Geoshape,
        Protocol::Geoline,
        Protocol::MapSnapshot,
        Protocol::WikiTitle,
    ];

    /// Scheme name without the trailing colon.
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
            Protocol::WikiApi => "wikiapi",
            Protocol::WikiRest => "wikirest",
            Protocol::WikiRaw => "wikiraw",
            Protocol::Tabular => "tabular",
            Protocol::TabularInfo => "tabularinfo",
            Protocol::WikiFile => "wikifile",
            Protocol::WikiRawUpload => "wikirawupload",
            Protocol::WikidataSparql => "wikidatasparql",
            Protocol::Geoshape => "geoshape",
            Protocol::Geoline => "geoline",
            Protocol::MapSnapshot => "mapsnapshot",
            Protocol::WikiTitle => "wikititle",
        }
    }

    /// True for the two real transport schemes.
    pub fn is_transport(self) -> bool {
        matches!(self, Protocol::Http | Protocol::Https)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a scheme is not one of the known protocols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScheme(pub String);

impl FromStr for Protocol {
    type Err = UnknownScheme;

    /// Accepts the scheme with or without a trailing colon, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_scheme(s);
        Protocol::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| UnknownScheme(name))
    }
}

/// Lowercases a scheme and strips one trailing colon.
pub fn normalize_scheme(scheme: &str) -> String {
    let trimmed = scheme.trim();
    trimmed
        .strip_suffix(':')
        .unwrap_or(trimmed)
        .to_ascii_lowercase()
}
