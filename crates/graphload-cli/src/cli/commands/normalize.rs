//! `graphload normalize <protocol> <file>` – unwrap a saved payload.

use anyhow::{Context, Result};
use graphload_core::normalize::{self, NormalizedData};
use graphload_core::Protocol;
use std::fs;
use std::path::Path;

pub fn run_normalize(protocol: &str, path: &Path, url: Option<&str>) -> Result<()> {
    let protocol: Protocol = protocol
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown protocol: {protocol}"))?;
    let payload = fs::read_to_string(path)
        .with_context(|| format!("read payload: {}", path.display()))?;
    let url = url.map(str::to_string).unwrap_or_else(|| path.display().to_string());

    let data = normalize::normalize(&payload, protocol, &url)?;
    println!("{}", render(&data)?);
    Ok(())
}

pub(crate) fn render(data: &NormalizedData) -> Result<String> {
    Ok(match data {
        NormalizedData::Json(value) => {
            serde_json::to_string_pretty(value).context("serialize normalized data")?
        }
        NormalizedData::Text(text) => text.clone(),
    })
}

