//! `graphload translate <url>` – show the safe request for a graph URL.

use anyhow::Result;
use graphload_core::config::GraphLoadConfig;
use graphload_core::{RequestDescriptor, SafeRequest, Translator};

pub fn run_translate(cfg: &GraphLoadConfig, url: &str, open: bool, trusted: bool) -> Result<()> {
    let mut cfg = cfg.clone();
    cfg.trusted |= trusted;
    let descriptor = if open {
        RequestDescriptor::open(url)
    } else {
        RequestDescriptor::fetch(url)
    };
    let safe = Translator::new(&cfg).translate(&descriptor)?;
    print!("{}", describe(&safe));
    Ok(())
}

pub(crate) fn describe(safe: &SafeRequest) -> String {
    let mut out = format!("url:       {}\nprotocol:  {}\n", safe.url, safe.protocol);
    for (name, value) in &safe.headers {
        out.push_str(&format!("header:    {name}: {value}\n"));
    }
    let cors = if safe.add_cors_origin { "yes" } else { "no" };
    out.push_str(&format!("cors:      {cors}\n"));
    out
}
