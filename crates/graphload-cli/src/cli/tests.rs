use super::*;
use graphload_core::config::GraphLoadConfig;
use graphload_core::normalize::NormalizedData;
use graphload_core::{RequestDescriptor, Translator};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_translate() {
    match parse(&["graphload", "translate", "wikiapi:///?action=query"]).command {
        CliCommand::Translate { url, open, trusted } => {
            assert_eq!(url, "wikiapi:///?action=query");
            assert!(!open);
            assert!(!trusted);
        }
        _ => panic!("expected Translate"),
    }
}

#[test]
fn cli_parse_translate_open_trusted() {
    match parse(&["graphload", "translate", "--open", "--trusted", "wikititle:///X"]).command {
        CliCommand::Translate { open, trusted, .. } => {
            assert!(open);
            assert!(trusted);
        }
        _ => panic!("expected Translate"),
    }
}

#[test]
fn cli_parse_check_host() {
    match parse(&["graphload", "check-host", "geoshape", "maps.wikimedia.org"]).command {
        CliCommand::CheckHost { scheme, host } => {
            assert_eq!(scheme, "geoshape");
            assert_eq!(host, "maps.wikimedia.org");
        }
        _ => panic!("expected CheckHost"),
    }
}

#[test]
fn cli_parse_normalize_with_url() {
    match parse(&[
        "graphload",
        "normalize",
        "tabular",
        "payload.json",
        "--url",
        "https://commons.wikimedia.org/w/api.php",
    ])
    .command
    {
        CliCommand::Normalize {
            protocol,
            path,
            url,
        } => {
            assert_eq!(protocol, "tabular");
            assert_eq!(path, PathBuf::from("payload.json"));
            assert_eq!(url.as_deref(), Some("https://commons.wikimedia.org/w/api.php"));
        }
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_parse_global_flags_after_subcommand() {
    let cli = parse(&["graphload", "config", "--config", "/tmp/g.toml", "-v"]);
    assert!(matches!(cli.command, CliCommand::Config));
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/g.toml")));
    assert!(cli.verbose);
}

#[test]
fn cli_parse_rejects_missing_url() {
    assert!(Cli::try_parse_from(["graphload", "translate"]).is_err());
}

#[test]
fn describe_lists_headers_and_cors() {
    let safe = Translator::new(&GraphLoadConfig::default())
        .translate(&RequestDescriptor::fetch("wikidatasparql:///?query=ASK%7B%7D"))
        .unwrap();
    let text = commands::translate::describe(&safe);
    assert!(text.contains("protocol:  wikidatasparql"));
    assert!(text.contains("header:    Accept: application/sparql-results+json"));
    assert!(text.contains("cors:      no"));
}

#[test]
fn check_host_report() {
    let translator = Translator::new(&GraphLoadConfig::default());
    let allowlist = translator.allowlist();
    let ok = commands::check_host::report(allowlist, "geoshape", "maps.wikimedia.org");
    assert!(ok.starts_with("geoshape: maps.wikimedia.org allowed"));
    assert!(ok.contains("resolves to https://maps.wikimedia.org"));

    let denied = commands::check_host::report(allowlist, "geoshape", "evil.example");
    assert!(denied.contains("not allowed (allowed: maps.wikimedia.org)"));
    assert!(denied.contains("does not resolve"));

    let disabled = commands::check_host::report(allowlist, "ftp", "example.org");
    assert!(disabled.starts_with("ftp: disabled"));
}

#[test]
fn render_pretty_prints_json() {
    let value = serde_json::json!([{"a": 1}]);
    let rendered = commands::normalize::render(&NormalizedData::Json(value)).unwrap();
    assert_eq!(rendered, "[\n  {\n    \"a\": 1\n  }\n]");
    let text = commands::normalize::render(&NormalizedData::Text("raw".to_string())).unwrap();
    assert_eq!(text, "raw");
}
