use clap::Parser;
use near_miss::config::{Config, OutputFormat};
use std::str::FromStr;
use std::time::Duration;
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> Result<Config, clap::Error> {
    let mut full = vec!["near-miss"];
    full.extend_from_slice(args);
    TestCli::try_parse_from(full).map(|cli| cli.config)
}

#[test]
fn test_defaults_prompt_for_everything() {
    let config = parse(&[]).unwrap();
    assert_eq!(config.search.exponent, None);
    assert_eq!(config.search.limit, None);
    assert_eq!(config.search.max_duration(), None);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(!config.output.no_pause);
}

#[test]
fn test_all_flags() {
    let config = parse(&[
        "-n", "5", "-k", "200", "-T", "30", "--format", "json", "--no-pause",
    ])
    .unwrap();
    assert_eq!(config.search.exponent, Some(5));
    assert_eq!(config.search.limit, Some(200));
    assert_eq!(config.search.max_duration(), Some(Duration::from_secs(30)));
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.no_pause);
}

#[test]
fn test_flag_bounds_match_prompts() {
    assert!(parse(&["--exponent", "3"]).is_ok());
    assert!(parse(&["--exponent", "11"]).is_ok());
    assert!(parse(&["--exponent", "2"]).is_err());
    assert!(parse(&["--exponent", "12"]).is_err());
    assert!(parse(&["--limit", "11"]).is_ok());
    assert!(parse(&["--limit", "10"]).is_err());
    assert!(parse(&["--limit", "ten"]).is_err());
}

#[test]
fn test_flag_error_uses_retry_text() {
    let err = parse(&["--exponent", "12"]).unwrap_err().to_string();
    assert!(err.contains("n must be between 3 and 11"), "{}", err);
}

#[test]
fn test_output_format_names() {
    let names: Vec<String> = OutputFormat::iter().map(|f| f.to_string()).collect();
    assert_eq!(names, vec!["text", "table", "json"]);
    for f in OutputFormat::iter() {
        assert_eq!(OutputFormat::from_str(&f.to_string()).unwrap(), f);
    }
    assert!(OutputFormat::Text.is_interactive());
    assert!(!OutputFormat::Json.is_interactive());
}

#[test]
fn test_json_format_requires_both_values() {
    assert!(parse(&["--format", "json"]).is_err());
    assert!(parse(&["--format", "json", "-n", "3"]).is_err());
    assert!(parse(&["--format", "json", "-k", "20"]).is_err());
    assert!(parse(&["--format", "json", "-n", "3", "-k", "20"]).is_ok());
    assert!(parse(&["--format", "table"]).is_ok());
}
