use std::path::PathBuf;

use clap::Parser;
use cucumber_report::cli::commands::{EXAMPLE_HTML, NoReportsFound, load_reports};
use cucumber_report::cli::config::{
    AppConfig, Cli, Environment, OutputFormat, load_config, resolve_format, resolve_search_dir,
};
use cucumber_report::model::report_model::RunField;
use cucumber_report::parse_document;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_minimal() {
    let cli = Cli::parse_from(["cucumber-report"]);
    assert_eq!(cli.file, None);
    assert_eq!(cli.env, Environment::Dev);
    assert_eq!(cli.dir, None);
    assert_eq!(cli.format, None);
    assert!(!cli.debug);
    assert!(cli.fields.is_empty());
}

#[test]
fn cli_parse_all_args() {
    let cli = Cli::parse_from([
        "cucumber-report",
        "prod-20252008-1012",
        "--env",
        "prod",
        "--dir",
        "/tmp/reports",
        "--format",
        "json",
        "--debug",
        "--field",
        "duration",
        "--field",
        "steps_failed",
        "--config",
        "custom.yaml",
    ]);
    assert_eq!(cli.file.as_deref(), Some("prod-20252008-1012"));
    assert_eq!(cli.env, Environment::Prod);
    assert_eq!(cli.dir.as_deref(), Some("/tmp/reports"));
    assert_eq!(cli.format, Some(OutputFormat::Json));
    assert!(cli.debug);
    assert_eq!(cli.fields, vec![RunField::Duration, RunField::StepsFailed]);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
}

#[test]
fn cli_rejects_unknown_field() {
    let result = Cli::try_parse_from(["cucumber-report", "x", "--field", "colour"]);
    assert!(result.is_err());
}

#[test]
fn cli_rejects_unknown_format() {
    let result = Cli::try_parse_from(["cucumber-report", "x", "--format", "xml"]);
    assert!(result.is_err());
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn config_load_missing_file() {
    let config = load_config(Some("nonexistent_file_that_does_not_exist.yaml"));
    assert_eq!(config.directories.archive_dir, "archive");
    assert_eq!(config.output.format, OutputFormat::Text);
}

#[test]
fn config_default_values() {
    let config = AppConfig::default();
    assert_eq!(config.directories.dev_base_dir, "C:/Dev-Ruby/TestReports/PRAPay-UK/");
    assert_eq!(config.directories.prod_base_dir, "//TestReports/PRAPay-UK/");
    assert_eq!(config.directories.archive_dir, "archive");
    assert_eq!(config.output.format, OutputFormat::Text);
}

#[test]
fn config_partial_yaml_fills_defaults() {
    let yaml = "directories:\n  prod_base_dir: /mnt/reports\noutput:\n  format: json\n";
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.directories.prod_base_dir, "/mnt/reports");
    assert_eq!(config.directories.archive_dir, "archive");
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn config_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cucumber-report.yaml");
    std::fs::write(&path, "directories:\n  dev_base_dir: /home/dev/reports\n  archive_dir: old\n").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.directories.dev_base_dir, "/home/dev/reports");
    assert_eq!(config.directories.archive_dir, "old");
}

#[test]
fn config_malformed_yaml_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "directories: [not, a, map").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.directories.archive_dir, "archive");
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn search_dir_prefers_cli_dir() {
    let config = AppConfig::default();
    assert_eq!(
        resolve_search_dir(Some("/custom"), Environment::Prod, &config),
        PathBuf::from("/custom")
    );
}

#[test]
fn search_dir_uses_environment_archive() {
    let config = AppConfig::default();
    assert_eq!(
        resolve_search_dir(None, Environment::Prod, &config),
        PathBuf::from("//TestReports/PRAPay-UK/").join("archive")
    );
    assert_eq!(
        resolve_search_dir(None, Environment::Dev, &config),
        PathBuf::from("C:/Dev-Ruby/TestReports/PRAPay-UK/").join("archive")
    );
}

#[test]
fn format_cli_overrides_config() {
    let mut config = AppConfig::default();
    config.output.format = OutputFormat::Json;
    assert_eq!(resolve_format(None, &config), OutputFormat::Json);
    assert_eq!(resolve_format(Some(OutputFormat::Text), &config), OutputFormat::Text);
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn example_document_parses_summary() {
    let report = parse_document(EXAMPLE_HTML);
    assert_eq!(report.duration.as_deref(), Some("9m15.076s seconds"));
    assert_eq!(report.scenarios.total, 8);
    assert_eq!(report.scenarios.failed, 2);
    assert_eq!(report.steps.total, 104);
    assert_eq!(report.steps.passed, 98);
    assert!(report.features.is_empty());
}

#[test]
fn load_reports_base_and_retest() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("uk-20250101-0930.htm"), "<html></html>").unwrap();
    std::fs::write(dir.path().join("uk-20250101-0930(retest).htm"), "<html></html>").unwrap();

    let reports = load_reports("uk-20250101-0930", Some(dir.path()), false).unwrap();
    let keys: Vec<&str> = reports.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["base", "retest"]);
    assert!(!reports["base"].metadata.retest);
    assert!(reports["retest"].metadata.retest);
}

#[test]
fn load_reports_nothing_found() {
    let dir = tempfile::tempdir().unwrap();
    let err: NoReportsFound = load_reports("absent", Some(dir.path()), false).unwrap_err();
    assert_eq!(err.basename, "absent");
    assert!(err.to_string().contains("absent.htm or absent(retest).htm"));
}
