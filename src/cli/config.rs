use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::model::report_model::RunField;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "cucumber-report",
    version,
    about = "Parse Cucumber HTML test reports and extract run metrics"
)]
pub struct Cli {
    /// Report file or basename (e.g. prod-20252008-1012). Omit to parse built-in example data.
    pub file: Option<String>,

    /// Environment whose archive directory is searched
    #[arg(long, value_enum, default_value_t = Environment::Dev)]
    pub env: Environment,

    /// Directory to search for report files (overrides --env)
    #[arg(long)]
    pub dir: Option<String>,

    /// Output format (default: from config, else text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log parsing diagnostics to stderr
    #[arg(long)]
    pub debug: bool,

    /// Only print these run fields (repeatable)
    #[arg(long = "field", value_enum)]
    pub fields: Vec<RunField>,

    /// Path to config file (default: cucumber-report.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Dev,
    Prod,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `cucumber-report.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub directories: DirectoryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_dev_base_dir")]
    pub dev_base_dir: String,

    #[serde(default = "default_prod_base_dir")]
    pub prod_base_dir: String,

    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            dev_base_dir: default_dev_base_dir(),
            prod_base_dir: default_prod_base_dir(),
            archive_dir: default_archive_dir(),
        }
    }
}

impl DirectoryConfig {
    pub fn base_dir(&self, env: Environment) -> &str {
        match env {
            Environment::Dev => &self.dev_base_dir,
            Environment::Prod => &self.prod_base_dir,
        }
    }

    pub fn archive_path(&self, env: Environment) -> PathBuf {
        Path::new(self.base_dir(env)).join(&self.archive_dir)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

// Serde default helpers
fn default_dev_base_dir() -> String { "C:/Dev-Ruby/TestReports/PRAPay-UK/".to_string() }
fn default_prod_base_dir() -> String { "//TestReports/PRAPay-UK/".to_string() }
fn default_archive_dir() -> String { "archive".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("cucumber-report.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution (CLI > config > defaults)
// ============================================================================

/// Directory to search: `--dir` when given, otherwise the environment's archive.
pub fn resolve_search_dir(cli_dir: Option<&str>, env: Environment, config: &AppConfig) -> PathBuf {
    match cli_dir {
        Some(dir) => PathBuf::from(dir),
        None => config.directories.archive_path(env),
    }
}

pub fn resolve_format(cli_format: Option<OutputFormat>, config: &AppConfig) -> OutputFormat {
    cli_format.unwrap_or(config.output.format)
}
