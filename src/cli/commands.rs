use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cli::config::{AppConfig, Cli, OutputFormat, resolve_format, resolve_search_dir};
use crate::model::report_model::{Report, RunField};
use crate::parse::file_reader::FsFileReader;
use crate::parse::metadata::find_related_files;
use crate::parse::{parse_document, parse_report_file};
use crate::report::console::format_text_reports;
use crate::report::json::format_json_reports;

/// Summary-only document parsed when no file is given.
pub const EXAMPLE_HTML: &str = r#"
<div id="summary">
    <p id="totals">8 scenarios (2 failed, 6 passed)<br>104 steps (2 failed, 4 skipped, 98 passed)</p>
    <p id="duration">Finished in <strong>9m15.076s seconds</strong></p>
</div>
"#;

/// Neither `<basename>.htm` nor `<basename>(retest).htm` exists.
#[derive(Debug)]
pub struct NoReportsFound {
    pub basename: String,
    pub search_dir: Option<PathBuf>,
}

impl fmt::Display for NoReportsFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No files found for '{}'", self.basename)?;
        if let Some(dir) = &self.search_dir {
            write!(f, "\n  Searched in: {}", dir.display())?;
        }
        write!(
            f,
            "\n  Looking for: {0}.htm or {0}(retest).htm",
            self.basename
        )
    }
}

impl std::error::Error for NoReportsFound {}

// ============================================================================
// parse command
// ============================================================================

/// Parse the requested report(s) and print them.
pub fn cmd_parse(cli: &Cli, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let format = resolve_format(cli.format, config);

    let Some(file) = cli.file.as_deref() else {
        eprintln!("No file provided. Running with example data...\n");
        let mut reports = BTreeMap::new();
        reports.insert("example".to_string(), parse_document(EXAMPLE_HTML));
        return print_reports(&reports, format, &cli.fields);
    };

    let search_dir = match cli.dir.as_deref() {
        Some(dir) => {
            eprintln!("Using custom directory: {}", dir);
            resolve_search_dir(Some(dir), cli.env, config)
        }
        None => {
            let dir = resolve_search_dir(None, cli.env, config);
            eprintln!("Using {} environment", cli.env.as_str().to_uppercase());
            eprintln!("Archive directory: {}", dir.display());
            dir
        }
    };
    let search_dir = existing_dir(search_dir);

    let reports = load_reports(file, search_dir.as_deref(), cli.debug)?;
    print_reports(&reports, format, &cli.fields)
}

/// Parse the base and retest reports for `basename`, keyed `base` / `retest`.
pub fn load_reports(
    basename: &str,
    search_dir: Option<&Path>,
    debug: bool,
) -> Result<BTreeMap<String, Report>, NoReportsFound> {
    let related = find_related_files(basename, search_dir, &FsFileReader);
    if related.is_empty() {
        return Err(NoReportsFound {
            basename: basename.to_string(),
            search_dir: search_dir.map(Path::to_path_buf),
        });
    }

    let mut reports = BTreeMap::new();
    for (key, path) in [("base", related.base), ("retest", related.retest)] {
        let Some(path) = path else { continue };
        let display_path = path.display().to_string().replace('\\', "/");
        eprintln!("Parsing {} file: {}", key, display_path);

        let report = parse_report_file(&path, debug);
        if !report.valid_run {
            eprintln!("  Warning: could not parse {}", display_path);
        }
        reports.insert(key.to_string(), report);
    }
    eprintln!();

    Ok(reports)
}

/// Render reports in `format` and write them to stdout.
pub fn print_reports(
    reports: &BTreeMap<String, Report>,
    format: OutputFormat,
    fields: &[RunField],
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => println!("{}", format_json_reports(reports, fields)?),
        OutputFormat::Text => print!("{}", format_text_reports(reports, fields)),
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Fall back to the current directory when the search directory is missing.
fn existing_dir(dir: PathBuf) -> Option<PathBuf> {
    if dir.is_dir() {
        eprintln!();
        Some(dir)
    } else {
        eprintln!("Warning: Directory does not exist: {}", dir.display());
        eprintln!("Searching in current directory instead.\n");
        None
    }
}

