pub mod constants;
pub mod dom;
pub mod file_reader;
pub mod metadata;
pub mod summary;
pub mod text;
pub mod walker;

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use tracing::{debug, warn};

use crate::error::ReportError;
use crate::model::report_model::Report;
use crate::parse::file_reader::{FileReader, FsFileReader};
use crate::parse::metadata::parse_filename_metadata;
use crate::parse::walker::walk_document;

static FEATURE_DIV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div[^>]*class="[^"]*feature[^"]*"[^>]*>"#).expect("static regex must compile")
});

/// Parse Cucumber HTML text into a report. No I/O; metadata stays at its defaults.
pub fn parse_document(html: &str) -> Report {
    let doc = Html::parse_document(html);
    walk_document(&doc)
}

/// Parse a report file from disk.
///
/// Never fails: if the file name or content cannot be used, the returned report
/// carries `valid_run = false` and whatever metadata was already derived.
pub fn parse_report_file(path: impl AsRef<Path>, debug: bool) -> Report {
    parse_report_file_with(path.as_ref(), debug, &FsFileReader)
}

pub fn parse_report_file_with(path: &Path, debug: bool, reader: &dyn FileReader) -> Report {
    let metadata = match parse_filename_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!(error = %e, "could not derive report metadata");
            return Report {
                valid_run: false,
                ..Report::default()
            };
        }
    };

    match read_content(path, reader) {
        Ok(content) => {
            let parsed = parse_content(&content, debug);
            Report {
                metadata,
                ..parsed
            }
        }
        Err(e) => {
            warn!(error = %e, "could not read report content");
            Report {
                valid_run: false,
                ..Report::with_metadata(metadata)
            }
        }
    }
}

/// Like [`parse_report_file_with`], but hands back the reason instead of an invalid report.
pub fn try_parse_report_file(path: &Path, debug: bool, reader: &dyn FileReader) -> Result<Report, ReportError> {
    let metadata = parse_filename_metadata(path)?;
    let content = read_content(path, reader)?;
    Ok(Report {
        metadata,
        ..parse_content(&content, debug)
    })
}

fn read_content(path: &Path, reader: &dyn FileReader) -> Result<String, ReportError> {
    let bytes = reader.read(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| ReportError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_content(content: &str, debug: bool) -> Report {
    if debug {
        let feature_divs: Vec<&str> = FEATURE_DIV_RE.find_iter(content).map(|m| m.as_str()).collect();
        debug!(bytes = content.len(), feature_divs = feature_divs.len(), "read report content");
        if let Some(first) = feature_divs.first() {
            debug!(first_feature_div = %first);
        }
    }

    let report = parse_document(content);

    if debug {
        debug!(features = report.features.len(), "parsed report");
        for (i, feature) in report.features.iter().enumerate() {
            debug!("feature {}: '{}' with {} scenario(s)", i + 1, feature.name, feature.scenarios.len());
            for (j, scenario) in feature.scenarios.iter().enumerate() {
                debug!(
                    "  scenario {}: '{}' (id: {})",
                    j + 1,
                    scenario.name().unwrap_or_default(),
                    scenario.id().unwrap_or_default()
                );
            }
        }
    }

    report
}
