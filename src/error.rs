use std::path::PathBuf;

use thiserror::Error;

/// Reasons a report file could not be turned into a valid [`Report`](crate::model::report_model::Report).
///
/// None of these escape [`parse_report_file`](crate::parse::parse_report_file); they end up as
/// `valid_run = false` on the returned report. Use
/// [`try_parse_report_file`](crate::parse::try_parse_report_file) to inspect them directly.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The path has no file name component to derive metadata from.
    #[error("no file name in path '{}'", path.display())]
    MissingFileName { path: PathBuf },

    /// The report file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file is not valid UTF-8.
    #[error("'{}' is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
