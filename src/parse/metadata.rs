use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::model::report_model::ReportMetadata;
use crate::parse::constants::{
    FILE_EXTENSION_HTM, FILE_EXTENSION_HTML, FILE_SUFFIX_RETEST, FILENAME_SEPARATOR,
};
use crate::parse::file_reader::FileReader;

// ============================================================================
// Filename metadata
// ============================================================================

/// Derive provenance from a report file name of the form `region-YYYYDDMM-HHmm[(retest)].htm`.
///
/// Names with fewer than three dash-separated parts keep region, date and time unset.
pub fn parse_filename_metadata(path: &Path) -> Result<ReportMetadata, ReportError> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ReportError::MissingFileName {
            path: path.to_path_buf(),
        })?;

    let retest = filename.contains(FILE_SUFFIX_RETEST);
    let basename = strip_extension(&filename);
    let unmarked = basename.replace(FILE_SUFFIX_RETEST, "");
    let parts: Vec<&str> = unmarked.split(FILENAME_SEPARATOR).collect();

    let mut metadata = ReportMetadata {
        retest,
        report_file_name: Some(basename.to_string()),
        ..ReportMetadata::default()
    };

    if let [region, run_date, run_time, ..] = parts.as_slice() {
        metadata.region = Some(region.to_string());
        metadata.run_date = Some(run_date.to_string());
        metadata.run_time = Some(run_time.to_string());
    }

    Ok(metadata)
}

fn strip_extension(filename: &str) -> &str {
    filename
        .strip_suffix(FILE_EXTENSION_HTML)
        .or_else(|| filename.strip_suffix(FILE_EXTENSION_HTM))
        .unwrap_or(filename)
}

// ============================================================================
// Related files (base + retest)
// ============================================================================

/// The base report and its retest sibling, each present only if it exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedFiles {
    pub base: Option<PathBuf>,
    pub retest: Option<PathBuf>,
}

impl RelatedFiles {
    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.retest.is_none()
    }
}

/// Look for `<basename>.htm` and `<basename>(retest).htm`, optionally inside `search_dir`.
pub fn find_related_files(
    basename: &str,
    search_dir: Option<&Path>,
    reader: &dyn FileReader,
) -> RelatedFiles {
    let basename = basename.strip_suffix(FILE_EXTENSION_HTM).unwrap_or(basename);

    let base_name = format!("{}{}", basename, FILE_EXTENSION_HTM);
    let retest_name = format!("{}{}{}", basename, FILE_SUFFIX_RETEST, FILE_EXTENSION_HTM);

    let locate = |name: String| -> Option<PathBuf> {
        let path = match search_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        };
        reader.exists(&path).then_some(path)
    };

    RelatedFiles {
        base: locate(base_name),
        retest: locate(retest_name),
    }
}
