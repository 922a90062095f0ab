#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use cucumber_report::parse::file_reader::FileReader;

// =========================================================================
// Fixtures
// =========================================================================

pub const SAMPLE_REPORT: &str = "prod-20252008-1012.htm";

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_html(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture should be readable")
}

// =========================================================================
// HTML builders
// =========================================================================

pub fn step_li(class: &str, keyword: Option<&str>, value: Option<&str>, file: Option<&str>) -> String {
    let mut name = String::new();
    if let Some(k) = keyword {
        name.push_str(&format!(r#"<span class="keyword">{} </span>"#, k));
    }
    if let Some(v) = value {
        name.push_str(&format!(r#"<span class="step val">{}</span>"#, v));
    }
    let file = file
        .map(|f| format!(r#"<div class="step_file"><span>{}</span></div>"#, f))
        .unwrap_or_default();
    format!(
        r#"<li class="{}"><div class="step_name">{}</div>{}</li>"#,
        class, name, file
    )
}

pub fn scenario_div(id: &str, title: &str, steps: &[String]) -> String {
    format!(
        r#"<div class="scenario"><h3 id="{}"><span class="val">{}</span></h3><ol>{}</ol></div>"#,
        id,
        title,
        steps.concat()
    )
}

pub fn feature_div(title: Option<&str>, scenarios: &[String]) -> String {
    let heading = title
        .map(|t| format!(r#"<h2><span class="val">{}</span></h2>"#, t))
        .unwrap_or_default();
    format!(r#"<div class="feature">{}{}</div>"#, heading, scenarios.concat())
}

pub fn document(body: &str) -> String {
    format!("<html><head></head><body>{}</body></html>", body)
}

pub fn inner_html_script(id: &str, fragment: &str) -> String {
    format!(
        r#"<script type="text/javascript">document.getElementById('{}').innerHTML = "{}";</script>"#,
        id, fragment
    )
}

// =========================================================================
// In-memory file reader
// =========================================================================

#[derive(Default)]
pub struct MemoryReader {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryReader {
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl FileReader for MemoryReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}
