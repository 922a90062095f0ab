use std::collections::BTreeMap;

use serde_json::Value;

use crate::model::report_model::{Report, RunField};

// ============================================================================
// Text reporter, human-readable terminal output
// ============================================================================

/// Format one or more keyed reports as plain text.
///
/// With `fields`, each report prints only `field: value` lines. Otherwise it prints
/// the run block followed by every feature, scenario and step. A banner separates
/// reports when there is more than one.
pub fn format_text_reports(reports: &BTreeMap<String, Report>, fields: &[RunField]) -> String {
    let mut out = String::new();
    let banner = reports.len() > 1;

    for (key, report) in reports {
        if banner {
            let rule = "=".repeat(60);
            out.push_str(&format!("{}\n=== {} REPORT ===\n{}\n", rule, key.to_uppercase(), rule));
        }

        if fields.is_empty() {
            out.push_str(&format_text_report(report));
        } else {
            for field in fields {
                out.push_str(&format!("{}: {}\n", field.name(), display_value(&report.field(*field))));
            }
        }

        if banner {
            out.push('\n');
        }
    }

    out
}

/// Full text rendering of a single report.
pub fn format_text_report(report: &Report) -> String {
    let mut out = String::new();
    let meta = &report.metadata;

    out.push_str("\n--- RUN DATA ---\n");
    out.push_str(&format!("  Region: {}\n", opt(&meta.region)));
    out.push_str(&format!("  Run Date: {}\n", opt(&meta.run_date)));
    out.push_str(&format!("  Run Time: {}\n", opt(&meta.run_time)));
    out.push_str(&format!("  Retest: {}\n", meta.retest));
    out.push_str(&format!("  Report File Name: {}\n", opt(&meta.report_file_name)));
    out.push_str(&format!("  Valid Run: {}\n", report.valid_run));
    out.push_str(&format!("  Duration: {}\n", opt(&report.duration)));
    out.push_str(&format!(
        "  Scenarios: {} total, {} passed, {} failed\n",
        report.scenarios.total, report.scenarios.passed, report.scenarios.failed
    ));
    out.push_str(&format!(
        "  Steps: {} total, {} passed, {} failed\n",
        report.steps.total, report.steps.passed, report.steps.failed
    ));

    out.push_str(&format!("\n--- FEATURES ({}) ---\n", report.features.len()));
    if report.features.is_empty() {
        out.push_str("  No features found\n");
        return out;
    }

    for (i, feature) in report.features.iter().enumerate() {
        out.push_str(&format!("\n  Feature {}:\n", i + 1));
        out.push_str(&format!("    Name: {}\n", feature.name));
        out.push_str(&format!("    Scenarios: {}\n", feature.scenarios.len()));

        for (j, scenario) in feature.scenarios.iter().enumerate() {
            out.push_str(&format!("\n    Scenario {}:\n", j + 1));
            out.push_str(&format!("      ID: {}\n", scenario.id().unwrap_or_default()));
            out.push_str(&format!("      Name: {}\n", scenario.name().unwrap_or_default()));
            out.push_str(&format!("      Tag: {}\n", scenario.tag().unwrap_or_default()));
            out.push_str(&format!("      Status: {}\n", scenario.status()));
            out.push_str(&format!("      File: {}\n", scenario.file().unwrap_or_default()));
            out.push_str(&format!("      Steps: {}\n", scenario.steps().len()));

            for (k, step) in scenario.steps().iter().enumerate() {
                out.push_str(&format!("        Step {}:\n", k + 1));
                out.push_str(&format!("          Name: {}\n", opt(&step.name)));
                out.push_str(&format!(
                    "          Status: {}\n",
                    step.status.map(|s| s.as_str()).unwrap_or_default()
                ));
                out.push_str(&format!("          File: {}\n", opt(&step.file)));
            }
        }
    }

    out
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// Strings without quotes, null as empty.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
