use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::report_model::{Report, ReportProjection, RunField};

// ============================================================================
// JSON reporter
// ============================================================================

/// Pretty-printed JSON keyed by report name (`base`, `retest`, `example`).
///
/// Without `fields` each value is the full `{"run", "features"}` projection; with
/// `fields` it is a flat object of just those run fields, in the order requested.
pub fn format_json_reports(
    reports: &BTreeMap<String, Report>,
    fields: &[RunField],
) -> Result<String, serde_json::Error> {
    if fields.is_empty() {
        let projections: BTreeMap<&str, ReportProjection<'_>> = reports
            .iter()
            .map(|(key, report)| (key.as_str(), report.to_projection()))
            .collect();
        serde_json::to_string_pretty(&projections)
    } else {
        let selected: BTreeMap<&str, SelectedFields<'_>> = reports
            .iter()
            .map(|(key, report)| (key.as_str(), SelectedFields { report, fields }))
            .collect();
        serde_json::to_string_pretty(&selected)
    }
}

struct SelectedFields<'a> {
    report: &'a Report,
    fields: &'a [RunField],
}

impl Serialize for SelectedFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in self.fields {
            map.serialize_entry(field.name(), &self.report.field(*field))?;
        }
        map.end()
    }
}
