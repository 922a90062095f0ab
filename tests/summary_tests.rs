use cucumber_report::Tally;
use cucumber_report::parse::summary::{
    RunSummary, TotalsText, duration_from_fragment, extract_summary, parse_totals_text,
};
use scraper::Html;

use crate::common::{document, inner_html_script};

mod common;

fn summary_of(body: &str) -> RunSummary {
    extract_summary(&Html::parse_document(&document(body)))
}

// =========================================================================
// Totals text
// =========================================================================

#[test]
fn totals_scenarios_line() {
    let totals = parse_totals_text("8 scenarios (2 failed, 6 passed)");
    assert_eq!(
        totals.scenarios,
        Some(Tally { total: 8, passed: 6, failed: 2 })
    );
    assert_eq!(totals.steps, None);
}

#[test]
fn totals_steps_line_ignores_skipped() {
    let totals = parse_totals_text("104 steps (2 failed, 4 skipped, 98 passed)");
    assert_eq!(
        totals.steps,
        Some(Tally { total: 104, passed: 98, failed: 2 })
    );
    assert_eq!(totals.scenarios, None);
}

#[test]
fn totals_singular_units_and_case() {
    let totals = parse_totals_text("1 Scenario (1 passed)\n4 STEPS (4 passed)");
    assert_eq!(totals.scenarios, Some(Tally { total: 1, passed: 1, failed: 0 }));
    assert_eq!(totals.steps, Some(Tally { total: 4, passed: 4, failed: 0 }));
}

#[test]
fn totals_without_match_is_empty() {
    assert_eq!(parse_totals_text("0 scenarios"), TotalsText::default());
}

#[test]
fn apply_totals_keeps_unmatched_unit() {
    let mut summary = RunSummary {
        steps: Tally { total: 5, passed: 5, failed: 0 },
        ..RunSummary::default()
    };
    summary.apply_totals(parse_totals_text("2 scenarios (2 passed)"));

    assert_eq!(summary.scenarios, Tally { total: 2, passed: 2, failed: 0 });
    assert_eq!(summary.steps, Tally { total: 5, passed: 5, failed: 0 });
}

// =========================================================================
// Duration fragment
// =========================================================================

#[test]
fn duration_strips_seconds_suffix() {
    assert_eq!(
        duration_from_fragment("Finished in <strong>9m15.076s seconds</strong>").as_deref(),
        Some("9m15.076s")
    );
}

#[test]
fn duration_without_suffix_kept() {
    assert_eq!(
        duration_from_fragment("Finished in <strong> 0m0.005s </strong>").as_deref(),
        Some("0m0.005s")
    );
}

// =========================================================================
// Script path
// =========================================================================

#[test]
fn script_assignments_populate_summary() {
    let body = [
        inner_html_script("duration", "Finished in <strong>9m15.076s seconds</strong>"),
        inner_html_script(
            "totals",
            "8 scenarios (2 failed, 6 passed)<br />104 steps (2 failed, 4 skipped, 98 passed)",
        ),
    ]
    .concat();

    let summary = summary_of(&body);
    assert_eq!(summary.duration.as_deref(), Some("9m15.076s"));
    assert_eq!(summary.scenarios, Tally { total: 8, passed: 6, failed: 2 });
    assert_eq!(summary.steps, Tally { total: 104, passed: 98, failed: 2 });
}

#[test]
fn script_with_plain_br_is_normalized() {
    let body = inner_html_script("totals", "3 scenarios (3 passed)<br>12 steps (12 passed)");
    let summary = summary_of(&body);
    assert_eq!(summary.scenarios.total, 3);
    assert_eq!(summary.steps.total, 12);
}

#[test]
fn script_wins_over_markup() {
    let body = format!(
        r#"<p id="totals">1 scenario (1 failed)</p><p id="duration">Finished in <strong>1s</strong></p>{}{}"#,
        inner_html_script("totals", "5 scenarios (5 passed)"),
        inner_html_script("duration", "Finished in <strong>7s seconds</strong>"),
    );
    let summary = summary_of(&body);
    assert_eq!(summary.duration.as_deref(), Some("7s"));
    assert_eq!(summary.scenarios, Tally { total: 5, passed: 5, failed: 0 });
}

#[test]
fn later_script_overwrites_earlier() {
    let body = [
        inner_html_script("duration", "Finished in <strong>1s seconds</strong>"),
        inner_html_script("duration", "Finished in <strong>2s seconds</strong>"),
    ]
    .concat();
    assert_eq!(summary_of(&body).duration.as_deref(), Some("2s"));
}

// =========================================================================
// Markup fallback
// =========================================================================

#[test]
fn markup_fallback_when_no_scripts() {
    let body = r#"
        <div id="summary">
            <p id="totals">8 scenarios (2 failed, 6 passed)<br>104 steps (2 failed, 4 skipped, 98 passed)</p>
            <p id="duration">Finished in <strong>9m15.076s</strong></p>
        </div>"#;
    let summary = summary_of(body);
    assert_eq!(summary.duration.as_deref(), Some("9m15.076s"));
    assert_eq!(summary.scenarios, Tally { total: 8, passed: 6, failed: 2 });
    assert_eq!(summary.steps, Tally { total: 104, passed: 98, failed: 2 });
}

#[test]
fn markup_totals_used_when_script_scenarios_zero() {
    let body = format!(
        r#"{}<p id="totals">2 scenarios (1 failed, 1 passed)</p>"#,
        inner_html_script("totals", "0 scenarios ()<br />3 steps (3 passed)"),
    );
    let summary = summary_of(&body);
    assert_eq!(summary.scenarios, Tally { total: 2, passed: 1, failed: 1 });
    assert_eq!(summary.steps, Tally { total: 3, passed: 3, failed: 0 });
}

#[test]
fn empty_markup_leaves_defaults() {
    let summary = summary_of(r#"<p id="totals"></p><p id="duration"></p>"#);
    assert_eq!(summary, RunSummary::default());
}

#[test]
fn no_markers_yields_default_summary() {
    assert_eq!(summary_of("<p>nothing here</p>"), RunSummary::default());
}
