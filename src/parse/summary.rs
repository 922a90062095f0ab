use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::model::report_model::Tally;
use crate::parse::constants::{DURATION_SUFFIX, ELEMENT_ID_DURATION, ELEMENT_ID_TOTALS};
use crate::parse::dom::{descendants, first, id_is, inner_text, is_tag};
use crate::parse::text::{extract_pair_counts, non_empty};

// ============================================================================
// Patterns
// ============================================================================

/// `document.getElementById('<id>').innerHTML = "<fragment>"`, capture 1 = fragment.
fn inner_html_assignment(element_id: &str) -> Regex {
    let pattern = format!(
        r#"getElementById\(['"]{}['"]\)\.innerHTML\s*=\s*['"]([^'"]+)['"]"#,
        regex::escape(element_id)
    );
    Regex::new(&pattern).expect("static regex must compile")
}

static TOTALS_ASSIGNMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| inner_html_assignment(ELEMENT_ID_TOTALS));
static DURATION_ASSIGNMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| inner_html_assignment(ELEMENT_ID_DURATION));
static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<strong>([^<]+)</strong>").expect("static regex must compile"));
static BR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<br\s*/?>").expect("static regex must compile"));
static SCENARIOS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s+scenarios?\s*\((.*?)\)").expect("static regex must compile")
});
static STEPS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s+steps?\s*\((.*?)\)").expect("static regex must compile")
});

// ============================================================================
// Run summary
// ============================================================================

/// Run-level fields recovered from the summary header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub duration: Option<String>,
    pub scenarios: Tally,
    pub steps: Tally,
}

impl RunSummary {
    /// Overwrite the units present in `totals`, leave the others alone.
    pub fn apply_totals(&mut self, totals: TotalsText) {
        if let Some(scenarios) = totals.scenarios {
            self.scenarios = scenarios;
        }
        if let Some(steps) = totals.steps {
            self.steps = steps;
        }
    }

    fn has_duration(&self) -> bool {
        self.duration.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// What a totals line said about each unit; `None` when that unit was not mentioned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalsText {
    pub scenarios: Option<Tally>,
    pub steps: Option<Tally>,
}

/// Parse `8 scenarios (2 failed, 6 passed)\n104 steps (2 failed, 4 skipped, 98 passed)`.
///
/// Skipped, pending and undefined counts are not surfaced.
pub fn parse_totals_text(text: &str) -> TotalsText {
    TotalsText {
        scenarios: parse_unit(&SCENARIOS_RE, text),
        steps: parse_unit(&STEPS_RE, text),
    }
}

fn parse_unit(re: &Regex, text: &str) -> Option<Tally> {
    let caps = re.captures(text)?;
    let total = caps.get(1)?.as_str().parse().ok()?;
    let details = caps.get(2).map_or("", |m| m.as_str());
    let (failed, passed) = extract_pair_counts(details);
    Some(Tally { total, passed, failed })
}

// ============================================================================
// Extraction
// ============================================================================

/// Recover duration and totals from a parsed document.
///
/// Script assignments are read first. The static `<p id="duration">` and
/// `<p id="totals">` markup only fills in what the scripts left unset.
pub fn extract_summary(doc: &Html) -> RunSummary {
    let mut summary = RunSummary::default();

    for script in descendants(doc.root_element(), |e| is_tag(e, "script")) {
        let content: String = script.text().collect();
        scan_script(&content, &mut summary);
    }

    if !summary.has_duration() {
        summary.duration = markup_duration(doc);
    }

    if summary.scenarios.total == 0 {
        if let Some(totals) = first(doc.root_element(), |e| is_tag(e, "p") && id_is(e, ELEMENT_ID_TOTALS)) {
            summary.apply_totals(parse_totals_text(&inner_text(totals)));
        }
    }

    summary
}

/// Apply whatever `totals`/`duration` assignments one script block contains.
pub fn scan_script(content: &str, summary: &mut RunSummary) {
    if let Some(fragment) = TOTALS_ASSIGNMENT_RE.captures(content).and_then(|c| c.get(1)) {
        let totals = BR_RE.replace_all(fragment.as_str(), "\n");
        summary.apply_totals(parse_totals_text(&totals));
    }

    if let Some(fragment) = DURATION_ASSIGNMENT_RE.captures(content).and_then(|c| c.get(1)) {
        if let Some(duration) = duration_from_fragment(fragment.as_str()) {
            summary.duration = Some(duration);
        }
    }
}

/// `Finished in <strong>9m15.076s seconds</strong>` → `9m15.076s`
pub fn duration_from_fragment(fragment: &str) -> Option<String> {
    let strong = STRONG_RE.captures(fragment)?.get(1)?.as_str().trim();
    let value = strong.strip_suffix(DURATION_SUFFIX).unwrap_or(strong);
    Some(value.trim().to_string())
}

fn markup_duration(doc: &Html) -> Option<String> {
    let paragraph = first(doc.root_element(), |e| is_tag(e, "p") && id_is(e, ELEMENT_ID_DURATION))?;
    let strong = first(paragraph, |e| is_tag(e, "strong"))?;
    non_empty(&inner_text(strong))
}
