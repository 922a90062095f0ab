use scraper::{ElementRef, Html};

use crate::model::report_model::{Feature, Report, Scenario, ScenarioBuilder, Step};
use crate::model::status::StepStatus;
use crate::parse::constants::{
    CLASS_FEATURE, CLASS_KEYWORD, CLASS_SCENARIO, CLASS_SCENARIO_FILE, CLASS_STEP,
    CLASS_STEP_FILE, CLASS_STEP_NAME, CLASS_TAG, CLASS_VAL, PREFIX_FEATURE, PREFIX_SCENARIO,
    PREFIX_SCENARIO_OUTLINE, SCENARIO_ID_PREFIX,
};
use crate::parse::dom::{
    class_contains, class_is, class_tokens, descendants, first, id_starts_with, inner_text, is_tag,
};
use crate::parse::summary::extract_summary;
use crate::parse::text::{non_empty, strip_prefix};

// ============================================================================
// Document level
// ============================================================================

/// Build a report from an already-parsed document.
///
/// Metadata is left at its defaults; the caller owns provenance.
pub fn walk_document(doc: &Html) -> Report {
    let summary = extract_summary(doc);

    let candidates = descendants(doc.root_element(), |e| {
        is_tag(e, "div") && class_contains(e, CLASS_FEATURE)
    })
    .map(read_feature);

    Report {
        duration: summary.duration,
        scenarios: summary.scenarios,
        steps: summary.steps,
        features: retain_named(candidates).collect(),
        ..Report::default()
    }
}

// ============================================================================
// Feature level
// ============================================================================

/// A feature section as found, before unnamed ones are filtered out.
#[derive(Debug)]
pub struct FeatureCandidate {
    pub name: Option<String>,
    pub scenarios: Vec<Scenario>,
}

impl FeatureCandidate {
    pub fn into_named(self) -> Option<Feature> {
        let name = self.name.filter(|n| !n.is_empty())?;
        Some(Feature {
            name,
            scenarios: self.scenarios,
        })
    }
}

/// Drop features whose heading yielded no name.
pub fn retain_named(candidates: impl IntoIterator<Item = FeatureCandidate>) -> impl Iterator<Item = Feature> {
    candidates.into_iter().filter_map(FeatureCandidate::into_named)
}

fn read_feature(node: ElementRef<'_>) -> FeatureCandidate {
    let name = descendants(node, |e| is_tag(e, "h2"))
        .find_map(|h2| first(h2, |e| is_tag(e, "span") && class_is(e, CLASS_VAL)))
        .map(|span| strip_prefix(&inner_text(span), PREFIX_FEATURE).to_string());

    let scenarios = descendants(node, |e| is_tag(e, "div") && class_contains(e, CLASS_SCENARIO))
        .map(read_scenario)
        .collect();

    FeatureCandidate { name, scenarios }
}

// ============================================================================
// Scenario level
// ============================================================================

fn read_scenario(node: ElementRef<'_>) -> Scenario {
    let mut builder = ScenarioBuilder::new();

    builder.file = first(node, |e| is_tag(e, "span") && class_is(e, CLASS_SCENARIO_FILE))
        .and_then(|span| non_empty(&inner_text(span)));
    builder.tag = first(node, |e| is_tag(e, "span") && class_is(e, CLASS_TAG))
        .and_then(|span| non_empty(&inner_text(span)));

    if let Some(heading) = first(node, |e| is_tag(e, "h3") && id_starts_with(e, SCENARIO_ID_PREFIX)) {
        builder.id = heading.value().attr("id").map(str::to_string);
        builder.name = first(heading, |e| is_tag(e, "span") && class_is(e, CLASS_VAL))
            .and_then(|span| non_empty(&scenario_title(&inner_text(span))));
    }

    for step in descendants(node, |e| is_tag(e, "li") && class_contains(e, CLASS_STEP)).filter_map(read_step) {
        builder.push_step(step);
    }

    builder.build()
}

/// Strip the outline label before the plain one so `Scenario Outline:` is never half-removed.
pub fn scenario_title(text: &str) -> String {
    let text = strip_prefix(text, PREFIX_SCENARIO_OUTLINE);
    strip_prefix(text, PREFIX_SCENARIO).to_string()
}

// ============================================================================
// Step level
// ============================================================================

/// A step `<li>` without a recognised status class produces no step.
fn read_step(node: ElementRef<'_>) -> Option<Step> {
    let status = class_tokens(node.value()).find_map(StepStatus::from_class_token)?;

    let name = first(node, |e| is_tag(e, "div") && class_is(e, CLASS_STEP_NAME)).and_then(|div| {
        let keyword = first(div, |e| is_tag(e, "span") && class_contains(e, CLASS_KEYWORD))
            .and_then(|span| non_empty(&inner_text(span)));
        let value = first(div, |e| is_tag(e, "span") && class_contains(e, CLASS_VAL))
            .and_then(|span| non_empty(&inner_text(span)));
        step_name(keyword, value)
    });

    let file = first(node, |e| is_tag(e, "div") && class_is(e, CLASS_STEP_FILE))
        .and_then(|div| first(div, |e| is_tag(e, "span")))
        .and_then(|span| non_empty(&inner_text(span)));

    Some(Step {
        name,
        status: Some(status),
        file,
    })
}

fn step_name(keyword: Option<String>, value: Option<String>) -> Option<String> {
    match (keyword, value) {
        (Some(keyword), Some(value)) => Some(format!("{} {}", keyword, value)),
        (None, Some(value)) => Some(value),
        _ => None,
    }
}
