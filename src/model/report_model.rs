use serde::{Serialize, Serializer};
use serde_json::{Value, json};

use crate::model::status::{ScenarioStatus, StatusLabel, StepStatus, compute_status};

// ============================================================================
// Step
// ============================================================================

/// A single Given/When/Then line of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    #[serde(rename = "step_name")]
    pub name: Option<String>,

    #[serde(rename = "step_status")]
    pub status: Option<StepStatus>,

    /// Step definition location, e.g. `features/step_definitions/login.rb:12`
    #[serde(rename = "step_file")]
    pub file: Option<String>,
}

impl StatusLabel for Step {
    fn status_label(&self) -> Option<&str> {
        self.status.map(StepStatus::as_str)
    }
}

// ============================================================================
// Scenario
// ============================================================================

/// A scenario with its steps in document order.
///
/// Only [`ScenarioBuilder::build`] creates one, so `status` always reflects `steps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    #[serde(rename = "scenario_id_num")]
    id: Option<String>,

    #[serde(rename = "scenario_name")]
    name: Option<String>,

    #[serde(rename = "scenario_status")]
    status: ScenarioStatus,

    #[serde(rename = "scenario_file")]
    file: Option<String>,

    #[serde(rename = "scenario_tag")]
    tag: Option<String>,

    steps: Vec<Step>,
}

impl Scenario {
    /// Heading anchor, kept verbatim (e.g. `scenario_3`).
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn status(&self) -> ScenarioStatus {
        self.status
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// Collects a scenario's fields and steps while the walker is inside it.
#[derive(Debug, Default)]
pub struct ScenarioBuilder {
    pub id: Option<String>,
    pub name: Option<String>,
    pub file: Option<String>,
    pub tag: Option<String>,
    steps: Vec<Step>,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn with_steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Close the scenario, computing its status from every attached step.
    pub fn build(self) -> Scenario {
        let status = compute_status(&self.steps);
        Scenario {
            id: self.id,
            name: self.name,
            status,
            file: self.file,
            tag: self.tag,
            steps: self.steps,
        }
    }
}

// ============================================================================
// Feature
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    #[serde(rename = "feature_name")]
    pub name: String,

    pub scenarios: Vec<Scenario>,
}

// ============================================================================
// Report
// ============================================================================

/// Provenance derived from the report's file name, never from its content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMetadata {
    pub region: Option<String>,
    pub run_date: Option<String>,
    pub run_time: Option<String>,
    pub retest: bool,
    pub report_file_name: Option<String>,
}

/// Total/passed/failed counters for one unit (scenarios or steps).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
}

/// One parsed Cucumber HTML report.
///
/// `scenarios` and `steps` hold the runner's own summary line. They are not
/// recounted from `features` and may disagree with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub valid_run: bool,
    pub duration: Option<String>,
    pub scenarios: Tally,
    pub steps: Tally,
    pub features: Vec<Feature>,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            metadata: ReportMetadata::default(),
            valid_run: true,
            duration: None,
            scenarios: Tally::default(),
            steps: Tally::default(),
            features: Vec::new(),
        }
    }
}

impl Report {
    pub fn with_metadata(metadata: ReportMetadata) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }

    /// Nested `{"run": {...}, "features": [...]}` view used for JSON output.
    pub fn to_projection(&self) -> ReportProjection<'_> {
        ReportProjection {
            run: RunSection {
                region: self.metadata.region.as_deref(),
                run_date: self.metadata.run_date.as_deref(),
                run_time: self.metadata.run_time.as_deref(),
                retest: self.metadata.retest,
                report_file_name: self.metadata.report_file_name.as_deref(),
                valid_run: self.valid_run,
                duration: self.duration.as_deref(),
                scenarios_total: self.scenarios.total,
                scenarios_passed: self.scenarios.passed,
                scenarios_failed: self.scenarios.failed,
                steps_total: self.steps.total,
                steps_passed: self.steps.passed,
                steps_failed: self.steps.failed,
            },
            features: &self.features,
        }
    }

    /// Value of a single run-level field.
    pub fn field(&self, field: RunField) -> Value {
        match field {
            RunField::Region => json!(self.metadata.region),
            RunField::RunDate => json!(self.metadata.run_date),
            RunField::RunTime => json!(self.metadata.run_time),
            RunField::Retest => json!(self.metadata.retest),
            RunField::ReportFileName => json!(self.metadata.report_file_name),
            RunField::ValidRun => json!(self.valid_run),
            RunField::Duration => json!(self.duration),
            RunField::ScenariosTotal => json!(self.scenarios.total),
            RunField::ScenariosPassed => json!(self.scenarios.passed),
            RunField::ScenariosFailed => json!(self.scenarios.failed),
            RunField::StepsTotal => json!(self.steps.total),
            RunField::StepsPassed => json!(self.steps.passed),
            RunField::StepsFailed => json!(self.steps.failed),
        }
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_projection().serialize(serializer)
    }
}

#[derive(Debug, Serialize)]
pub struct ReportProjection<'a> {
    pub run: RunSection<'a>,
    pub features: &'a [Feature],
}

/// The thirteen scalar run-level fields.
#[derive(Debug, Serialize)]
pub struct RunSection<'a> {
    pub region: Option<&'a str>,
    pub run_date: Option<&'a str>,
    pub run_time: Option<&'a str>,
    pub retest: bool,
    pub report_file_name: Option<&'a str>,
    pub valid_run: bool,
    pub duration: Option<&'a str>,
    pub scenarios_total: u32,
    pub scenarios_passed: u32,
    pub scenarios_failed: u32,
    pub steps_total: u32,
    pub steps_passed: u32,
    pub steps_failed: u32,
}

/// Names accepted by `--field`, matching the keys of [`RunSection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum RunField {
    Region,
    RunDate,
    RunTime,
    Retest,
    ReportFileName,
    ValidRun,
    Duration,
    ScenariosTotal,
    ScenariosPassed,
    ScenariosFailed,
    StepsTotal,
    StepsPassed,
    StepsFailed,
}

impl RunField {
    pub fn name(self) -> &'static str {
        match self {
            RunField::Region => "region",
            RunField::RunDate => "run_date",
            RunField::RunTime => "run_time",
            RunField::Retest => "retest",
            RunField::ReportFileName => "report_file_name",
            RunField::ValidRun => "valid_run",
            RunField::Duration => "duration",
            RunField::ScenariosTotal => "scenarios_total",
            RunField::ScenariosPassed => "scenarios_passed",
            RunField::ScenariosFailed => "scenarios_failed",
            RunField::StepsTotal => "steps_total",
            RunField::StepsPassed => "steps_passed",
            RunField::StepsFailed => "steps_failed",
        }
    }
}
