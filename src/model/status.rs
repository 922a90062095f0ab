use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// ============================================================================
// Step status: the fixed set of outcomes Cucumber writes into step classes
// ============================================================================

/// Outcome of a single step, as encoded in the `class` attribute of its `<li>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    Undefined,
}

impl StepStatus {
    pub const ALL: [StepStatus; 5] = [
        StepStatus::Passed,
        StepStatus::Failed,
        StepStatus::Skipped,
        StepStatus::Pending,
        StepStatus::Undefined,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::Passed => "passed",
            StepStatus::Failed => "failed",
            StepStatus::Skipped => "skipped",
            StepStatus::Pending => "pending",
            StepStatus::Undefined => "undefined",
        }
    }

    /// Match a single class token exactly (case-sensitive, as written by the formatter).
    pub fn from_class_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == token)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_class_token(s).ok_or_else(|| format!("unknown step status: {}", s))
    }
}

// ============================================================================
// Scenario status, derived, never parsed
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    Passed,
    Failed,
}

impl ScenarioStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioStatus::Passed => "passed",
            ScenarioStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Status calculator
// ============================================================================

/// Anything that may carry a step status label.
pub trait StatusLabel {
    fn status_label(&self) -> Option<&str>;
}

impl StatusLabel for StepStatus {
    fn status_label(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl StatusLabel for &str {
    fn status_label(&self) -> Option<&str> {
        Some(*self)
    }
}

impl StatusLabel for String {
    fn status_label(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: StatusLabel> StatusLabel for Option<T> {
    fn status_label(&self) -> Option<&str> {
        self.as_ref().and_then(|label| label.status_label())
    }
}

/// Derive a scenario's status from its steps.
///
/// The first step whose label contains "failed" or "skipped" (any case) makes the
/// scenario FAILED; later steps are not looked at. Pending and undefined steps do
/// not fail a scenario. No steps at all is PASSED.
pub fn compute_status<T: StatusLabel>(steps: &[T]) -> ScenarioStatus {
    for step in steps {
        let Some(label) = step.status_label() else {
            continue;
        };
        let label = label.to_lowercase();
        if label.contains(StepStatus::Failed.as_str()) || label.contains(StepStatus::Skipped.as_str()) {
            return ScenarioStatus::Failed;
        }
    }

    ScenarioStatus::Passed
}
