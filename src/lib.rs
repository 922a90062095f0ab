//! Extract run summaries and the feature/scenario/step tree from Cucumber HTML reports.
//!
//! ```no_run
//! let report = cucumber_report::parse_report_file("prod-20252008-1012.htm", false);
//! println!("{} scenarios, {} failed", report.scenarios.total, report.scenarios.failed);
//! ```

pub mod cli;
pub mod error;
pub mod model;
pub mod parse;
pub mod report;

pub use error::ReportError;
pub use model::report_model::{Feature, Report, ReportMetadata, Scenario, ScenarioBuilder, Step, Tally};
pub use model::status::{ScenarioStatus, StepStatus, compute_status};
pub use parse::{parse_document, parse_report_file, parse_report_file_with, try_parse_report_file};
