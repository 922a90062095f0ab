// Markers written by Cucumber's HTML formatter.

// Class substrings (matched with `contains` on the whole class attribute)
pub const CLASS_FEATURE: &str = "feature";
pub const CLASS_SCENARIO: &str = "scenario";
pub const CLASS_STEP: &str = "step";
pub const CLASS_KEYWORD: &str = "keyword";

// Exact class values
pub const CLASS_VAL: &str = "val";
pub const CLASS_SCENARIO_FILE: &str = "scenario_file";
pub const CLASS_TAG: &str = "tag";
pub const CLASS_STEP_NAME: &str = "step_name";
pub const CLASS_STEP_FILE: &str = "step_file";

pub const SCENARIO_ID_PREFIX: &str = "scenario_";

// Summary element ids
pub const ELEMENT_ID_TOTALS: &str = "totals";
pub const ELEMENT_ID_DURATION: &str = "duration";

// Heading labels
pub const PREFIX_FEATURE: &str = "Feature:";
pub const PREFIX_SCENARIO_OUTLINE: &str = "Scenario Outline:";
pub const PREFIX_SCENARIO: &str = "Scenario:";

pub const DURATION_SUFFIX: &str = " seconds";

// Report file naming
pub const FILE_EXTENSION_HTM: &str = ".htm";
pub const FILE_EXTENSION_HTML: &str = ".html";
pub const FILE_SUFFIX_RETEST: &str = "(retest)";
pub const FILENAME_SEPARATOR: char = '-';
