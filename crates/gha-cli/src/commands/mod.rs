//! CLI command implementations.

pub mod jobs;
pub mod runs;
pub mod workflows;

/// Status text for display: the conclusion takes precedence over the raw
/// status once a run or job has concluded.
pub fn display_status<'a>(status: Option<&'a str>, conclusion: Option<&'a str>) -> &'a str {
    conclusion.or(status).unwrap_or("")
}
