// All nom parsers split amoung files for organisation
mod delimited;
mod number;
mod timestep;

// Internal re-exports for convenience
pub(crate) use delimited::*;
pub(crate) use number::*;
pub(crate) use timestep::*;

/// Check if a line belongs to the step table
///
/// Step rows are the only output indented by a blank. Lines holding nothing
/// but whitespace are not rows.
pub(crate) fn is_step_row(i: &str) -> bool {
    i.starts_with(|c: char| c == ' ' || c == '\t') && !i.trim().is_empty()
}

/// Check if a line is part of a scheduler report
pub(crate) fn is_scheduler_report(i: &str) -> bool {
    i.contains(SCHEDULER_REPORT_MARKER)
}

/// Literal marker written at the start of every scheduler report line
pub(crate) const SCHEDULER_REPORT_MARKER: &str = "scheduler_report_task_times:";
