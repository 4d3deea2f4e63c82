//! ANSI color helper utilities for terminal output.

use crate::models::VisitType;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// New → green, Recurrent → cyan
pub fn color_for_visit_type(visit_type: VisitType) -> &'static str {
    if visit_type.is_new() { GREEN } else { CYAN }
}

pub fn colorize_visit_type(visit_type: VisitType) -> String {
    format!("{}{}{RESET}", color_for_visit_type(visit_type), visit_type)
}

/// Greys out empty cells (a blank manual visit) and rows hidden by the filter.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

pub fn dim(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}
