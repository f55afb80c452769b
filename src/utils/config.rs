//! Layout constants and defaults for graph reports.

/// Width of a percentage cell, including the trailing `%`
pub const PERCENTAGE_WIDTH: usize = 8;

/// Width of a time cell
pub const TIME_WIDTH: usize = 10;

/// Width of the call-count cell (wide enough for "N/M" ratios)
pub const CALL_WIDTH: usize = 17;

/// Width of the rule printed above every method entry
pub const SEPARATOR_WIDTH: usize = 80;

/// Default minimum total-time percentage for a method to be listed
pub const DEFAULT_MIN_PERCENT: f64 = 0.0;

pub const RECURSION_LEGEND: &str = "* in front of method name means it is recursively called";
