//! Fixed-width cell formatting shared by every report row.

use crate::profile::EdgeStats;
use crate::utils::config::{CALL_WIDTH, PERCENTAGE_WIDTH, TIME_WIDTH};
use std::fmt::Display;

/// `12.34%` right-aligned to `PERCENTAGE_WIDTH`, the `%` included
pub fn percentage_cell(value: f64) -> String {
    format!("{:>width$.2}%", value, width = PERCENTAGE_WIDTH - 1)
}

/// Time right-aligned to `TIME_WIDTH`
///
/// Values needing more than `TIME_WIDTH` characters (10,000,000 and up) are
/// printed in full and push the rest of the row to the right; they are never
/// truncated.
pub fn time_cell(value: f64) -> String {
    format!("{:>width$.2}", value, width = TIME_WIDTH)
}

/// Call count or `called/total` ratio
pub fn calls_cell(calls: impl Display) -> String {
    format!("{:>width$}", calls, width = CALL_WIDTH)
}

/// Right-aligned column title
pub fn title_cell(title: &str, width: usize) -> String {
    format!("{:>width$}", title, width = width)
}

/// Total, self, wait and child time cells of an edge
pub fn edge_time_cells(stats: &EdgeStats) -> String {
    [
        stats.total_time,
        stats.self_time,
        stats.wait_time,
        stats.children_time,
    ]
    .iter()
    .map(|&t| time_cell(t))
    .collect()
}

/// Names must not break the one-row-per-line layout
pub fn single_line(name: &str) -> String {
    name.replace(['\r', '\n'], " ")
}
