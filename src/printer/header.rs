//! Per-thread header and the report legend.

use super::format::title_cell;
use super::options::SortMethod;
use crate::profile::Thread;
use crate::utils::config::{CALL_WIDTH, PERCENTAGE_WIDTH, RECURSION_LEGEND, TIME_WIDTH};
use std::io::{self, Write};

/// Write thread metadata followed by the column titles
///
/// `baseline` is the top method's total time.
pub fn print_header<W: Write>(
    out: &mut W,
    thread: &Thread,
    baseline: f64,
    sort_method: SortMethod,
) -> io::Result<()> {
    writeln!(out, "Thread ID: {}", thread.id)?;
    writeln!(out, "Total Time: {:?}", baseline)?;
    writeln!(out, "Sort by: {}", sort_method)?;
    writeln!(out)?;

    let mut titles = String::new();
    titles.push_str(&title_cell("%total", PERCENTAGE_WIDTH));
    titles.push_str(&title_cell("%self", PERCENTAGE_WIDTH));
    for title in ["total", "self", "wait", "child"] {
        titles.push_str(&title_cell(title, TIME_WIDTH));
    }
    titles.push_str(&title_cell("calls", CALL_WIDTH));
    titles.push_str("    Name");

    writeln!(out, "{}", titles)
}

pub fn print_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RECURSION_LEGEND)
}
