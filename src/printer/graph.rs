//! Graph report printer.
//!
//! For every thread the printer writes a header, then one entry per method
//! (callers, the method's own row, callees), then a short legend. Methods
//! are listed from the highest to the lowest value of the configured sort
//! key, and methods whose share of the thread's total time falls below
//! `min_percent` are left out.

use super::blocks::{print_children, print_parents};
use super::format::{calls_cell, percentage_cell, single_line, time_cell};
use super::header::{print_footer, print_header};
use super::options::{MethodOrdering, NameFormatter, ReportOptions};
use crate::profile::{EdgeStats, Method, ProfileResult, Thread};
use crate::utils::config::SEPARATOR_WIDTH;
use crate::utils::error::ReportError;
use log::{debug, info, warn};
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// A thread that could not be reported
#[derive(Debug)]
pub struct SkippedThread {
    pub thread_id: u64,
    pub error: ReportError,
}

/// Outcome of printing a whole profile
#[derive(Debug, Default)]
pub struct ReportSummary {
    pub threads_rendered: usize,
    pub skipped: Vec<SkippedThread>,
}

impl ReportSummary {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Renders call-graph reports as aligned plain text
#[derive(Clone)]
pub struct GraphPrinter {
    options: ReportOptions,
    ordering: MethodOrdering,
    name_formatter: NameFormatter,
}

impl fmt::Debug for GraphPrinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphPrinter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl GraphPrinter {
    /// Build a printer, resolving the sort key and name style once
    ///
    /// # Errors
    /// * `ReportError::InvalidConfig` - options fail validation
    pub fn new(options: ReportOptions) -> Result<Self, ReportError> {
        options.validate()?;

        Ok(Self {
            ordering: options.sort_method.comparator(),
            name_formatter: options.name_style.formatter(),
            options,
        })
    }

    /// Replace the name style with a custom formatter for method rows
    ///
    /// Caller and callee rows keep printing raw full names.
    pub fn with_name_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Method) -> String + Send + Sync + 'static,
    {
        self.name_formatter = Arc::new(formatter);
        self
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Print every thread of `profile`, in order
    ///
    /// A thread with unusable data is logged, recorded in the summary and
    /// skipped without writing anything for it. Sink failures abort.
    pub fn print<W: Write>(
        &self,
        profile: &ProfileResult,
        out: &mut W,
    ) -> Result<ReportSummary, ReportError> {
        let mut summary = ReportSummary::default();

        for thread in &profile.threads {
            match self.print_thread(thread, out) {
                Ok(()) => summary.threads_rendered += 1,
                Err(ReportError::Io(e)) => return Err(ReportError::Io(e)),
                Err(error) => {
                    warn!("Skipping thread {}: {}", thread.id, error);
                    summary.skipped.push(SkippedThread {
                        thread_id: thread.id,
                        error,
                    });
                }
            }
        }

        info!(
            "Graph report written for {} of {} threads",
            summary.threads_rendered,
            profile.threads.len()
        );

        Ok(summary)
    }

    /// Print a single thread: header, method table, footer
    ///
    /// This is the validated entry point for one thread; nothing is written
    /// unless the whole thread checks out.
    ///
    /// # Errors
    /// * `ReportError::InvalidBaseline` - top method total time is not positive
    /// * `ReportError::InvalidInput` - malformed method or dangling reference
    /// * `ReportError::Io` - the sink rejected a write
    pub fn print_thread<W: Write>(&self, thread: &Thread, out: &mut W) -> Result<(), ReportError> {
        let baseline = validate_thread(thread)?;

        debug!(
            "Rendering thread {} ({} methods, baseline {})",
            thread.id,
            thread.methods.len(),
            baseline
        );

        print_header(out, thread, baseline, self.options.sort_method)?;
        self.print_methods(out, thread, baseline)?;
        print_footer(out)?;

        Ok(())
    }

    /// Print the method table of a thread that passed `validate_thread`
    pub(crate) fn print_methods<W: Write>(
        &self,
        out: &mut W,
        thread: &Thread,
        baseline: f64,
    ) -> Result<(), ReportError> {
        let mut methods: Vec<&Method> = thread.methods.iter().collect();
        // stable, so ties keep input order
        methods.sort_by(|a, b| (self.ordering)(b, a));

        let mut skipped = 0;
        for method in methods {
            let total_percentage = method.total_time / baseline * 100.0;
            let self_percentage = method.self_time / baseline * 100.0;

            if total_percentage < self.options.min_percent {
                skipped += 1;
                continue;
            }

            writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
            print_parents(out, thread, method)?;
            writeln!(
                out,
                "{}",
                self.method_row(method, total_percentage, self_percentage)
            )?;
            print_children(out, thread, method)?;
        }

        if skipped > 0 {
            debug!(
                "Thread {}: {} methods below {}%",
                thread.id, skipped, self.options.min_percent
            );
        }

        Ok(())
    }

    fn method_row(&self, method: &Method, total_percentage: f64, self_percentage: f64) -> String {
        let mut row = String::new();
        row.push_str(&percentage_cell(total_percentage));
        row.push_str(&percentage_cell(self_percentage));
        row.push_str(&time_cell(method.total_time));
        row.push_str(&time_cell(method.self_time));
        row.push_str(&time_cell(method.wait_time));
        row.push_str(&time_cell(method.children_time));
        row.push_str(&calls_cell(method.called));
        row.push_str("     ");
        row.push(if method.recursive { '*' } else { ' ' });
        row.push_str(&single_line(&(self.name_formatter)(method)));

        if self.options.print_file {
            if let Some(file) = &method.source_file {
                match method.line {
                    Some(line) => row.push_str(&format!("  {}:{}", file, line)),
                    None => row.push_str(&format!("  {}", file)),
                }
            }
        }

        row
    }
}

/// Check a thread before any of it is written
///
/// Returns the baseline total time.
fn validate_thread(thread: &Thread) -> Result<f64, ReportError> {
    let top = thread.top_method().ok_or_else(|| {
        ReportError::InvalidInput(format!(
            "thread {}: top method {} does not exist",
            thread.id, thread.top_method
        ))
    })?;

    let baseline = top.total_time;
    if !baseline.is_finite() || baseline <= 0.0 {
        return Err(ReportError::InvalidBaseline {
            thread_id: thread.id,
            total_time: baseline,
        });
    }

    for method in &thread.methods {
        validate_method(thread, method)?;
    }

    Ok(baseline)
}

fn validate_method(thread: &Thread, method: &Method) -> Result<(), ReportError> {
    let invalid =
        |reason: String| ReportError::InvalidInput(format!("thread {}: {}", thread.id, reason));

    if method.full_name.trim().is_empty() {
        return Err(invalid("method with an empty name".to_string()));
    }

    let times = [
        ("total_time", method.total_time),
        ("self_time", method.self_time),
        ("wait_time", method.wait_time),
        ("children_time", method.children_time),
    ];
    for (field, value) in times {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(format!(
                "{} has an invalid {}: {}",
                method.full_name, field, value
            )));
        }
    }

    for caller in &method.aggregate_parents {
        if let Some(parent) = caller.parent {
            if thread.method(parent).is_none() {
                return Err(invalid(format!(
                    "{} has a caller edge to missing method {}",
                    method.full_name, parent
                )));
            }
        }
        check_edge(&caller.stats).map_err(|field| {
            invalid(format!("{} has a caller edge with invalid {}", method.full_name, field))
        })?;
    }

    for child in &method.aggregate_children {
        if thread.method(child.target).is_none() {
            return Err(invalid(format!(
                "{} has a callee edge to missing method {}",
                method.full_name, child.target
            )));
        }
        check_edge(&child.stats).map_err(|field| {
            invalid(format!("{} has a callee edge with invalid {}", method.full_name, field))
        })?;
    }

    Ok(())
}

/// Name of the first unusable time field, if any
fn check_edge(stats: &EdgeStats) -> Result<(), &'static str> {
    let times = [
        ("total_time", stats.total_time),
        ("self_time", stats.self_time),
        ("wait_time", stats.wait_time),
        ("children_time", stats.children_time),
    ];
    match times.into_iter().find(|(_, t)| !t.is_finite() || *t < 0.0) {
        Some((field, _)) => Err(field),
        None => Ok(()),
    }
}
