//! Graph Report
//!
//! Renders call-graph profiling reports as aligned plain text from an
//! already-computed profile: per thread, every method with its callers,
//! its own timings and its callees.
//!
//! ```ignore
//! use graph_report::output::write_report;
//! use graph_report::printer::{GraphPrinter, ReportOptions, SortMethod};
//! use graph_report::profile::read_profile;
//!
//! let profile = read_profile("profile.json")?;
//! let options = ReportOptions::new()
//!     .with_sort_method(SortMethod::SelfTime)
//!     .with_min_percent(1.0);
//! let printer = GraphPrinter::new(options)?;
//! write_report(&printer, &profile, "graph.txt")?;
//! ```

pub mod output;
pub mod printer;
pub mod profile;
pub mod utils;
