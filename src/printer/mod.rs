//! Call-graph text report.
//!
//! Each thread is rendered as a header, a method table and a legend.
//! Every method entry shows who called it, its own totals, and what it
//! called, in fixed-width columns.

mod blocks;
pub mod format;
pub mod graph;
pub mod header;
pub mod options;

// Re-export main types
pub use graph::{GraphPrinter, ReportSummary, SkippedThread};
pub use header::{print_footer, print_header};
pub use options::{full_name, short_name, NameFormatter, NameStyle, ReportOptions, SortMethod};
