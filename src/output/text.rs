//! Plain text report output.

use super::validate_path;
use crate::printer::{GraphPrinter, ReportSummary};
use crate::profile::ProfileResult;
use crate::utils::error::{OutputError, ReportError};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the full graph report for `profile` to a file
///
/// Parent directories are created as needed. The file is flushed whether
/// or not rendering succeeds, so everything written before a failure is
/// kept on disk.
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error while creating or flushing the file
/// * `OutputError::Report` - the printer failed while writing
///
/// # Example
/// ```ignore
/// let printer = GraphPrinter::new(ReportOptions::default())?;
/// write_report(&printer, &profile, "graph.txt")?;
/// ```
pub fn write_report(
    printer: &GraphPrinter,
    profile: &ProfileResult,
    output_path: impl AsRef<Path>,
) -> Result<ReportSummary, OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing graph report to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    let result = printer.print(profile, &mut writer);
    let flushed = writer.flush();

    let summary = result?;
    flushed?;

    info!(
        "Graph report written successfully ({} threads)",
        summary.threads_rendered
    );

    Ok(summary)
}

/// Render the full graph report into a string
pub fn render_to_string(
    printer: &GraphPrinter,
    profile: &ProfileResult,
) -> Result<(String, ReportSummary), ReportError> {
    let mut buffer = Vec::new();
    let summary = printer.print(profile, &mut buffer)?;

    let text = String::from_utf8(buffer)
        .map_err(|e| ReportError::InvalidInput(format!("report is not valid UTF-8: {}", e)))?;

    Ok((text, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::ReportOptions;
    use crate::profile::{Method, Thread};

    fn create_test_profile() -> ProfileResult {
        ProfileResult {
            threads: vec![Thread {
                id: 9,
                top_method: 0,
                methods: vec![Method {
                    full_name: "Global#[No method]".to_string(),
                    total_time: 1.0,
                    self_time: 1.0,
                    called: 1,
                    ..Default::default()
                }],
            }],
        }
    }

    #[test]
    fn test_render_to_string() {
        let printer = GraphPrinter::new(ReportOptions::default()).unwrap();
        let (text, summary) = render_to_string(&printer, &create_test_profile()).unwrap();

        assert!(text.starts_with("Thread ID: 9\n"));
        assert!(summary.is_complete());
        assert_eq!(summary.threads_rendered, 1);
    }

    #[test]
    fn test_write_report_rejects_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let printer = GraphPrinter::new(ReportOptions::default()).unwrap();

        let result = write_report(&printer, &create_test_profile(), temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }

    #[test]
    fn test_write_report_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/graph.txt");
        let printer = GraphPrinter::new(ReportOptions::default()).unwrap();

        write_report(&printer, &create_test_profile(), &nested_path).unwrap();

        let written = std::fs::read_to_string(&nested_path).unwrap();
        assert!(written.ends_with("recursively called\n"));
    }
}
