//! Caller and callee rows printed around each method's own row.
//!
//! Both blocks share one row shape: blank percentage columns, the edge's
//! four time cells, a `called/total` ratio and the related method's full
//! name. The ratio denominators differ on purpose:
//!
//! * caller rows divide by the current method's call count
//!   ("how many of my calls came from this caller")
//! * callee rows divide by the callee's own call count
//!   ("how many of the callee's calls came from me")

use super::format::{calls_cell, edge_time_cells, single_line};
use crate::profile::{EdgeStats, Method, MethodId, Thread};
use crate::utils::config::PERCENTAGE_WIDTH;
use crate::utils::error::ReportError;
use std::io::Write;

/// Callers, cheapest edge first
///
/// Edges without a parent stand for the synthetic root and are skipped.
pub(crate) fn print_parents<W: Write>(
    out: &mut W,
    thread: &Thread,
    method: &Method,
) -> Result<(), ReportError> {
    let mut callers: Vec<_> = method.aggregate_parents.iter().collect();
    callers.sort_by(|a, b| a.stats.total_time.total_cmp(&b.stats.total_time));

    for caller in callers {
        let Some(parent_id) = caller.parent else {
            continue;
        };
        let parent = related_method(thread, parent_id)?;
        let ratio = format!("{}/{}", caller.stats.called, method.called);

        writeln!(out, "{}", edge_row(&caller.stats, &ratio, &parent.full_name))?;
    }

    Ok(())
}

/// Callees, most expensive edge first
pub(crate) fn print_children<W: Write>(
    out: &mut W,
    thread: &Thread,
    method: &Method,
) -> Result<(), ReportError> {
    let mut children: Vec<_> = method.aggregate_children.iter().collect();
    // stable, so equal edges keep their recorded order
    children.sort_by(|a, b| b.stats.total_time.total_cmp(&a.stats.total_time));

    for child in children {
        let target = related_method(thread, child.target)?;
        let ratio = format!("{}/{}", child.stats.called, target.called);

        writeln!(out, "{}", edge_row(&child.stats, &ratio, &target.full_name))?;
    }

    Ok(())
}

fn related_method(thread: &Thread, id: MethodId) -> Result<&Method, ReportError> {
    thread.method(id).ok_or_else(|| {
        ReportError::InvalidInput(format!(
            "thread {}: call edge refers to missing method {}",
            thread.id, id
        ))
    })
}

fn edge_row(stats: &EdgeStats, ratio: &str, name: &str) -> String {
    format!(
        "{}{}{}      {}",
        " ".repeat(2 * PERCENTAGE_WIDTH),
        edge_time_cells(stats),
        calls_cell(ratio),
        single_line(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CalleeAggregate, CallerAggregate};

    fn stats(total: f64, called: u64) -> EdgeStats {
        EdgeStats {
            total_time: total,
            self_time: total,
            wait_time: 0.0,
            children_time: 0.0,
            called,
        }
    }

    fn named(name: &str, called: u64) -> Method {
        Method {
            full_name: name.to_string(),
            called,
            ..Default::default()
        }
    }

    fn render<F>(f: F) -> Vec<String>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), ReportError>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_parents_ascending_and_root_skipped() {
        let mut current = named("Current#work", 5);
        current.aggregate_parents = vec![
            CallerAggregate {
                parent: Some(1),
                stats: stats(10.0, 2),
            },
            CallerAggregate {
                parent: None,
                stats: stats(1.0, 9),
            },
            CallerAggregate {
                parent: Some(0),
                stats: stats(5.0, 3),
            },
        ];
        let thread = Thread {
            id: 1,
            top_method: 0,
            methods: vec![named("A#first", 1), named("B#second", 1), current.clone()],
        };

        let lines = render(|out| print_parents(out, &thread, &current));

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("3/5      A#first"));
        assert!(lines[1].ends_with("2/5      B#second"));
        assert!(lines[0].starts_with(&" ".repeat(16)));
    }

    #[test]
    fn test_children_descending_with_callee_denominator() {
        let mut current = named("Current#work", 1);
        current.aggregate_children = vec![
            CalleeAggregate {
                target: 0,
                stats: stats(2.0, 1),
            },
            CalleeAggregate {
                target: 1,
                stats: stats(12.0, 4),
            },
            CalleeAggregate {
                target: 2,
                stats: stats(5.0, 1),
            },
            CalleeAggregate {
                target: 3,
                stats: stats(5.0, 2),
            },
        ];
        let thread = Thread {
            id: 1,
            top_method: 0,
            methods: vec![
                named("Small#call", 3),
                named("Big#call", 8),
                named("TieFirst#call", 1),
                named("TieSecond#call", 2),
            ],
        };

        let lines = render(|out| print_children(out, &thread, &current));

        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("4/8      Big#call"));
        assert!(lines[1].ends_with("1/1      TieFirst#call"));
        assert!(lines[2].ends_with("2/2      TieSecond#call"));
        assert!(lines[3].ends_with("1/3      Small#call"));
    }

    #[test]
    fn test_missing_target_is_invalid_input() {
        let mut current = named("Current#work", 1);
        current.aggregate_children = vec![CalleeAggregate {
            target: 9,
            stats: stats(1.0, 1),
        }];
        let thread = Thread {
            id: 3,
            top_method: 0,
            methods: vec![],
        };

        let mut out = Vec::new();
        let result = print_children(&mut out, &thread, &current);
        assert!(matches!(result, Err(ReportError::InvalidInput(_))));
    }
}
