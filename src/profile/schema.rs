//! Input schema for an already-aggregated profile snapshot.
//!
//! These types mirror what a profiler hands over once measurement is done:
//! threads, their methods, and per-caller/per-callee edge aggregates.
//! Nothing here computes aggregates; they are taken as given.

use serde::{Deserialize, Serialize};

/// Index of a method inside its owning thread's `methods`
pub type MethodId = usize;

/// A complete profiling result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileResult {
    /// Threads in the order they should be reported
    pub threads: Vec<Thread>,
}

/// One profiled thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: u64,

    /// Root method; its total time is the 100% baseline
    pub top_method: MethodId,

    /// Methods in insertion order
    pub methods: Vec<Method>,
}

impl Thread {
    /// Look up a method by id
    pub fn method(&self, id: MethodId) -> Option<&Method> {
        self.methods.get(id)
    }

    /// The root method, if the index is valid
    pub fn top_method(&self) -> Option<&Method> {
        self.method(self.top_method)
    }
}

/// A profiled call target
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Method {
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    pub self_time: f64,

    /// Self time plus children time
    pub total_time: f64,

    #[serde(default)]
    pub wait_time: f64,

    pub children_time: f64,

    pub called: u64,

    #[serde(default)]
    pub recursive: bool,

    /// One entry per distinct caller
    #[serde(default)]
    pub aggregate_parents: Vec<CallerAggregate>,

    /// One entry per distinct callee
    #[serde(default)]
    pub aggregate_children: Vec<CalleeAggregate>,
}

/// Combined timing and call count of one call edge across all call sites
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeStats {
    pub total_time: f64,
    pub self_time: f64,
    #[serde(default)]
    pub wait_time: f64,
    pub children_time: f64,
    pub called: u64,
}

/// Aggregate of every call into a method from one caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallerAggregate {
    /// Calling method; `None` marks the synthetic root
    #[serde(default)]
    pub parent: Option<MethodId>,

    #[serde(flatten)]
    pub stats: EdgeStats,
}

/// Aggregate of every call from a method into one callee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalleeAggregate {
    pub target: MethodId,

    #[serde(flatten)]
    pub stats: EdgeStats,
}
