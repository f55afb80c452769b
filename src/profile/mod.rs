//! Profile snapshot consumed by the report printers.
//!
//! The snapshot is produced elsewhere; this module only describes its shape
//! and knows how to load it from JSON.

pub mod loader;
pub mod schema;

pub use loader::{profile_from_str, read_profile};
pub use schema::{
    CalleeAggregate, CallerAggregate, EdgeStats, Method, MethodId, ProfileResult, Thread,
};
