// src/resolve/mod.rs

//! Dependency resolution.
//!
//! - [`resolver`] walks the manifest depth-first and emits commands in
//!   dependency order.
//! - [`state`] holds the per-run finished / in-progress marking.
//! - [`graph`] is a read-only petgraph view used for `--graph` output.

pub mod graph;
pub mod resolver;
pub mod state;

pub use graph::DependencyGraph;
pub use resolver::{resolve_to_vec, Resolver};
pub use state::{ResolutionState, TaskResolveState};
