//! PERT (Program Evaluation and Review Technique) analysis of task graphs.
//!
//! Given task durations and dependency edges, this crate checks that the
//! dependency graph is acyclic and computes, for every task, its earliest and
//! latest completion times, its slack and whether it lies on the critical
//! path, along with the overall project length.
//!
//! The analysis runs in three stages over any [`Graph`]:
//! 1. Depth-first topological sort with cycle detection
//! 2. Forward sweep for earliest completion times
//! 3. Backward sweep for latest completion times and slack
//!
//! [`pert`] runs all three and returns a [`Schedule`].

pub mod config;
mod engine;
pub mod error;
pub mod graph;
pub mod input;
pub mod interner;
pub mod logging;
pub mod models;
pub mod pert;
#[cfg(feature = "python")]
mod python;
pub mod report;
pub mod store;
mod topo;

pub use config::PertConfig;
pub use error::PertError;
pub use graph::{Graph, TaskGraph, VertexId};
pub use input::{parse_project, ParsedProject, SAMPLE_PROJECT};
pub use interner::TaskInterner;
pub use models::{build_task_graph, Task, TaskProject};
pub use pert::{pert, pert_with_config, Pert, Schedule};
pub use report::{GraphListing, Report, NOT_A_DAG_MESSAGE};
pub use store::{AttributeStore, Color, VertexAttributes};
