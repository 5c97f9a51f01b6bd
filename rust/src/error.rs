//! Error types for PERT analysis.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors that can occur while building, running or querying a PERT analysis.
///
/// `NotADag` is an expected outcome of analysing an arbitrary graph rather
/// than a programming error; callers are expected to branch on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PertError {
    #[error("Graph is not a DAG: back edge into vertex {vertex}")]
    NotADag { vertex: VertexId },
    #[error("PERT results queried before a successful run")]
    NotReady,
    #[error("Invalid duration {duration} for vertex {vertex}: durations must be non-negative")]
    InvalidDuration { vertex: VertexId, duration: i64 },
    #[error("No duration assigned to vertex {vertex}")]
    MissingDuration { vertex: VertexId },
    #[error("Expected {expected} durations, got {actual}")]
    TooFewDurations { expected: usize, actual: usize },
    #[error("Earliest completion of vertex {vertex} overflows i64")]
    DurationOverflow { vertex: VertexId },
    #[error("Vertex {vertex} out of range for graph with {count} vertices")]
    VertexOutOfRange { vertex: VertexId, count: usize },
    #[error("Unknown task referenced as dependency: {0}")]
    UnknownTask(String),
    #[error("Duplicate task id: {0}")]
    DuplicateTask(String),
    #[error("Parse error at token {position}: {message}")]
    Parse { position: usize, message: String },
}
