//! Directed graph abstraction consumed by the PERT core.
//!
//! The core never owns graph storage. It only needs dense, stable vertex
//! indices and out-edge enumeration, which [`Graph`] captures. Two
//! implementations are provided: the lightweight adjacency-list [`TaskGraph`]
//! used by the text and named-task front ends, and `petgraph`'s [`DiGraph`].

use std::ops::Range;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::error::PertError;

/// Stable zero-based vertex index.
pub type VertexId = usize;

/// Read-only view of a directed graph.
///
/// Vertex indices must be dense (`0..vertex_count()`) and must not change
/// while an analysis is running.
pub trait Graph {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Destinations of the out-edges of `v`, one item per edge.
    fn successors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_;

    fn out_degree(&self, v: VertexId) -> usize {
        self.successors(v).count()
    }

    /// All vertices in their fixed enumeration order.
    fn vertices(&self) -> Range<VertexId> {
        0..self.vertex_count()
    }
}

/// Adjacency-list directed graph with `usize` vertex indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskGraph {
    successors: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl TaskGraph {
    /// Create a graph with `count` vertices and no edges.
    pub fn with_vertices(count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); count],
            edge_count: 0,
        }
    }

    /// Build a graph from `(from, to)` pairs.
    pub fn from_edges(
        count: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self, PertError> {
        let mut graph = Self::with_vertices(count);
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Add the edge `from -> to`. Self-loops and parallel edges are allowed.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<(), PertError> {
        let count = self.successors.len();
        for vertex in [from, to] {
            if vertex >= count {
                return Err(PertError::VertexOutOfRange { vertex, count });
            }
        }
        self.successors[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}

impl Graph for TaskGraph {
    fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    fn successors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.successors.get(v).into_iter().flatten().copied()
    }

    fn out_degree(&self, v: VertexId) -> usize {
        self.successors.get(v).map_or(0, Vec::len)
    }
}

impl<N, E> Graph for DiGraph<N, E> {
    fn vertex_count(&self) -> usize {
        self.node_count()
    }

    fn successors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors_directed(NodeIndex::new(v), Direction::Outgoing)
            .map(|n| n.index())
    }
}
