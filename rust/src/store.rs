//! Per-vertex analysis state for a single PERT run.

use std::ops::{Index, IndexMut};

use crate::graph::VertexId;

/// Depth-first traversal marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

/// Analysis attributes of one vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexAttributes {
    /// Traversal state.
    pub color: Color,
    /// Vertex that discovered this one during traversal (None for roots).
    pub parent: Option<VertexId>,
    /// Traversal clock value when the vertex was entered.
    pub discovery_time: usize,
    /// Traversal clock value when the vertex was finished.
    pub finish_time: usize,
    /// Position in topological order, 1-based.
    pub rank: usize,
    /// Task processing time.
    pub duration: i64,
    /// Earliest completion time (EC).
    pub earliest_completion: i64,
    /// Latest completion time (LC).
    pub latest_completion: i64,
    /// Slack = LC - EC.
    pub slack: i64,
    /// Predecessor that determined `earliest_completion` (None for sources).
    pub critical_predecessor: Option<VertexId>,
}

impl VertexAttributes {
    pub fn is_critical(&self) -> bool {
        self.slack == 0
    }
}

/// Attribute records for every vertex of a graph, addressed by vertex index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeStore {
    attrs: Vec<VertexAttributes>,
}

impl AttributeStore {
    /// Create one record per duration, vertex `i` getting `durations[i]`.
    pub fn with_durations(durations: Vec<i64>) -> Self {
        Self {
            attrs: durations
                .into_iter()
                .map(|duration| VertexAttributes {
                    duration,
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[inline]
    pub fn get(&self, v: VertexId) -> Option<&VertexAttributes> {
        self.attrs.get(v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VertexAttributes> {
        self.attrs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut VertexAttributes> {
        self.attrs.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl Index<VertexId> for AttributeStore {
    type Output = VertexAttributes;

    #[inline]
    fn index(&self, v: VertexId) -> &VertexAttributes {
        &self.attrs[v]
    }
}

impl IndexMut<VertexId> for AttributeStore {
    #[inline]
    fn index_mut(&mut self, v: VertexId) -> &mut VertexAttributes {
        &mut self.attrs[v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_initial_state() {
        let store = AttributeStore::with_durations(vec![3, 0, 7]);
        assert_eq!(store.len(), 3);
        assert_eq!(store[2].duration, 7);
        assert_eq!(store[0].color, Color::Unvisited);
        assert_eq!(store[0].parent, None);
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_is_critical() {
        let mut attrs = VertexAttributes {
            earliest_completion: 5,
            latest_completion: 5,
            slack: 0,
            ..Default::default()
        };
        assert!(attrs.is_critical());
        attrs.slack = 2;
        assert!(!attrs.is_critical());
    }
}
