//! Task name interning.
//!
//! Maps task id strings to dense vertex indices so named tasks can be
//! analysed with the index-based core.

use rustc_hash::FxHashMap;

use crate::graph::VertexId;

/// Bidirectional task name <-> vertex index mapping.
#[derive(Debug, Clone, Default)]
pub struct TaskInterner {
    to_vertex: FxHashMap<String, VertexId>,
    names: Vec<String>,
}

impl TaskInterner {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_vertex: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Intern a name, returning its vertex index and whether it was new.
    pub fn intern(&mut self, name: &str) -> (VertexId, bool) {
        if let Some(&v) = self.to_vertex.get(name) {
            return (v, false);
        }
        let v = self.names.len();
        self.names.push(name.to_string());
        self.to_vertex.insert(name.to_string(), v);
        (v, true)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<VertexId> {
        self.to_vertex.get(name).copied()
    }

    #[inline]
    pub fn resolve(&self, v: VertexId) -> Option<&str> {
        self.names.get(v).map(|s| s.as_str())
    }

    /// Names in vertex index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
