//! Plain-text rendering of a PERT schedule.

use std::fmt;

use crate::graph::Graph;
use crate::pert::Schedule;

/// Line printed in place of a report when the graph has a cycle.
pub const NOT_A_DAG_MESSAGE: &str = "Invalid graph: not a DAG";

/// Tab-separated table of per-vertex results.
///
/// Vertices are labelled 1-based unless explicit labels are supplied.
pub struct Report<'a> {
    schedule: &'a Schedule,
    labels: Option<&'a [String]>,
}

impl<'a> Report<'a> {
    pub fn new(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            labels: None,
        }
    }

    /// Use `labels[v]` as the name of vertex `v`.
    pub fn with_labels(mut self, labels: &'a [String]) -> Self {
        self.labels = Some(labels);
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.schedule;
        writeln!(
            f,
            "Number of critical vertices: {}",
            schedule.critical_vertex_count()
        )?;
        writeln!(f, "u\tEC\tLC\tSlack\tCritical")?;
        for v in 0..schedule.vertex_count() {
            let Some(attrs) = schedule.attributes(v) else {
                continue;
            };
            match self.labels.and_then(|labels| labels.get(v)) {
                Some(label) => write!(f, "{label}")?,
                None => write!(f, "{}", v + 1)?,
            }
            writeln!(
                f,
                "\t{}\t{}\t{}\t{}",
                attrs.earliest_completion,
                attrs.latest_completion,
                attrs.slack,
                attrs.is_critical()
            )?;
        }
        Ok(())
    }
}

/// Adjacency listing of a graph: a size header, then one line per vertex
/// with its successors. Vertices are labelled 1-based.
pub struct GraphListing<'a, G: Graph> {
    graph: &'a G,
}

impl<'a, G: Graph> GraphListing<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: Graph> fmt::Display for GraphListing<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph;
        let edges: usize = graph.vertices().map(|v| graph.out_degree(v)).sum();
        writeln!(f, "Graph: n: {}, m: {}", graph.vertex_count(), edges)?;
        for u in graph.vertices() {
            write!(f, "{} :", u + 1)?;
            for v in graph.successors(u) {
                write!(f, " {}", v + 1)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
