//! Text input for PERT projects.
//!
//! Format: whitespace-separated integers
//!
//! ```text
//! n m
//! u1 v1 w1
//! ...
//! um vm wm
//! d1 d2 ... dn
//! ```
//!
//! `n` vertices and `m` edges `u -> v` with 1-based endpoints. The edge
//! weight `w` is read but not used by PERT. The trailing integers are the
//! task durations in vertex order; input may end before all `n` are given.

use std::iter::Peekable;
use std::str::SplitWhitespace;

use crate::error::PertError;
use crate::graph::TaskGraph;

/// Built-in sample project: 10 tasks, 13 dependencies.
pub const SAMPLE_PROJECT: &str = "10 13  1 2 1   2 4 1   2 5 1   3 5 1   3 6 1   4 7 1   \
5 7 1   5 8 1   6 8 1   6 9 1   7 10 1   8 10 1   9 10 1    0 3 2 3 2 1 3 2 4 1";

/// Graph and durations read from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedProject {
    pub graph: TaskGraph,
    pub durations: Vec<i64>,
}

struct Tokens<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace().peekable(),
            position: 0,
        }
    }

    fn next_int(&mut self, what: &str) -> Result<i64, PertError> {
        self.position += 1;
        let token = self.inner.next().ok_or_else(|| PertError::Parse {
            position: self.position,
            message: format!("unexpected end of input, expected {what}"),
        })?;
        token.parse().map_err(|_| PertError::Parse {
            position: self.position,
            message: format!("expected {what}, found {token:?}"),
        })
    }

    fn is_exhausted(&mut self) -> bool {
        self.inner.peek().is_none()
    }

    fn next_count(&mut self, what: &str) -> Result<usize, PertError> {
        let value = self.next_int(what)?;
        usize::try_from(value).map_err(|_| self.error(format!("{what} must be non-negative")))
    }

    /// Read a 1-based vertex label and convert it to an index.
    fn next_vertex(&mut self, count: usize) -> Result<usize, PertError> {
        let label = self.next_int("vertex")?;
        match usize::try_from(label) {
            Ok(label) if (1..=count).contains(&label) => Ok(label - 1),
            _ => Err(self.error(format!("vertex {label} not in 1..={count}"))),
        }
    }

    fn error(&self, message: String) -> PertError {
        PertError::Parse {
            position: self.position,
            message,
        }
    }
}

/// Parse a project from text.
///
/// Durations are not range-checked here; negative values are reported by the
/// analysis itself. If the input ends early the returned `durations` is
/// shorter than the vertex count, and [`crate::pert_with_config`] decides
/// whether that is an error. Tokens after the last duration are ignored.
pub fn parse_project(text: &str) -> Result<ParsedProject, PertError> {
    let mut tokens = Tokens::new(text);
    let count = tokens.next_count("vertex count")?;
    let edges = tokens.next_count("edge count")?;

    let mut graph = TaskGraph::with_vertices(count);
    for _ in 0..edges {
        let from = tokens.next_vertex(count)?;
        let to = tokens.next_vertex(count)?;
        tokens.next_int("edge weight")?;
        graph.add_edge(from, to)?;
    }

    let mut durations = Vec::with_capacity(count);
    while durations.len() < count && !tokens.is_exhausted() {
        durations.push(tokens.next_int("duration")?);
    }

    Ok(ParsedProject { graph, durations })
}
