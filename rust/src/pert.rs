//! PERT analysis runs and their query surface.
//!
//! [`pert`] / [`pert_with_config`] run the whole analysis in one call and hand
//! back an immutable [`Schedule`]. [`Pert`] is the stateful run object for
//! callers that assign durations one vertex at a time and query afterwards.

use crate::config::PertConfig;
use crate::engine::{backward_sweep, forward_sweep};
use crate::error::PertError;
use crate::graph::{Graph, VertexId};
use crate::store::{AttributeStore, VertexAttributes};
use crate::topo::topological_order;
use crate::{log_passes, log_summary};

/// Completed PERT analysis of an acyclic graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    attributes: AttributeStore,
    order: Vec<VertexId>,
    sinks: Vec<VertexId>,
    critical_path_length: i64,
}

impl Schedule {
    pub fn vertex_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn earliest_completion(&self, v: VertexId) -> Option<i64> {
        self.attributes.get(v).map(|a| a.earliest_completion)
    }

    pub fn latest_completion(&self, v: VertexId) -> Option<i64> {
        self.attributes.get(v).map(|a| a.latest_completion)
    }

    pub fn slack(&self, v: VertexId) -> Option<i64> {
        self.attributes.get(v).map(|a| a.slack)
    }

    pub fn is_critical(&self, v: VertexId) -> Option<bool> {
        self.attributes.get(v).map(VertexAttributes::is_critical)
    }

    /// Project length: the maximum earliest completion over all sinks.
    pub fn critical_path_length(&self) -> i64 {
        self.critical_path_length
    }

    /// Number of vertices with zero slack.
    pub fn critical_vertex_count(&self) -> usize {
        self.attributes.iter().filter(|a| a.is_critical()).count()
    }

    /// Full attribute record of `v`, including traversal stamps and rank.
    pub fn attributes(&self, v: VertexId) -> Option<&VertexAttributes> {
        self.attributes.get(v)
    }

    /// Vertices in topological order, sources first.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// Vertices without out-edges, in topological order.
    pub fn sinks(&self) -> &[VertexId] {
        &self.sinks
    }

    /// One source-to-sink chain of critical vertices.
    ///
    /// Starts from the first sink (in topological order) whose earliest
    /// completion equals the critical path length and follows the
    /// predecessors that determined each earliest completion back to a
    /// source. The durations along the chain sum to the critical path length.
    /// Empty for an empty graph.
    pub fn critical_path(&self) -> Vec<VertexId> {
        let end = self
            .sinks
            .iter()
            .copied()
            .find(|&s| self.attributes[s].earliest_completion == self.critical_path_length);

        let mut path = Vec::new();
        let mut cursor = end;
        while let Some(v) = cursor {
            path.push(v);
            cursor = self.attributes[v].critical_predecessor;
        }
        path.reverse();
        path
    }
}

/// Run a PERT analysis with the default configuration.
///
/// `durations[i]` is the duration of the vertex with index `i`.
///
/// # Returns
/// * `Ok(Schedule)` for an acyclic graph
/// * `Err(PertError::NotADag)` if the graph has a cycle
/// * `Err(PertError::TooFewDurations)` / `Err(PertError::InvalidDuration)` for bad input
pub fn pert<G: Graph>(graph: &G, durations: &[i64]) -> Result<Schedule, PertError> {
    pert_with_config(graph, durations, &PertConfig::default())
}

/// Run a PERT analysis.
///
/// In lenient mode a duration array shorter than the vertex count is padded
/// with zeros; extra entries are ignored in both modes.
pub fn pert_with_config<G: Graph>(
    graph: &G,
    durations: &[i64],
    config: &PertConfig,
) -> Result<Schedule, PertError> {
    let count = graph.vertex_count();
    if config.strict_durations && durations.len() < count {
        return Err(PertError::TooFewDurations {
            expected: count,
            actual: durations.len(),
        });
    }
    let resolved = (0..count)
        .map(|v| validate_duration(v, durations.get(v).copied().unwrap_or(0)))
        .collect::<Result<Vec<_>, _>>()?;
    analyze(graph, resolved, config.verbosity)
}

fn validate_duration(vertex: VertexId, duration: i64) -> Result<i64, PertError> {
    if duration < 0 {
        return Err(PertError::InvalidDuration { vertex, duration });
    }
    Ok(duration)
}

fn analyze<G: Graph>(
    graph: &G,
    durations: Vec<i64>,
    verbosity: u8,
) -> Result<Schedule, PertError> {
    let mut attributes = AttributeStore::with_durations(durations);

    log_passes!(verbosity, "Topological sort of {} vertices", graph.vertex_count());
    let order = match topological_order(graph, &mut attributes, verbosity) {
        Ok(order) => order,
        Err(err) => {
            log_summary!(verbosity, "{}", err);
            return Err(err);
        }
    };

    let forward = forward_sweep(graph, &mut attributes, &order, verbosity)?;
    backward_sweep(
        graph,
        &mut attributes,
        &order,
        forward.critical_path_length,
        verbosity,
    );

    let schedule = Schedule {
        attributes,
        order,
        sinks: forward.sinks,
        critical_path_length: forward.critical_path_length,
    };
    log_summary!(
        verbosity,
        "PERT: critical path length {}, {} critical vertices",
        schedule.critical_path_length,
        schedule.critical_vertex_count()
    );
    Ok(schedule)
}

#[derive(Debug, Clone)]
enum RunState {
    Pending,
    Scheduled(Schedule),
    NotADag(VertexId),
}

/// Stateful PERT run over a borrowed graph.
///
/// Durations are assigned per vertex, then [`Pert::run`] computes the
/// schedule. Queries before a successful run fail with
/// [`PertError::NotReady`]; after a cycle was found they keep returning
/// [`PertError::NotADag`]. Changing a duration discards earlier results.
#[derive(Debug, Clone)]
pub struct Pert<'g, G: Graph> {
    graph: &'g G,
    durations: Vec<Option<i64>>,
    config: PertConfig,
    state: RunState,
}

impl<'g, G: Graph> Pert<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, PertConfig::default())
    }

    pub fn with_config(graph: &'g G, config: PertConfig) -> Self {
        Self {
            graph,
            durations: vec![None; graph.vertex_count()],
            config,
            state: RunState::Pending,
        }
    }

    /// Assign the duration of `v`.
    pub fn set_duration(&mut self, v: VertexId, duration: i64) -> Result<(), PertError> {
        let count = self.durations.len();
        let slot = self
            .durations
            .get_mut(v)
            .ok_or(PertError::VertexOutOfRange { vertex: v, count })?;
        *slot = Some(validate_duration(v, duration)?);
        self.state = RunState::Pending;
        Ok(())
    }

    /// Run the analysis with the durations assigned so far.
    pub fn run(&mut self) -> Result<&Schedule, PertError> {
        let durations = self
            .durations
            .iter()
            .enumerate()
            .map(|(vertex, d)| match d {
                Some(d) => Ok(*d),
                None if self.config.strict_durations => {
                    Err(PertError::MissingDuration { vertex })
                }
                None => Ok(0),
            })
            .collect::<Result<Vec<_>, _>>()?;

        match analyze(self.graph, durations, self.config.verbosity) {
            Ok(schedule) => {
                self.state = RunState::Scheduled(schedule);
                self.schedule()
            }
            Err(PertError::NotADag { vertex }) => {
                self.state = RunState::NotADag(vertex);
                Err(PertError::NotADag { vertex })
            }
            Err(err) => Err(err),
        }
    }

    /// The computed schedule.
    pub fn schedule(&self) -> Result<&Schedule, PertError> {
        match &self.state {
            RunState::Scheduled(schedule) => Ok(schedule),
            RunState::NotADag(vertex) => Err(PertError::NotADag { vertex: *vertex }),
            RunState::Pending => Err(PertError::NotReady),
        }
    }

    pub fn earliest_completion(&self, v: VertexId) -> Result<i64, PertError> {
        self.query(v, |s| s.earliest_completion(v))
    }

    pub fn latest_completion(&self, v: VertexId) -> Result<i64, PertError> {
        self.query(v, |s| s.latest_completion(v))
    }

    pub fn slack(&self, v: VertexId) -> Result<i64, PertError> {
        self.query(v, |s| s.slack(v))
    }

    pub fn is_critical(&self, v: VertexId) -> Result<bool, PertError> {
        self.query(v, |s| s.is_critical(v))
    }

    pub fn critical_path_length(&self) -> Result<i64, PertError> {
        Ok(self.schedule()?.critical_path_length())
    }

    pub fn critical_vertex_count(&self) -> Result<usize, PertError> {
        Ok(self.schedule()?.critical_vertex_count())
    }

    fn query<T>(
        &self,
        v: VertexId,
        f: impl FnOnce(&Schedule) -> Option<T>,
    ) -> Result<T, PertError> {
        let schedule = self.schedule()?;
        f(schedule).ok_or(PertError::VertexOutOfRange {
            vertex: v,
            count: schedule.vertex_count(),
        })
    }
}
