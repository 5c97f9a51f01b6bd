//! Critical path calculation using forward and backward sweeps over a
//! topological order.

use crate::error::PertError;
use crate::graph::{Graph, VertexId};
use crate::store::AttributeStore;
use crate::{log_debug, log_passes};

/// Result of the forward sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ForwardSweep {
    /// Maximum earliest completion over all sinks (0 for an empty graph).
    pub critical_path_length: i64,
    /// Vertices without out-edges, in topological order.
    pub sinks: Vec<VertexId>,
}

/// Compute earliest completion times.
///
/// `order` must be a topological order covering every vertex of `graph`,
/// and every vertex's duration must already be set in `store`.
///
/// Fails with `PertError::DurationOverflow` when a path's total duration does
/// not fit in an `i64`.
pub(crate) fn forward_sweep<G: Graph>(
    graph: &G,
    store: &mut AttributeStore,
    order: &[VertexId],
    verbosity: u8,
) -> Result<ForwardSweep, PertError> {
    log_passes!(verbosity, "Forward sweep over {} vertices", order.len());

    for &u in order {
        let attrs = &mut store[u];
        attrs.earliest_completion = attrs.duration;
        attrs.critical_predecessor = None;
    }

    let mut critical_path_length = 0;
    let mut sinks = Vec::new();

    // Every predecessor of u precedes it in `order`, so EC(u) is final here.
    for &u in order {
        let ec_u = store[u].earliest_completion;
        let mut is_sink = true;

        for v in graph.successors(u) {
            is_sink = false;
            let successor = &mut store[v];
            let candidate = ec_u
                .checked_add(successor.duration)
                .ok_or(PertError::DurationOverflow { vertex: v })?;
            if candidate >= successor.earliest_completion {
                successor.earliest_completion = candidate;
                successor.critical_predecessor = Some(u);
            }
        }

        log_debug!(verbosity, "  EC[{}] = {}", u, ec_u);

        if is_sink {
            sinks.push(u);
            critical_path_length = critical_path_length.max(ec_u);
        }
    }

    log_passes!(
        verbosity,
        "Forward sweep done: {} sinks, critical path length {}",
        sinks.len(),
        critical_path_length
    );

    Ok(ForwardSweep {
        critical_path_length,
        sinks,
    })
}

/// Compute latest completion times and slack.
///
/// Must run after [`forward_sweep`] on the same `order`.
pub(crate) fn backward_sweep<G: Graph>(
    graph: &G,
    store: &mut AttributeStore,
    order: &[VertexId],
    critical_path_length: i64,
    verbosity: u8,
) {
    log_passes!(verbosity, "Backward sweep from length {}", critical_path_length);

    for &u in order {
        store[u].latest_completion = critical_path_length;
    }

    // Successors of u follow it in `order`, so their LC is final here.
    for &u in order.iter().rev() {
        let latest = graph
            .successors(u)
            .map(|v| store[v].latest_completion - store[v].duration)
            .fold(store[u].latest_completion, i64::min);

        let attrs = &mut store[u];
        attrs.latest_completion = latest;
        attrs.slack = latest - attrs.earliest_completion;

        log_debug!(
            verbosity,
            "  LC[{}] = {}, slack = {}",
            u,
            attrs.latest_completion,
            attrs.slack
        );
    }
}
