use petgraph::graph::DiGraph;
use proptest::prelude::*;
use pert_rust::{pert, PertError, Schedule, TaskGraph};

#[derive(Debug, Clone)]
struct Project {
    count: usize,
    edges: Vec<(usize, usize)>,
    durations: Vec<i64>,
}

impl Project {
    fn graph(&self) -> TaskGraph {
        TaskGraph::from_edges(self.count, self.edges.iter().copied()).unwrap()
    }

    fn is_source(&self, v: usize) -> bool {
        !self.edges.iter().any(|&(_, to)| to == v)
    }

    fn is_sink(&self, v: usize) -> bool {
        !self.edges.iter().any(|&(from, _)| from == v)
    }
}

// Acyclic by construction: edges only go from a lower to a higher index.
// When `flip` is set the labels are mirrored so that vertex enumeration order
// runs against the edges.
fn dag_strategy(max_vertices: usize) -> impl Strategy<Value = Project> {
    (1..=max_vertices).prop_flat_map(|count| {
        (
            proptest::collection::vec((0..count, 0..count), 0..count * 2),
            proptest::collection::vec(0i64..20, count),
            any::<bool>(),
        )
            .prop_map(move |(raw_edges, durations, flip)| {
                let edges = raw_edges
                    .into_iter()
                    .filter(|(a, b)| a != b)
                    .map(|(a, b)| (a.min(b), a.max(b)))
                    .map(|(a, b)| {
                        if flip {
                            (count - 1 - a, count - 1 - b)
                        } else {
                            (a, b)
                        }
                    })
                    .collect();
                Project {
                    count,
                    edges,
                    durations,
                }
            })
    })
}

fn schedule_of(project: &Project) -> Schedule {
    pert(&project.graph(), &project.durations).unwrap()
}

proptest! {
    #[test]
    fn test_rank_increases_along_edges(project in dag_strategy(12)) {
        let schedule = schedule_of(&project);
        for &(u, v) in &project.edges {
            let ru = schedule.attributes(u).unwrap().rank;
            let rv = schedule.attributes(v).unwrap().rank;
            prop_assert!(ru < rv, "edge {} -> {}: rank {} >= {}", u, v, ru, rv);
        }
        let ranks: Vec<usize> = schedule
            .order()
            .iter()
            .map(|&v| schedule.attributes(v).unwrap().rank)
            .collect();
        prop_assert_eq!(ranks, (1..=project.count).collect::<Vec<_>>());
    }

    #[test]
    fn test_discovery_before_finish(project in dag_strategy(12)) {
        let schedule = schedule_of(&project);
        for v in 0..project.count {
            let attrs = schedule.attributes(v).unwrap();
            prop_assert!(attrs.discovery_time < attrs.finish_time);
        }
    }

    #[test]
    fn test_slack_non_negative(project in dag_strategy(12)) {
        let schedule = schedule_of(&project);
        for v in 0..project.count {
            prop_assert!(schedule.slack(v).unwrap() >= 0);
        }
    }

    #[test]
    fn test_length_is_max_sink_completion(project in dag_strategy(12)) {
        let schedule = schedule_of(&project);
        let sink_max = (0..project.count)
            .filter(|&v| project.is_sink(v))
            .map(|v| schedule.earliest_completion(v).unwrap())
            .max()
            .unwrap();
        prop_assert_eq!(schedule.critical_path_length(), sink_max);
    }

    #[test]
    fn test_critical_chain_spans_project(project in dag_strategy(12)) {
        let schedule = schedule_of(&project);
        let path = schedule.critical_path();

        prop_assert!(!path.is_empty());
        prop_assert!(project.is_source(path[0]));
        prop_assert!(project.is_sink(*path.last().unwrap()));
        for pair in path.windows(2) {
            prop_assert!(project.edges.contains(&(pair[0], pair[1])));
        }
        prop_assert!(path.iter().all(|&v| schedule.is_critical(v) == Some(true)));

        let total: i64 = path.iter().map(|&v| project.durations[v]).sum();
        prop_assert_eq!(total, schedule.critical_path_length());
    }

    #[test]
    fn test_rerun_is_identical(project in dag_strategy(12)) {
        prop_assert_eq!(schedule_of(&project), schedule_of(&project));
    }

    #[test]
    fn test_petgraph_agrees(project in dag_strategy(12)) {
        let schedule = schedule_of(&project);

        let mut graph: DiGraph<(), ()> = DiGraph::new();
        let nodes: Vec<_> = (0..project.count).map(|_| graph.add_node(())).collect();
        for &(u, v) in &project.edges {
            graph.add_edge(nodes[u], nodes[v], ());
        }
        let other = pert(&graph, &project.durations).unwrap();

        prop_assert_eq!(other.critical_path_length(), schedule.critical_path_length());
        for v in 0..project.count {
            prop_assert_eq!(other.earliest_completion(v), schedule.earliest_completion(v));
            prop_assert_eq!(other.latest_completion(v), schedule.latest_completion(v));
            prop_assert_eq!(other.slack(v), schedule.slack(v));
        }
    }

    #[test]
    fn test_back_edge_is_detected(project in dag_strategy(12), pick in any::<prop::sample::Index>()) {
        prop_assume!(!project.edges.is_empty());
        let (u, v) = project.edges[pick.index(project.edges.len())];
        let mut cyclic = project.clone();
        cyclic.edges.push((v, u));

        let result = pert(&cyclic.graph(), &cyclic.durations);
        let is_not_a_dag = matches!(result, Err(PertError::NotADag { .. }));
        prop_assert!(is_not_a_dag);
    }

    #[test]
    fn test_self_loop_is_detected(project in dag_strategy(12), pick in any::<prop::sample::Index>()) {
        let v = pick.index(project.count);
        let mut cyclic = project.clone();
        cyclic.edges.push((v, v));

        let result = pert(&cyclic.graph(), &cyclic.durations);
        let is_not_a_dag = matches!(result, Err(PertError::NotADag { .. }));
        prop_assert!(is_not_a_dag);
    }
}

#[test]
fn test_scenario_disconnected_sinks() {
    // 0 -> 1 -> 2 totals 12, 3 -> 4 totals 5.
    let project = Project {
        count: 5,
        edges: vec![(0, 1), (1, 2), (3, 4)],
        durations: vec![5, 4, 3, 2, 3],
    };
    let schedule = schedule_of(&project);
    assert_eq!(schedule.critical_path_length(), 12);
    assert_eq!(schedule.slack(4), Some(7));
    assert_eq!(schedule.critical_vertex_count(), 3);
}

#[test]
fn test_scenario_cycle_has_no_schedule() {
    let graph = TaskGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
    assert_eq!(pert(&graph, &[1, 1, 1]), Err(PertError::NotADag { vertex: 0 }));
}
