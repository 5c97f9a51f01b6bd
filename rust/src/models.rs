//! Named task input.

use crate::error::PertError;
use crate::graph::TaskGraph;
use crate::interner::TaskInterner;

/// A task with a duration and the ids of the tasks it must wait for.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all, set_all))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub duration: i64,
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, duration: i64, dependencies: &[&str]) -> Self {
        Self {
            id: id.into(),
            duration,
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Task list converted to graph form. Vertex `i` is `tasks[i]`.
#[derive(Debug, Clone)]
pub struct TaskProject {
    pub graph: TaskGraph,
    pub durations: Vec<i64>,
    pub names: TaskInterner,
}

/// Build a graph with one vertex per task and an edge from every dependency
/// to its dependent.
///
/// # Errors
/// * `PertError::DuplicateTask` if two tasks share an id
/// * `PertError::UnknownTask` if a dependency names no task in `tasks`
pub fn build_task_graph(tasks: &[Task]) -> Result<TaskProject, PertError> {
    let mut names = TaskInterner::with_capacity(tasks.len());
    for task in tasks {
        let (_, is_new) = names.intern(&task.id);
        if !is_new {
            return Err(PertError::DuplicateTask(task.id.clone()));
        }
    }

    let mut graph = TaskGraph::with_vertices(tasks.len());
    for (v, task) in tasks.iter().enumerate() {
        for dep in &task.dependencies {
            let u = names
                .get(dep)
                .ok_or_else(|| PertError::UnknownTask(dep.clone()))?;
            graph.add_edge(u, v)?;
        }
    }

    Ok(TaskProject {
        graph,
        durations: tasks.iter().map(|t| t.duration).collect(),
        names,
    })
}
