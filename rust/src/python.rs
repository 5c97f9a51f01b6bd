//! Python bindings.

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::models::{build_task_graph, Task};
use crate::{pert_with_config, PertConfig, PertError};

#[pymethods]
impl Task {
    #[new]
    #[pyo3(signature = (id, duration, dependencies=Vec::new()))]
    fn py_new(id: String, duration: i64, dependencies: Vec<String>) -> Self {
        Self {
            id,
            duration,
            dependencies,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(id={:?}, duration={}, dependencies={:?})",
            self.id, self.duration, self.dependencies
        )
    }
}

/// PERT results keyed by task id.
#[pyclass(name = "PertResult")]
#[derive(Clone, Debug)]
pub struct PyPertResult {
    #[pyo3(get)]
    pub critical_path_length: i64,
    #[pyo3(get)]
    pub critical_count: usize,
    #[pyo3(get)]
    pub earliest_completion: HashMap<String, i64>,
    #[pyo3(get)]
    pub latest_completion: HashMap<String, i64>,
    #[pyo3(get)]
    pub slack: HashMap<String, i64>,
    /// One chain of zero-slack tasks from a source to a sink.
    #[pyo3(get)]
    pub critical_path: Vec<String>,
    #[pyo3(get)]
    pub topological_order: Vec<String>,
}

#[pymethods]
impl PyPertResult {
    fn __repr__(&self) -> String {
        format!(
            "PertResult(critical_path_length={}, critical_count={}, critical_path={:?})",
            self.critical_path_length, self.critical_count, self.critical_path
        )
    }
}

/// Run PERT analysis over a list of tasks.
///
/// # Raises
/// * ValueError on circular dependencies, duplicate or unknown task ids,
///   or negative durations
#[pyfunction]
#[pyo3(signature = (tasks, verbosity=0))]
fn run_pert(tasks: Vec<Task>, verbosity: u8) -> PyResult<PyPertResult> {
    let project = build_task_graph(&tasks).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let name = |v: usize| project.names.resolve(v).unwrap_or_default().to_string();

    let config = PertConfig::default().with_verbosity(verbosity);
    let schedule = match pert_with_config(&project.graph, &project.durations, &config) {
        Ok(schedule) => schedule,
        Err(PertError::NotADag { vertex }) => {
            return Err(PyValueError::new_err(format!(
                "Circular dependency detected at task {}",
                name(vertex)
            )));
        }
        Err(e) => return Err(PyValueError::new_err(e.to_string())),
    };

    let per_task = |f: fn(&crate::VertexAttributes) -> i64| -> HashMap<String, i64> {
        (0..schedule.vertex_count())
            .filter_map(|v| schedule.attributes(v).map(|a| (name(v), f(a))))
            .collect()
    };

    Ok(PyPertResult {
        critical_path_length: schedule.critical_path_length(),
        critical_count: schedule.critical_vertex_count(),
        earliest_completion: per_task(|a| a.earliest_completion),
        latest_completion: per_task(|a| a.latest_completion),
        slack: per_task(|a| a.slack),
        critical_path: schedule.critical_path().into_iter().map(name).collect(),
        topological_order: schedule.order().iter().map(|&v| name(v)).collect(),
    })
}

/// The pert.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Task>()?;
    m.add_class::<PyPertResult>()?;
    m.add_function(wrap_pyfunction!(run_pert, m)?)?;
    Ok(())
}
