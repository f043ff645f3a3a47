//! Python bindings for parameters and derived quantities.
//!
//! Parameters cross the boundary as plain dictionaries so that the
//! presentation layer can build them straight from its input widgets.

use crate::derived::DerivedQuantities;
use crate::errors::WoodCarbonError;
use crate::parameters::SimulationParameters;
use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;
use pyo3::{pymodule, Bound, PyResult};

impl From<WoodCarbonError> for PyErr {
    fn from(err: WoodCarbonError) -> PyErr {
        match err {
            WoodCarbonError::Io(e) => PyOSError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Convert a Python mapping into validated [`SimulationParameters`]
pub fn extract_parameters(parameters: &Bound<'_, PyAny>) -> PyResult<SimulationParameters> {
    let parameters: SimulationParameters = pythonize::depythonize_bound(parameters.clone())
        .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
    parameters.validate()?;
    Ok(parameters)
}

pub fn to_python<T: serde::Serialize>(py: Python<'_>, value: &T) -> PyResult<PyObject> {
    pythonize::pythonize(py, value).map_err(|e| PyValueError::new_err(format!("{}", e)))
}

/// Default parameters as a dictionary
#[pyfunction]
fn default_parameters(py: Python<'_>) -> PyResult<PyObject> {
    to_python(py, &SimulationParameters::default())
}

/// Load and validate a TOML parameter file, returning a dictionary
#[pyfunction]
fn load_parameters(py: Python<'_>, path: &str) -> PyResult<PyObject> {
    let parameters = SimulationParameters::from_toml_file(path)?;
    to_python(py, &parameters)
}

/// Derived constants (timber volume, forest area, policy cap, ...) for a parameter dictionary
#[pyfunction]
fn derived_quantities(py: Python<'_>, parameters: &Bound<'_, PyAny>) -> PyResult<PyObject> {
    let parameters = extract_parameters(parameters)?;
    let derived = DerivedQuantities::from_parameters(&parameters)?;
    to_python(py, &derived)
}

#[pymodule]
pub fn core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(default_parameters, m)?)?;
    m.add_function(wrap_pyfunction!(load_parameters, m)?)?;
    m.add_function(wrap_pyfunction!(derived_quantities, m)?)?;
    Ok(())
}
