//! Python bindings for running simulations.
//!
//! Example:
//!     result = simulate({"end_of_life_policy": "bio_ccs", "rebuild_on_demolition": False})
//!     result.forest_co2      # numpy array, one value per year
//!     result.forest_area_ha  # float

use crate::components::{simulate_product_pool, ProductPoolParameters, ProductPoolResult};
use crate::simulator::{simulate, SimulationResult};
use numpy::{PyArray1, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3::{pymodule, Bound, PyResult};
use woodcarbon_core::python::{extract_parameters, to_python};
use woodcarbon_core::timeseries::{FloatValue, Year};

/// Python wrapper for SimulationResult
#[pyclass]
#[pyo3(name = "SimulationResult")]
#[derive(Debug, Clone)]
pub struct PySimulationResult(pub SimulationResult);

#[pymethods]
impl PySimulationResult {
    #[getter]
    fn years<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.years().to_pyarray_bound(py)
    }

    #[getter]
    fn forest_co2<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.forest_co2().to_pyarray_bound(py)
    }

    #[getter]
    fn building_co2<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.building_co2().to_pyarray_bound(py)
    }

    /// Undefined years are NaN
    #[getter]
    fn neutrality_ratio<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.neutrality_ratio().to_pyarray_bound(py)
    }

    /// Undefined years are NaN
    #[getter]
    fn policy_adjusted_neutrality<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.policy_adjusted_neutrality().to_pyarray_bound(py)
    }

    #[getter]
    fn net_balance<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.net_balance().to_pyarray_bound(py)
    }

    #[getter]
    fn released_co2<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.released_co2().to_pyarray_bound(py)
    }

    #[getter]
    fn forest_area_ha(&self) -> FloatValue {
        self.0.forest_area_ha()
    }

    #[getter]
    fn co2_embodied_per_building(&self) -> FloatValue {
        self.0.co2_embodied_per_building()
    }

    #[getter]
    fn policy_cap_fraction(&self) -> FloatValue {
        self.0.policy_cap_fraction()
    }

    #[getter]
    fn max_policy_neutrality(&self) -> FloatValue {
        self.0.max_policy_neutrality()
    }

    #[getter]
    fn full_rotation_forest_co2(&self) -> FloatValue {
        self.0.full_rotation_forest_co2()
    }

    #[getter]
    fn rotation_boundaries(&self) -> Vec<Year> {
        self.0.rotation_boundaries()
    }

    #[getter]
    fn lifetime_boundaries(&self) -> Vec<Year> {
        self.0.lifetime_boundaries()
    }

    #[getter]
    fn assessment_marker(&self) -> Year {
        self.0.assessment_marker()
    }

    /// Derived constants as a dictionary
    fn derived(&self, py: Python<'_>) -> PyResult<PyObject> {
        to_python(py, self.0.derived())
    }

    /// Per-year records as a list of dictionaries
    fn records(&self, py: Python<'_>) -> PyResult<PyObject> {
        to_python(py, &self.0.records())
    }

    /// Output columns keyed by variable name
    fn columns<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for (variable, values) in self.0.named_columns() {
            dict.set_item(variable.name, values.to_pyarray_bound(py))?;
        }
        Ok(dict)
    }

    #[pyo3(signature = (threshold, policy_adjusted=false))]
    fn first_year_reaching(&self, threshold: FloatValue, policy_adjusted: bool) -> Option<Year> {
        self.0.first_year_reaching(threshold, policy_adjusted)
    }

    fn __len__(&self) -> usize {
        self.0.records().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationResult(years={}, policy={}, forest_area_ha={:.4})",
            self.0.records().len(),
            self.0.parameters().end_of_life_policy,
            self.0.forest_area_ha()
        )
    }
}

/// Python wrapper for ProductPoolResult
#[pyclass]
#[pyo3(name = "ProductPoolResult")]
#[derive(Debug, Clone)]
pub struct PyProductPoolResult(pub ProductPoolResult);

#[pymethods]
impl PyProductPoolResult {
    #[getter]
    fn years<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.years.values().to_pyarray_bound(py)
    }

    #[getter]
    fn forest_carbon<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.forest_carbon.to_pyarray_bound(py)
    }

    #[getter]
    fn product_carbon<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.product_carbon.to_pyarray_bound(py)
    }

    #[getter]
    fn net_carbon<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.net_carbon.to_pyarray_bound(py)
    }
}

/// Run the carbon balance for a parameter dictionary
#[pyfunction]
#[pyo3(name = "simulate")]
fn py_simulate(parameters: &Bound<'_, PyAny>) -> PyResult<PySimulationResult> {
    let parameters = extract_parameters(parameters)?;
    Ok(PySimulationResult(simulate(&parameters)?))
}

/// Run the harvested wood product model for a parameter dictionary
#[pyfunction]
#[pyo3(name = "simulate_product_pool")]
fn py_simulate_product_pool(parameters: &Bound<'_, PyAny>) -> PyResult<PyProductPoolResult> {
    let parameters: ProductPoolParameters = pythonize::depythonize_bound(parameters.clone())
        .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
    Ok(PyProductPoolResult(simulate_product_pool(&parameters)?))
}

#[pymodule]
pub fn components(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySimulationResult>()?;
    m.add_class::<PyProductPoolResult>()?;
    m.add_function(wrap_pyfunction!(py_simulate, m)?)?;
    m.add_function(wrap_pyfunction!(py_simulate_product_pool, m)?)?;
    Ok(())
}
