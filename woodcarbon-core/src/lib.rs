//! Shared building blocks for timber building carbon balance models:
//! parameters and their configuration files, physical constants, derived
//! per-run quantities, the annual time axis and named output variables.

pub mod constants;
pub mod derived;
pub mod parameters;
pub mod python;
pub mod timeseries;
pub mod variables;

pub mod errors;
