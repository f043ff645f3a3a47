//! Physical conversion factors for structural timber.
//!
//! 1 m³ of timber holds 750 kg of dry matter, half of which is carbon, and
//! 1 kg of carbon corresponds to 3.67 kg of CO₂.

use crate::timeseries::FloatValue;

/// Dry matter per cubic metre of timber
/// unit: kg / m^3
pub const DRY_MATTER_PER_VOLUME: FloatValue = 750.0;

/// Mass fraction of carbon in dry matter
/// unit: 1
pub const CARBON_FRACTION: FloatValue = 0.5;

/// CO₂ produced per kg of carbon
/// unit: kg CO2 / kg C
pub const CO2_PER_KG_CARBON: FloatValue = 3.67;

pub const KG_PER_TONNE: FloatValue = 1000.0;

/// CO₂ stored per cubic metre of timber
/// unit: t CO2 / m^3
pub const CO2_PER_VOLUME: FloatValue =
    DRY_MATTER_PER_VOLUME * CARBON_FRACTION * CO2_PER_KG_CARBON / KG_PER_TONNE;
