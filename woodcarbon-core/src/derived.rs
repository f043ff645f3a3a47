//! Quantities computed once per run from [`SimulationParameters`].

use crate::constants::CO2_PER_VOLUME;
use crate::errors::WoodCarbonResult;
use crate::parameters::SimulationParameters;
use crate::timeseries::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};

/// Derived constants of a run.
///
/// The forest area is sized so that one full rotation grows exactly the
/// timber volume of one building:
///
/// $$ A = \frac{V_{timber}}{P \cdot R} $$
///
/// where $P$ is the site productivity and $R$ the rotation period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedQuantities {
    /// unit: m^3
    pub total_timber_volume: FloatValue,
    /// unit: t CO2 / m^3
    pub co2_per_volume: FloatValue,
    /// unit: t CO2
    pub co2_embodied_per_building: FloatValue,
    /// unit: ha
    pub forest_area_ha: FloatValue,
    /// unit: t CO2
    pub building_total_climate_impact: FloatValue,
    /// Share of the sequestration that may be claimed within the assessment period
    /// unit: 1
    pub policy_cap_fraction: FloatValue,
}

impl DerivedQuantities {
    /// Validate `parameters` and compute the derived constants
    pub fn from_parameters(parameters: &SimulationParameters) -> WoodCarbonResult<Self> {
        parameters.validate()?;

        let rotation = FloatValue::from(parameters.rotation_period_years);
        let total_timber_volume = parameters.floor_area_m2 * parameters.timber_volume_per_m2;
        let derived = Self {
            total_timber_volume,
            co2_per_volume: CO2_PER_VOLUME,
            co2_embodied_per_building: total_timber_volume * CO2_PER_VOLUME,
            forest_area_ha: total_timber_volume / (parameters.site_productivity * rotation),
            building_total_climate_impact: parameters.floor_area_m2
                * parameters.building_climate_impact_per_m2,
            policy_cap_fraction: policy_cap_fraction(
                parameters.assessment_period_years.into(),
                rotation,
            ),
        };
        debug!("Derived quantities: {:?}", derived);
        Ok(derived)
    }

    /// Forest CO₂ uptake per year of growth
    /// unit: t CO2 / yr
    pub fn annual_forest_uptake(&self, site_productivity: FloatValue) -> FloatValue {
        self.forest_area_ha * site_productivity * self.co2_per_volume
    }

    /// Ceiling of the policy-adjusted neutrality ratio, in percent
    pub fn max_policy_neutrality(&self) -> FloatValue {
        100.0 * self.policy_cap_fraction
    }
}

/// `min(1, assessment / rotation)`
///
/// Only carbon sequestered within the assessment window may be claimed, so a
/// rotation longer than the window is discounted proportionally.
pub fn policy_cap_fraction(assessment_years: FloatValue, rotation_years: FloatValue) -> FloatValue {
    (assessment_years / rotation_years).min(1.0)
}
