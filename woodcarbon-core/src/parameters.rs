//! Simulation parameters
//!
//! Every run is driven by one immutable [`SimulationParameters`] record. Defaults
//! match the interactive defaults of the policy-adjusted neutrality model.
//! Parameters can be loaded from TOML:
//!
//! ```toml
//! floor_area_m2 = 150.0
//! timber_volume_per_m2 = 0.35
//! site_productivity = 8.0
//! rotation_period_years = 80
//! end_of_life_policy = "conventional_burn"
//! rebuild_on_demolition = false
//! ```
//!
//! Fields left out fall back to their defaults.

use crate::errors::{WoodCarbonError, WoodCarbonResult};
use crate::timeseries::{FloatValue, Year};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// What happens to the structural timber when a building is demolished
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndOfLifePolicy {
    /// Timber is reused in the successor building
    Reuse,
    /// Timber is burnt for energy and the CO₂ is captured and stored
    BioCcs,
    /// Timber is burnt and all of its CO₂ is released
    ConventionalBurn,
}

impl EndOfLifePolicy {
    /// Whether the timber carbon stays out of the atmosphere after demolition
    pub fn retains_carbon(&self) -> bool {
        match self {
            EndOfLifePolicy::Reuse | EndOfLifePolicy::BioCcs => true,
            EndOfLifePolicy::ConventionalBurn => false,
        }
    }
}

impl fmt::Display for EndOfLifePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndOfLifePolicy::Reuse => "reuse",
            EndOfLifePolicy::BioCcs => "bio_ccs",
            EndOfLifePolicy::ConventionalBurn => "conventional_burn",
        };
        write!(f, "{name}")
    }
}

/// Reference the forest carbon is compared against in the neutrality ratio
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutralityBaseline {
    /// The carbon currently held by the building stock, `building_co2(t)`
    EmbodiedCarbon,
    /// The constant total climate impact of the building
    TotalClimateImpact,
}

/// Inputs for a single carbon balance run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Gross floor area of the building
    /// unit: m^2
    pub floor_area_m2: FloatValue,

    /// Structural timber per unit floor area
    /// unit: m^3 / m^2
    pub timber_volume_per_m2: FloatValue,

    /// Annual timber volume growth per hectare of standing forest ("bonitet")
    /// unit: m^3 / ha / yr
    pub site_productivity: FloatValue,

    /// LCA assessment horizon.
    ///
    /// Only used as a chart marker and as the numerator of the policy cap,
    /// it does not bound the simulation.
    /// unit: yr
    pub assessment_period_years: Year,

    /// Years between planting and clear-cut
    /// unit: yr
    pub rotation_period_years: Year,

    /// Years a building stands before it is demolished
    /// unit: yr
    pub building_lifetime_years: Year,

    /// Last simulated year. The run covers `0..=total_horizon_years`.
    /// unit: yr
    pub total_horizon_years: Year,

    /// Total climate impact of the building per unit floor area
    /// unit: t CO2 / m^2
    pub building_climate_impact_per_m2: FloatValue,

    pub end_of_life_policy: EndOfLifePolicy,

    /// Build a replacement immediately after each demolition
    pub rebuild_on_demolition: bool,

    pub neutrality_baseline: NeutralityBaseline,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            floor_area_m2: 150.0,
            timber_volume_per_m2: 0.35,
            site_productivity: 8.0,
            assessment_period_years: 50,
            rotation_period_years: 80,
            building_lifetime_years: 100,
            total_horizon_years: 200,
            building_climate_impact_per_m2: 0.25,
            end_of_life_policy: EndOfLifePolicy::Reuse,
            rebuild_on_demolition: true,
            neutrality_baseline: NeutralityBaseline::TotalClimateImpact,
        }
    }
}

/// Longest simulated horizon accepted by the models
/// unit: yr
pub const MAX_HORIZON_YEARS: Year = 10_000;

fn require_positive(name: &'static str, value: FloatValue) -> WoodCarbonResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WoodCarbonError::invalid(
            name,
            value,
            "must be a finite number greater than zero",
        ))
    }
}

pub fn require_nonzero_years(name: &'static str, value: Year) -> WoodCarbonResult<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(WoodCarbonError::invalid(
            name,
            value,
            "must be at least one year",
        ))
    }
}

/// Horizons must cover at least one year and at most [`MAX_HORIZON_YEARS`]
pub fn require_horizon(name: &'static str, value: Year) -> WoodCarbonResult<()> {
    require_nonzero_years(name, value)?;
    if value > MAX_HORIZON_YEARS {
        return Err(WoodCarbonError::invalid(
            name,
            value,
            "must not exceed 10000 years",
        ));
    }
    Ok(())
}

impl SimulationParameters {
    /// Check the parameters before any derived quantity is computed.
    ///
    /// Zero rotation periods, lifetimes and productivities would otherwise
    /// turn into infinities or NaNs deep inside the accounting.
    pub fn validate(&self) -> WoodCarbonResult<()> {
        require_positive("floor_area_m2", self.floor_area_m2)?;
        require_positive("timber_volume_per_m2", self.timber_volume_per_m2)?;
        require_positive("site_productivity", self.site_productivity)?;
        require_nonzero_years("assessment_period_years", self.assessment_period_years)?;
        require_nonzero_years("rotation_period_years", self.rotation_period_years)?;
        require_nonzero_years("building_lifetime_years", self.building_lifetime_years)?;
        require_horizon("total_horizon_years", self.total_horizon_years)?;

        // A zero impact is legal, it only leaves the fixed-baseline ratio undefined
        let impact = self.building_climate_impact_per_m2;
        if !impact.is_finite() || impact < 0.0 {
            return Err(WoodCarbonError::invalid(
                "building_climate_impact_per_m2",
                impact,
                "must be a finite, non-negative number",
            ));
        }
        if impact == 0.0 && self.neutrality_baseline == NeutralityBaseline::TotalClimateImpact {
            warn!("Building climate impact is zero; every neutrality ratio will be undefined");
        }

        if self.total_horizon_years < self.rotation_period_years {
            warn!(
                "Horizon of {} years is shorter than the {} year rotation; no clear-cut is simulated",
                self.total_horizon_years, self.rotation_period_years
            );
        }
        if self.total_horizon_years < self.building_lifetime_years {
            warn!(
                "Horizon of {} years is shorter than the {} year building lifetime; no demolition is simulated",
                self.total_horizon_years, self.building_lifetime_years
            );
        }
        Ok(())
    }

    /// Parse and validate parameters from a TOML document
    pub fn from_toml_str(contents: &str) -> WoodCarbonResult<Self> {
        let parameters: SimulationParameters =
            toml::from_str(contents).map_err(|e| WoodCarbonError::Config(e.to_string()))?;
        parameters.validate()?;
        Ok(parameters)
    }

    /// Read, parse and validate a TOML parameter file
    pub fn from_toml_file(path: impl AsRef<Path>) -> WoodCarbonResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let parameters = Self::from_toml_str(&contents)?;
        info!("Loaded simulation parameters from {}", path.display());
        Ok(parameters)
    }

    pub fn to_toml_string(&self) -> WoodCarbonResult<String> {
        toml::to_string(self).map_err(|e| WoodCarbonError::Config(e.to_string()))
    }
}
