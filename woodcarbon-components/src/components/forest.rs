//! Forest stand component
//!
//! Tracks the CO₂ taken up by a managed forest under rotation forestry.

use super::CarbonPool;
use serde::{Deserialize, Serialize};
use woodcarbon_core::derived::DerivedQuantities;
use woodcarbon_core::parameters::SimulationParameters;
use woodcarbon_core::timeseries::{FloatValue, Year};

/// Forest stand growing the timber for one building per rotation.
///
/// Uptake is linear within a rotation and the stock is reset by each
/// clear-cut:
///
/// $$ C_{forest}(t) = A \cdot P \cdot c_V \cdot (t \bmod R) $$
///
/// Where:
/// - $A$ is the forest area (ha)
/// - $P$ is the site productivity (m³/ha/yr)
/// - $c_V$ is the CO₂ stored per m³ of timber (t CO₂/m³)
/// - $R$ is the rotation period (yr)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestStand {
    /// unit: t CO2 / yr
    annual_uptake: FloatValue,
    /// unit: yr
    rotation_period: Year,
}

impl ForestStand {
    /// Create a stand from an uptake rate and a non-zero rotation period
    pub fn new(annual_uptake: FloatValue, rotation_period: Year) -> Self {
        debug_assert!(rotation_period > 0);
        Self {
            annual_uptake,
            rotation_period,
        }
    }

    pub fn from_parameters(parameters: &SimulationParameters, derived: &DerivedQuantities) -> Self {
        Self::new(
            derived.annual_forest_uptake(parameters.site_productivity),
            parameters.rotation_period_years,
        )
    }

    /// Years since the last clear-cut
    fn phase(&self, year: Year) -> Year {
        year % self.rotation_period
    }

    /// CO₂ stock just before a clear-cut
    pub fn full_rotation_co2(&self) -> FloatValue {
        self.annual_uptake * FloatValue::from(self.rotation_period)
    }
}

impl CarbonPool for ForestStand {
    fn co2_at(&self, year: Year) -> FloatValue {
        self.annual_uptake * FloatValue::from(self.phase(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_starts_empty() {
        let forest = ForestStand::new(0.9, 80);
        assert_eq!(forest.co2_at(0), 0.0);
    }

    #[test]
    fn test_sawtooth() {
        let forest = ForestStand::new(2.0, 5);
        let values: Vec<_> = (0..12).map(|t| forest.co2_at(t)).collect();
        assert_eq!(
            values,
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 0.0, 2.0, 4.0, 6.0, 8.0, 0.0, 2.0]
        );
    }

    #[test]
    fn test_stays_below_full_rotation() {
        let forest = ForestStand::new(0.9, 80);
        for t in 0..400 {
            assert!(forest.co2_at(t) < forest.full_rotation_co2());
        }
        assert!(is_close!(forest.co2_at(79), 0.9 * 79.0));
        assert_eq!(forest.co2_at(160), 0.0);
        assert!(forest.co2_at(161) > 0.0);
    }

    #[test]
    fn test_from_parameters() {
        let params = SimulationParameters::default();
        let derived = DerivedQuantities::from_parameters(&params).unwrap();
        let forest = ForestStand::from_parameters(&params, &derived);

        assert!(is_close!(
            forest.full_rotation_co2(),
            derived.co2_embodied_per_building
        ));
    }
}
