//! Carbon balance simulator
//!
//! Composes the forest stand and building stock components into a year-by-year
//! carbon balance and derives the climate neutrality ratios.

use crate::components::{
    net_balance, neutrality_ratio, policy_adjusted_neutrality, reference_impact, BuildingStock,
    CarbonPool, ForestStand,
};
use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use woodcarbon_core::derived::DerivedQuantities;
use woodcarbon_core::errors::WoodCarbonResult;
use woodcarbon_core::parameters::SimulationParameters;
use woodcarbon_core::timeseries::{FloatValue, Year, YearAxis};
use woodcarbon_core::variables::{
    VariableDefinition, VAR_BUILDING_CO2, VAR_FOREST_CO2, VAR_NET_BALANCE, VAR_NEUTRALITY,
    VAR_POLICY_NEUTRALITY, VAR_RELEASED_CO2,
};

/// Balance for a single simulated year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: Year,
    /// unit: t CO2
    pub forest_co2: FloatValue,
    /// unit: t CO2
    pub building_co2: FloatValue,
    /// Percent, `None` when the reference impact is zero
    pub neutrality_ratio: Option<FloatValue>,
    /// Percent, `None` when the reference impact is zero
    pub policy_adjusted_neutrality: Option<FloatValue>,
    /// unit: t CO2
    pub net_balance: FloatValue,
    /// Cumulative end-of-life emissions
    /// unit: t CO2
    pub released_co2: FloatValue,
}

/// Output of [`simulate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    parameters: SimulationParameters,
    derived: DerivedQuantities,
    full_rotation_forest_co2: FloatValue,
    records: Vec<YearRecord>,
}

fn column(records: &[YearRecord], f: impl Fn(&YearRecord) -> FloatValue) -> Array1<FloatValue> {
    records.iter().map(f).collect()
}

impl SimulationResult {
    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    /// One record per year in `0..=total_horizon_years`
    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn record(&self, year: Year) -> Option<&YearRecord> {
        self.records.get(year as usize)
    }

    /// unit: ha
    pub fn forest_area_ha(&self) -> FloatValue {
        self.derived.forest_area_ha
    }

    /// unit: t CO2
    pub fn co2_embodied_per_building(&self) -> FloatValue {
        self.derived.co2_embodied_per_building
    }

    pub fn policy_cap_fraction(&self) -> FloatValue {
        self.derived.policy_cap_fraction
    }

    /// Ceiling of the policy-adjusted neutrality, in percent
    pub fn max_policy_neutrality(&self) -> FloatValue {
        self.derived.max_policy_neutrality()
    }

    /// Forest CO₂ at the end of a full rotation, just before the clear-cut
    pub fn full_rotation_forest_co2(&self) -> FloatValue {
        self.full_rotation_forest_co2
    }

    pub fn years(&self) -> Array1<FloatValue> {
        column(&self.records, |r| FloatValue::from(r.year))
    }

    pub fn forest_co2(&self) -> Array1<FloatValue> {
        column(&self.records, |r| r.forest_co2)
    }

    pub fn building_co2(&self) -> Array1<FloatValue> {
        column(&self.records, |r| r.building_co2)
    }

    /// Neutrality ratio with undefined years as NaN
    pub fn neutrality_ratio(&self) -> Array1<FloatValue> {
        column(&self.records, |r| r.neutrality_ratio.unwrap_or(FloatValue::NAN))
    }

    /// Policy-adjusted neutrality with undefined years as NaN
    pub fn policy_adjusted_neutrality(&self) -> Array1<FloatValue> {
        column(&self.records, |r| {
            r.policy_adjusted_neutrality.unwrap_or(FloatValue::NAN)
        })
    }

    pub fn net_balance(&self) -> Array1<FloatValue> {
        column(&self.records, |r| r.net_balance)
    }

    pub fn released_co2(&self) -> Array1<FloatValue> {
        column(&self.records, |r| r.released_co2)
    }

    /// Each output column with its variable definition
    pub fn named_columns(&self) -> Vec<(VariableDefinition, Array1<FloatValue>)> {
        vec![
            (VAR_FOREST_CO2, self.forest_co2()),
            (VAR_BUILDING_CO2, self.building_co2()),
            (VAR_NEUTRALITY, self.neutrality_ratio()),
            (VAR_POLICY_NEUTRALITY, self.policy_adjusted_neutrality()),
            (VAR_NET_BALANCE, self.net_balance()),
            (VAR_RELEASED_CO2, self.released_co2()),
        ]
    }

    /// Years a new forest rotation starts: `0, R, 2R, ...` before the horizon
    pub fn rotation_boundaries(&self) -> Vec<Year> {
        YearAxis::exclusive(self.parameters.total_horizon_years)
            .multiples_of(self.parameters.rotation_period_years)
    }

    /// Building lifetime boundaries: `0, L, 2L, ...` before the horizon
    pub fn lifetime_boundaries(&self) -> Vec<Year> {
        YearAxis::exclusive(self.parameters.total_horizon_years)
            .multiples_of(self.parameters.building_lifetime_years)
    }

    /// Year the LCA assessment period ends
    pub fn assessment_marker(&self) -> Year {
        self.parameters.assessment_period_years
    }

    /// First year whose neutrality ratio reaches `threshold` percent
    pub fn first_year_reaching(&self, threshold: FloatValue, policy_adjusted: bool) -> Option<Year> {
        self.records
            .iter()
            .find(|r| {
                let ratio = if policy_adjusted {
                    r.policy_adjusted_neutrality
                } else {
                    r.neutrality_ratio
                };
                ratio.is_some_and(|ratio| ratio >= threshold)
            })
            .map(|r| r.year)
    }
}

/// Run the carbon balance for `parameters`.
///
/// Pure and deterministic: the same parameters always give the same result.
/// Fails only if the parameters are invalid.
pub fn simulate(parameters: &SimulationParameters) -> WoodCarbonResult<SimulationResult> {
    let derived = DerivedQuantities::from_parameters(parameters)?;
    let forest = ForestStand::from_parameters(parameters, &derived);
    let building = BuildingStock::from_parameters(parameters, &derived);

    let records: Vec<YearRecord> = YearAxis::inclusive(parameters.total_horizon_years)
        .iter()
        .map(|year| {
            let forest_co2 = forest.co2_at(year);
            let building_co2 = building.co2_at(year);
            let reference = reference_impact(
                parameters.neutrality_baseline,
                building_co2,
                derived.building_total_climate_impact,
            );
            let ratio = neutrality_ratio(forest_co2, reference);

            YearRecord {
                year,
                forest_co2,
                building_co2,
                neutrality_ratio: ratio,
                policy_adjusted_neutrality: policy_adjusted_neutrality(
                    ratio,
                    derived.policy_cap_fraction,
                ),
                net_balance: net_balance(forest_co2, building_co2),
                released_co2: building.released_co2_at(year),
            }
        })
        .collect();

    debug!(
        "Simulated {} years with policy {} (rebuild: {})",
        records.len(),
        parameters.end_of_life_policy,
        parameters.rebuild_on_demolition
    );

    Ok(SimulationResult {
        parameters: parameters.clone(),
        derived,
        full_rotation_forest_co2: forest.full_rotation_co2(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;
    use woodcarbon_core::errors::WoodCarbonError;
    use woodcarbon_core::parameters::{EndOfLifePolicy, NeutralityBaseline};

    #[test]
    fn test_covers_inclusive_horizon() {
        let result = simulate(&SimulationParameters {
            total_horizon_years: 10,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(result.records().len(), 11);
        assert_eq!(result.records().last().unwrap().year, 10);
        assert_eq!(result.years().len(), 11);
    }

    #[test]
    fn test_invalid_parameters_fail_fast() {
        let result = simulate(&SimulationParameters {
            rotation_period_years: 0,
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_overlong_horizon_fails_instead_of_wrapping() {
        let result = simulate(&SimulationParameters {
            total_horizon_years: Year::MAX,
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(WoodCarbonError::InvalidParameter {
                name: "total_horizon_years",
                ..
            })
        ));
    }

    #[test]
    fn test_undefined_ratio_after_burnt_demolition() {
        let result = simulate(&SimulationParameters {
            end_of_life_policy: EndOfLifePolicy::ConventionalBurn,
            rebuild_on_demolition: false,
            neutrality_baseline: NeutralityBaseline::EmbodiedCarbon,
            building_lifetime_years: 50,
            ..Default::default()
        })
        .unwrap();

        assert!(result.record(49).unwrap().neutrality_ratio.is_some());
        assert_eq!(result.record(50).unwrap().neutrality_ratio, None);
        assert_eq!(result.record(50).unwrap().policy_adjusted_neutrality, None);
        assert!(result.neutrality_ratio()[50].is_nan());
    }

    #[test]
    fn test_markers() {
        let result = simulate(&SimulationParameters::default()).unwrap();
        assert_eq!(result.rotation_boundaries(), vec![0, 80, 160]);
        assert_eq!(result.lifetime_boundaries(), vec![0, 100]);
        assert_eq!(result.assessment_marker(), 50);
        assert!(is_close!(result.max_policy_neutrality(), 62.5));
    }

    #[test]
    fn test_first_year_reaching() {
        // Fixed baseline of 37.5 t CO2; annual uptake of ~0.903 t CO2
        let result = simulate(&SimulationParameters::default()).unwrap();
        let uptake = result.full_rotation_forest_co2() / 80.0;
        let expected = (37.5 / uptake).ceil() as Year;

        assert_eq!(result.first_year_reaching(100.0, false), Some(expected));
        assert_eq!(result.first_year_reaching(1000.0, false), None);
        let expected_policy = ((37.5 / 0.625) / uptake).ceil() as Year;
        assert_eq!(result.first_year_reaching(100.0, true), Some(expected_policy));
        assert!(expected_policy > expected);
    }
}
