//! Harvested wood product pool
//!
//! A simpler carbon balance for long-lived timber products: the forest is
//! clear-cut every rotation and the harvested carbon is spread over the
//! product's service life.

use crate::components::CarbonPool;
use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use woodcarbon_core::errors::{WoodCarbonError, WoodCarbonResult};
use woodcarbon_core::parameters::{require_horizon, require_nonzero_years};
use woodcarbon_core::timeseries::{FloatValue, Year, YearAxis};
use woodcarbon_core::variables::{
    VariableDefinition, VAR_FOREST_CARBON, VAR_NET_CARBON, VAR_PRODUCT_CARBON,
};

use super::ForestStand;

/// Parameters for the product pool model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPoolParameters {
    /// unit: yr
    pub rotation_period_years: Year,

    /// Service life of the wood product
    /// unit: yr
    pub product_lifetime_years: Year,

    /// Carbon taken up by the forest each year
    /// unit: t C / yr
    pub annual_forest_uptake: FloatValue,

    /// Share of the forest carbon that ends up in the product
    /// unit: 1
    pub carbon_share_in_timber: FloatValue,

    /// Number of simulated years. The run covers `0..horizon_years`.
    /// unit: yr
    pub horizon_years: Year,
}

impl Default for ProductPoolParameters {
    fn default() -> Self {
        Self {
            rotation_period_years: 80,
            product_lifetime_years: 50,
            annual_forest_uptake: 1.5,
            carbon_share_in_timber: 0.5,
            horizon_years: 150,
        }
    }
}

impl ProductPoolParameters {
    pub fn validate(&self) -> WoodCarbonResult<()> {
        require_nonzero_years("rotation_period_years", self.rotation_period_years)?;
        require_nonzero_years("product_lifetime_years", self.product_lifetime_years)?;
        require_horizon("horizon_years", self.horizon_years)?;
        if !self.annual_forest_uptake.is_finite() || self.annual_forest_uptake < 0.0 {
            return Err(WoodCarbonError::invalid(
                "annual_forest_uptake",
                self.annual_forest_uptake,
                "must be a finite, non-negative number",
            ));
        }
        if !(0.0..=1.0).contains(&self.carbon_share_in_timber) {
            return Err(WoodCarbonError::invalid(
                "carbon_share_in_timber",
                self.carbon_share_in_timber,
                "must lie between 0 and 1",
            ));
        }
        Ok(())
    }
}

/// Output of [`simulate_product_pool`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPoolResult {
    pub years: YearAxis,
    /// unit: t C
    pub forest_carbon: Array1<FloatValue>,
    /// unit: t C
    pub product_carbon: Array1<FloatValue>,
    /// unit: t C
    pub net_carbon: Array1<FloatValue>,
}

impl ProductPoolResult {
    /// Each output column with its variable definition
    pub fn named_columns(&self) -> Vec<(VariableDefinition, &Array1<FloatValue>)> {
        vec![
            (VAR_FOREST_CARBON, &self.forest_carbon),
            (VAR_PRODUCT_CARBON, &self.product_carbon),
            (VAR_NET_CARBON, &self.net_carbon),
        ]
    }
}

/// Run the product pool model.
///
/// At each harvest (`t = kR`, `k >= 1`) the carbon `R * uptake * share` is
/// added as `harvest / lifetime` to every year in `[t, min(t + lifetime, horizon))`.
/// Overlapping products accumulate.
pub fn simulate_product_pool(
    parameters: &ProductPoolParameters,
) -> WoodCarbonResult<ProductPoolResult> {
    parameters.validate()?;

    let years = YearAxis::exclusive(parameters.horizon_years);
    let rotation = parameters.rotation_period_years;
    let lifetime = parameters.product_lifetime_years;
    let forest = ForestStand::new(parameters.annual_forest_uptake, rotation);

    let forest_carbon: Array1<FloatValue> = years.iter().map(|t| forest.co2_at(t)).collect();

    let harvest = forest.full_rotation_co2() * parameters.carbon_share_in_timber;
    let annual_share = harvest / FloatValue::from(lifetime);
    let mut product_carbon = Array1::<FloatValue>::zeros(years.len());
    for harvest_year in years.multiples_of(rotation).into_iter().filter(|t| *t > 0) {
        let end = harvest_year
            .saturating_add(lifetime)
            .min(parameters.horizon_years);
        debug!(
            "Harvest in year {}: {} t C in products until year {}",
            harvest_year, harvest, end
        );
        for t in harvest_year..end {
            product_carbon[t as usize] += annual_share;
        }
    }

    let net_carbon = &forest_carbon + &product_carbon;

    Ok(ProductPoolResult {
        years,
        forest_carbon,
        product_carbon,
        net_carbon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_no_harvest_before_first_rotation() {
        let result = simulate_product_pool(&ProductPoolParameters {
            horizon_years: 80,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(result.years.len(), 80);
        assert!(result.product_carbon.iter().all(|v| *v == 0.0));
        assert_eq!(result.net_carbon, result.forest_carbon);
    }

    #[test]
    fn test_harvest_is_spread_over_lifetime() {
        let result = simulate_product_pool(&ProductPoolParameters::default()).unwrap();

        // 80 yr * 1.5 t C/yr * 0.5 spread over 50 years
        let expected = 80.0 * 1.5 * 0.5 / 50.0;
        assert_eq!(result.product_carbon[79], 0.0);
        assert!(is_close!(result.product_carbon[80], expected));
        assert!(is_close!(result.product_carbon[129], expected));
        assert_eq!(result.product_carbon[130], 0.0);
        assert!(is_close!(result.forest_carbon[81], 1.5));
        assert!(is_close!(result.net_carbon[81], 1.5 + expected));
    }

    #[test]
    fn test_products_overlap_when_lifetime_exceeds_rotation() {
        let result = simulate_product_pool(&ProductPoolParameters {
            rotation_period_years: 10,
            product_lifetime_years: 15,
            annual_forest_uptake: 1.0,
            carbon_share_in_timber: 1.0,
            horizon_years: 40,
        })
        .unwrap();

        // Each harvest is 10 t C, i.e. 2/3 t C per year of product life
        let share = 10.0 / 15.0;
        assert!(is_close!(result.product_carbon[12], share));
        assert!(is_close!(result.product_carbon[22], 2.0 * share));
        assert!(is_close!(result.product_carbon[32], 2.0 * share));
        assert!(is_close!(result.product_carbon[39], share));
    }

    #[test]
    fn test_lifetime_longer_than_any_horizon() {
        let result = simulate_product_pool(&ProductPoolParameters {
            rotation_period_years: 10,
            product_lifetime_years: Year::MAX,
            horizon_years: 30,
            ..Default::default()
        })
        .unwrap();

        // Harvests at 10 and 20 stay in use until the end of the run
        assert_eq!(result.product_carbon[9], 0.0);
        assert!(result.product_carbon[29] > result.product_carbon[15]);
        assert!(result.product_carbon[15] > 0.0);
    }

    #[test]
    fn test_invalid_parameters() {
        let zero_lifetime = ProductPoolParameters {
            product_lifetime_years: 0,
            ..Default::default()
        };
        assert!(simulate_product_pool(&zero_lifetime).is_err());

        let zero_horizon = ProductPoolParameters {
            horizon_years: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_horizon.validate(),
            Err(WoodCarbonError::InvalidParameter {
                name: "horizon_years",
                ..
            })
        ));

        let bad_share = ProductPoolParameters {
            carbon_share_in_timber: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            bad_share.validate(),
            Err(WoodCarbonError::InvalidParameter {
                name: "carbon_share_in_timber",
                ..
            })
        ));
    }
}
