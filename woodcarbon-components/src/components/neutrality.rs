//! Climate neutrality ratios and the net balance.

use woodcarbon_core::parameters::NeutralityBaseline;
use woodcarbon_core::timeseries::FloatValue;

/// Pick the impact the forest CO₂ is compared against
pub fn reference_impact(
    baseline: NeutralityBaseline,
    building_co2: FloatValue,
    total_climate_impact: FloatValue,
) -> FloatValue {
    match baseline {
        NeutralityBaseline::EmbodiedCarbon => building_co2,
        NeutralityBaseline::TotalClimateImpact => total_climate_impact,
    }
}

/// Forest CO₂ as a percentage of `reference`.
///
/// Undefined (`None`) when the reference is zero, e.g. after a burnt
/// building has been demolished.
pub fn neutrality_ratio(forest_co2: FloatValue, reference: FloatValue) -> Option<FloatValue> {
    if reference == 0.0 {
        None
    } else {
        Some(100.0 * forest_co2 / reference)
    }
}

/// Neutrality ratio discounted by the policy cap; stays undefined if the ratio is
pub fn policy_adjusted_neutrality(
    ratio: Option<FloatValue>,
    policy_cap_fraction: FloatValue,
) -> Option<FloatValue> {
    ratio.map(|ratio| ratio * policy_cap_fraction)
}

pub fn net_balance(forest_co2: FloatValue, building_co2: FloatValue) -> FloatValue {
    forest_co2 - building_co2
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_ratio() {
        assert_eq!(neutrality_ratio(5.0, 20.0), Some(25.0));
        assert_eq!(neutrality_ratio(0.0, 20.0), Some(0.0));
    }

    #[test]
    fn test_zero_reference_is_undefined() {
        assert_eq!(neutrality_ratio(5.0, 0.0), None);
        assert_eq!(policy_adjusted_neutrality(None, 0.625), None);
    }

    #[test]
    fn test_policy_adjustment() {
        let adjusted = policy_adjusted_neutrality(Some(80.0), 0.625).unwrap();
        assert!(is_close!(adjusted, 50.0));
    }

    #[test]
    fn test_reference_selection() {
        assert_eq!(
            reference_impact(NeutralityBaseline::EmbodiedCarbon, 3.0, 7.0),
            3.0
        );
        assert_eq!(
            reference_impact(NeutralityBaseline::TotalClimateImpact, 3.0, 7.0),
            7.0
        );
    }
}
