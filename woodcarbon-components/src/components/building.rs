//! Building stock component
//!
//! Tracks the CO₂ embodied in the building, and in its replacements, under
//! the chosen end-of-life policy.
//!
//! Demolition happens at `t = kL` for `k >= 1`. The first building stands on
//! `[0, L)`. Successors of a retained-carbon building are booked from `kL`.
//! Successors of a burnt building are booked from `kL + 1` and stand on
//! `[kL + 1, (k + 1)L)`, since the demolition year itself is a release year.
//!
//! | Policy                   | Rebuild | CO₂ in stock                        |
//! |--------------------------|---------|-------------------------------------|
//! | reuse / bio-CCS          | yes     | `(floor(t / L) + 1) * E`            |
//! | reuse / bio-CCS          | no      | `E`                                 |
//! | conventional burn        | yes     | `E`, except 0 in demolition years   |
//! | conventional burn        | no      | `E` for `t < L`, then 0             |

use super::CarbonPool;
use serde::{Deserialize, Serialize};
use woodcarbon_core::derived::DerivedQuantities;
use woodcarbon_core::parameters::{EndOfLifePolicy, SimulationParameters};
use woodcarbon_core::timeseries::{FloatValue, Year};

/// Number of demolitions at or before `year`
fn demolitions_up_to(year: Year, lifetime: Year, rebuild: bool) -> Year {
    let boundaries = year / lifetime;
    if rebuild {
        boundaries
    } else {
        boundaries.min(1)
    }
}

/// Stock when the timber carbon never returns to the atmosphere.
///
/// Used for both reuse and bio-CCS. With rebuilding, every lifetime boundary
/// adds one more building's worth of carbon.
pub fn retained_co2(year: Year, lifetime: Year, embodied: FloatValue, rebuild: bool) -> FloatValue {
    if rebuild {
        FloatValue::from(year / lifetime + 1) * embodied
    } else {
        embodied
    }
}

/// Stock when demolished timber is burnt and its carbon released.
///
/// With rebuilding the demolition year is a release year: the old building's
/// carbon is gone and the replacement is booked from the following year, so
/// every replacement stands for `L - 1` years on `[kL + 1, (k + 1)L)`.
pub fn burnt_co2(year: Year, lifetime: Year, embodied: FloatValue, rebuild: bool) -> FloatValue {
    let standing = if rebuild {
        year == 0 || year % lifetime != 0
    } else {
        year < lifetime
    };
    if standing {
        embodied
    } else {
        0.0
    }
}

/// Cumulative CO₂ released by end-of-life handling up to and including `year`
pub fn released_co2(
    year: Year,
    lifetime: Year,
    embodied: FloatValue,
    rebuild: bool,
    policy: EndOfLifePolicy,
) -> FloatValue {
    if policy.retains_carbon() {
        return 0.0;
    }
    FloatValue::from(demolitions_up_to(year, lifetime, rebuild)) * embodied
}

/// The building and its successors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingStock {
    /// unit: t CO2
    embodied_co2: FloatValue,
    /// unit: yr
    lifetime: Year,
    policy: EndOfLifePolicy,
    rebuild: bool,
}

impl BuildingStock {
    /// Create a stock from the CO₂ of one building and a non-zero lifetime
    pub fn new(
        embodied_co2: FloatValue,
        lifetime: Year,
        policy: EndOfLifePolicy,
        rebuild: bool,
    ) -> Self {
        debug_assert!(lifetime > 0);
        Self {
            embodied_co2,
            lifetime,
            policy,
            rebuild,
        }
    }

    pub fn from_parameters(parameters: &SimulationParameters, derived: &DerivedQuantities) -> Self {
        Self::new(
            derived.co2_embodied_per_building,
            parameters.building_lifetime_years,
            parameters.end_of_life_policy,
            parameters.rebuild_on_demolition,
        )
    }

    /// Cumulative CO₂ released to the atmosphere up to and including `year`
    pub fn released_co2_at(&self, year: Year) -> FloatValue {
        released_co2(
            year,
            self.lifetime,
            self.embodied_co2,
            self.rebuild,
            self.policy,
        )
    }
}

impl CarbonPool for BuildingStock {
    fn co2_at(&self, year: Year) -> FloatValue {
        match self.policy {
            EndOfLifePolicy::Reuse | EndOfLifePolicy::BioCcs => {
                retained_co2(year, self.lifetime, self.embodied_co2, self.rebuild)
            }
            EndOfLifePolicy::ConventionalBurn => {
                burnt_co2(year, self.lifetime, self.embodied_co2, self.rebuild)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: FloatValue = 10.0;

    #[test]
    fn test_retained_with_rebuild_steps_up() {
        assert_eq!(retained_co2(0, 50, E, true), 10.0);
        assert_eq!(retained_co2(49, 50, E, true), 10.0);
        assert_eq!(retained_co2(50, 50, E, true), 20.0);
        assert_eq!(retained_co2(149, 50, E, true), 30.0);
        assert_eq!(retained_co2(150, 50, E, true), 40.0);
    }

    #[test]
    fn test_retained_without_rebuild_is_constant() {
        for t in [0, 1, 49, 50, 51, 500] {
            assert_eq!(retained_co2(t, 50, E, false), E);
        }
    }

    #[test]
    fn test_burnt_without_rebuild_is_single_block() {
        assert_eq!(burnt_co2(0, 50, E, false), E);
        assert_eq!(burnt_co2(49, 50, E, false), E);
        assert_eq!(burnt_co2(50, 50, E, false), 0.0);
        assert_eq!(burnt_co2(120, 50, E, false), 0.0);
    }

    #[test]
    fn test_burnt_with_rebuild_drops_at_each_demolition() {
        let values: Vec<_> = (0..11).map(|t| burnt_co2(t, 5, E, true)).collect();
        assert_eq!(
            values,
            vec![E, E, E, E, E, 0.0, E, E, E, E, 0.0]
        );
    }

    #[test]
    fn test_bio_ccs_matches_reuse() {
        for rebuild in [true, false] {
            let reuse = BuildingStock::new(E, 30, EndOfLifePolicy::Reuse, rebuild);
            let ccs = BuildingStock::new(E, 30, EndOfLifePolicy::BioCcs, rebuild);
            for t in 0..200 {
                assert_eq!(reuse.co2_at(t), ccs.co2_at(t));
                assert_eq!(ccs.released_co2_at(t), 0.0);
            }
        }
    }

    #[test]
    fn test_released_co2() {
        let once = BuildingStock::new(E, 50, EndOfLifePolicy::ConventionalBurn, false);
        assert_eq!(once.released_co2_at(49), 0.0);
        assert_eq!(once.released_co2_at(50), E);
        assert_eq!(once.released_co2_at(200), E);

        let repeated = BuildingStock::new(E, 50, EndOfLifePolicy::ConventionalBurn, true);
        assert_eq!(repeated.released_co2_at(99), E);
        assert_eq!(repeated.released_co2_at(100), 2.0 * E);
        assert_eq!(repeated.released_co2_at(200), 4.0 * E);
    }

    #[test]
    fn test_burnt_replacements_stand_one_year_less() {
        // Lengths of consecutive runs of standing years
        let mut runs = Vec::new();
        let mut current = 0;
        for t in 0..=250 {
            if burnt_co2(t, 60, E, true) > 0.0 {
                current += 1;
            } else {
                runs.push(current);
                current = 0;
            }
        }
        runs.push(current);

        assert_eq!(runs, vec![60, 59, 59, 59, 10]);
    }

    #[test]
    fn test_retained_successor_is_booked_at_demolition() {
        assert_eq!(retained_co2(60, 60, E, true), 2.0 * E);
        assert_eq!(burnt_co2(60, 60, E, true), 0.0);
        assert_eq!(burnt_co2(61, 60, E, true), E);
    }
}
