//! Named output variables.
//!
//! Names follow a hierarchical convention using `|` as separator:
//! - `Carbon Stock|Forest` - CO₂ accumulated in the current forest rotation
//! - `Carbon Stock|Building` - CO₂ held by the building stock
//! - `Climate Neutrality` - forest CO₂ as a percentage of the reference impact
//!
//! The simulator pairs every output column with one of these definitions so
//! callers can label series without hard-coding strings.

use serde::Serialize;

/// Metadata attached to an output series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VariableDefinition {
    pub name: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
}

/// Define a `pub const` [`VariableDefinition`]
#[macro_export]
macro_rules! define_variable {
    ($ident:ident, name = $name:expr, unit = $unit:expr, description = $description:expr $(,)?) => {
        pub const $ident: $crate::variables::VariableDefinition =
            $crate::variables::VariableDefinition {
                name: $name,
                unit: $unit,
                description: $description,
            };
    };
}

// ============================================================================
// Carbon stocks
// ============================================================================

define_variable!(
    VAR_FOREST_CO2,
    name = "Carbon Stock|Forest",
    unit = "t CO2",
    description = "CO2 sequestered by the forest since the last clear-cut",
);

define_variable!(
    VAR_BUILDING_CO2,
    name = "Carbon Stock|Building",
    unit = "t CO2",
    description = "CO2 embodied in the building stock",
);

define_variable!(
    VAR_PRODUCT_CARBON,
    name = "Carbon Stock|Wood Products",
    unit = "t C",
    description = "Carbon held in long-lived harvested wood products",
);

define_variable!(
    VAR_FOREST_CARBON,
    name = "Carbon Stock|Forest Biomass",
    unit = "t C",
    description = "Carbon held in standing forest biomass",
);

// ============================================================================
// Balances and ratios
// ============================================================================

define_variable!(
    VAR_NET_BALANCE,
    name = "Carbon Balance|Net",
    unit = "t CO2",
    description = "Forest CO2 minus building CO2",
);

define_variable!(
    VAR_RELEASED_CO2,
    name = "Emissions|CO2|End of Life",
    unit = "t CO2",
    description = "Cumulative CO2 released when demolished timber is burnt",
);

define_variable!(
    VAR_NEUTRALITY,
    name = "Climate Neutrality",
    unit = "%",
    description = "Forest CO2 as a percentage of the reference climate impact",
);

define_variable!(
    VAR_POLICY_NEUTRALITY,
    name = "Climate Neutrality|Policy Adjusted",
    unit = "%",
    description = "Climate neutrality discounted by the assessment period policy cap",
);

define_variable!(
    VAR_NET_CARBON,
    name = "Carbon Balance|Forest and Products",
    unit = "t C",
    description = "Carbon in forest biomass plus harvested wood products",
);
