//! Accounting components.
//!
//! Each component answers one question for a given year and holds only the
//! constants it needs, so every rule can be tested on its own.

mod building;
mod forest;
mod neutrality;
mod product_pool;

pub use building::{burnt_co2, released_co2, retained_co2, BuildingStock};
pub use forest::ForestStand;
pub use neutrality::{net_balance, neutrality_ratio, policy_adjusted_neutrality, reference_impact};
pub use product_pool::{simulate_product_pool, ProductPoolParameters, ProductPoolResult};

use woodcarbon_core::timeseries::{FloatValue, Year};

/// A carbon stock that can be evaluated at any simulated year
pub trait CarbonPool {
    /// CO₂ held by the pool in `year`
    /// unit: t CO2
    fn co2_at(&self, year: Year) -> FloatValue;
}
