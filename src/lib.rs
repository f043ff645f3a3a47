//! Python extension module for the timber building carbon balance.

pub mod python;

pub use woodcarbon_components::{simulate, simulate_product_pool};
pub use woodcarbon_core::parameters::{EndOfLifePolicy, NeutralityBaseline, SimulationParameters};
