pub mod allocation;
pub mod calculations;
pub mod constants;
pub mod reconcile;

pub use allocation::allocate;
pub use calculations::{
    compute_energy_density, compute_energy_requirement, EnergyDensity, EnergyRequirement,
};
pub use constants::*;
pub use reconcile::{remove_food_from_meals, DraftSplit};
