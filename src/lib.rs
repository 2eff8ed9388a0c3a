pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{FeatureFlags, RosterConfig};

pub use core::{
    matcher::AdoptionCenter,
    registry::{add_exotic_pet, add_pet, available_pets, register_new_pet, Registration},
};
pub use domain::fee::{calculate_adoption_fee, AdoptionFee};
pub use domain::model::{FieldValue, Pet, Preferences};
pub use utils::error::{AdoptionError, Result};
