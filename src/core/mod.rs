pub mod matcher;
pub mod registry;
pub mod report;

pub use crate::domain::model::{FieldValue, Pet, Preferences};
pub use crate::domain::ports::RosterProvider;
pub use crate::utils::error::Result;
