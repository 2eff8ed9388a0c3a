use crate::domain::model::{sample_roster, Pet};
use crate::utils::error::Result;

/// Somewhere an adoption center can load its starting roster from.
pub trait RosterProvider {
    fn center_name(&self) -> &str;
    fn load_pets(&self) -> Result<Vec<Pet>>;
}

/// The built-in demo roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleRoster;

impl RosterProvider for SampleRoster {
    fn center_name(&self) -> &str {
        "Sample Shelter"
    }

    fn load_pets(&self) -> Result<Vec<Pet>> {
        Ok(sample_roster())
    }
}
