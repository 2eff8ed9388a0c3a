use crate::config::FeatureFlags;
use crate::core::registry::{self, Registration};
use crate::domain::model::{sample_roster, Pet, Preferences};
use crate::domain::ports::RosterProvider;
use crate::utils::error::{AdoptionError, Result};

/// Owns a roster of pets and matches adopters against it.
///
/// Not synchronised; wrap it in a `Mutex` to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoptionCenter {
    pets: Vec<Pet>,
}

impl AdoptionCenter {
    pub fn new(pets: Vec<Pet>) -> Self {
        Self { pets }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Loads the provider's roster, registering each pet in turn so that
    /// repeated names are warned about and dropped.
    pub fn from_provider<P: RosterProvider>(provider: &P) -> Result<Self> {
        let mut center = Self::empty();
        let mut skipped = 0usize;
        for pet in provider.load_pets()? {
            if !center.register(pet)?.is_inserted() {
                skipped += 1;
            }
        }
        tracing::info!(
            "Loaded {} pets for {} ({} duplicates skipped)",
            center.len(),
            provider.center_name(),
            skipped
        );
        Ok(center)
    }

    /// Name of the first pet that satisfies every preference, if any.
    pub fn match_pet(&self, preferences: &Preferences) -> Option<&str> {
        let found = self
            .pets
            .iter()
            .find(|pet| preferences.is_satisfied_by(pet))
            .map(|pet| pet.name.as_str());
        tracing::debug!(
            "Matching {} preferences against {} pets: {:?}",
            preferences.len(),
            self.pets.len(),
            found
        );
        found
    }

    pub fn add_pet(&mut self, pet: Pet) {
        registry::add_pet(&mut self.pets, pet);
    }

    pub fn add_exotic_pet(&mut self, pet: Pet, flags: FeatureFlags) {
        registry::add_exotic_pet(&mut self.pets, pet, flags);
    }

    pub fn register(&mut self, pet: Pet) -> Result<Registration> {
        registry::register_new_pet(pet, &mut self.pets)
    }

    pub fn replace_pets(&mut self, pets: Vec<Pet>) {
        self.pets = pets;
    }

    pub fn mark_adopted(&mut self, name: &str) -> Result<()> {
        let pet = self
            .pets
            .iter_mut()
            .find(|pet| pet.name == name)
            .ok_or_else(|| AdoptionError::PetNotFound {
                name: name.to_string(),
            })?;
        pet.adopted = Some(true);
        tracing::info!("{} marked as adopted", name);
        Ok(())
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn available_pets(&self) -> Vec<&Pet> {
        registry::available_pets(&self.pets)
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

impl Default for AdoptionCenter {
    fn default() -> Self {
        Self::new(sample_roster())
    }
}
