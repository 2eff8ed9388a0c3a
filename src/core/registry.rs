use crate::config::FeatureFlags;
use crate::domain::model::Pet;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::fmt;

/// Outcome of [`register_new_pet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    Duplicate { name: String },
}

impl Registration {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted => f.write_str("Registered."),
            Self::Duplicate { name } => write!(f, "{} is already in the adoption list", name),
        }
    }
}

pub fn add_pet(adoption_list: &mut Vec<Pet>, pet: Pet) {
    tracing::debug!("Adding {} to the adoption list", pet.name);
    adoption_list.push(pet);
}

/// Appends an exotic pet. No species-specific checks are made yet; the flag
/// only controls whether a warning is logged.
pub fn add_exotic_pet(adoption_list: &mut Vec<Pet>, pet: Pet, flags: FeatureFlags) {
    if !flags.exotic_pets_enabled {
        tracing::warn!(
            "Adding exotic pet {} while exotic pet support is disabled",
            pet.name
        );
    }
    add_pet(adoption_list, pet);
}

/// Appends `pet` unless a pet with the same name is already listed.
///
/// A duplicate is not an error: a warning is logged, the list is left as it
/// was and [`Registration::Duplicate`] is returned. A pet without a name is
/// rejected with `MissingField` before the list is touched.
pub fn register_new_pet(pet: Pet, adoption_list: &mut Vec<Pet>) -> Result<Registration> {
    pet.validate()?;

    if adoption_list.iter().any(|existing| existing.name == pet.name) {
        let duplicate = Registration::Duplicate { name: pet.name };
        tracing::warn!("{}", duplicate);
        return Ok(duplicate);
    }

    add_pet(adoption_list, pet);
    Ok(Registration::Inserted)
}

/// Pets not flagged as adopted, in list order.
pub fn available_pets(adoption_list: &[Pet]) -> Vec<&Pet> {
    adoption_list.iter().filter(|pet| !pet.is_adopted()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AdoptionError;

    fn fixture_list() -> Vec<Pet> {
        vec![
            Pet::new("Max").species("dog").size("large").age(5).adopted(false),
            Pet::new("Whiskers").species("cat").size("small").age(1).adopted(false),
            Pet::new("Buddy").species("dog").size("medium").age(3).adopted(true),
            Pet::new("Luna").species("cat").size("medium").age(2).adopted(false),
        ]
    }

    #[test]
    fn test_add_pet_appends() {
        let mut list = Vec::new();
        add_pet(&mut list, Pet::new("Buddy").species("dog"));
        assert_eq!(list, vec![Pet::new("Buddy").species("dog")]);

        let mut list = fixture_list();
        let rocky = Pet::new("Rocky").species("dog").size("large").age(4).adopted(false);
        add_pet(&mut list, rocky.clone());
        assert_eq!(list.len(), 5);
        assert_eq!(list.last(), Some(&rocky));
    }

    #[test]
    fn test_add_pet_does_not_check_duplicates() {
        let mut list = fixture_list();
        add_pet(&mut list, Pet::new("Max"));
        assert_eq!(list.iter().filter(|p| p.name == "Max").count(), 2);
    }

    #[test]
    fn test_register_new_pet_success() {
        let mut list = Vec::new();
        let buddy = Pet::new("Buddy").species("Dog").age(3);
        let outcome = register_new_pet(buddy.clone(), &mut list).unwrap();
        assert_eq!(outcome, Registration::Inserted);
        assert_eq!(list, vec![buddy]);
    }

    #[test]
    fn test_register_duplicate_keeps_original() {
        let original = Pet::new("Max").species("Cat").age(2);
        let mut list = vec![original.clone()];

        let outcome = register_new_pet(Pet::new("Max").species("Dog").age(5), &mut list).unwrap();
        assert_eq!(
            outcome,
            Registration::Duplicate {
                name: "Max".to_string()
            }
        );
        assert_eq!(list, vec![original]);
    }

    #[test]
    fn test_register_twice_is_idempotent() {
        let mut list = Vec::new();
        let rex = Pet::new("Rex").species("dog");
        assert!(register_new_pet(rex.clone(), &mut list).unwrap().is_inserted());
        assert!(!register_new_pet(rex.clone(), &mut list).unwrap().is_inserted());
        assert!(!register_new_pet(rex, &mut list).unwrap().is_inserted());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_register_without_name_is_rejected() {
        let mut list = fixture_list();
        let err = register_new_pet(Pet::default().species("dog"), &mut list).unwrap_err();
        assert!(matches!(err, AdoptionError::MissingField { ref field } if field == "name"));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_register_whitespace_name() {
        let mut list = Vec::new();
        let outcome = register_new_pet(Pet::new(" "), &mut list).unwrap();
        assert_eq!(outcome, Registration::Inserted);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, " ");
    }

    #[test]
    fn test_duplicate_message() {
        let mut list = vec![Pet::new("Max").species("dog")];
        let outcome = register_new_pet(Pet::new("Max").age(6), &mut list).unwrap();
        assert!(outcome
            .to_string()
            .contains("already in the adoption list"));
        assert_eq!(outcome.to_string(), "Max is already in the adoption list");
        assert_eq!(Registration::Inserted.to_string(), "Registered.");
    }

    #[test]
    fn test_available_pets_skips_adopted() {
        let list = fixture_list();
        let names: Vec<&str> = available_pets(&list).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Max", "Whiskers", "Luna"]);
    }

    #[test]
    fn test_add_exotic_pet() {
        let mut list = Vec::new();
        let polly = Pet::new("Polly")
            .species("parrot")
            .special_requirements(["large_cage", "specialized_diet", "exotic_vet"])
            .license_required(true);
        add_exotic_pet(&mut list, polly, FeatureFlags::default());
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].species.as_deref(), Some("parrot"));
        assert_eq!(list[0].license_required, Some(true));
    }
}
