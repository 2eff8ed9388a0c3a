use pet_adoption::{
    add_pet, available_pets, calculate_adoption_fee, register_new_pet, AdoptionCenter,
    AdoptionFee, Pet, Preferences, Registration,
};

struct Fixture {
    adoption_list: Vec<Pet>,
    center: AdoptionCenter,
    original_list_length: usize,
}

impl Fixture {
    fn new() -> Self {
        let adoption_list = vec![
            Pet::new("Max").species("dog").size("large").age(5).adopted(false),
            Pet::new("Whiskers").species("cat").size("small").age(1).adopted(false),
            Pet::new("Buddy").species("dog").size("medium").age(3).adopted(true),
            Pet::new("Luna").species("cat").size("medium").age(2).adopted(false),
        ];
        let original_list_length = adoption_list.len();
        Self {
            adoption_list,
            center: AdoptionCenter::default(),
            original_list_length,
        }
    }
}

#[test]
fn test_fixture_initialized() {
    let fixture = Fixture::new();
    assert_eq!(fixture.adoption_list.len(), 4);
    let names: Vec<&str> = fixture.adoption_list.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Max", "Whiskers", "Buddy", "Luna"]);
    assert_eq!(fixture.center.len(), 3);
}

#[test]
fn test_add_new_pet() {
    let mut fixture = Fixture::new();
    let rocky = Pet::new("Rocky").species("dog").size("large").age(4).adopted(false);
    add_pet(&mut fixture.adoption_list, rocky.clone());

    assert_eq!(fixture.adoption_list.len(), fixture.original_list_length + 1);
    assert!(fixture.adoption_list.contains(&rocky));
    assert_eq!(fixture.adoption_list.last().map(|p| p.name.as_str()), Some("Rocky"));
}

#[test]
fn test_register_duplicate_leaves_list_alone() {
    let mut fixture = Fixture::new();
    let before = fixture.adoption_list.clone();
    let duplicate = Pet::new("Max").species("dog").size("large").age(6);

    let outcome = register_new_pet(duplicate, &mut fixture.adoption_list).unwrap();

    assert_eq!(
        outcome,
        Registration::Duplicate {
            name: "Max".to_string()
        }
    );
    assert_eq!(fixture.adoption_list, before);
}

#[test]
fn test_fees_for_fixture_pets() {
    let fixture = Fixture::new();
    for pet in &fixture.adoption_list {
        let age = pet.age.unwrap();
        let expected = if age <= 2 { 100 } else { 50 };
        assert_eq!(
            calculate_adoption_fee(age),
            AdoptionFee::Amount(expected),
            "Pet {} (age {})",
            pet.name,
            age
        );
        assert_eq!(pet.adoption_fee(), Some(AdoptionFee::Amount(expected)));
    }
}

#[test]
fn test_find_available_pets() {
    let fixture = Fixture::new();
    let available: Vec<&str> = available_pets(&fixture.adoption_list)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(available.len(), 3);
    assert!(!available.contains(&"Buddy"));
}

#[test]
fn test_fixtures_are_isolated() {
    let mut fixture = Fixture::new();
    add_pet(
        &mut fixture.adoption_list,
        Pet::new("TestPet").species("test").size("test").age(1),
    );
    assert_eq!(fixture.adoption_list.len(), fixture.original_list_length + 1);

    assert_eq!(Fixture::new().adoption_list.len(), 4);
}

#[test]
fn test_matching_is_deterministic() {
    let fixture = Fixture::new();
    let prefs = Preferences::new().with("species", "dog");
    let first = fixture.center.match_pet(&prefs);
    for _ in 0..5 {
        assert_eq!(fixture.center.match_pet(&prefs), first);
    }
    assert_eq!(first, Some("Max"));
}
