use crate::domain::fee::{calculate_adoption_fee, AdoptionFee};
use crate::utils::error::{AdoptionError, Result};
use crate::utils::validation::{validate_present_string, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single field value as seen by the matcher.
///
/// Comparison is type-strict: `Integer(5)` is never equal to `Text("5")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Integer(i64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Parses a command-line value: `true`/`false`, integers, `[a,b]` lists,
    /// and everything else as text.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw {
            "true" => return Self::Flag(true),
            "false" => return Self::Flag(false),
            _ => {}
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Self::Integer(n);
        }
        if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            let items = inner
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            return Self::List(items);
        }
        Self::Text(raw.to_string())
    }

    /// Parses a value for a known field, so text fields stay text even when
    /// they look numeric. Unknown keys fall back to [`FieldValue::parse`].
    pub fn parse_for(key: &str, raw: &str) -> Self {
        match key {
            "name" | "species" | "type" | "size" => Self::Text(raw.to_string()),
            "age" => raw
                .trim()
                .parse::<i64>()
                .map(Self::Integer)
                .unwrap_or_else(|_| Self::Text(raw.to_string())),
            "adopted" | "license_required" => match raw.trim() {
                "true" => Self::Flag(true),
                "false" => Self::Flag(false),
                other => Self::Text(other.to_string()),
            },
            "special_requirements" => {
                let trimmed = raw.trim();
                let inner = trimmed
                    .strip_prefix('[')
                    .and_then(|r| r.strip_suffix(']'))
                    .unwrap_or(trimmed);
                Self::List(
                    inner
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect(),
                )
            }
            _ => Self::parse(raw),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{}", b),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => write!(f, "[{}]", items.join(",")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adopted: Option<bool>,
}

impl Pet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn adopted(mut self, adopted: bool) -> Self {
        self.adopted = Some(adopted);
        self
    }

    pub fn license_required(mut self, required: bool) -> Self {
        self.license_required = Some(required);
        self
    }

    pub fn special_requirements<I, S>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_requirements = Some(requirements.into_iter().map(Into::into).collect());
        self
    }

    /// Looks up a field by name. `type` is accepted as a synonym for `species`.
    pub fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "name" => Some(FieldValue::Text(self.name.clone())),
            "species" | "type" => self.species.clone().map(FieldValue::Text),
            "size" => self.size.clone().map(FieldValue::Text),
            "age" => self.age.map(FieldValue::Integer),
            "license_required" => self.license_required.map(FieldValue::Flag),
            "special_requirements" => self.special_requirements.clone().map(FieldValue::List),
            "adopted" => self.adopted.map(FieldValue::Flag),
            _ => None,
        }
    }

    pub fn is_adopted(&self) -> bool {
        self.adopted == Some(true)
    }

    /// `None` when the pet has no recorded age.
    pub fn adoption_fee(&self) -> Option<AdoptionFee> {
        self.age.map(calculate_adoption_fee)
    }

    pub fn require_age(&self) -> Result<i64> {
        validate_required_field("age", &self.age).copied()
    }
}

impl Validate for Pet {
    fn validate(&self) -> Result<()> {
        validate_present_string("name", &self.name)
    }
}

/// Adopter preferences: every entry must be present and equal on a pet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    entries: BTreeMap<String, FieldValue>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Parses a `key=value` pair as given on the command line.
    pub fn parse_pair(pair: &str) -> Result<(String, FieldValue)> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| AdoptionError::InvalidFieldValue {
                field: "pref".to_string(),
                value: pair.to_string(),
                reason: "Expected key=value".to_string(),
            })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AdoptionError::InvalidFieldValue {
                field: "pref".to_string(),
                value: pair.to_string(),
                reason: "Preference key cannot be empty".to_string(),
            });
        }
        Ok((key.to_string(), FieldValue::parse_for(key, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_satisfied_by(&self, pet: &Pet) -> bool {
        self.entries
            .iter()
            .all(|(key, wanted)| pet.field(key).as_ref() == Some(wanted))
    }
}

impl FromIterator<(String, FieldValue)> for Preferences {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The three pets an [`AdoptionCenter`](crate::AdoptionCenter) starts with by default.
pub fn sample_roster() -> Vec<Pet> {
    vec![
        Pet::new("Max").species("dog").size("large").age(5),
        Pet::new("Whiskers").species("cat").size("small").age(1),
        Pet::new("Buddy").species("dog").size("medium").age(3),
    ]
}
