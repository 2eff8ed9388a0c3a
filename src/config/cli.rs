use crate::config::{FeatureFlags, RosterConfig};
use crate::core::matcher::AdoptionCenter;
use crate::core::report::{self, OutputFormat};
use crate::domain::fee::calculate_adoption_fee;
use crate::domain::model::{FieldValue, Pet, Preferences};
use crate::domain::ports::{RosterProvider, SampleRoster};
use crate::utils::error::{AdoptionError, Result};
use crate::utils::validation::Validate;
use clap::{ArgGroup, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "pet-adoption")]
#[command(about = "Keep an in-memory pet adoption roster: fees, registration and matching")]
pub struct CliConfig {
    /// TOML roster to load instead of the built-in sample roster
    #[arg(long, global = true)]
    pub roster: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the adoption fee for an age or for a pet on the roster
    #[command(group(ArgGroup::new("fee_input").required(true).args(["age", "pet"])))]
    Fee {
        #[arg(allow_negative_numbers = true)]
        age: Option<i64>,

        #[arg(long)]
        pet: Option<String>,
    },

    /// Find the first pet matching every preference
    Match {
        /// Extra preference as key=value, repeatable
        #[arg(long = "pref")]
        prefs: Vec<String>,

        #[arg(long)]
        species: Option<String>,

        #[arg(long)]
        size: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        age: Option<i64>,
    },

    /// Print the roster
    List {
        #[arg(long, help = "Only pets not yet adopted")]
        available: bool,

        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },

    /// Register a pet into the loaded roster and print the result
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        species: Option<String>,

        #[arg(long)]
        size: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        age: Option<i64>,

        #[arg(long, help = "Add as an exotic pet (no duplicate-name check)")]
        exotic: bool,

        #[arg(long)]
        license_required: bool,
    },
}

impl Command {
    /// Collects `--pref` pairs plus the dedicated flags into one query.
    pub fn preferences(&self) -> Result<Preferences> {
        let mut preferences = Preferences::new();
        if let Command::Match {
            prefs,
            species,
            size,
            age,
        } = self
        {
            for pair in prefs {
                let (key, value) = Preferences::parse_pair(pair)?;
                preferences.insert(key, value);
            }
            if let Some(species) = species {
                preferences.insert("species", species.clone());
            }
            if let Some(size) = size {
                preferences.insert("size", size.clone());
            }
            if let Some(age) = age {
                preferences.insert("age", FieldValue::Integer(*age));
            }
        }
        Ok(preferences)
    }

    pub fn new_pet(&self) -> Option<Pet> {
        match self {
            Command::Register {
                name,
                species,
                size,
                age,
                license_required,
                ..
            } => Some(Pet {
                name: name.clone(),
                species: species.clone(),
                size: size.clone(),
                age: *age,
                license_required: license_required.then_some(true),
                ..Pet::default()
            }),
            _ => None,
        }
    }
}

impl CliConfig {
    /// Loads the roster named by `--roster`, or the sample roster, together
    /// with the feature flags from the roster file and the environment.
    pub fn load_center(&self) -> Result<(AdoptionCenter, FeatureFlags)> {
        match &self.roster {
            Some(path) => {
                tracing::info!("Loading roster from: {}", path);
                let roster = RosterConfig::from_file(path)?;
                let flags = roster.feature_flags().merge(FeatureFlags::from_env());
                Ok((AdoptionCenter::from_provider(&roster)?, flags))
            }
            None => {
                tracing::debug!("Using {}", SampleRoster.center_name());
                Ok((
                    AdoptionCenter::from_provider(&SampleRoster)?,
                    FeatureFlags::from_env(),
                ))
            }
        }
    }

    /// Runs the command against `center` and returns what should be printed.
    pub fn execute(&self, center: &mut AdoptionCenter, flags: FeatureFlags) -> Result<String> {
        tracing::debug!("Feature flags: {:?}", flags);

        match &self.command {
            Command::Fee { age, pet } => {
                let age = match (age, pet) {
                    (Some(age), _) => *age,
                    (None, Some(name)) => center
                        .pets()
                        .iter()
                        .find(|p| &p.name == name)
                        .ok_or_else(|| AdoptionError::PetNotFound { name: name.clone() })?
                        .require_age()?,
                    (None, None) => return Err(AdoptionError::missing_field("age or --pet")),
                };
                Ok(format!("{}\n", calculate_adoption_fee(age)))
            }
            Command::Match { .. } => {
                let preferences = self.command.preferences()?;
                Ok(match center.match_pet(&preferences) {
                    Some(name) => format!("{}\n", name),
                    None => "No matching pet found\n".to_string(),
                })
            }
            Command::List { available, format } => {
                let pets = if *available {
                    center.available_pets()
                } else {
                    center.pets().iter().collect()
                };
                report::render(&pets, *format)
            }
            Command::Register { exotic, .. } => {
                let pet = self
                    .command
                    .new_pet()
                    .ok_or_else(|| AdoptionError::missing_field("name"))?;
                let outcome = if *exotic {
                    center.add_exotic_pet(pet, flags);
                    "Registered as exotic pet.".to_string()
                } else {
                    center.register(pet)?.to_string()
                };
                let pets: Vec<&Pet> = center.pets().iter().collect();
                Ok(format!(
                    "{}\n{}",
                    outcome,
                    report::render(&pets, OutputFormat::Table)?
                ))
            }
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(roster) = &self.roster {
            crate::utils::validation::validate_non_empty_string("roster", roster)?;
        }
        if let Command::Match { prefs, .. } = &self.command {
            for pair in prefs {
                Preferences::parse_pair(pair)?;
            }
        }
        if let Some(pet) = self.command.new_pet() {
            pet.validate()?;
        }
        Ok(())
    }
}
