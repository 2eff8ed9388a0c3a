use crate::domain::model::Pet;
use crate::utils::error::{AdoptionError, Result};
use crate::utils::validation::validate_one_of;
use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = AdoptionError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_ascii_lowercase();
        validate_one_of("format", &lowered, &["table", "json", "csv"])?;
        Ok(match lowered.as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            _ => Self::Table,
        })
    }
}

#[derive(Debug, Serialize)]
struct PetRow<'a> {
    name: &'a str,
    species: &'a str,
    size: &'a str,
    age: Option<i64>,
    adopted: bool,
    fee: String,
}

impl<'a> From<&'a Pet> for PetRow<'a> {
    fn from(pet: &'a Pet) -> Self {
        Self {
            name: &pet.name,
            species: pet.species.as_deref().unwrap_or(""),
            size: pet.size.as_deref().unwrap_or(""),
            age: pet.age,
            adopted: pet.is_adopted(),
            fee: pet
                .adoption_fee()
                .map(|fee| fee.to_string())
                .unwrap_or_default(),
        }
    }
}

pub fn render(pets: &[&Pet], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(pets)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(pets)?),
        OutputFormat::Csv => render_csv(pets),
    }
}

fn render_csv(pets: &[&Pet]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for pet in pets {
        writer.serialize(PetRow::from(*pet))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AdoptionError::IoError(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn render_table(pets: &[&Pet]) -> String {
    let rows: Vec<PetRow> = pets.iter().map(|pet| PetRow::from(*pet)).collect();
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0).max(4);
    let species_width = rows.iter().map(|r| r.species.len()).max().unwrap_or(0).max(7);
    let size_width = rows.iter().map(|r| r.size.len()).max().unwrap_or(0).max(4);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<nw$}  {:<sw$}  {:<zw$}  {:>3}  {:<7}  {:>4}",
        "NAME",
        "SPECIES",
        "SIZE",
        "AGE",
        "ADOPTED",
        "FEE",
        nw = name_width,
        sw = species_width,
        zw = size_width
    );
    for row in &rows {
        let age = row.age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<nw$}  {:<sw$}  {:<zw$}  {:>3}  {:<7}  {:>4}",
            row.name,
            row.species,
            row.size,
            age,
            if row.adopted { "yes" } else { "no" },
            row.fee,
            nw = name_width,
            sw = species_width,
            zw = size_width
        );
    }
    out
}
