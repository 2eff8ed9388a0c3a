use serde::{Deserialize, Serialize};
use std::fmt;

pub const YOUNG_PET_MAX_AGE: i64 = 2;
pub const YOUNG_PET_FEE: u32 = 100;
pub const ADULT_PET_FEE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdoptionFee {
    Amount(u32),
    InvalidAge,
}

impl AdoptionFee {
    pub fn amount(self) -> Option<u32> {
        match self {
            Self::Amount(amount) => Some(amount),
            Self::InvalidAge => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Self::Amount(_))
    }
}

impl fmt::Display for AdoptionFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{}", amount),
            Self::InvalidAge => f.write_str("Invalid age"),
        }
    }
}

/// Fee by age in years: negative ages are invalid, pets up to two years old
/// cost 100 and older pets 50.
pub fn calculate_adoption_fee(age: i64) -> AdoptionFee {
    if age < 0 {
        AdoptionFee::InvalidAge
    } else if age <= YOUNG_PET_MAX_AGE {
        AdoptionFee::Amount(YOUNG_PET_FEE)
    } else {
        AdoptionFee::Amount(ADULT_PET_FEE)
    }
}
