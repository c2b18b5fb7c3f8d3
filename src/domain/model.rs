use crate::utils::error::PnrError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator found in the raw input. `+` marks a person over 100 years old
/// in the numbering scheme, so it outranks `-` during detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    Plus,
    Hyphen,
    None,
}

impl Separator {
    pub fn detect(input: &str) -> Self {
        if input.contains('+') {
            Separator::Plus
        } else if input.contains('-') {
            Separator::Hyphen
        } else {
            Separator::None
        }
    }

    /// Character used in the normalized rendering. A missing separator
    /// normalizes to `-`.
    pub fn as_char(self) -> char {
        match self {
            Separator::Plus => '+',
            Separator::Hyphen | Separator::None => '-',
        }
    }
}

/// Heuristic read of the second-to-last digit: even means female, odd means
/// male. A simplification of the real-world convention, kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderHint {
    Female,
    Male,
}

impl GenderHint {
    pub fn from_serial_digit(digit: u8) -> Self {
        if digit % 2 == 0 {
            GenderHint::Female
        } else {
            GenderHint::Male
        }
    }
}

impl fmt::Display for GenderHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenderHint::Female => write!(f, "female"),
            GenderHint::Male => write!(f, "male"),
        }
    }
}

/// Outcome of one validation call. Either the derived fields are populated
/// and `error_message` is empty, or only `error_message` is set; the two
/// constructors are the only way to build one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub normalized: String,
    pub birth_date: Option<NaiveDate>,
    pub gender_hint: Option<GenderHint>,
    pub error_message: String,
}

impl ValidationOutcome {
    pub fn valid(normalized: String, birth_date: NaiveDate, gender_hint: GenderHint) -> Self {
        Self {
            is_valid: true,
            normalized,
            birth_date: Some(birth_date),
            gender_hint: Some(gender_hint),
            error_message: String::new(),
        }
    }

    pub fn invalid(error: PnrError) -> Self {
        Self {
            is_valid: false,
            normalized: String::new(),
            birth_date: None,
            gender_hint: None,
            error_message: error.to_string(),
        }
    }
}
