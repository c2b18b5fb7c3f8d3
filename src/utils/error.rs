use thiserror::Error;

#[derive(Error, Debug)]
pub enum PnrError {
    #[error("invalid format: a personnummer must contain 10 or 12 digits, found {found}")]
    DigitCount { found: usize },

    #[error("invalid date: {text} is not a valid {layout} calendar date")]
    Date { text: String, layout: &'static str },

    #[error("invalid date: no century makes {text} a plausible birth date")]
    Century { text: String },

    #[error("invalid checksum: expected check digit {expected}, found {found}")]
    Checksum { expected: u8, found: u8 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PnrError>;
