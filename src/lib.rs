#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::shell::Shell;
pub use crate::core::validator::{is_valid, validate, validate_at};
pub use crate::domain::model::{GenderHint, Separator, ValidationOutcome};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::{PnrError, Result};
