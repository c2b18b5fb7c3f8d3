pub mod century;
pub mod checksum;
pub mod shell;
pub mod validator;

pub use crate::domain::model::{GenderHint, Separator, ValidationOutcome};
pub use crate::domain::ports::{Clock, SystemClock};
pub use crate::utils::error::Result;
