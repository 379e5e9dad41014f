use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::request::{MAX_COFFEE_CUPS, MAX_SLEEP_HOURS, MIN_COFFEE_CUPS, MIN_SLEEP_HOURS};

/// The coefficient artifact could not be loaded. Every variant carries a
/// message fit for showing the user directly; a failed load never leaves
/// partial state behind, so the caller can simply try again.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("sleep model not found at {}: {source}", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("sleep model is corrupt: {reason}")]
    Corrupt { reason: String },

    #[error("sleep model version {found} is not supported (this build expects version {supported})")]
    Incompatible { found: u32, supported: u32 },
}

/// A form input fell outside its documented range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error(
        "desired sleep must be between {min} and {max} hours, got {value}",
        min = MIN_SLEEP_HOURS,
        max = MAX_SLEEP_HOURS
    )]
    SleepHoursOutOfRange { value: f64 },

    #[error(
        "daily coffee intake must be between {min} and {max} cups, got {value}",
        min = MIN_COFFEE_CUPS,
        max = MAX_COFFEE_CUPS
    )]
    CoffeeCupsOutOfRange { value: u32 },

    #[error("{hour:02}:{minute:02}:{second:02} is not a valid time of day")]
    TimeComponentOutOfRange { hour: u32, minute: u32, second: u32 },
}
