use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::RequestError;

pub const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// A point in the 24-hour cycle, stored as whole seconds since midnight.
/// Always in `[0, 86400)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, RequestError> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(RequestError::TimeComponentOutOfRange {
                hour,
                minute,
                second,
            });
        }
        Ok(Self(hour * 3600 + minute * 60 + second))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, RequestError> {
        Self::from_hms(hour, minute, 0)
    }

    /// Map any second count into the 24-hour cycle. Negative values wrap to
    /// the previous day.
    pub fn from_seconds(seconds: i64) -> Self {
        Self(seconds.rem_euclid(SECONDS_PER_DAY) as u32)
    }

    pub fn seconds_since_midnight(&self) -> u32 {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0 / 3600
    }

    pub fn minute(&self) -> u32 {
        self.0 / 60 % 60
    }

    pub fn second(&self) -> u32 {
        self.0 % 60
    }

    /// Subtract a fractional number of hours, wrapping modulo 24 h. A
    /// negative argument moves the time forward. Rounds to the nearest
    /// whole second; arguments too large for the second count saturate
    /// instead of panicking.
    pub fn sub_hours(&self, hours: f64) -> Self {
        // The float-to-int cast saturates at the i64 bounds, so the
        // subtraction must saturate too or i64::MIN offsets overflow it.
        let offset_secs = (hours * SECONDS_PER_HOUR).round() as i64;
        Self::from_seconds(i64::from(self.0).saturating_sub(offset_secs))
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // num_seconds_from_midnight caps at 86399, so the invariant holds
        // even for leap-second times.
        Self(time.num_seconds_from_midnight())
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        NaiveTime::from_num_seconds_from_midnight_opt(time.0, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
