use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::models::TimeOfDay;

pub const MIN_SLEEP_HOURS: f64 = 4.0;
pub const MAX_SLEEP_HOURS: f64 = 12.0;
pub const MIN_COFFEE_CUPS: u32 = 1;
pub const MAX_COFFEE_CUPS: u32 = 20;

/// The three validated inputs to a bedtime estimation. A constructed
/// request always has its fields within range; the estimator relies on
/// that and does not re-check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRequest {
    pub wake: TimeOfDay,
    pub desired_sleep_hours: f64,
    pub coffee_cups: u32,
}

impl SleepRequest {
    pub fn new(
        wake: TimeOfDay,
        desired_sleep_hours: f64,
        coffee_cups: u32,
    ) -> Result<Self, RequestError> {
        if !desired_sleep_hours.is_finite()
            || !(MIN_SLEEP_HOURS..=MAX_SLEEP_HOURS).contains(&desired_sleep_hours)
        {
            return Err(RequestError::SleepHoursOutOfRange {
                value: desired_sleep_hours,
            });
        }
        if !(MIN_COFFEE_CUPS..=MAX_COFFEE_CUPS).contains(&coffee_cups) {
            return Err(RequestError::CoffeeCupsOutOfRange { value: coffee_cups });
        }
        Ok(Self {
            wake,
            desired_sleep_hours,
            coffee_cups,
        })
    }
}

impl Default for SleepRequest {
    /// Starting values a fresh form shows: wake at 07:00, 8 hours of sleep,
    /// one cup of coffee.
    fn default() -> Self {
        Self {
            wake: TimeOfDay::from_seconds(7 * 3600),
            desired_sleep_hours: 8.0,
            coffee_cups: 1,
        }
    }
}
