use std::path::Path;

use log::debug;

use crate::artifact::{ModelArtifact, ModelCoefficients};
use crate::error::ModelError;
use crate::models::{SleepRequest, TimeOfDay};

/// Predicted hours of sleep the user actually needs: the fixed linear
/// combination over the trained coefficients.
pub fn predicted_sleep_need(request: &SleepRequest, coefficients: &ModelCoefficients) -> f64 {
    coefficients.intercept
        + coefficients.wake_weight * f64::from(request.wake.seconds_since_midnight())
        + coefficients.sleep_weight * request.desired_sleep_hours
        + coefficients.coffee_weight * f64::from(request.coffee_cups)
}

/// Ideal bedtime: the wake time minus the predicted sleep need, wrapping
/// across midnight. Pure and deterministic.
pub fn estimate(request: &SleepRequest, coefficients: &ModelCoefficients) -> TimeOfDay {
    let need_hours = predicted_sleep_need(request, coefficients);
    let bedtime = request.wake.sub_hours(need_hours);
    debug!(
        "wake {} / {:.2}h desired / {} cups -> need {:.2}h, bedtime {}",
        request.wake, request.desired_sleep_hours, request.coffee_cups, need_hours, bedtime
    );
    bedtime
}

/// Loaded coefficients paired with the estimate operations. Cheap to clone;
/// no interior mutability, so concurrent callers need no locking.
#[derive(Debug, Clone)]
pub struct Estimator {
    coefficients: ModelCoefficients,
}

impl Estimator {
    pub fn new(coefficients: ModelCoefficients) -> Self {
        Self { coefficients }
    }

    /// Load coefficients from an artifact file.
    pub fn from_artifact(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        Ok(Self::new(ModelArtifact::load(path)?.coefficients))
    }

    /// Use the pre-trained artifact compiled into the binary.
    pub fn bundled() -> Result<Self, ModelError> {
        Ok(Self::new(ModelArtifact::bundled()?.coefficients))
    }

    pub fn coefficients(&self) -> &ModelCoefficients {
        &self.coefficients
    }

    pub fn sleep_need(&self, request: &SleepRequest) -> f64 {
        predicted_sleep_need(request, &self.coefficients)
    }

    pub fn bedtime(&self, request: &SleepRequest) -> TimeOfDay {
        estimate(request, &self.coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coefficients(
        intercept: f64,
        wake_weight: f64,
        sleep_weight: f64,
        coffee_weight: f64,
    ) -> ModelCoefficients {
        ModelCoefficients {
            intercept,
            wake_weight,
            sleep_weight,
            coffee_weight,
        }
    }

    #[test]
    fn subtraction_direction_sanity() {
        // wake 07:00, 8h desired, 1 cup, sleep weight -1:
        // need = -8h, bedtime = 07:00 - (-8h) = 15:00
        let request =
            SleepRequest::new(TimeOfDay::from_hm(7, 0).unwrap(), 8.0, 1).unwrap();
        let c = coefficients(0.0, 0.0, -1.0, 0.0);
        assert_eq!(predicted_sleep_need(&request, &c), -8.0);
        assert_eq!(estimate(&request, &c), TimeOfDay::from_hm(15, 0).unwrap());
    }

    #[test]
    fn identity_sleep_weight_gives_plain_subtraction() {
        let request =
            SleepRequest::new(TimeOfDay::from_hm(7, 0).unwrap(), 8.0, 1).unwrap();
        let c = coefficients(0.0, 0.0, 1.0, 0.0);
        assert_eq!(estimate(&request, &c), TimeOfDay::from_hm(23, 0).unwrap());
    }

    #[test]
    fn is_deterministic() {
        let request =
            SleepRequest::new(TimeOfDay::from_hm(6, 45).unwrap(), 7.25, 4).unwrap();
        let c = coefficients(0.2, 0.00001, 0.9, 0.05);
        assert_eq!(estimate(&request, &c), estimate(&request, &c));
    }

    #[test]
    fn wraps_to_previous_day_when_need_exceeds_wake() {
        // wake 01:00 with 8h of need lands at 17:00 the previous day
        let request =
            SleepRequest::new(TimeOfDay::from_hm(1, 0).unwrap(), 8.0, 1).unwrap();
        let c = coefficients(0.0, 0.0, 1.0, 0.0);
        let bedtime = estimate(&request, &c);
        assert_eq!(bedtime, TimeOfDay::from_hm(17, 0).unwrap());
        assert!(bedtime.seconds_since_midnight() < 86400);
    }

    #[test]
    fn coffee_shifts_bedtime_monotonically() {
        let wake = TimeOfDay::from_hm(7, 0).unwrap();
        let c = coefficients(0.5, 0.0, 0.9, 0.1);
        let mut previous = None;
        for cups in 1..=20 {
            let request = SleepRequest::new(wake, 8.0, cups).unwrap();
            let bedtime = estimate(&request, &c).seconds_since_midnight();
            if let Some(prev) = previous {
                // positive coffee weight means more need, so an earlier bedtime
                assert!(bedtime < prev, "{cups} cups did not move bedtime earlier");
            }
            previous = Some(bedtime);
        }
    }

    #[test]
    fn wake_weight_scales_with_seconds_since_midnight() {
        let c = coefficients(0.0, 0.001, 0.0, 0.0);
        let early = SleepRequest::new(TimeOfDay::from_hm(5, 0).unwrap(), 8.0, 1).unwrap();
        let late = SleepRequest::new(TimeOfDay::from_hm(10, 0).unwrap(), 8.0, 1).unwrap();
        assert_eq!(predicted_sleep_need(&early, &c), 18.0);
        assert_eq!(predicted_sleep_need(&late, &c), 36.0);
    }

    #[test]
    fn extreme_coefficients_do_not_panic() {
        let request = SleepRequest::default();
        for c in [
            coefficients(f64::MAX, f64::MAX, f64::MAX, f64::MAX),
            coefficients(f64::MIN, f64::MIN, f64::MIN, f64::MIN),
            coefficients(0.0, f64::MAX, -f64::MAX, f64::MAX),
        ] {
            let bedtime = estimate(&request, &c);
            assert!(bedtime.seconds_since_midnight() < 86400);
        }
    }

    #[test]
    fn estimator_wrapper_matches_free_functions() {
        let c = coefficients(0.3, 0.000004, 0.95, 0.07);
        let estimator = Estimator::new(c);
        let request = SleepRequest::default();
        assert_eq!(estimator.bedtime(&request), estimate(&request, &c));
        assert_eq!(
            estimator.sleep_need(&request),
            predicted_sleep_need(&request, &c)
        );
    }

    #[test]
    fn failed_load_does_not_poison_later_calls() {
        assert!(Estimator::from_artifact("/nonexistent/model.json").is_err());

        // The process stays usable: the bundled model still works
        let estimator = Estimator::bundled().unwrap();
        let bedtime = estimator.bedtime(&SleepRequest::default());
        assert!(bedtime.seconds_since_midnight() < 86400);
    }
}
