use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Artifact format revision this build understands.
pub const SUPPORTED_VERSION: u32 = 1;

const BUNDLED_ARTIFACT: &str = include_str!("../assets/sleep_calculator.json");

/// The opaque parameters of the pre-trained regression model. Produced by an
/// offline training run; this crate only consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCoefficients {
    pub intercept: f64,
    pub wake_weight: f64,
    pub sleep_weight: f64,
    pub coffee_weight: f64,
}

/// On-disk form of the coefficient set: a versioned JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelArtifact {
    pub version: u32,
    #[serde(flatten)]
    pub coefficients: ModelCoefficients,
}

impl ModelArtifact {
    /// Load a coefficient artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| {
            warn!("failed to read sleep model from {}", path.display());
            ModelError::Missing {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let artifact = Self::parse(&contents).map_err(|err| {
            warn!("failed to load sleep model from {}: {err}", path.display());
            err
        })?;
        info!(
            "loaded sleep model v{} from {}",
            artifact.version,
            path.display()
        );
        Ok(artifact)
    }

    /// The pre-trained artifact compiled into the binary.
    pub fn bundled() -> Result<Self, ModelError> {
        Self::parse(BUNDLED_ARTIFACT).map_err(|err| {
            warn!("bundled sleep model failed to parse: {err}");
            err
        })
    }

    fn parse(contents: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact =
            serde_json::from_str(contents).map_err(|err| ModelError::Corrupt {
                reason: err.to_string(),
            })?;

        if artifact.version != SUPPORTED_VERSION {
            return Err(ModelError::Incompatible {
                found: artifact.version,
                supported: SUPPORTED_VERSION,
            });
        }

        let c = artifact.coefficients;
        for (name, value) in [
            ("intercept", c.intercept),
            ("wakeWeight", c.wake_weight),
            ("sleepWeight", c.sleep_weight),
            ("coffeeWeight", c.coffee_weight),
        ] {
            if !value.is_finite() {
                return Err(ModelError::Corrupt {
                    reason: format!("{name} is not a finite number ({value})"),
                });
            }
        }

        Ok(artifact)
    }
}
