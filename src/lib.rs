pub mod artifact;
pub mod error;
pub mod estimator;
pub mod models;

pub use artifact::{ModelArtifact, ModelCoefficients, SUPPORTED_VERSION};
pub use error::{ModelError, RequestError};
pub use estimator::{estimate, predicted_sleep_need, Estimator};
pub use models::{SleepRequest, TimeOfDay};

/// Initialize logging (reads RUST_LOG env var). For embedding shells that
/// bring no logger of their own; call at most once per process.
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
