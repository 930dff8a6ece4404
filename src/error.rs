use figment::Error as ConfigError;
use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug)]
pub enum SkyDriveError {
    #[error("Configuration Error: {source:#?}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("Invalid Pattern: {source:#?}")]
    PatternError {
        #[from]
        source: regex::Error,
    },

    #[error("Unable to serialize JSON: {source:#?}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid length bounds: minimum {min} exceeds maximum {max}")]
    InvalidLengthBounds { min: usize, max: usize },
}
