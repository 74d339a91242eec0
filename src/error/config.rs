use thiserror::Error;

/// Configuration errors. Every configuration key has a default, so these
/// only occur for values that are present in the environment but invalid.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value the engine cannot use.
    #[error("Invalid value {value:?} for environment variable {key}")]
    InvalidValue {
        /// The environment variable name.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}
