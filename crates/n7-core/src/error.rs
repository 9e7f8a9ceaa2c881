//! Error types for the fusion engine.
//!
//! Every variant is a contract violation by the caller or an integration
//! bug. Nothing here is transient, so nothing is retried.

/// Errors raised by engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// `decide` was called before any personality was registered.
    #[error("no personality registered")]
    NoPersonalityRegistered,

    /// The receptor driving the chemistry factor is absent from the state.
    #[error("missing receptor: {0}")]
    MissingReceptor(String),

    /// A chemistry operation referenced a name outside the baseline key set.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// A retained vector is too short to build the 3x3 harmonic sample.
    #[error("vector for '{key}' has {len} components, need at least 3")]
    InvalidVectorDimension {
        /// Memory key whose history holds the short vector
        key: String,
        /// Component count of the offending vector
        len: usize,
    },

    /// Dose must be finite and non-negative.
    #[error("invalid dose: {0} mg")]
    InvalidDose(f64),
}

/// Errors raised while building or loading a [`Config`](crate::Config).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("dimension must be at least {min}, got {got}")]
    Dimension { min: usize, got: usize },

    #[error("memory_decay must be in (0, 1], got {0}")]
    Decay(f64),

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: String, value: f64 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised while building an encoder.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("embedding for '{concept}' has {got} components, expected {expected}")]
    DimensionMismatch {
        concept: String,
        expected: usize,
        got: usize,
    },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
