//! Startup errors
//!
//! Only configuration can fail. Once a run is built, ticking and input
//! handling never return errors.

use thiserror::Error;

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown entity kind `{0}`")]
    UnknownEntityKind(String),

    #[error("viewport must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("tuning value `{name}` must be positive and finite, got {value}")]
    InvalidTuning { name: &'static str, value: f32 },

    #[error("obstacle pool is empty")]
    EmptyPool,
}
