//! Error types for model construction and runs.

use thiserror::Error;

/// Errors raised by model constructors and `run`.
///
/// Every variant is a caller input problem; nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] ep_core::CoreError),

    #[error("invalid cycle count: {cycles}")]
    InvalidCycles { cycles: usize },

    /// Raised by `SirxModel` when `beta + delta >= 1`.
    ///
    /// The message is reported as `rho + delta` with that sum as the value,
    /// which does not match the guarded quantity. Match on the variant
    /// rather than the text.
    #[error("{what} too large: {value}")]
    RateSumTooLarge { what: &'static str, value: f64 },

    #[error("unknown model kind: {name}")]
    UnknownKind { name: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
