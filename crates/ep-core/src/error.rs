use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },
}

impl CoreError {
    /// Name of the offending parameter.
    pub fn what(&self) -> &'static str {
        match self {
            CoreError::OutOfRange { what, .. } => what,
        }
    }
}
