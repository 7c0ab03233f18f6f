//! Parameter sets and runtime model selection for drivers.

use std::fmt;
use std::str::FromStr;

use ep_core::Real;

use crate::error::{ModelError, ModelResult};
use crate::model::CompartmentModel;
use crate::sir::SirModel;
use crate::sirx::SirxModel;

/// Union of the parameters used by every model variant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelParams {
    /// Initial infected fraction.
    pub i0: Real,
    /// Infection rate.
    pub alpha: Real,
    /// Recovery (removal) rate.
    pub beta: Real,
    /// Re-susceptibility rate. SIRX only.
    pub rho: Real,
    /// Death rate. SIRX only.
    pub delta: Real,
    /// Re-susceptibility lag in cycles. SIRX only.
    pub tau: usize,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            i0: 0.001,
            alpha: 0.25,
            beta: 0.1,
            rho: 1.0,
            delta: 0.003,
            tau: 5,
        }
    }
}

/// Model variant selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ModelKind {
    Sir,
    #[default]
    Sirx,
}

impl ModelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Sir => "sir",
            ModelKind::Sirx => "sirx",
        }
    }

    /// Construct the selected variant. `Sir` ignores `rho`, `delta` and `tau`.
    pub fn build(self, params: &ModelParams) -> ModelResult<Box<dyn CompartmentModel>> {
        Ok(match self {
            ModelKind::Sir => Box::new(SirModel::new(params.i0, params.alpha, params.beta)?),
            ModelKind::Sirx => Box::new(SirxModel::new(
                params.i0,
                params.alpha,
                params.beta,
                params.rho,
                params.delta,
                params.tau,
            )?),
        })
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sir" => Ok(ModelKind::Sir),
            "sirx" => Ok(ModelKind::Sirx),
            _ => Err(ModelError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}
