//! Discrete-time compartmental epidemic models.
//!
//! Provides:
//! - `CompartmentModel` contract (cycle count, run, dump)
//! - `SirModel`: susceptible / infected / removed recurrence
//! - `SirxModel`: adds permanent removal and lagged re-susceptibility
//! - `ModelParams` / `ModelKind` for drivers that pick a variant at runtime

pub mod error;
pub mod model;
pub mod params;
pub mod sir;
pub mod sirx;

// Re-exports for public API
pub use ep_core::{Series, Trajectory};
pub use error::{ModelError, ModelResult};
pub use model::CompartmentModel;
pub use params::{ModelKind, ModelParams};
pub use sir::SirModel;
pub use sirx::{FlowHistory, SirxModel};
