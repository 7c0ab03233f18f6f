//! ep-core: stable foundation for epiflow.
//!
//! Contains:
//! - numeric (Real + tolerances + fraction helpers)
//! - series (ordered compartment trajectories returned by models)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod series;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use series::{Series, Trajectory};
