//! CompartmentModel trait shared by every model variant.

use ep_core::Trajectory;

use crate::error::ModelResult;

/// Contract a driver uses to step a model and read its history.
///
/// Models are append-only: `run` only ever extends the histories and a
/// fresh simulation needs a fresh instance. Instances are not
/// synchronised, callers serialise access to a single model.
pub trait CompartmentModel {
    /// Number of recorded time points, including the initial state. Always >= 1.
    fn cycle_count(&self) -> usize;

    /// Advance `cycles` steps and return the new `cycle_count()`.
    ///
    /// `cycles == 0` is rejected before any state is touched.
    fn run(&mut self, cycles: usize) -> ModelResult<usize>;

    /// Full compartment histories in declaration order.
    fn dump(&self) -> Trajectory;
}

/// Shared guard for `run`.
pub(crate) fn check_cycles(cycles: usize) -> ModelResult<usize> {
    if cycles == 0 {
        return Err(crate::error::ModelError::InvalidCycles { cycles });
    }
    Ok(cycles)
}
