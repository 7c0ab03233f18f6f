//! Three-compartment SIR recurrence.

use ep_core::{Real, Trajectory, advance, check_probability};

use crate::error::ModelResult;
use crate::model::{CompartmentModel, check_cycles};

/// Susceptible / infected / removed model.
///
/// Per cycle, from the start-of-cycle snapshot:
/// - infections = alpha * i * s
/// - removals = beta * i
#[derive(Clone, Debug)]
pub struct SirModel {
    alpha: Real,
    beta: Real,
    s: Vec<Real>,
    i: Vec<Real>,
    r: Vec<Real>,
}

impl SirModel {
    /// `i0`, `alpha` and `beta` must each lie in [0, 1].
    pub fn new(i0: Real, alpha: Real, beta: Real) -> ModelResult<Self> {
        check_probability("i0", i0)?;
        check_probability("alpha", alpha)?;
        check_probability("beta", beta)?;

        Ok(Self {
            alpha,
            beta,
            s: vec![1.0 - i0],
            i: vec![i0],
            r: vec![0.0],
        })
    }

    pub fn alpha(&self) -> Real {
        self.alpha
    }

    pub fn beta(&self) -> Real {
        self.beta
    }

    fn step(&mut self) {
        let s = self.s[self.s.len() - 1];
        let i = self.i[self.i.len() - 1];

        let infections = self.alpha * i * s;
        let removals = self.beta * i;

        advance(&mut self.s, -infections);
        advance(&mut self.i, infections - removals);
        advance(&mut self.r, removals);
    }
}

impl CompartmentModel for SirModel {
    fn cycle_count(&self) -> usize {
        self.i.len()
    }

    fn run(&mut self, cycles: usize) -> ModelResult<usize> {
        check_cycles(cycles)?;
        for _ in 0..cycles {
            self.step();
        }
        Ok(self.cycle_count())
    }

    fn dump(&self) -> Trajectory {
        Trajectory::new()
            .with_series("s", &self.s)
            .with_series("i", &self.i)
            .with_series("r", &self.r)
    }
}
