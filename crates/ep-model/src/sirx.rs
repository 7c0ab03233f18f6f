//! SIR with permanent removal (`x`) and delayed re-susceptibility.

use ep_core::{Real, Trajectory, advance, check_probability, lagged};

use crate::error::{ModelError, ModelResult};
use crate::model::{CompartmentModel, check_cycles};

/// Per-cycle flow magnitudes, one entry per executed cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowHistory {
    pub infections: Vec<Real>,
    pub recoveries: Vec<Real>,
    pub deaths: Vec<Real>,
    pub lapses: Vec<Real>,
}

impl FlowHistory {
    pub fn len(&self) -> usize {
        self.infections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infections.is_empty()
    }
}

/// Four-compartment model with lagged feedback from `r` back into `s`.
///
/// Per cycle, from the start-of-cycle snapshot:
/// - infections = alpha * i * s
/// - recoveries = beta * i
/// - deaths = delta * i
/// - lapses = rho * (recoveries recorded `tau` cycles earlier)
///
/// The recovery for the current cycle is recorded before the lag lookup,
/// so with `tau = T` the first `T` cycles have no lapse flow and `tau = 0`
/// feeds the current recovery straight back.
///
/// Only `alpha` is range checked. `i0`, `beta`, `delta` and `rho` are taken
/// as given apart from the `beta + delta < 1` constraint.
#[derive(Clone, Debug)]
pub struct SirxModel {
    alpha: Real,
    beta: Real,
    delta: Real,
    rho: Real,
    tau: usize,
    s: Vec<Real>,
    i: Vec<Real>,
    r: Vec<Real>,
    x: Vec<Real>,
    flows: FlowHistory,
}

impl SirxModel {
    pub fn new(
        i0: Real,
        alpha: Real,
        beta: Real,
        rho: Real,
        delta: Real,
        tau: usize,
    ) -> ModelResult<Self> {
        check_probability("alpha", alpha)?;
        if beta + delta >= 1.0 {
            return Err(ModelError::RateSumTooLarge {
                what: "rho + delta",
                value: rho + delta,
            });
        }

        Ok(Self {
            alpha,
            beta,
            delta,
            rho,
            tau,
            s: vec![1.0 - i0],
            i: vec![i0],
            r: vec![0.0],
            x: vec![0.0],
            flows: FlowHistory::default(),
        })
    }

    pub fn tau(&self) -> usize {
        self.tau
    }

    /// Auxiliary flow histories. Not part of `dump()`.
    pub fn flows(&self) -> &FlowHistory {
        &self.flows
    }

    fn step(&mut self) {
        let s = self.s[self.s.len() - 1];
        let i = self.i[self.i.len() - 1];

        let infections = self.alpha * i * s;
        let recoveries = self.beta * i;
        let deaths = self.delta * i;

        self.flows.infections.push(infections);
        self.flows.recoveries.push(recoveries);
        self.flows.deaths.push(deaths);
        let lapses = self.rho * lagged(&self.flows.recoveries, self.tau);
        self.flows.lapses.push(lapses);

        advance(&mut self.s, lapses - infections);
        advance(&mut self.i, infections - recoveries - deaths);
        advance(&mut self.r, recoveries - lapses);
        advance(&mut self.x, deaths);
    }
}

impl CompartmentModel for SirxModel {
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
            .with_series("x", &self.x)
    }
}
