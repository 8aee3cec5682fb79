use tracing::debug;

use crate::config::SimParams;
use crate::error::Result;
use crate::geometry::LatticeState;
use crate::rng::{RandomSource, SeededRandom};
use crate::spins::energy;

/// Single-spin-flip Metropolis sampler for the 2D Ising model.
///
/// Owns its lattice and its random stream outright; independent engines
/// share nothing and can run on separate threads.
#[derive(Debug, Clone)]
pub struct MetropolisEngine<R = SeededRandom> {
    params: SimParams,
    lattice: LatticeState,
    rng: R,
}

impl MetropolisEngine<SeededRandom> {
    /// Build an engine whose lattice and trials both draw from `params.seed`.
    pub fn new(params: SimParams) -> Result<Self> {
        Self::with_random_source(params, SeededRandom::new(params.seed))
    }
}

impl<R: RandomSource> MetropolisEngine<R> {
    /// Build an engine over an arbitrary random stream. `params.seed` is not
    /// consulted; the stream is used as given.
    pub fn with_random_source(params: SimParams, mut rng: R) -> Result<Self> {
        params.check()?;
        let lattice = LatticeState::random(params.lateral_size, &mut rng)?;
        debug!(
            lateral_size = params.lateral_size,
            pair_interaction = params.pair_interaction,
            external_field = params.external_field,
            seed = params.seed,
            "initialized lattice"
        );
        Ok(Self {
            params,
            lattice,
            rng,
        })
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn lattice(&self) -> &LatticeState {
        &self.lattice
    }

    /// Energy change from flipping the spin at `(row, col)`.
    ///
    /// Field term first, then one pair term per neighbor in East, South,
    /// West, North order, so the floating-point sum is reproducible.
    pub fn energy_change(&self, row: usize, col: usize) -> f64 {
        let spin = self.lattice.get(row, col);
        let d_spin = f64::from(-spin - spin);

        let mut d_u = -self.params.external_field * d_spin;
        for neighbor in self.lattice.neighbor_spins(row, col) {
            d_u += -self.params.pair_interaction * f64::from(neighbor) * d_spin;
        }
        d_u
    }

    /// Run one Metropolis trial on a uniformly chosen site.
    ///
    /// Draws two indices, then a uniform only when `dU > 0`. Returns whether
    /// the site was flipped.
    pub fn advance_simulation(&mut self) -> bool {
        let l = self.params.lateral_size;
        let row = self.rng.next_index(l);
        let col = self.rng.next_index(l);

        let d_u = self.energy_change(row, col);
        if d_u <= 0.0 || (-d_u).exp() > self.rng.next_uniform() {
            let spin = self.lattice.get(row, col);
            self.lattice.set(row, col, -spin);
            true
        } else {
            false
        }
    }

    /// `L^2` consecutive trials. Returns how many were accepted.
    pub fn sweep(&mut self) -> usize {
        let mut accepted = 0;
        for _ in 0..self.lattice.n_spins() {
            if self.advance_simulation() {
                accepted += 1;
            }
        }
        accepted
    }

    /// Mean spin value, in `[-1, 1]`.
    pub fn net_spin_rate(&self) -> f64 {
        self.lattice.spin_sum() as f64 / self.lattice.n_spins() as f64
    }

    pub fn energy_per_spin(&self) -> f64 {
        energy::energy_per_spin(
            &self.lattice,
            self.params.pair_interaction,
            self.params.external_field,
        )
    }

    /// Row-major, comma-separated dump of the lattice.
    pub fn serialize_state(&self) -> String {
        self.lattice.serialize()
    }
}
