//! Metropolis Monte Carlo for the 2D Ising model on a periodic square lattice.

pub mod config;
pub mod error;
pub mod geometry;
pub mod mcmc;
pub mod rng;
pub mod simulation;
pub mod spins;
pub mod statistics;

mod parallel;

pub use config::{RunConfig, SimParams};
pub use error::{Result, SimError};
pub use geometry::{periodize, LatticeState};
pub use mcmc::MetropolisEngine;
pub use rng::{RandomSource, SeededRandom};
pub use simulation::{run_cycles, run_ensemble};
pub use statistics::{CycleReport, RunReport, RunSummary};
