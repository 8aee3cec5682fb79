pub mod metropolis;

pub use metropolis::MetropolisEngine;
