use std::time::Instant;

use ising_sim::{run_ensemble, MetropolisEngine, RunConfig, RunSummary, SimParams};

const L: usize = 128;
const J: f64 = 0.44;
const N_SWEEPS: usize = 200;
const N_REPLICAS: usize = 8;

fn main() -> ising_sim::Result<()> {
    let params = SimParams::new(L, J, 0.0, 42);
    let n_spins = L * L;

    println!(
        "Lattice: {}x{}  |  J: {}  |  Sweeps: {}  |  Replicas: {}",
        L, L, J, N_SWEEPS, N_REPLICAS
    );
    println!("{}", "-".repeat(70));

    let mut engine = MetropolisEngine::new(params)?;
    let t0 = Instant::now();
    let mut accepted = 0usize;
    for _ in 0..N_SWEEPS {
        accepted += engine.sweep();
    }
    let elapsed = t0.elapsed().as_secs_f64();
    println!(
        "Single engine: {:.3} s  |  {:.3} ms/sweep  |  acc rate {:.3}  |  m {:.3}",
        elapsed,
        elapsed / N_SWEEPS as f64 * 1000.0,
        accepted as f64 / (N_SWEEPS * n_spins) as f64,
        engine.net_spin_rate(),
    );

    let config = RunConfig::new(n_spins, N_SWEEPS);
    let t0 = Instant::now();
    let reports = run_ensemble(&params, N_REPLICAS, &config, &|_, _| {})?;
    let elapsed = t0.elapsed().as_secs_f64();
    let summaries: Vec<RunSummary> = reports.into_iter().map(|r| r.summary).collect();
    println!(
        "Ensemble: {:.3} s  |  {:.3} ms/sweep/replica",
        elapsed,
        elapsed / (N_SWEEPS * N_REPLICAS) as f64 * 1000.0
    );
    println!("{}", RunSummary::aggregate(&summaries));
    Ok(())
}
