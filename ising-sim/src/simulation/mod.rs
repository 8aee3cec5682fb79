use tracing::{info, trace};

use crate::config::{RunConfig, SimParams};
use crate::error::{Result, SimError};
use crate::geometry::LatticeState;
use crate::mcmc::MetropolisEngine;
use crate::parallel::par_over_replicas;
use crate::rng::RandomSource;
use crate::statistics::{CycleReport, MeasurementAccum, RunReport};

/// Drive `engine` through `config.cycles` cycles of `config.analysis_rate`
/// trials each.
///
/// After every cycle a [`CycleReport`] is built from cumulative counts and the
/// current lattice and handed to `on_cycle` together with the lattice. Reports
/// are kept in the returned [`RunReport`] only when `config.keep_history` is
/// set. Cycles after `warmup_cycles` feed the summary.
///
/// The configuration is checked before the first trial; an invalid one leaves
/// the engine untouched.
pub fn run_cycles<R: RandomSource>(
    engine: &mut MetropolisEngine<R>,
    config: &RunConfig,
    on_cycle: &(dyn Fn(&CycleReport, &LatticeState) + Sync),
) -> Result<RunReport> {
    config.check()?;

    info!(
        analysis_rate = config.analysis_rate,
        cycles = config.cycles,
        warmup_cycles = config.warmup_cycles,
        "starting run"
    );

    let mut steps = 0u64;
    let mut accepts = 0u64;
    let mut measurements = MeasurementAccum::new();
    let mut cycles = Vec::new();

    for cycle in 0..config.cycles {
        for _ in 0..config.analysis_rate {
            if engine.advance_simulation() {
                accepts += 1;
            }
            steps += 1;
        }

        let report = CycleReport {
            cycle,
            steps,
            accepts,
            acceptance_rate: accepts as f64 / steps as f64,
            net_spin: engine.net_spin_rate(),
            energy_per_spin: engine.energy_per_spin(),
        };
        trace!(cycle, steps, accepts, net_spin = report.net_spin, "cycle done");

        if cycle >= config.warmup_cycles {
            measurements.record(report.net_spin, report.energy_per_spin);
        }
        on_cycle(&report, engine.lattice());
        if config.keep_history {
            cycles.push(report);
        }
    }

    let summary = measurements.finish(steps, accepts);
    info!(
        steps,
        accepts,
        acceptance_rate = summary.acceptance_rate(),
        net_spin = summary.net_spin,
        "run finished"
    );

    Ok(RunReport { cycles, summary })
}

/// Run `n_replicas` independent engines with seeds `seed, seed + 1, …`.
///
/// Replicas run on the rayon pool (on the current thread when there is only
/// one) and reports come back in replica order. `on_cycle` receives the
/// replica index and report as each cycle finishes, so cycles of different
/// replicas may arrive interleaved.
pub fn run_ensemble(
    params: &SimParams,
    n_replicas: usize,
    config: &RunConfig,
    on_cycle: &(dyn Fn(usize, &CycleReport) + Sync),
) -> Result<Vec<RunReport>> {
    if n_replicas < 1 {
        return Err(SimError::InvalidArgument(
            "n_replicas must be >= 1".to_string(),
        ));
    }
    config.check()?;

    let mut engines = (0..n_replicas)
        .map(|i| MetropolisEngine::new(params.with_seed(params.seed.wrapping_add(i as u64))))
        .collect::<Result<Vec<_>>>()?;

    let results = par_over_replicas(&mut engines, n_replicas == 1, |i, engine| {
        run_cycles(engine, config, &|cycle: &CycleReport, _: &LatticeState| {
            on_cycle(i, cycle)
        })
    });

    results.into_iter().collect()
}
