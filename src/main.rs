use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ising_sim::{run_cycles, run_ensemble, MetropolisEngine, RunSummary, SimError};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let params = cli.sim_params();
    let config = cli.run_config();
    config.check().context("invalid run configuration")?;
    if cli.replicas < 1 {
        bail!(SimError::InvalidArgument(
            "--replicas must be >= 1".to_string()
        ));
    }
    if cli.dump_state && cli.replicas > 1 {
        bail!(SimError::InvalidArgument(
            "--dump-state requires a single replica".to_string()
        ));
    }

    let pb = progress_bar(cli.progress, config.cycles.saturating_mul(cli.replicas) as u64)?;
    info!(
        lateral_size = params.lateral_size,
        replicas = cli.replicas,
        "running simulation"
    );

    if cli.replicas == 1 {
        let mut engine = MetropolisEngine::new(params).context("failed to build the lattice")?;
        let report = run_cycles(&mut engine, &config, &|cycle, lattice| {
            pb.inc(1);
            pb.suspend(|| {
                if cli.dump_state {
                    println!("{}", lattice.serialize());
                }
                eprintln!("{cycle}");
            });
        })?;
        pb.finish_and_clear();

        if cli.summary {
            eprintln!("{}", report.summary);
        }
    } else {
        let reports = run_ensemble(&params, cli.replicas, &config, &|i, cycle| {
            pb.inc(1);
            pb.suspend(|| eprintln!("replica={i} {cycle}"));
        })
        .context("failed to run replicas")?;
        pb.finish_and_clear();

        if cli.summary {
            let summaries: Vec<RunSummary> = reports.into_iter().map(|r| r.summary).collect();
            eprintln!("{}", RunSummary::aggregate(&summaries));
        }
    }

    Ok(())
}

fn progress_bar(enabled: bool, len: u64) -> Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}, {per_sec}]",
        )?
        .progress_chars("=> "),
    );
    pb.set_message("cycles");
    Ok(pb)
}
