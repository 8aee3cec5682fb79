use clap::Parser;
use ising_sim::{RunConfig, SimParams};

#[derive(Debug, Parser)]
#[command(name = "ising-metropolis")]
#[command(
    version,
    about = "Metropolis Monte Carlo for the 2D Ising model on a periodic square lattice"
)]
pub struct Cli {
    /// Side length L of the square lattice
    pub lateral_size: usize,

    /// Nearest-neighbor coupling J
    #[arg(allow_hyphen_values = true)]
    pub pair_interaction: f64,

    /// Uniform external field H
    #[arg(allow_hyphen_values = true)]
    pub external_field: f64,

    /// Seed for the initial configuration and all trials
    #[arg(allow_hyphen_values = true)]
    pub seed: i64,

    /// Trials per reporting cycle
    pub analysis_rate: usize,

    /// Number of reporting cycles
    pub cycles: usize,

    /// Leading cycles left out of the summary
    #[arg(long, default_value_t = 0)]
    pub warmup: usize,

    /// Independent replicas, seeded seed, seed+1, ...
    #[arg(long, default_value_t = 1)]
    pub replicas: usize,

    /// Print the lattice to stdout after every cycle
    #[arg(long)]
    pub dump_state: bool,

    /// Print an end-of-run summary line
    #[arg(long)]
    pub summary: bool,

    /// Show a progress bar over cycles
    #[arg(long)]
    pub progress: bool,
}

impl Cli {
    pub fn sim_params(&self) -> SimParams {
        SimParams::new(
            self.lateral_size,
            self.pair_interaction,
            self.external_field,
            self.seed as u64,
        )
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(self.analysis_rate, self.cycles).with_warmup(self.warmup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["ising-metropolis", "2", "1.0", "0.0", "42", "10", "1"])
            .unwrap();
        let params = cli.sim_params();
        assert_eq!(params.lateral_size, 2);
        assert_eq!(params.pair_interaction, 1.0);
        assert_eq!(params.external_field, 0.0);
        assert_eq!(params.seed, 42);
        assert_eq!(cli.run_config(), RunConfig::new(10, 1));
        assert_eq!(cli.replicas, 1);
        assert!(!cli.dump_state);
    }

    #[test]
    fn test_negative_values() {
        let cli =
            Cli::try_parse_from(["ising-metropolis", "8", "-0.5", "-1e-2", "-3", "100", "5"])
                .unwrap();
        assert_eq!(cli.pair_interaction, -0.5);
        assert_eq!(cli.external_field, -0.01);
        assert_eq!(cli.sim_params().seed, (-3i64) as u64);

        let cli =
            Cli::try_parse_from(["ising-metropolis", "8", "-2.5E+1", "0.5", "1", "10", "1"])
                .unwrap();
        assert_eq!(cli.pair_interaction, -25.0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "ising-metropolis",
            "16",
            "0.44",
            "0",
            "1",
            "256",
            "40",
            "--warmup",
            "10",
            "--replicas",
            "4",
            "--summary",
        ])
        .unwrap();
        assert_eq!(cli.run_config().warmup_cycles, 10);
        assert_eq!(cli.replicas, 4);
        assert!(cli.summary);
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(Cli::try_parse_from(["ising-metropolis", "2", "1.0", "0.0", "42", "10"]).is_err());
        assert!(
            Cli::try_parse_from(["ising-metropolis", "two", "1.0", "0.0", "42", "10", "1"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from(["ising-metropolis", "2", "J", "0.0", "42", "10", "1"]).is_err()
        );
        assert!(Cli::try_parse_from([
            "ising-metropolis",
            "2",
            "1.0",
            "0.0",
            "42",
            "10",
            "1",
            "7"
        ])
        .is_err());
    }
}
