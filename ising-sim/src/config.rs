use validator::{Validate, ValidationError};

use crate::error::{Result, SimError};

fn validate_sim_params(p: &SimParams) -> std::result::Result<(), ValidationError> {
    if p.lateral_size < 1 {
        return Err(ValidationError::new("lateral_size must be >= 1"));
    }
    if p.lateral_size.checked_mul(p.lateral_size).is_none() {
        return Err(ValidationError::new("lateral_size squared overflows usize"));
    }
    if !p.pair_interaction.is_finite() {
        return Err(ValidationError::new("pair_interaction must be finite"));
    }
    if !p.external_field.is_finite() {
        return Err(ValidationError::new("external_field must be finite"));
    }
    Ok(())
}

/// Immutable parameters of one Metropolis engine.
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
#[validate(schema(function = "validate_sim_params"))]
pub struct SimParams {
    /// Side length `L` of the square lattice.
    pub lateral_size: usize,
    /// Coupling `J` between nearest neighbors.
    pub pair_interaction: f64,
    /// Uniform external field `H`.
    pub external_field: f64,
    /// Seeds both the initial configuration and every later trial.
    pub seed: u64,
}

impl SimParams {
    pub fn new(lateral_size: usize, pair_interaction: f64, external_field: f64, seed: u64) -> Self {
        Self {
            lateral_size,
            pair_interaction,
            external_field,
            seed,
        }
    }

    /// Same couplings, different seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        Self { seed, ..*self }
    }

    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SimError::InvalidParameter(format!("{e}")))
    }
}

fn validate_run_config(cfg: &RunConfig) -> std::result::Result<(), ValidationError> {
    if cfg.analysis_rate < 1 {
        return Err(ValidationError::new("analysis_rate must be >= 1"));
    }
    if cfg.warmup_cycles > cfg.cycles {
        return Err(ValidationError::new("warmup_cycles must be <= cycles"));
    }
    Ok(())
}

/// How long to drive an engine and how often to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
#[validate(schema(function = "validate_run_config"))]
pub struct RunConfig {
    /// Trials per reporting cycle.
    pub analysis_rate: usize,
    /// Number of reporting cycles.
    pub cycles: usize,
    /// Leading cycles left out of the run summary.
    pub warmup_cycles: usize,
    /// Keep every [`CycleReport`](crate::statistics::CycleReport) in the
    /// returned report. Off by default so memory stays flat on long runs.
    pub keep_history: bool,
}

impl RunConfig {
    pub fn new(analysis_rate: usize, cycles: usize) -> Self {
        Self {
            analysis_rate,
            cycles,
            warmup_cycles: 0,
            keep_history: false,
        }
    }

    pub fn with_history(self) -> Self {
        Self {
            keep_history: true,
            ..self
        }
    }

    pub fn with_warmup(self, warmup_cycles: usize) -> Self {
        Self {
            warmup_cycles,
            ..self
        }
    }

    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SimError::InvalidArgument(format!("{e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_params_rejects_empty_lattice() {
        let err = SimParams::new(0, 1.0, 0.0, 7).check().unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter(_)));
    }

    #[test]
    fn test_sim_params_rejects_overflowing_lattice() {
        let err = SimParams::new(usize::MAX, 1.0, 0.0, 7).check().unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter(_)));
    }

    #[test]
    fn test_sim_params_rejects_non_finite_couplings() {
        assert!(SimParams::new(4, f64::NAN, 0.0, 1).check().is_err());
        assert!(SimParams::new(4, 1.0, f64::INFINITY, 1).check().is_err());
        assert!(SimParams::new(4, -1.5, -0.25, 1).check().is_ok());
    }

    #[test]
    fn test_with_seed_keeps_couplings() {
        let p = SimParams::new(8, 0.4, -0.1, 1);
        let q = p.with_seed(99);
        assert_eq!(q.seed, 99);
        assert_eq!(q.lateral_size, 8);
        assert_eq!(q.pair_interaction, 0.4);
        assert_eq!(q.external_field, -0.1);
    }

    #[test]
    fn test_run_config_validation() {
        assert!(RunConfig::new(10, 0).check().is_ok());
        assert!(RunConfig::new(10, 5).with_warmup(5).check().is_ok());

        let err = RunConfig::new(0, 5).check().unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument(_)));

        let err = RunConfig::new(10, 2).with_warmup(3).check().unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument(_)));
    }

    #[test]
    fn test_history_is_opt_in() {
        assert!(!RunConfig::new(10, 1).keep_history);
        let config = RunConfig::new(10, 3).with_warmup(1).with_history();
        assert!(config.keep_history);
        assert_eq!(config.warmup_cycles, 1);
    }
}
