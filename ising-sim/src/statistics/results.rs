use std::fmt;

/// Snapshot taken at the end of one reporting cycle.
///
/// `steps` and `accepts` are cumulative since the start of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub cycle: usize,
    pub steps: u64,
    pub accepts: u64,
    /// `accepts / steps`.
    pub acceptance_rate: f64,
    /// Mean spin after this cycle.
    pub net_spin: f64,
    pub energy_per_spin: f64,
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "steps={} acc rate={:.3} net spin={:.3}",
            self.steps, self.acceptance_rate, self.net_spin
        )
    }
}

/// Observables averaged over the measured (non-warmup) cycles of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub measured_cycles: usize,
    pub steps: u64,
    pub accepts: u64,
    /// ⟨m⟩
    pub net_spin: f64,
    /// ⟨|m|⟩
    pub abs_net_spin: f64,
    /// ⟨m²⟩
    pub net_spin2: f64,
    /// ⟨m⁴⟩
    pub net_spin4: f64,
    /// ⟨E⟩ per spin.
    pub energy_per_spin: f64,
}

impl RunSummary {
    /// Overall `accepts / steps`, or 0 when nothing ran.
    pub fn acceptance_rate(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.accepts as f64 / self.steps as f64
        }
    }

    /// `1 - ⟨m⁴⟩ / (3 ⟨m²⟩²)`, or 0 when ⟨m²⟩ vanishes.
    pub fn binder_cumulant(&self) -> f64 {
        if self.net_spin2 == 0.0 {
            return 0.0;
        }
        1.0 - self.net_spin4 / (3.0 * self.net_spin2 * self.net_spin2)
    }

    /// Average summaries of independent replicas.
    ///
    /// Moments are averaged with equal weight; step and accept counts are
    /// summed. An empty slice gives an all-zero summary.
    pub fn aggregate(results: &[Self]) -> Self {
        let mut agg = RunSummary {
            measured_cycles: 0,
            steps: 0,
            accepts: 0,
            net_spin: 0.0,
            abs_net_spin: 0.0,
            net_spin2: 0.0,
            net_spin4: 0.0,
            energy_per_spin: 0.0,
        };
        if results.is_empty() {
            return agg;
        }

        for r in results {
            agg.measured_cycles += r.measured_cycles;
            agg.steps += r.steps;
            agg.accepts += r.accepts;
            agg.net_spin += r.net_spin;
            agg.abs_net_spin += r.abs_net_spin;
            agg.net_spin2 += r.net_spin2;
            agg.net_spin4 += r.net_spin4;
            agg.energy_per_spin += r.energy_per_spin;
        }

        let n = results.len() as f64;
        for v in [
            &mut agg.net_spin,
            &mut agg.abs_net_spin,
            &mut agg.net_spin2,
            &mut agg.net_spin4,
            &mut agg.energy_per_spin,
        ] {
            *v /= n;
        }

        agg
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "summary cycles={} steps={} acc rate={:.3} <m>={:.3} <|m|>={:.3} <m^2>={:.3} binder={:.3} energy={:.3}",
            self.measured_cycles,
            self.steps,
            self.acceptance_rate(),
            self.net_spin,
            self.abs_net_spin,
            self.net_spin2,
            self.binder_cumulant(),
            self.energy_per_spin,
        )
    }
}

/// Everything one driven run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub cycles: Vec<CycleReport>,
    pub summary: RunSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn summary(m: f64, steps: u64, accepts: u64) -> RunSummary {
        RunSummary {
            measured_cycles: 4,
            steps,
            accepts,
            net_spin: m,
            abs_net_spin: m.abs(),
            net_spin2: m * m,
            net_spin4: m.powi(4),
            energy_per_spin: -m,
        }
    }

    #[test]
    fn test_cycle_line_format() {
        let report = CycleReport {
            cycle: 0,
            steps: 10,
            accepts: 5,
            acceptance_rate: 0.5,
            net_spin: -0.25,
            energy_per_spin: 0.0,
        };
        assert_eq!(report.to_string(), "steps=10 acc rate=0.500 net spin=-0.250");
    }

    #[test]
    fn test_binder_cumulant() {
        // Fully ordered: m^2 = m^4 = 1
        assert_abs_diff_eq!(summary(1.0, 1, 1).binder_cumulant(), 2.0 / 3.0);
        assert_eq!(summary(0.0, 1, 1).binder_cumulant(), 0.0);
    }

    #[test]
    fn test_acceptance_rate_without_steps() {
        assert_eq!(summary(0.3, 0, 0).acceptance_rate(), 0.0);
    }

    #[test]
    fn test_aggregate() {
        let agg = RunSummary::aggregate(&[summary(1.0, 100, 30), summary(-0.5, 100, 50)]);
        assert_eq!(agg.measured_cycles, 8);
        assert_eq!(agg.steps, 200);
        assert_eq!(agg.accepts, 80);
        assert_abs_diff_eq!(agg.acceptance_rate(), 0.4);
        assert_abs_diff_eq!(agg.net_spin, 0.25);
        assert_abs_diff_eq!(agg.abs_net_spin, 0.75);
        assert_abs_diff_eq!(agg.net_spin2, 0.625);
        assert_abs_diff_eq!(agg.energy_per_spin, -0.25);
    }

    #[test]
    fn test_aggregate_empty() {
        let agg = RunSummary::aggregate(&[]);
        assert_eq!(agg.steps, 0);
        assert_eq!(agg.net_spin, 0.0);
    }
}
