/// Running mean of `value^power` over recorded samples.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub count: usize,
    pub aggregate: f64,
    pub power: i32,
}

impl Statistics {
    pub fn new(power: i32) -> Self {
        Self {
            count: 0,
            aggregate: 0.0,
            power,
        }
    }

    pub fn update(&mut self, value: f64) {
        self.count += 1;
        self.aggregate += if self.power == 1 {
            value
        } else {
            value.powi(self.power)
        };
    }

    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return self.aggregate;
        }
        self.aggregate / self.count as f64
    }
}

/// Per-cycle magnetization and energy moments for one run.
#[derive(Debug, Clone)]
pub struct MeasurementAccum {
    net_spin: Statistics,
    abs_net_spin: Statistics,
    net_spin2: Statistics,
    net_spin4: Statistics,
    energy: Statistics,
}

impl Default for MeasurementAccum {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementAccum {
    pub fn new() -> Self {
        Self {
            net_spin: Statistics::new(1),
            abs_net_spin: Statistics::new(1),
            net_spin2: Statistics::new(2),
            net_spin4: Statistics::new(4),
            energy: Statistics::new(1),
        }
    }

    pub fn record(&mut self, net_spin: f64, energy_per_spin: f64) {
        self.net_spin.update(net_spin);
        self.abs_net_spin.update(net_spin.abs());
        self.net_spin2.update(net_spin);
        self.net_spin4.update(net_spin);
        self.energy.update(energy_per_spin);
    }

    pub fn count(&self) -> usize {
        self.net_spin.count
    }

    /// Close out the run. `steps`/`accepts` are totals over all cycles,
    /// warmup included.
    pub fn finish(&self, steps: u64, accepts: u64) -> super::RunSummary {
        super::RunSummary {
            measured_cycles: self.count(),
            steps,
            accepts,
            net_spin: self.net_spin.average(),
            abs_net_spin: self.abs_net_spin.average(),
            net_spin2: self.net_spin2.average(),
            net_spin4: self.net_spin4.average(),
            energy_per_spin: self.energy.average(),
        }
    }
}
