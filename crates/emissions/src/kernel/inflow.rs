//! Daily waste inflow and its truncated convolution with a kernel.

use super::EmissionKernel;

/// Waste mass entering on each simulated day (kg).
#[derive(Clone, Debug, PartialEq)]
pub struct DailyInflow {
    samples: Vec<f64>,
}

impl DailyInflow {
    /// The same mass every day for `days` days.
    pub fn constant(kg_per_day: f64, days: usize) -> Self {
        Self {
            samples: vec![kg_per_day; days],
        }
    }

    /// A single batch on day 0, nothing afterwards.
    pub fn pulse(kg: f64, days: usize) -> Self {
        let mut samples = vec![0.0; days];
        if let Some(first) = samples.first_mut() {
            *first = kg;
        }
        Self { samples }
    }

    pub fn from_samples(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn days(&self) -> usize {
        self.samples.len()
    }

    /// Total mass entering over the horizon.
    pub fn total(&self) -> f64 {
        self.samples.iter().sum()
    }

    fn constant_rate(&self) -> Option<f64> {
        let first = *self.samples.first()?;
        self.samples
            .iter()
            .all(|&s| s == first)
            .then_some(first)
    }

    /// Full convolution of the inflow with `kernel`, keeping the first
    /// `days()` samples.
    ///
    /// Releases that would fall after the horizon are dropped. A constant
    /// inflow reduces to a running sum of the kernel, which keeps the
    /// horizon-long landfill kernel linear in the horizon.
    pub fn convolve(&self, kernel: &EmissionKernel) -> Vec<f64> {
        let days = self.days();
        let weights = kernel.weights();
        let mut out = vec![0.0; days];

        if let Some(rate) = self.constant_rate() {
            let mut running = 0.0;
            for (t, slot) in out.iter_mut().enumerate() {
                if let Some(w) = weights.get(t) {
                    running += w;
                }
                *slot = rate * running;
            }
            return out;
        }

        for (entry, &mass) in self.samples.iter().enumerate() {
            if mass == 0.0 {
                continue;
            }
            for (offset, &w) in weights.iter().enumerate() {
                let day = entry + offset;
                if day >= days {
                    break;
                }
                out[day] += mass * w;
            }
        }
        out
    }
}
