//! Two interleaving half circles ("moons"), the classic non-linearly
//! separable toy problem for binary classifiers.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use scalargrad_core::ScalarGradError;

use crate::datasets::LabeledDataset;

/// Seed used by [`MoonsGenerator::default`].
pub const DEFAULT_SEED: u64 = 42;

/// Seeded generator of two-moons datasets.
///
/// The generator keeps its random state between calls: two generators
/// built from the same seed produce the same sequence of datasets.
#[derive(Debug, Clone)]
pub struct MoonsGenerator {
    rng: StdRng,
}

impl Default for MoonsGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl MoonsGenerator {
    pub fn new(seed: u64) -> Self {
        MoonsGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `n_samples / 2` points on each moon.
    ///
    /// For `i` in `0..n_samples / 2` the angle is `PI * i / (n_samples / 2)`.
    /// The upper moon is `(cos, sin)` with label `+1.0`; the lower moon is
    /// `(1 - cos, 0.5 - sin)` with label `-1.0`. Gaussian noise with standard
    /// deviation `noise` is added to each coordinate. Upper-moon samples come
    /// first. An odd `n_samples` yields `n_samples - 1` points.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `noise` is negative or not finite.
    pub fn make_moons(
        &mut self,
        n_samples: usize,
        noise: f64,
    ) -> Result<LabeledDataset, ScalarGradError> {
        if !noise.is_finite() || noise < 0.0 {
            return Err(ScalarGradError::InvalidConfig(format!(
                "Invalid noise {}: must be finite and non-negative",
                noise
            )));
        }
        let distr_noise = Normal::new(0.0, noise).map_err(|e| {
            ScalarGradError::InvalidConfig(format!("Invalid noise {}: {}", noise, e))
        })?;

        let per_moon = n_samples / 2;
        let mut features = Vec::with_capacity(2 * per_moon);
        let mut labels = Vec::with_capacity(2 * per_moon);

        for i in 0..per_moon {
            let angle = PI * i as f64 / per_moon as f64;
            let x = angle.cos() + distr_noise.sample(&mut self.rng);
            let y = angle.sin() + distr_noise.sample(&mut self.rng);
            features.push(vec![x, y]);
            labels.push(1.0);
        }

        for i in 0..per_moon {
            let angle = PI * i as f64 / per_moon as f64;
            let x = 1.0 - angle.cos() + distr_noise.sample(&mut self.rng);
            let y = 0.5 - angle.sin() + distr_noise.sample(&mut self.rng);
            features.push(vec![x, y]);
            labels.push(-1.0);
        }

        log::debug!(
            "make_moons: generated {} samples (noise={})",
            labels.len(),
            noise
        );
        LabeledDataset::new(features, labels)
    }
}

#[cfg(test)]
#[path = "moons_test.rs"]
mod tests;
