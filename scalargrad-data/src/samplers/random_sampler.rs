// scalargrad-data/src/samplers/random_sampler.rs

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::traits::Sampler;

/// A sampler that randomly samples indices from a dataset.
///
/// The generator is owned by the sampler and advances on every call to
/// `iter`, so each epoch gets a different order while a seeded sampler
/// still replays the same sequence of epochs.
#[derive(Debug)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    rng: Mutex<StdRng>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler` seeded from system entropy.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        Self::with_rng(replacement, num_samples, StdRng::from_entropy())
    }

    /// Creates a reproducible `RandomSampler`.
    pub fn with_seed(replacement: bool, num_samples: Option<usize>, seed: u64) -> Self {
        Self::with_rng(replacement, num_samples, StdRng::seed_from_u64(seed))
    }

    fn with_rng(replacement: bool, num_samples: Option<usize>, rng: StdRng) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            rng: Mutex::new(rng),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        // A poisoned generator is still a valid generator.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);

        if self.replacement {
            let indices: Vec<usize> = (0..actual_num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect();
            Box::new(indices.into_iter())
        } else {
            if actual_num_samples > dataset_len {
                log::warn!(
                    "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement. Returning empty iterator.",
                    actual_num_samples,
                    dataset_len
                );
                return Box::new(std::iter::empty());
            }
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(&mut *rng);
            indices.truncate(actual_num_samples);
            Box::new(indices.into_iter())
        }
    }

    /// Matches the number of indices `iter` yields: 0 for an empty dataset
    /// or when more samples than available are requested without replacement.
    fn len(&self, dataset_len: usize) -> usize {
        let requested = self.num_samples.unwrap_or(dataset_len);
        if dataset_len == 0 || (!self.replacement && requested > dataset_len) {
            return 0;
        }
        requested
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
