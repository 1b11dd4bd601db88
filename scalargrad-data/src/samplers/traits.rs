// scalargrad-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Defines the order in which the samples of a dataset are visited.
///
/// Training drivers pull one index sequence per epoch and cut it into
/// mini-batches.
pub trait Sampler: Debug + Send + Sync {
    /// Returns the indices to visit for a dataset of `dataset_len` samples.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the total number of samples that will be yielded by the iterator.
    ///
    /// This might be different from `dataset_len` for samplers drawing a
    /// fixed number of samples.
    fn len(&self, dataset_len: usize) -> usize;
}
