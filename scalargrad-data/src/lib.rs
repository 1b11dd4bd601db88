//! # scalargrad-data
//!
//! Datasets and synthetic data generators feeding `scalargrad-core`
//! networks: an indexable `Dataset` trait, labelled 2-D point clouds, the
//! two-moons generator, CSV persistence and index samplers for mini-batches.

pub mod csv;
pub mod datasets;
pub mod moons;
pub mod samplers;

// Re-export main components
pub use datasets::{Dataset, LabeledDataset};
pub use moons::MoonsGenerator;
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
