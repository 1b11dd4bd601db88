// scalargrad-data/src/samplers/random_sampler_test.rs

use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_len() {
    assert_eq!(RandomSampler::new(false, None).len(10), 10);
    assert_eq!(RandomSampler::new(false, Some(5)).len(10), 5);
}

#[test]
fn test_random_sampler_without_replacement_is_a_permutation() {
    let sampler = RandomSampler::with_seed(false, None, 3);
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 10);
    let unique: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique, (0..10).collect::<HashSet<_>>());
}

#[test]
fn test_random_sampler_subset_without_replacement() {
    let sampler = RandomSampler::with_seed(false, Some(4), 3);
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 4);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 4);
    assert!(indices.iter().all(|&i| i < 10));
}

#[test]
fn test_random_sampler_more_than_dataset_returns_empty() {
    let sampler = RandomSampler::new(false, Some(10));
    assert_eq!(sampler.iter(5).count(), 0);
}

#[test]
fn test_random_sampler_len_matches_iter() {
    let cases = [
        RandomSampler::with_seed(false, Some(10), 1),
        RandomSampler::with_seed(false, Some(3), 1),
        RandomSampler::with_seed(false, None, 1),
        RandomSampler::with_seed(true, Some(10), 1),
        RandomSampler::with_seed(true, None, 1),
    ];
    for sampler in cases.iter() {
        for &dataset_len in &[0usize, 5] {
            assert_eq!(
                sampler.len(dataset_len),
                sampler.iter(dataset_len).count(),
                "{:?} with dataset_len {}",
                sampler,
                dataset_len
            );
        }
    }
    assert_eq!(RandomSampler::new(false, Some(10)).len(5), 0);
    assert_eq!(RandomSampler::new(true, Some(5)).len(0), 0);
}

#[test]
fn test_random_sampler_with_replacement() {
    let sampler = RandomSampler::with_seed(true, Some(50), 9);
    let indices: Vec<usize> = sampler.iter(3).collect();
    assert_eq!(indices.len(), 50);
    assert!(indices.iter().all(|&i| i < 3));
}

#[test]
fn test_random_sampler_empty_dataset() {
    let sampler = RandomSampler::new(true, Some(5));
    assert_eq!(sampler.iter(0).count(), 0);
}

#[test]
fn test_random_sampler_seed_is_reproducible() {
    let a = RandomSampler::with_seed(false, None, 42);
    let b = RandomSampler::with_seed(false, None, 42);
    let first_a: Vec<usize> = a.iter(20).collect();
    let first_b: Vec<usize> = b.iter(20).collect();
    assert_eq!(first_a, first_b);

    let second_a: Vec<usize> = a.iter(20).collect();
    let second_b: Vec<usize> = b.iter(20).collect();
    assert_eq!(second_a, second_b);
}
