use rand::Rng;

use crate::value::Value;

/// Creates `n` leaf nodes drawn uniformly from `[low, high]`.
pub fn uniform<R: Rng + ?Sized>(n: usize, low: f64, high: f64, rng: &mut R) -> Vec<Value> {
    (0..n).map(|_| Value::new(rng.gen_range(low..=high))).collect()
}

/// Creates `n` leaf nodes holding `value`.
pub fn constant(n: usize, value: f64) -> Vec<Value> {
    (0..n).map(|_| Value::new(value)).collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
