use scalargrad_core::Value;

// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The 4-sample, 3-feature toy problem used throughout the training tests.
#[allow(dead_code)]
pub(crate) fn tiny_dataset() -> (Vec<Vec<Value>>, Vec<f64>) {
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ]
    .iter()
    .map(|row| leaves(row))
    .collect();
    (xs, vec![1.0, -1.0, -1.0, 1.0])
}
