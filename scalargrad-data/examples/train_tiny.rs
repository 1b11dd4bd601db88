//! # Training an MLP on a 4-sample toy problem
//!
//! Fits `MLP(3, [4, 4, 1])` to four hand-written samples with full-batch
//! gradient descent on the sum of squared errors, logging the loss every
//! iteration.
//!
//! ## Execution
//! `RUST_LOG=info cargo run -p scalargrad-data --example train_tiny`

use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::train::{TrainConfig, Trainer};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let model = Mlp::new(3, &[4, 4, 1]);
    log::info!("{} ({} parameters)", model, model.num_parameters());

    let xs: Vec<Vec<Value>> = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ]
    .iter()
    .map(|row| row.iter().map(|&v| Value::new(v)).collect())
    .collect();
    let ys = [1.0, -1.0, -1.0, 1.0];

    let report = Trainer::new(TrainConfig::default()).fit(&model, &xs, &ys)?;

    for (x, y) in xs.iter().zip(ys.iter()) {
        let pred = model.forward(x)?;
        log::info!("target {:>5} prediction {:.4}", y, pred[0].data());
    }
    if let Some(loss) = report.final_loss() {
        log::info!("final loss {:.6}", loss);
    }
    Ok(())
}
