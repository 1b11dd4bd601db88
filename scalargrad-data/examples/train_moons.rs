//! # Binary classification on the two-moons dataset
//!
//! 1. Generates a noisy two-moons dataset and optionally saves it as CSV.
//! 2. Trains `MLP(2, [16, 16, 1])` with mini-batch SGD on the mean hinge
//!    loss plus an L2 penalty, with a linearly decaying learning rate.
//! 3. Reports the loss and accuracy as training goes.
//!
//! ## Execution
//! `cargo run -p scalargrad-data --example train_moons -- [output.csv]`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{HingeLoss, Mlp, Module, Reduction};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::train::accuracy;
use scalargrad_core::{ScalarGradError, Value};
use scalargrad_data::csv::save_csv;
use scalargrad_data::{Dataset, MoonsGenerator, RandomSampler, Sampler};

const N_SAMPLES: usize = 100;
const NOISE: f64 = 0.1;
const STEPS: usize = 100;
const BATCH_SIZE: usize = 32;
const ALPHA: f64 = 1e-4;

fn main() -> Result<(), ScalarGradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dataset = MoonsGenerator::default().make_moons(N_SAMPLES, NOISE)?;
    if let Some(path) = std::env::args().nth(1) {
        save_csv(&dataset, path)?;
    }

    let model = Mlp::with_rng(2, &[16, 16, 1], &mut StdRng::seed_from_u64(1337));
    log::info!("{} ({} parameters)", model, model.num_parameters());

    let mut optimizer = Sgd::new(model.parameters(), 1.0)?;
    let sampler = RandomSampler::with_seed(false, Some(BATCH_SIZE), 0);
    let loss_fn = HingeLoss::new(Reduction::Mean);

    for step in 0..STEPS {
        let indices: Vec<usize> = sampler.iter(dataset.len()).collect();
        let batch = dataset.select(&indices)?;
        let inputs = batch.to_inputs();

        let preds = inputs
            .iter()
            .map(|x| model.forward(x).map(|out| out[0].clone()))
            .collect::<Result<Vec<Value>, _>>()?;
        let data_loss = loss_fn.calculate(&preds, batch.labels())?;
        let reg_loss: Value = model.parameters().iter().map(|p| p * p).sum::<Value>() * ALPHA;
        let total_loss = &data_loss + &reg_loss;

        optimizer.zero_grad();
        total_loss.backward();
        optimizer.set_lr(1.0 - 0.9 * step as f64 / STEPS as f64)?;
        optimizer.step()?;

        if step % 10 == 0 || step + 1 == STEPS {
            let acc = accuracy(&model, &inputs, batch.labels())?;
            log::info!(
                "step {} loss {:.6}, batch accuracy {:.1}%",
                step,
                total_loss.data(),
                acc * 100.0
            );
        }
    }

    let acc = accuracy(&model, &dataset.to_inputs(), dataset.labels())?;
    log::info!("accuracy on the full dataset: {:.1}%", acc * 100.0);
    Ok(())
}
