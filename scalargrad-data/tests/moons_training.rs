use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::train::{accuracy, TrainConfig, Trainer};
use scalargrad_core::ScalarGradError;
use scalargrad_data::csv::{read_csv, write_csv};
use scalargrad_data::{Dataset, MoonsGenerator, SequentialSampler, Sampler};

#[test]
fn test_training_on_moons_reduces_loss() -> Result<(), ScalarGradError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dataset = MoonsGenerator::default().make_moons(40, 0.1)?;
    let inputs = dataset.to_inputs();
    let model = Mlp::with_rng(2, &[8, 1], &mut StdRng::seed_from_u64(5));

    let report = Trainer::new(TrainConfig {
        epochs: 30,
        learning_rate: 0.005,
        log_every: 10,
    })
    .fit(&model, &inputs, dataset.labels())?;

    let first = report.losses[0];
    let last = report.final_loss().unwrap_or(f64::NAN);
    assert!(last < first, "loss did not decrease: {} -> {}", first, last);

    let acc = accuracy(&model, &inputs, dataset.labels())?;
    assert!((0.0..=1.0).contains(&acc));
    Ok(())
}

#[test]
fn test_dataset_written_and_read_back_trains_identically() -> Result<(), ScalarGradError> {
    let dataset = MoonsGenerator::new(3).make_moons(12, 0.2)?;
    let mut buffer = Vec::new();
    write_csv(&dataset, &mut buffer)?;
    let reloaded = read_csv(buffer.as_slice())?;
    assert_eq!(reloaded, dataset);

    let order: Vec<usize> = SequentialSampler::new().iter(reloaded.len()).collect();
    let selected = reloaded.select(&order)?;
    assert_eq!(selected, dataset);

    let model = Mlp::with_rng(2, &[4, 1], &mut StdRng::seed_from_u64(9));
    let preds_a = model.forward(&dataset.to_inputs()[0])?;
    let preds_b = model.forward(&reloaded.to_inputs()[0])?;
    assert_eq!(preds_a[0].data(), preds_b[0].data());
    Ok(())
}
