use std::time::Instant;

use log::{debug, info, warn};

use crate::error::{check_dimensions, Result};
use crate::loss::mse::MseLoss;
use crate::neuron::Neuron;
use crate::optim::sgd::Sgd;
use crate::train::example::TrainingExample;
use crate::train::loss_history::LossHistory;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `neuron` for `config.epochs` epochs and returns the mean squared
/// error of every epoch.
///
/// # Arguments
/// - `neuron`: modified in place
/// - `examples`: visited in the given order on every epoch, never shuffled
/// - `config`: learning rate and epoch count
///
/// Every example is validated before the first update, so a
/// `DimensionMismatch` leaves the weights untouched. An empty example set
/// trains nothing and records a loss of 0 for each epoch.
pub fn train_loop(
    neuron: &mut Neuron,
    examples: &[TrainingExample],
    config: &TrainConfig,
) -> Result<LossHistory> {
    for example in examples {
        check_dimensions(neuron.dimensions(), example.inputs.len())?;
    }
    if examples.is_empty() {
        warn!("{}: training called with no examples; weights unchanged", neuron.name());
    }

    let optimizer = Sgd::new(config.learning_rate);
    let mut history = LossHistory::with_capacity(config.epochs);
    let t_start = Instant::now();

    for epoch in 1..=config.epochs {
        let loss = run_one_epoch(neuron, examples, &optimizer);
        debug!("{}: epoch {}/{} loss {:.6}", neuron.name(), epoch, config.epochs, loss);
        history.push(loss);
    }

    info!(
        "{}: trained {} epochs on {} examples in {} ms (final loss {:.6})",
        neuron.name(),
        config.epochs,
        examples.len(),
        t_start.elapsed().as_millis(),
        history.last().unwrap_or(0.0),
    );

    Ok(history)
}

/// Mean squared error of `neuron` over `examples` without touching weights.
pub fn mean_loss(neuron: &Neuron, examples: &[TrainingExample]) -> Result<f64> {
    let mut predicted = Vec::with_capacity(examples.len());
    let mut expected = Vec::with_capacity(examples.len());
    for example in examples {
        predicted.push(neuron.evaluate(&example.inputs)?);
        expected.push(example.target);
    }
    Ok(MseLoss::loss(&predicted, &expected))
}

/// Fraction of `examples` whose class `neuron` predicts correctly.
/// Empty input gives 0.
pub fn accuracy(neuron: &Neuron, examples: &[TrainingExample]) -> Result<f64> {
    if examples.is_empty() {
        return Ok(0.0);
    }
    let mut correct = 0usize;
    for example in examples {
        if neuron.classify(&example.inputs)? == example.is_positive() {
            correct += 1;
        }
    }
    Ok(correct as f64 / examples.len() as f64)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass of online SGD. Returns the mean squared error over the pass,
/// measured with each prediction made just before its own update.
fn run_one_epoch(neuron: &mut Neuron, examples: &[TrainingExample], optimizer: &Sgd) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }
    let mut total_loss = 0.0;
    for example in examples {
        let predicted = neuron.forward(&example.inputs);
        let error = MseLoss::residual(predicted, example.target);
        total_loss += error * error;
        optimizer.step(neuron, &example.inputs, error);
    }
    total_loss / examples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neuron::{InputSpec, NeuronConfig};

    fn neuron(weights: &[f64], bias: f64) -> Neuron {
        Neuron::new(NeuronConfig {
            name: "t".into(),
            label: "T?".into(),
            yes_label: "Y".into(),
            no_label: "N".into(),
            bias,
            inputs: weights.iter().enumerate()
                .map(|(i, &w)| InputSpec::new(format!("x{i}"), format!("X{i}"), w))
                .collect(),
        })
    }

    #[test]
    fn history_has_one_entry_per_epoch() {
        let mut n = neuron(&[0.0, 0.0], 0.0);
        let examples = vec![
            TrainingExample::new(vec![1.0, 0.0], true),
            TrainingExample::new(vec![0.0, 1.0], false),
        ];
        let history = n.train(&examples, 0.1, 37).unwrap();
        assert_eq!(history.len(), 37);
        assert!(n.train(&examples, 0.1, 0).unwrap().is_empty());
    }

    #[test]
    fn first_epoch_matches_hand_computation() {
        // Zero weights: first prediction is 0.5, error 0.5, loss 0.25.
        let mut n = neuron(&[0.0], 0.0);
        let history = n.train(&[TrainingExample::new(vec![1.0], true)], 1.0, 1).unwrap();
        assert!((history.as_slice()[0] - 0.25).abs() < 1e-12);
        assert!((n.weights()[0] - 0.5).abs() < 1e-12);
        assert!((n.bias() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn single_positive_example_loss_keeps_falling() {
        let mut n = neuron(&[0.0, 0.0], 0.0);
        let examples = vec![TrainingExample::new(vec![1.0, 1.0], true)];
        let history = n.train(&examples, 5.0, 20).unwrap();
        for pair in history.as_slice().windows(2) {
            assert!(pair[1] < pair[0] || pair[1] == 0.0, "{:?}", history);
        }
        assert!(history.improvement().unwrap() > 0.0);
    }

    #[test]
    fn bad_example_leaves_weights_alone() {
        let mut n = neuron(&[0.3, 0.4], 0.1);
        let examples = vec![
            TrainingExample::new(vec![1.0, 1.0], true),
            TrainingExample::new(vec![1.0], false),
        ];
        assert!(n.train(&examples, 1.0, 5).is_err());
        assert_eq!(n.weights(), vec![0.3, 0.4]);
        assert_eq!(n.bias(), 0.1);
    }

    #[test]
    fn empty_examples_record_zero_loss() {
        let mut n = neuron(&[1.0], 0.0);
        let history = n.train(&[], 0.5, 3).unwrap();
        assert_eq!(history.as_slice(), &[0.0, 0.0, 0.0]);
        assert_eq!(n.weights(), vec![1.0]);
    }

    #[test]
    fn learns_a_separable_rule() {
        let mut n = neuron(&[0.0, 0.0], 0.0);
        let examples = vec![
            TrainingExample::new(vec![0.9, 0.1], true),
            TrainingExample::new(vec![0.8, 0.3], true),
            TrainingExample::new(vec![0.1, 0.9], false),
            TrainingExample::new(vec![0.2, 0.7], false),
        ];
        n.train(&examples, 1.0, 200).unwrap();
        assert_eq!(accuracy(&n, &examples).unwrap(), 1.0);
        assert!(mean_loss(&n, &examples).unwrap() < 0.05);
    }
}
