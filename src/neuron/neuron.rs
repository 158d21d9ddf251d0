use crate::activation::{is_positive, sigmoid};
use crate::decision::Decision;
use crate::error::{check_dimensions, Result};
use crate::neuron::config::{InputSpec, NeuronConfig};
use crate::train::{train_loop, LossHistory, TrainConfig, TrainingExample};

/// A single weighted-sum + sigmoid decision unit.
///
/// Weights live in the `InputSpec`s and are only reachable by value; they
/// change through `train` and `reset_weights` and nowhere else. The weights
/// and bias the neuron was built with are kept as the reset baseline.
#[derive(Debug)]
pub struct Neuron {
    name: String,
    label: String,
    yes_label: String,
    no_label: String,
    inputs: Vec<InputSpec>,
    bias: f64,
    initial_weights: Vec<f64>,
    initial_bias: f64,
}

impl Neuron {
    pub fn new(config: NeuronConfig) -> Neuron {
        let initial_weights = config.inputs.iter().map(|i| i.weight).collect();
        Neuron {
            name: config.name,
            label: config.label,
            yes_label: config.yes_label,
            no_label: config.no_label,
            inputs: config.inputs,
            bias: config.bias,
            initial_weights,
            initial_bias: config.bias,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn yes_label(&self) -> &str {
        &self.yes_label
    }

    pub fn no_label(&self) -> &str {
        &self.no_label
    }

    /// Per-input metadata, in evaluation order.
    pub fn inputs(&self) -> &[InputSpec] {
        &self.inputs
    }

    /// Number of inputs an evaluation vector must have.
    pub fn dimensions(&self) -> usize {
        self.inputs.len()
    }

    /// Copy of the current weights, in input order.
    pub fn weights(&self) -> Vec<f64> {
        self.inputs.iter().map(|i| i.weight).collect()
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Position of the input with the given key.
    pub fn input_index(&self, key: &str) -> Option<usize> {
        self.inputs.iter().position(|i| i.key == key)
    }

    /// Snapshot of the current parameters as a config.
    pub fn config(&self) -> NeuronConfig {
        NeuronConfig {
            name: self.name.clone(),
            label: self.label.clone(),
            yes_label: self.yes_label.clone(),
            no_label: self.no_label.clone(),
            bias: self.bias,
            inputs: self.inputs.clone(),
        }
    }

    /// Sigmoid of `bias + Σ weight_i · inputs_i`, in [0, 1].
    ///
    /// Fails with `DimensionMismatch` unless there is exactly one value per
    /// input.
    pub fn evaluate(&self, inputs: &[f64]) -> Result<f64> {
        check_dimensions(self.dimensions(), inputs.len())?;
        Ok(self.forward(inputs))
    }

    /// `evaluate(inputs) >= 0.5`.
    pub fn classify(&self, inputs: &[f64]) -> Result<bool> {
        Ok(is_positive(self.evaluate(inputs)?))
    }

    /// Evaluates `inputs` and wraps the result with its outcome label and
    /// confidence band.
    pub fn decide(&self, inputs: &[f64]) -> Result<Decision> {
        let output = self.evaluate(inputs)?;
        Ok(Decision::new(self, output))
    }

    /// Online gradient descent over `examples` for `epochs` full passes.
    ///
    /// Returns one mean squared error per epoch. Every example is checked
    /// against the neuron's dimensionality before any weight moves.
    pub fn train(
        &mut self,
        examples: &[TrainingExample],
        learning_rate: f64,
        epochs: usize,
    ) -> Result<LossHistory> {
        train_loop(self, examples, &TrainConfig { learning_rate, epochs })
    }

    /// Restores the weights and bias captured at construction.
    pub fn reset_weights(&mut self) {
        for (input, &w) in self.inputs.iter_mut().zip(self.initial_weights.iter()) {
            input.weight = w;
        }
        self.bias = self.initial_bias;
    }

    /// Unchecked forward pass. Callers must have validated the length.
    pub(crate) fn forward(&self, inputs: &[f64]) -> f64 {
        sigmoid(self.weighted_sum(inputs))
    }

    pub(crate) fn weighted_sum(&self, inputs: &[f64]) -> f64 {
        self.inputs.iter()
            .zip(inputs.iter())
            .fold(self.bias, |z, (input, x)| z + input.weight * x)
    }

    /// Moves every weight by `step · inputs_i` and the bias by `step`.
    pub(crate) fn nudge(&mut self, inputs: &[f64], step: f64) {
        for (input, x) in self.inputs.iter_mut().zip(inputs.iter()) {
            input.weight += step * x;
        }
        self.bias += step;
    }
}

/// Cloning snapshots the *current* parameters into a fresh neuron, so the
/// clone's reset baseline is the state at clone time rather than the
/// original's construction baseline.
impl Clone for Neuron {
    fn clone(&self) -> Self {
        Neuron::new(self.config())
    }
}
