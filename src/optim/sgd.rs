use crate::neuron::Neuron;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one online update for a single example:
    /// `w_i += lr · error · x_i` and `bias += lr · error`.
    pub fn step(&self, neuron: &mut Neuron, inputs: &[f64], error: f64) {
        neuron.nudge(inputs, self.learning_rate * error);
    }
}
