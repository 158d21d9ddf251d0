pub mod config;
pub mod neuron;
pub mod presets;

pub use config::{InputSpec, NeuronConfig};
pub use neuron::Neuron;
