pub mod activation;
pub mod boundary;
pub mod decision;
pub mod error;
pub mod loss;
pub mod neuron;
pub mod optim;
pub mod plot;
pub mod train;

// Convenience re-exports
pub use activation::{is_positive, sigmoid};
pub use boundary::{sample, trace_boundary, AxisPair, BoundaryTrace, SampleGrid, Slice, SliceView, TraceConfig, TracePoint};
pub use decision::{Confidence, Decision, DecisionChain, Level};
pub use error::{NeuronError, Result};
pub use neuron::{presets, InputSpec, Neuron, NeuronConfig};
pub use optim::sgd::Sgd;
pub use train::{LossHistory, TrainConfig, TrainingExample};
