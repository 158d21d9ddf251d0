/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `learning_rate`: step size of every per-example update
/// - `epochs`: number of full passes over the examples; always run to the end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl TrainConfig {
    pub fn new(learning_rate: f64, epochs: usize) -> Self {
        TrainConfig { learning_rate, epochs }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig { learning_rate: 0.1, epochs: 100 }
    }
}
