use serde::{Deserialize, Serialize};

/// One labeled input vector.
///
/// `target` is `1.0` for the positive class and `0.0` for the negative one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub inputs: Vec<f64>,
    pub target: f64,
}

impl TrainingExample {
    pub fn new(inputs: Vec<f64>, positive: bool) -> Self {
        TrainingExample {
            inputs,
            target: if positive { 1.0 } else { 0.0 },
        }
    }

    pub fn is_positive(&self) -> bool {
        self.target >= 0.5
    }
}
