use serde::{Deserialize, Serialize};

use crate::activation::is_positive;
use crate::decision::confidence::{confidence_percent, Confidence};
use crate::neuron::Neuron;

/// A neuron's answer for one input vector, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub output: f64,
    pub positive: bool,
    /// The neuron's yes or no label, whichever applies.
    pub outcome: String,
    pub confidence: Confidence,
    /// `output` as a whole percentage.
    pub percent: u8,
}

impl Decision {
    pub fn new(neuron: &Neuron, output: f64) -> Decision {
        let positive = is_positive(output);
        let outcome = if positive { neuron.yes_label() } else { neuron.no_label() };
        Decision {
            output,
            positive,
            outcome: outcome.to_owned(),
            confidence: Confidence::from_output(output),
            percent: confidence_percent(output),
        }
    }
}
