use crate::decision::decision::Decision;
use crate::error::{check_dimensions, Result};
use crate::neuron::{presets, Neuron};

/// Two independent neurons asked one after the other: the second question
/// is only put once the first answers yes.
///
/// The neurons are not connected; nothing flows from the first output into
/// the second's inputs. The chain only gates whether the second is asked.
#[derive(Debug, Clone)]
pub struct DecisionChain {
    first: Neuron,
    second: Neuron,
}

/// Decisions of one pass through a `DecisionChain`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainOutcome {
    pub first: Decision,
    /// `None` while the first decision is negative.
    pub second: Option<Decision>,
}

impl DecisionChain {
    pub fn new(first: Neuron, second: Neuron) -> Self {
        DecisionChain { first, second }
    }

    /// The meeting walkthrough: host the meeting, then schedule it soon.
    pub fn meeting() -> Self {
        DecisionChain::new(presets::meeting_host(), presets::schedule_soon())
    }

    /// The chain that gates the neuron called `name`, if it is the second
    /// stage of a built-in chain.
    pub fn gating(name: &str) -> Option<Self> {
        (name == presets::SCHEDULE_SOON).then(DecisionChain::meeting)
    }

    pub fn first(&self) -> &Neuron {
        &self.first
    }

    pub fn second(&self) -> &Neuron {
        &self.second
    }

    /// Whether the second neuron is open for the given first-stage inputs.
    pub fn is_second_active(&self, first_inputs: &[f64]) -> Result<bool> {
        self.first.classify(first_inputs)
    }

    /// Decides the first neuron and, if it says yes, the second.
    ///
    /// Both input vectors are length-checked even when the second stage is
    /// gated off.
    pub fn evaluate(&self, first_inputs: &[f64], second_inputs: &[f64]) -> Result<ChainOutcome> {
        check_dimensions(self.second.dimensions(), second_inputs.len())?;
        let first = self.first.decide(first_inputs)?;
        let second = if first.positive {
            Some(self.second.decide(second_inputs)?)
        } else {
            None
        };
        Ok(ChainOutcome { first, second })
    }
}
