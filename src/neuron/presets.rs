//! The two built-in neurons from the meeting-planning walkthrough.
//!
//! The second neuron only makes sense once the first says "host"; see
//! `decision::DecisionChain`.

use crate::boundary::AxisPair;
use crate::error::{NeuronError, Result};
use crate::neuron::config::{InputSpec, NeuronConfig};
use crate::neuron::neuron::Neuron;

/// Identifier accepted by `by_name` and the CLI's `--preset`.
pub const MEETING_HOST: &str = "neuron1";
pub const SCHEDULE_SOON: &str = "neuron2";

/// "Should I Host a Meeting?"
pub fn meeting_host_config() -> NeuronConfig {
    NeuronConfig {
        name: MEETING_HOST.into(),
        label: "Should I Host a Meeting?".into(),
        yes_label: "HOST THE MEETING".into(),
        no_label: "DON'T HOST".into(),
        bias: 0.0,
        inputs: vec![
            InputSpec::new("urgency", "Urgency", 2.0)
                .with_icon("\u{1F525}")
                .with_range_labels("Can wait", "Critical"),
            InputSpec::new("people", "Number of People", -1.5)
                .with_icon("\u{1F465}")
                .with_range_labels("1-2 people", "10+ people"),
            InputSpec::new("outcome", "Potential Outcome", 2.5)
                .with_icon("\u{2B50}")
                .with_range_labels("Low impact", "High impact"),
            InputSpec::new("preparation", "Preparation Needed", -1.8)
                .with_icon("\u{1F4CB}")
                .with_range_labels("Minimal prep", "Extensive prep"),
        ],
    }
}

/// "Should It Be Hosted Soon?"
pub fn schedule_soon_config() -> NeuronConfig {
    NeuronConfig {
        name: SCHEDULE_SOON.into(),
        label: "Should It Be Hosted Soon?".into(),
        yes_label: "SCHEDULE SOON".into(),
        no_label: "SCHEDULE LATER".into(),
        bias: 0.0,
        inputs: vec![
            InputSpec::new("urgency2", "Urgency", 2.0)
                .with_icon("\u{1F525}")
                .with_range_labels("No time pressure", "Extremely urgent"),
            InputSpec::new("people2", "Number of People", -1.2)
                .with_icon("\u{1F465}")
                .with_range_labels("1-2 people", "10+ people"),
            InputSpec::new("preparation2", "Preparation Needed", -1.5)
                .with_icon("\u{1F4CB}")
                .with_range_labels("No prep needed", "Significant prep"),
            InputSpec::new("yourAvailability", "Your Availability", 1.8)
                .with_icon("\u{1F4C5}")
                .with_range_labels("Completely booked", "Highly available"),
            InputSpec::new("participantAvailability", "Participant Availability", 1.8)
                .with_icon("\u{1F465}\u{1F4C5}")
                .with_range_labels("Hard to coordinate", "Easily available"),
        ],
    }
}

pub fn meeting_host() -> Neuron {
    Neuron::new(meeting_host_config())
}

pub fn schedule_soon() -> Neuron {
    Neuron::new(schedule_soon_config())
}

/// Looks up a preset by its identifier.
pub fn by_name(name: &str) -> Option<Neuron> {
    match name {
        MEETING_HOST => Some(meeting_host()),
        SCHEDULE_SOON => Some(schedule_soon()),
        _ => None,
    }
}

/// Like `by_name`, but an unknown identifier is an `UnknownPreset` error.
pub fn load(name: &str) -> Result<Neuron> {
    by_name(name).ok_or_else(|| NeuronError::UnknownPreset(name.to_string()))
}

/// Axes the walkthrough opens each preset on: urgency × outcome for the
/// first neuron, urgency × your availability for the second.
pub fn default_axes(name: &str) -> Option<AxisPair> {
    match name {
        MEETING_HOST => Some(AxisPair::unchecked(0, 2)),
        SCHEDULE_SOON => Some(AxisPair::unchecked(0, 3)),
        _ => None,
    }
}

/// Every input starts at the middle of its range.
pub fn default_inputs(neuron: &Neuron) -> Vec<f64> {
    vec![0.5; neuron.dimensions()]
}
