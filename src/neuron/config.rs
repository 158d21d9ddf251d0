use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One input dimension of a neuron.
///
/// Fields:
/// - `key`: stable identifier (e.g. `"urgency"`)
/// - `name`: display name shown next to the slider
/// - `icon`: short glyph shown before the name
/// - `weight`: multiplier applied to this input in the weighted sum
/// - `min_label`: caption for the low end of the range
/// - `max_label`: caption for the high end of the range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub weight: f64,
    #[serde(default)]
    pub min_label: String,
    #[serde(default)]
    pub max_label: String,
}

impl InputSpec {
    /// Input with a key, display name and weight; icon and range captions
    /// are left empty.
    pub fn new(key: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
        InputSpec {
            key: key.into(),
            name: name.into(),
            icon: String::new(),
            weight,
            min_label: String::new(),
            max_label: String::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_range_labels(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.min_label = min.into();
        self.max_label = max.into();
        self
    }
}

/// Static description a `Neuron` is built from.
///
/// `NeuronConfig` can be saved to / loaded from JSON so that custom neurons
/// can be kept next to the built-in presets. The weights stored here become
/// the neuron's reset baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronConfig {
    /// Identifier, e.g. `"neuron1"`.
    pub name: String,
    /// The question the neuron answers.
    pub label: String,
    /// Outcome text for the positive class.
    pub yes_label: String,
    /// Outcome text for the negative class.
    pub no_label: String,
    #[serde(default)]
    pub bias: f64,
    /// Ordered inputs; evaluation vectors follow this order.
    pub inputs: Vec<InputSpec>,
}

impl NeuronConfig {
    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NeuronConfig` from a JSON file written by `save_json`
    /// (or by hand).
    pub fn load_json(path: &str) -> Result<NeuronConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
