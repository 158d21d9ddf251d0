use serde::{Deserialize, Serialize};

/// How far an output sits from the 0.5 threshold, in four bands.
///
/// The band is picked from `round(|output - 0.5| · 200)`, a 0..=100 score
/// that is 0 on the threshold and 100 at either extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    OnTheFence,
    Leaning,
    FairlyConfident,
    VeryConfident,
}

impl Confidence {
    pub fn from_output(output: f64) -> Confidence {
        let score = ((output - 0.5).abs() * 200.0).round();
        if score >= 80.0 {
            Confidence::VeryConfident
        } else if score >= 50.0 {
            Confidence::FairlyConfident
        } else if score >= 20.0 {
            Confidence::Leaning
        } else {
            Confidence::OnTheFence
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::VeryConfident => "Very confident",
            Confidence::FairlyConfident => "Fairly confident",
            Confidence::Leaning => "Leaning",
            Confidence::OnTheFence => "On the fence",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Output as a whole percentage, for a fill bar.
pub fn confidence_percent(output: f64) -> u8 {
    (output.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Coarse wording for an input value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Level {
    pub fn from_value(value: f64) -> Level {
        if value <= 0.2 {
            Level::VeryLow
        } else if value <= 0.4 {
            Level::Low
        } else if value <= 0.6 {
            Level::Medium
        } else if value <= 0.8 {
            Level::High
        } else {
            Level::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::VeryLow => "Very Low",
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
            Level::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
