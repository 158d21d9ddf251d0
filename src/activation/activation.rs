use std::f64::consts::E;

/// Beyond this magnitude the sigmoid is pinned to exactly 0 or 1 so that
/// `e^-z` never overflows.
pub const SATURATION_LIMIT: f64 = 500.0;

/// Outputs at or above this value are the positive class.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Logistic sigmoid with hard saturation.
///
/// Returns exactly `1.0` for `z > 500`, exactly `0.0` for `z < -500`, and
/// `1 / (1 + e^-z)` everywhere else.
pub fn sigmoid(z: f64) -> f64 {
    if z > SATURATION_LIMIT {
        return 1.0;
    }
    if z < -SATURATION_LIMIT {
        return 0.0;
    }
    1.0 / (1.0 + E.powf(-z))
}

/// `true` when `output` falls on the positive side of the threshold.
/// An output of exactly 0.5 counts as positive.
pub fn is_positive(output: f64) -> bool {
    output >= DECISION_THRESHOLD
}
