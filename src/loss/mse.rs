pub struct MseLoss;

impl MseLoss {
    /// Signed error of one prediction: `target - predicted`.
    ///
    /// This is the direction the weights move in during training.
    pub fn residual(predicted: f64, target: f64) -> f64 {
        target - predicted
    }

    /// Scalar MSE: mean((predicted - expected)²). Empty input gives 0.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        if predicted.is_empty() {
            return 0.0;
        }
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }
}
