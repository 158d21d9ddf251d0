use serde::{Deserialize, Serialize};

/// Mean squared error of every epoch of one training call, in epoch order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LossHistory(Vec<f64>);

impl LossHistory {
    pub(crate) fn with_capacity(epochs: usize) -> Self {
        LossHistory(Vec::with_capacity(epochs))
    }

    pub(crate) fn push(&mut self, loss: f64) {
        self.0.push(loss);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Loss of the last completed epoch.
    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// First-epoch loss minus last-epoch loss; positive when training helped.
    pub fn improvement(&self) -> Option<f64> {
        Some(self.first()? - self.last()?)
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl<'a> IntoIterator for &'a LossHistory {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
