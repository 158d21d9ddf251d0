use crate::boundary::axes::AxisPair;
use crate::error::{check_dimensions, Result};
use crate::neuron::Neuron;

/// A 2-D cut through a neuron's input space: two free axes, every other
/// input pinned to a caller-supplied value.
///
/// The fixed vector also holds the current values of the two free axes;
/// they are where the position marker sits and are overwritten per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    axes: AxisPair,
    fixed: Vec<f64>,
}

impl Slice {
    /// Fails if `fixed` does not have one value per neuron input or the
    /// axes do not fit the neuron.
    pub fn new(neuron: &Neuron, axes: AxisPair, fixed: Vec<f64>) -> Result<Slice> {
        check_dimensions(neuron.dimensions(), fixed.len())?;
        axes.validate(fixed.len())?;
        Ok(Slice { axes, fixed })
    }

    pub fn axes(&self) -> AxisPair {
        self.axes
    }

    pub fn fixed_inputs(&self) -> &[f64] {
        &self.fixed
    }

    pub fn dimensions(&self) -> usize {
        self.fixed.len()
    }

    /// Current (x, y) position of the fixed vector within the slice.
    pub fn position(&self) -> (f64, f64) {
        (self.fixed[self.axes.x()], self.fixed[self.axes.y()])
    }

    /// Moves the position to `(x, y)`, clamped to the unit square.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.fixed[self.axes.x()] = x.clamp(0.0, 1.0);
        self.fixed[self.axes.y()] = y.clamp(0.0, 1.0);
    }

    /// Full input vector for slice coordinates `(x, y)`.
    pub fn point(&self, x: f64, y: f64) -> Vec<f64> {
        let mut inputs = self.fixed.clone();
        self.fill(&mut inputs, x, y);
        inputs
    }

    /// Writes the two axis values into a buffer that already holds the
    /// fixed inputs.
    pub(crate) fn fill(&self, buffer: &mut [f64], x: f64, y: f64) {
        buffer[self.axes.x()] = x;
        buffer[self.axes.y()] = y;
    }

    /// Confirms the slice still fits `neuron`.
    pub(crate) fn check(&self, neuron: &Neuron) -> Result<()> {
        check_dimensions(neuron.dimensions(), self.fixed.len())
    }
}
