use crate::error::{NeuronError, Result};

/// The two inputs a 2-D slice is plotted against.
///
/// Always holds two distinct indices; `new` checks them against the number
/// of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisPair {
    x: usize,
    y: usize,
}

impl AxisPair {
    pub fn new(x: usize, y: usize, dimensions: usize) -> Result<AxisPair> {
        let axes = AxisPair { x, y };
        axes.validate(dimensions)?;
        Ok(axes)
    }

    /// For compile-time known pairs (presets). Still validated by `Slice::new`.
    pub(crate) fn unchecked(x: usize, y: usize) -> AxisPair {
        AxisPair { x, y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn validate(&self, dimensions: usize) -> Result<()> {
        for axis in [self.x, self.y] {
            if axis >= dimensions {
                return Err(NeuronError::AxisOutOfRange { axis, dimensions });
            }
        }
        if self.x == self.y {
            return Err(NeuronError::DuplicateAxis(self.x));
        }
        Ok(())
    }

    /// Moves the x axis to `x`. If that collides with the y axis, y jumps to
    /// the lowest index that differs from `x`.
    pub fn with_x(self, x: usize, dimensions: usize) -> Result<AxisPair> {
        let y = if x == self.y { first_other(x, dimensions)? } else { self.y };
        AxisPair::new(x, y, dimensions)
    }

    /// Mirror of `with_x` for the y axis.
    pub fn with_y(self, y: usize, dimensions: usize) -> Result<AxisPair> {
        let x = if y == self.x { first_other(y, dimensions)? } else { self.x };
        AxisPair::new(x, y, dimensions)
    }
}

fn first_other(taken: usize, dimensions: usize) -> Result<usize> {
    (0..dimensions)
        .find(|&i| i != taken)
        .ok_or(NeuronError::DuplicateAxis(taken))
}
