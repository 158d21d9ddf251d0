use log::debug;

use crate::activation::is_positive;
use crate::boundary::slice::Slice;
use crate::error::{NeuronError, Result};
use crate::neuron::Neuron;

/// Grid size used by the interactive view.
pub const DEFAULT_RESOLUTION: usize = 80;

/// Neuron outputs over a `resolution × resolution` grid covering the unit
/// square of a slice.
///
/// Cell `(col, row)` is evaluated at `x = (col + 0.5) / R` and
/// `y = 1 - (row + 0.5) / R`: columns run left to right, rows run top to
/// bottom, so row 0 is the top edge (high y).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    resolution: usize,
    /// Row-major: `values[row * resolution + col]`.
    values: Vec<f64>,
}

impl SampleGrid {
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Output at column `col`, row `row`; `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.resolution || row >= self.resolution {
            return None;
        }
        Some(self.values[row * self.resolution + col])
    }

    /// Slice coordinates `(x, y)` the cell was sampled at.
    pub fn cell_center(&self, col: usize, row: usize) -> (f64, f64) {
        cell_center(col, row, self.resolution)
    }

    /// All outputs, row-major from the top-left cell.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates `(col, row, output)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let r = self.resolution;
        self.values.iter().enumerate().map(move |(idx, &v)| (idx % r, idx / r, v))
    }

    /// Share of cells on the positive side of the threshold.
    pub fn positive_fraction(&self) -> f64 {
        let positive = self.values.iter().filter(|&&v| is_positive(v)).count();
        positive as f64 / self.values.len() as f64
    }
}

/// Samples `neuron` over `slice` on a `resolution × resolution` grid.
///
/// Cost is `resolution² × dimensions`; at the default resolution of 80 that
/// is cheap enough to redo on every input change.
pub fn sample(neuron: &Neuron, slice: &Slice, resolution: usize) -> Result<SampleGrid> {
    if resolution == 0 {
        return Err(NeuronError::InvalidResolution);
    }
    slice.check(neuron)?;

    let mut inputs = slice.fixed_inputs().to_vec();
    let mut values = Vec::with_capacity(resolution * resolution);
    for row in 0..resolution {
        for col in 0..resolution {
            let (x, y) = cell_center(col, row, resolution);
            slice.fill(&mut inputs, x, y);
            values.push(neuron.forward(&inputs));
        }
    }

    debug!("{}: sampled {}x{} grid", neuron.name(), resolution, resolution);
    Ok(SampleGrid { resolution, values })
}

fn cell_center(col: usize, row: usize, resolution: usize) -> (f64, f64) {
    let r = resolution as f64;
    ((col as f64 + 0.5) / r, 1.0 - (row as f64 + 0.5) / r)
}
