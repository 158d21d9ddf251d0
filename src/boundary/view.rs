use crate::activation::is_positive;
use crate::boundary::sampler::{sample, SampleGrid};
use crate::boundary::slice::Slice;
use crate::boundary::tracer::{trace_boundary, BoundaryTrace, TraceConfig};
use crate::error::Result;
use crate::neuron::Neuron;

/// Where the current input vector sits in the slice and what it decides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub output: f64,
    pub positive: bool,
}

/// Everything a presentation layer needs to draw one slice: shaded regions,
/// the boundary line, and the position marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceView {
    pub grid: SampleGrid,
    pub trace: BoundaryTrace,
    pub marker: Marker,
}

impl SliceView {
    pub fn render(
        neuron: &Neuron,
        slice: &Slice,
        resolution: usize,
        trace_config: &TraceConfig,
    ) -> Result<SliceView> {
        let grid = sample(neuron, slice, resolution)?;
        let trace = trace_boundary(neuron, slice, trace_config)?;

        let (x, y) = slice.position();
        let output = neuron.evaluate(slice.fixed_inputs())?;
        let marker = Marker { x, y, output, positive: is_positive(output) };

        Ok(SliceView { grid, trace, marker })
    }
}
