//! The 2-D decision-boundary slice: a grid of outputs plus a traced 0.5
//! contour, returned as plain data for any renderer to draw.

pub mod axes;
pub mod sampler;
pub mod slice;
pub mod tracer;
pub mod view;

pub use axes::AxisPair;
pub use sampler::{sample, SampleGrid, DEFAULT_RESOLUTION};
pub use slice::Slice;
pub use tracer::{trace_boundary, BoundaryTrace, TraceConfig, TracePoint};
pub use view::{Marker, SliceView};
