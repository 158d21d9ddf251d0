use log::debug;

use crate::activation::is_positive;
use crate::boundary::slice::Slice;
use crate::error::{NeuronError, Result};
use crate::neuron::Neuron;

/// Scan-line count and bisection depth for `trace_boundary`.
///
/// Precision along y is `2^-(bisection_depth + 1)` of the axis range; x is
/// sampled at `scan_count + 1` evenly spaced values including both edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    pub scan_count: usize,
    pub bisection_depth: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig { scan_count: 200, bisection_depth: 20 }
    }
}

/// Result of one vertical scan line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TracePoint {
    /// The 0.5 contour crosses this scan line at `y`.
    Point { x: f64, y: f64 },
    /// Both ends of the scan line are on the same side; nothing to draw.
    Gap,
}

/// Approximation of the 0.5 contour, one entry per scan line in increasing x.
///
/// Two consecutive `Point`s belong to the same stroke; a `Gap` breaks it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundaryTrace {
    points: Vec<TracePoint>,
}

impl BoundaryTrace {
    /// Every scan line, gaps included.
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    /// Number of scan lines.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The crossing coordinates with gaps dropped.
    pub fn coordinates(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().filter_map(|p| match *p {
            TracePoint::Point { x, y } => Some((x, y)),
            TracePoint::Gap => None,
        })
    }

    /// `false` when the contour never enters the visible square.
    pub fn has_boundary(&self) -> bool {
        self.coordinates().next().is_some()
    }

    /// Maximal runs of consecutive crossings: the polylines to stroke.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for point in &self.points {
            match *point {
                TracePoint::Point { x, y } => current.push((x, y)),
                TracePoint::Gap => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// Traces where `neuron`'s output crosses 0.5 inside `slice`.
///
/// For each scan line the neuron is evaluated at `y = 0` and `y = 1`. If both
/// ends classify the same the line is a `Gap`; otherwise the bracket is halved
/// `bisection_depth` times, always keeping the half whose lower end classifies
/// like `y = 0`, and the midpoint of the final bracket is reported.
///
/// A single sigmoid unit is monotonic in y along any scan line, so there is at
/// most one crossing to find. A y weight of zero makes every line a gap.
pub fn trace_boundary(neuron: &Neuron, slice: &Slice, config: &TraceConfig) -> Result<BoundaryTrace> {
    if config.scan_count == 0 {
        return Err(NeuronError::InvalidScanCount);
    }
    slice.check(neuron)?;

    let mut inputs = slice.fixed_inputs().to_vec();
    let mut classify_at = |x: f64, y: f64| {
        slice.fill(&mut inputs, x, y);
        is_positive(neuron.forward(&inputs))
    };

    let mut points = Vec::with_capacity(config.scan_count + 1);
    for step in 0..=config.scan_count {
        let x = step as f64 / config.scan_count as f64;

        let low_positive = classify_at(x, 0.0);
        if low_positive == classify_at(x, 1.0) {
            points.push(TracePoint::Gap);
            continue;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..config.bisection_depth {
            let mid = (lo + hi) / 2.0;
            if classify_at(x, mid) == low_positive {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        points.push(TracePoint::Point { x, y: (lo + hi) / 2.0 });
    }

    let trace = BoundaryTrace { points };
    debug!(
        "{}: traced {} scan lines, {} crossings",
        neuron.name(),
        trace.len(),
        trace.coordinates().count()
    );
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::AxisPair;
    use crate::neuron::{InputSpec, NeuronConfig};

    fn planar(wx: f64, wy: f64, bias: f64) -> (Neuron, Slice) {
        let neuron = Neuron::new(NeuronConfig {
            name: "plane".into(),
            label: "P?".into(),
            yes_label: "Y".into(),
            no_label: "N".into(),
            bias,
            inputs: vec![InputSpec::new("x", "X", wx), InputSpec::new("y", "Y", wy)],
        });
        let slice = Slice::new(&neuron, AxisPair::new(0, 1, 2).unwrap(), vec![0.5, 0.5]).unwrap();
        (neuron, slice)
    }

    #[test]
    fn horizontal_boundary_is_found_on_every_line() {
        let (neuron, slice) = planar(0.0, 1.0, -0.5);
        let trace = trace_boundary(&neuron, &slice, &TraceConfig::default()).unwrap();

        assert_eq!(trace.len(), 201);
        assert_eq!(trace.segments().len(), 1);
        for (i, (x, y)) in trace.coordinates().enumerate() {
            assert!((x - i as f64 / 200.0).abs() < 1e-12);
            assert!((y - 0.5).abs() <= 1e-6, "y = {y}");
        }
    }

    #[test]
    fn vertical_boundary_yields_only_gaps() {
        // Output does not depend on y, so no scan line brackets a crossing.
        let (neuron, slice) = planar(1.0, 0.0, -0.5);
        let trace = trace_boundary(&neuron, &slice, &TraceConfig::default()).unwrap();

        assert_eq!(trace.len(), 201);
        assert!(trace.points().iter().all(|p| *p == TracePoint::Gap));
        assert!(!trace.has_boundary());
        assert!(trace.segments().is_empty());
    }

    #[test]
    fn diagonal_boundary_tracks_y_equals_x() {
        let (neuron, slice) = planar(1.0, -1.0, 0.0);
        let config = TraceConfig { scan_count: 10, bisection_depth: 30 };
        let trace = trace_boundary(&neuron, &slice, &config).unwrap();

        // At x = 1 the top edge evaluates to exactly 0.5, which counts as
        // positive like the bottom edge, so that line is a gap.
        assert_eq!(trace.points()[10], TracePoint::Gap);
        for (x, y) in trace.coordinates() {
            assert!((y - x).abs() < 1e-8, "({x}, {y})");
        }
        assert_eq!(trace.coordinates().count(), 10);
    }

    #[test]
    fn bisection_depth_bounds_the_error() {
        let (neuron, slice) = planar(0.0, 1.0, -0.3);
        for depth in [1, 5, 12] {
            let config = TraceConfig { scan_count: 1, bisection_depth: depth };
            let trace = trace_boundary(&neuron, &slice, &config).unwrap();
            let half_width = 0.5_f64.powi(depth as i32 + 1);
            for (_, y) in trace.coordinates() {
                assert!((y - 0.3).abs() <= half_width, "depth {depth}: y = {y}");
            }
        }
    }

    #[test]
    fn zero_depth_reports_the_middle() {
        let (neuron, slice) = planar(0.0, 1.0, -0.1);
        let config = TraceConfig { scan_count: 4, bisection_depth: 0 };
        let trace = trace_boundary(&neuron, &slice, &config).unwrap();
        assert!(trace.coordinates().all(|(_, y)| y == 0.5));
    }

    #[test]
    fn gaps_split_segments() {
        let trace = BoundaryTrace {
            points: vec![
                TracePoint::Point { x: 0.0, y: 0.1 },
                TracePoint::Point { x: 0.5, y: 0.2 },
                TracePoint::Gap,
                TracePoint::Gap,
                TracePoint::Point { x: 1.0, y: 0.3 },
            ],
        };
        assert_eq!(
            trace.segments(),
            vec![vec![(0.0, 0.1), (0.5, 0.2)], vec![(1.0, 0.3)]]
        );
    }

    #[test]
    fn zero_scan_count_is_rejected() {
        let (neuron, slice) = planar(0.0, 1.0, -0.5);
        let config = TraceConfig { scan_count: 0, bisection_depth: 20 };
        assert!(matches!(
            trace_boundary(&neuron, &slice, &config),
            Err(NeuronError::InvalidScanCount)
        ));
    }
}
