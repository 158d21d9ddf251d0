use ferrite_neuron::boundary::{sample, trace_boundary, AxisPair, Slice, SliceView, TraceConfig, TracePoint};
use ferrite_neuron::{presets, sigmoid, InputSpec, Neuron, NeuronConfig, NeuronError};

fn neuron(weights: &[f64], bias: f64) -> Neuron {
    Neuron::new(NeuronConfig {
        name: "slice".into(),
        label: "Slice?".into(),
        yes_label: "YES".into(),
        no_label: "NO".into(),
        bias,
        inputs: weights.iter().enumerate()
            .map(|(i, &w)| InputSpec::new(format!("in{i}"), format!("Input {i}"), w))
            .collect(),
    })
}

#[test]
fn grid_cells_follow_the_coordinate_formula() {
    let n = neuron(&[1.0, -1.0], 0.0);
    let slice = Slice::new(&n, AxisPair::new(0, 1, 2).unwrap(), vec![0.5, 0.5]).unwrap();
    let grid = sample(&n, &slice, 2).unwrap();

    let expected = [
        [sigmoid(0.25 - 0.75), sigmoid(0.75 - 0.75)],
        [sigmoid(0.25 - 0.25), sigmoid(0.75 - 0.25)],
    ];
    for (row, cols) in expected.iter().enumerate() {
        for (col, &value) in cols.iter().enumerate() {
            assert!((grid.get(col, row).unwrap() - value).abs() < 1e-12);
        }
    }
}

#[test]
fn grid_has_resolution_squared_cells() {
    let n = presets::meeting_host();
    let slice = Slice::new(&n, AxisPair::new(0, 2, 4).unwrap(), vec![0.5; 4]).unwrap();
    for r in [1, 3, 80] {
        assert_eq!(sample(&n, &slice, r).unwrap().values().len(), r * r);
    }
}

#[test]
fn y_independent_boundary_is_all_gaps() {
    // Boundary is the vertical line x = 0.5; vertical scans never cross it.
    let n = neuron(&[1.0, 0.0], -0.5);
    let slice = Slice::new(&n, AxisPair::new(0, 1, 2).unwrap(), vec![0.5, 0.5]).unwrap();
    let trace = trace_boundary(&n, &slice, &TraceConfig::default()).unwrap();

    assert_eq!(trace.len(), 201);
    assert!(trace.points().iter().all(|p| matches!(p, TracePoint::Gap)));
    assert!(!trace.has_boundary());
}

#[test]
fn dominant_fixed_input_pushes_boundary_out_of_view() {
    let n = neuron(&[1.0, 1.0, 50.0], -1.0);
    let slice = Slice::new(&n, AxisPair::new(0, 1, 3).unwrap(), vec![0.5, 0.5, 1.0]).unwrap();
    let view = SliceView::render(&n, &slice, 16, &TraceConfig::default()).unwrap();

    assert!(!view.trace.has_boundary());
    assert_eq!(view.grid.positive_fraction(), 1.0);
}

#[test]
fn traced_points_sit_on_the_half_contour() {
    let n = presets::meeting_host();
    let slice = Slice::new(&n, AxisPair::new(0, 2, 4).unwrap(), vec![0.5; 4]).unwrap();
    let trace = trace_boundary(&n, &slice, &TraceConfig::default()).unwrap();

    assert!(trace.has_boundary());
    // z = 2x + 2.5y - 1.65, so y = (1.65 - 2x) / 2.5 while that stays in [0, 1].
    for (x, y) in trace.coordinates() {
        let exact = (1.65 - 2.0 * x) / 2.5;
        assert!((y - exact).abs() < 1e-5, "x = {x}: y = {y}, want {exact}");
        let output = n.evaluate(&slice.point(x, y)).unwrap();
        assert!((output - 0.5).abs() < 1e-5);
    }
    // Past x = 0.825 the crossing is below y = 0: those lines are gaps and
    // the visible contour is one unbroken stroke.
    assert_eq!(trace.segments().len(), 1);
    assert!(matches!(trace.points().last(), Some(TracePoint::Gap)));
}

#[test]
fn invalid_axes_are_rejected_before_sampling() {
    let n = presets::meeting_host();
    assert!(matches!(AxisPair::new(2, 2, 4), Err(NeuronError::DuplicateAxis(2))));
    assert!(matches!(
        AxisPair::new(0, 9, 4),
        Err(NeuronError::AxisOutOfRange { axis: 9, dimensions: 4 })
    ));

    let five = presets::schedule_soon();
    let axes = AxisPair::new(0, 4, 5).unwrap();
    assert!(Slice::new(&n, axes, vec![0.5; 4]).is_err());

    // A slice built for one neuron cannot be sampled through another.
    let slice = Slice::new(&five, axes, vec![0.5; 5]).unwrap();
    assert!(matches!(
        sample(&n, &slice, 4),
        Err(NeuronError::DimensionMismatch { expected: 4, actual: 5 })
    ));
    assert!(trace_boundary(&n, &slice, &TraceConfig::default()).is_err());
}

#[test]
fn training_moves_the_boundary() {
    let mut n = presets::meeting_host();
    let slice = Slice::new(&n, AxisPair::new(0, 2, 4).unwrap(), vec![0.5; 4]).unwrap();
    let before = trace_boundary(&n, &slice, &TraceConfig::default()).unwrap();

    let examples = vec![ferrite_neuron::TrainingExample::new(vec![0.5; 4], false)];
    n.train(&examples, 1.0, 10).unwrap();
    let after = trace_boundary(&n, &slice, &TraceConfig::default()).unwrap();
    assert_ne!(before, after);

    n.reset_weights();
    assert_eq!(trace_boundary(&n, &slice, &TraceConfig::default()).unwrap(), before);
}
