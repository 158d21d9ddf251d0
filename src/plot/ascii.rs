use crate::boundary::SliceView;

/// Character-cell rendering of a slice, one character per grid cell, top
/// row first.
///
/// `#` positive region, `.` negative region, `o` boundary, `@` marker.
pub fn render(view: &SliceView) -> String {
    let r = view.grid.resolution();
    let mut cells: Vec<Vec<char>> = (0..r)
        .map(|row| {
            (0..r)
                .map(|col| match view.grid.get(col, row) {
                    Some(v) if crate::activation::is_positive(v) => '#',
                    _ => '.',
                })
                .collect()
        })
        .collect();

    for (x, y) in view.trace.coordinates() {
        let (col, row) = to_cell(x, y, r);
        cells[row][col] = 'o';
    }
    let (col, row) = to_cell(view.marker.x, view.marker.y, r);
    cells[row][col] = '@';

    cells
        .into_iter()
        .map(|line| line.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_cell(x: f64, y: f64, resolution: usize) -> (usize, usize) {
    let last = resolution - 1;
    let col = ((x * resolution as f64) as usize).min(last);
    let row = (((1.0 - y) * resolution as f64) as usize).min(last);
    (col, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{AxisPair, Slice, TraceConfig};
    use crate::neuron::{InputSpec, Neuron, NeuronConfig};

    #[test]
    fn horizontal_split() {
        let neuron = Neuron::new(NeuronConfig {
            name: "h".into(),
            label: "H?".into(),
            yes_label: "Y".into(),
            no_label: "N".into(),
            bias: -0.5,
            inputs: vec![InputSpec::new("x", "X", 0.0), InputSpec::new("y", "Y", 1.0)],
        });
        let slice = Slice::new(&neuron, AxisPair::new(0, 1, 2).unwrap(), vec![0.1, 0.9]).unwrap();
        let config = TraceConfig { scan_count: 3, bisection_depth: 20 };
        let view = SliceView::render(&neuron, &slice, 4, &config).unwrap();

        let text = render(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "@###");
        // The traced line sits just below y = 0.5, i.e. in row 2.
        assert_eq!(lines[1], "####");
        assert_eq!(lines[2], "oooo");
        assert_eq!(lines[3], "....");
    }
}
