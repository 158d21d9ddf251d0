use thiserror::Error;

/// Everything that can go wrong when evaluating, slicing or persisting a neuron.
///
/// A scan line without a boundary crossing is *not* an error; the tracer
/// reports it as `TracePoint::Gap`.
#[derive(Error, Debug)]
pub enum NeuronError {
    /// An input vector does not have one value per neuron input.
    #[error("expected {expected} input values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// An axis index points past the last input.
    #[error("axis {axis} is out of range for a neuron with {dimensions} inputs")]
    AxisOutOfRange { axis: usize, dimensions: usize },

    /// Both slice axes were set to the same input.
    #[error("x and y axes must differ (both are {0})")]
    DuplicateAxis(usize),

    /// No built-in neuron has this name.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("sample resolution must be at least 1")]
    InvalidResolution,

    #[error("boundary trace needs at least one scan step")]
    InvalidScanCount,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, NeuronError>;

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub(crate) fn check_dimensions(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(NeuronError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
