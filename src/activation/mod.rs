pub mod activation;

pub use activation::{is_positive, sigmoid, DECISION_THRESHOLD, SATURATION_LIMIT};
