pub mod chain;
pub mod confidence;
pub mod decision;

pub use chain::{ChainOutcome, DecisionChain};
pub use confidence::{confidence_percent, Confidence, Level};
pub use decision::Decision;
