pub mod dataset;
pub mod example;
pub mod loop_fn;
pub mod loss_history;
pub mod train_config;

pub use dataset::synthetic_examples;
pub use example::TrainingExample;
pub use loop_fn::{accuracy, mean_loss, train_loop};
pub use loss_history::LossHistory;
pub use train_config::TrainConfig;
