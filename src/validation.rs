//! Validation engine.
//! Runs a trained classifier over a test set,
//! builds a confusion matrix and derives the summary metrics.
mod auc;
mod confusion;
mod metrics;
mod validation_struct;


pub use auc::ovr_auc;
pub use confusion::{ConfusionMatrix, Prediction};
pub use metrics::{ClassMetrics, Metrics};
pub use validation_struct::Validation;
