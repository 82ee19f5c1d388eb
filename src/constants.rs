//! Numeric constants shared by the tree builder and the validation engine.

/// Score assigned to a split search that found no boundary.
/// Any real weighted Gini impurity lies in `[0, 1)`,
/// so a candidate carrying this score is never usable.
pub const NO_SPLIT_SCORE: f64 = 1.1;

/// Feature values are rounded to `1 / VALUE_ROUNDING_SCALE`
/// before two neighbours are compared as a split boundary.
pub const VALUE_ROUNDING_SCALE: f64 = 1e6;

/// Tolerance used when checking that a probability vector sums to `1`.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Default purity at which a node stops splitting.
pub const DEFAULT_MAX_PURITY: f64 = 1.0;

/// Default node size at or below which a node stops splitting.
pub const DEFAULT_MIN_SAMPLES_SPLIT: usize = 1;

/// Default number of folds for stratified cross validation.
pub const DEFAULT_N_FOLDS: usize = 5;

/// Default seed for shuffling rows before a split.
pub const DEFAULT_SEED: u64 = 1234;

pub(crate) const PRINT_WIDTH: usize = 10;
pub(crate) const PRINT_PRECISION: usize = 4;
