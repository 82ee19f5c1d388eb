//! Helpers that split a labeled sample into training and test sets
//! before it is handed to [`Validation`](crate::Validation).
//! Every split is stratified by class and reproducible from a seed.

/// Stratified k-fold cross validation.
pub mod cross_validation;

/// Stratified hold-out split.
pub mod train_test_split;


pub use cross_validation::StratifiedKFold;
pub use train_test_split::train_test_split;


use rand::prelude::*;

use crate::Dataset;


/// Returns the row indices of each class, shuffled by `rng`.
/// The returned vector has length `n_classes + 1`
/// and its `0`-th entry is always empty.
pub(crate) fn shuffled_classes(
    sample: &Dataset,
    n_classes: usize,
    rng: &mut StdRng,
) -> Vec<Vec<usize>>
{
    let mut classes = vec![Vec::new(); n_classes + 1];
    for (i, y) in sample.labels().enumerate() {
        assert!(
            (1..=n_classes).contains(&y),
            "Label {y} of row {i} is out of range `1..={n_classes}`"
        );
        classes[y].push(i);
    }

    classes.iter_mut()
        .for_each(|rows| { rows.shuffle(rng); });
    classes
}
