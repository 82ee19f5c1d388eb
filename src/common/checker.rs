//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data, range of parameters.
//! A violation is a caller contract error,
//! so each check aborts with a diagnostic instead of returning `Err`.

use crate::Dataset;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_training_set(sample: &Dataset, n_classes: usize) {
    let (n_sample, n_feature) = sample.shape();

    assert!(n_sample > 0, "empty training set");
    assert!(n_feature > 0, "the training set has no feature");
    check_labels(sample, n_classes);
}


/// Check whether the test sample is valid or not.
#[inline(always)]
pub(crate) fn check_testing_set(sample: &Dataset, n_classes: usize) {
    assert!(!sample.is_empty(), "empty testing set");
    check_labels(sample, n_classes);
}


/// Check that every label lies in `1..=n_classes`.
#[inline(always)]
pub(crate) fn check_labels(sample: &Dataset, n_classes: usize) {
    assert!(n_classes > 0, "`n_classes` must be positive");

    if let Some((i, y)) = sample.labels()
        .enumerate()
        .find(|(_, y)| !(1..=n_classes).contains(y))
    {
        panic!("Label {y} of row {i} is out of range `1..={n_classes}`");
    }
}


/// Check that the example to be predicted is wide enough.
#[inline(always)]
pub(crate) fn check_width(example: &[f64], n_feature: usize) {
    assert!(
        example.len() >= n_feature,
        "The example has {} values, but the tree needs {n_feature} features",
        example.len(),
    );
}


/// Check the purity threshold.
#[inline(always)]
pub(crate) fn check_max_purity(max_purity: f64) {
    assert!(
        max_purity > 0f64 && max_purity <= 1f64,
        "`max_purity` must be in (0, 1]. got {max_purity}."
    );
}


/// Check the minimum node size.
#[inline(always)]
pub(crate) fn check_min_samples_split(min_samples_split: usize) {
    assert!(
        min_samples_split >= 1,
        "`min_samples_split` must be at least 1. got {min_samples_split}."
    );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_purity_success_01() {
        check_max_purity(1f64);
    }

    #[test]
    fn test_max_purity_success_02() {
        check_max_purity(0.5);
    }

    #[test]
    #[should_panic]
    fn test_max_purity_failure_01() {
        check_max_purity(0f64);
    }

    #[test]
    #[should_panic]
    fn test_max_purity_failure_02() {
        check_max_purity(1.0001);
    }

    #[test]
    #[should_panic]
    fn test_min_samples_split_failure_01() {
        check_min_samples_split(0);
    }

    #[test]
    #[should_panic(expected = "empty training set")]
    fn test_training_set_failure_01() {
        let sample = Dataset::from_rows(Vec::new());
        check_training_set(&sample, 2);
    }

    #[test]
    #[should_panic]
    fn test_labels_failure_01() {
        let sample = Dataset::from_rows(vec![vec![0.0, 3.0]]);
        check_labels(&sample, 2);
    }
}
