//! Exhaustive Gini-impurity split search.
use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::constants::{NO_SPLIT_SCORE, VALUE_ROUNDING_SCALE};
use super::column::SortedColumn;


/// A splitting rule of a branch node.
/// An example goes to the left child
/// if `example[feature] <= threshold`, and to the right child otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitPoint {
    /// Index of the feature to compare.
    pub feature: usize,
    /// Threshold value.
    pub threshold: f64,
    /// Weighted Gini impurity of the resulting partition.
    pub score: f64,
}


impl SplitPoint {
    /// A split point that no boundary produced.
    #[inline]
    pub(crate) fn none(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold, score: NO_SPLIT_SCORE, }
    }


    /// Returns `true` if this split point separates the partition.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.score < NO_SPLIT_SCORE
    }


    /// Returns `true` if `example` goes to the left child.
    #[inline]
    pub fn goes_left(&self, example: &[f64]) -> bool {
        example[self.feature] <= self.threshold
    }
}


impl fmt::Display for SplitPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x[{}] <= {} (gini: {:.4})",
            self.feature, self.threshold, self.score,
        )
    }
}


/// Returns the best split point over all features.
/// Ties keep the lowest feature index.
pub(crate) fn best_split(
    columns:   &[SortedColumn],
    mask:      &FixedBitSet,
    n_classes: usize,
) -> SplitPoint
{
    columns.iter()
        .enumerate()
        .map(|(feature, column)| {
            split_by_gini(column, mask, feature, n_classes)
        })
        .fold(SplitPoint::none(0, 0f64), |best, split| {
            if split.score < best.score { split } else { best }
        })
}


/// Returns the split point of `feature`
/// that minimizes the weighted Gini impurity of the rows in `mask`.
/// 
/// A boundary lies between two neighbouring active rows
/// whose rounded values differ.
/// The threshold is the midpoint of the last value on the left
/// and the first value on the right.
/// Ties keep the first boundary found.
pub(crate) fn split_by_gini(
    column:    &SortedColumn,
    mask:      &FixedBitSet,
    feature:   usize,
    n_classes: usize,
) -> SplitPoint
{
    let mut active = column.active(mask);
    let first = match active.next() {
        Some(entry) => entry,
        None => { return SplitPoint::none(feature, 0f64); },
    };

    // Only the smallest active row starts in the left partition.
    let mut left = vec![0_usize; n_classes + 1];
    let mut right = vec![0_usize; n_classes + 1];
    left[first.label] += 1;
    column.active(mask)
        .skip(1)
        .for_each(|entry| { right[entry.label] += 1; });

    let mut best = SplitPoint::none(feature, first.value);

    // Value of the first row in the current run of (rounded) equal values.
    let mut run_start = first.value;
    // Value of the last row moved to the left partition.
    let mut prev = first.value;
    for entry in active {
        if round(run_start) != round(entry.value) {
            let score = weighted_gini(&left, &right);
            if score < best.score {
                let threshold = (prev + entry.value) / 2f64;
                best = SplitPoint { feature, threshold, score, };
            }
            run_start = entry.value;
        }
        left[entry.label] += 1;
        right[entry.label] -= 1;
        prev = entry.value;
    }

    best
}


/// Rounds `x` to suppress floating-point noise between neighbours.
#[inline(always)]
pub(crate) fn round(x: f64) -> f64 {
    (x * VALUE_ROUNDING_SCALE).round() / VALUE_ROUNDING_SCALE
}


/// Returns the Gini impurity `1 - sum_c p_c^2` of the given class counts.
/// Index `0` of `counts` is ignored.
/// An empty partition has impurity `1`.
#[inline(always)]
pub(crate) fn gini_impurity(counts: &[usize]) -> f64 {
    let total = counts.iter().skip(1).sum::<usize>();
    if total == 0 { return 1f64; }

    let total = total as f64;
    let correct = counts.iter()
        .skip(1)
        .map(|&c| (c as f64 / total).powi(2))
        .sum::<f64>();

    1f64 - correct
}


/// Returns the size-weighted Gini impurity of a binary partition.
#[inline(always)]
pub(crate) fn weighted_gini(left: &[usize], right: &[usize]) -> f64 {
    let n_left = left.iter().skip(1).sum::<usize>() as f64;
    let n_right = right.iter().skip(1).sum::<usize>() as f64;
    let total = n_left + n_right;
    if total == 0f64 { return NO_SPLIT_SCORE; }

    (n_left * gini_impurity(left) + n_right * gini_impurity(right)) / total
}
