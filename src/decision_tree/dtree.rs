use colored::Colorize;
use fixedbitset::FixedBitSet;

use std::fmt;

use crate::{Dataset, Learner};
use crate::common::checker;
use super::{
    builder::TreeParams,
    column::SortedColumn,
    node::Node,
    split_by,
    classifier::DecisionTreeClassifier,
};


/// The Decision Tree algorithm.  
/// Given a set of training examples with labels in `1..=n_classes`,
/// [`DecisionTree`] outputs a decision tree classifier
/// named [`DecisionTreeClassifier`]
/// under the specified stopping rules.
/// 
/// Each node scans every feature exhaustively and splits
/// at the threshold minimizing the weighted Gini impurity.
/// A node becomes a leaf when the stopping rules hold
/// or when no threshold separates its rows.
/// Growth is deterministic: identical inputs yield identical trees.
///
/// [`DecisionTree`] is constructed 
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
/// 
/// # Example
/// ```no_run
/// use imbalance_eval::prelude::*;
/// 
/// let sample = Dataset::from_rows(vec![
///     vec![0.0, 0.0, 1.0],
///     vec![0.0, 1.0, 1.0],
///     vec![1.0, 0.0, 2.0],
///     vec![1.0, 1.0, 2.0],
/// ]);
/// 
/// let tree = DecisionTreeBuilder::new(2)
///     .max_purity(0.99)
///     .min_samples_split(1)
///     .build();
///
/// let f = tree.produce(&sample);
/// let predictions = f.predict_all(&sample);
/// assert_eq!(predictions, vec![1, 1, 2, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct DecisionTree {
    n_classes: usize,
    params:    TreeParams,
    verbose:   bool,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(n_classes: usize, params: TreeParams, verbose: bool)
        -> Self
    {
        Self { n_classes, params, verbose, }
    }


    /// Returns the stopping rules.
    #[inline]
    pub fn params(&self) -> &TreeParams {
        &self.params
    }


    /// Returns the number of classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }


    /// Grow a sub-tree over the rows in `mask`.
    fn grow(
        &self,
        sample:  &Dataset,
        columns: &[SortedColumn],
        mask:    FixedBitSet,
    ) -> Box<Node>
    {
        let counts = class_counts(sample, &mask, self.n_classes);
        let n_rows = counts.iter().sum::<usize>();
        let majority = counts.iter().copied().max().unwrap_or(0);
        let purity = majority as f64 / n_rows as f64;

        let proba = probability(&counts);

        if n_rows <= self.params.min_samples_split
            || purity >= self.params.max_purity
        {
            return Box::new(Node::leaf(proba));
        }

        // Find the best pair of feature and threshold.
        let split = split_by::best_split(columns, &mask, self.n_classes);
        if !split.is_usable() {
            return Box::new(Node::leaf(proba));
        }

        // Split the rows for left/right childrens.
        let n_sample = sample.len();
        let mut lmask = FixedBitSet::with_capacity(n_sample);
        let mut rmask = FixedBitSet::with_capacity(n_sample);
        for row in mask.ones() {
            if split.goes_left(&sample[row]) {
                lmask.insert(row);
            } else {
                rmask.insert(row);
            }
        }

        // If the split has no meaning, construct a leaf node.
        if lmask.count_ones(..) == 0 || rmask.count_ones(..) == 0 {
            return Box::new(Node::leaf(proba));
        }

        // The parent mask is no longer needed below this point.
        drop(mask);
        let left  = self.grow(sample, columns, lmask);
        let right = self.grow(sample, columns, rmask);

        Box::new(Node::branch(split, left, right))
    }
}


impl Learner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of classes", format!("{}", self.n_classes)),
            ("Max purity", format!("{}", self.params.max_purity)),
            ("Min samples split", format!("{}", self.params.min_samples_split)),
            ("Split criterion", "Gini index".to_string()),
        ]);
        Some(info)
    }


    /// This method computes as follows;
    /// 1. sort every feature column once,
    /// 2. grow the tree from the mask holding every row.
    /// 
    /// Panics if `sample` is empty or has a label
    /// outside `1..=n_classes`.
    fn produce(&self, sample: &Dataset) -> Self::Hypothesis {
        checker::check_training_set(sample, self.n_classes);

        let columns = SortedColumn::all(sample);

        let n_sample = sample.len();
        let mut mask = FixedBitSet::with_capacity(n_sample);
        mask.insert_range(..);

        let root = self.grow(sample, &columns[..], mask);

        let n_feature = sample.shape().1;
        let f = DecisionTreeClassifier::from_raw(*root, self.n_classes, n_feature);

        if self.verbose {
            println!(
                "{} {}    {}    {}",
                "[TREE]".bold().magenta(),
                format!("[ROWS {n_sample:>8}]").green(),
                format!("[LEAVES {:>6}]", f.n_leaves()).yellow(),
                format!("[DEPTH {:>4}]", f.depth()).cyan(),
            );
        }

        f
    }
}


/// Returns the number of rows in `mask` for each class.
#[inline]
fn class_counts(sample: &Dataset, mask: &FixedBitSet, n_classes: usize)
    -> Vec<usize>
{
    let mut counts = vec![0_usize; n_classes + 1];
    for row in mask.ones() {
        counts[sample.label(row)] += 1;
    }
    counts
}


/// Returns `counts / sum(counts)`.
/// The `0`-th entry stays `0`.
#[inline]
fn probability(counts: &[usize]) -> Vec<f64> {
    let total = counts.iter().sum::<usize>() as f64;
    counts.iter()
        .enumerate()
        .map(|(y, &c)| {
            if y == 0 || total == 0f64 { 0f64 } else { c as f64 / total }
        })
        .collect()
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - # of classes: {}\n\
            - Max purity: {}\n\
            - Min samples split: {}\n\
            - Split criterion: Gini index\n\
            ----------\
            ",
            self.n_classes,
            self.params.max_purity,
            self.params.min_samples_split,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classifier;
    use crate::decision_tree::DecisionTreeBuilder;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_probability_01() {
        let res = probability(&[0, 1, 3]);
        let exp = vec![0.0, 0.25, 0.75];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_class_counts_01() {
        let sample = Dataset::from_rows(vec![
            vec![0.0, 1.0],
            vec![0.0, 2.0],
            vec![0.0, 2.0],
        ]);
        let mut mask = FixedBitSet::with_capacity(3);
        mask.insert(0);
        mask.insert(2);
        let res = class_counts(&sample, &mask, 2);
        let exp = vec![0, 1, 1];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_grow_perfect_split() {
        let sample = Dataset::from_rows(vec![
            vec![0.0, 0.0, 1.0],
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 2.0],
            vec![1.0, 1.0, 2.0],
        ]);
        let f = DecisionTreeBuilder::new(2)
            .max_purity(0.99)
            .min_samples_split(1)
            .build()
            .produce(&sample);

        match f.root() {
            Node::Branch { split, left, right } => {
                assert_eq!(split.feature, 0, "got {split:?}.");
                assert!((split.threshold - 0.5).abs() < TEST_TOLERANCE);
                assert!(left.is_leaf() && right.is_leaf());
            },
            leaf => panic!("expected a branch, got {leaf:?}."),
        }
        assert_eq!(f.predict_all(&sample), vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_grow_single_class() {
        let sample = Dataset::from_rows(vec![
            vec![0.0, 1.0],
            vec![3.0, 1.0],
            vec![5.0, 1.0],
        ]);
        let f = DecisionTreeBuilder::new(1)
            .build()
            .produce(&sample);

        let exp = Node::leaf(vec![0.0, 1.0]);
        assert_eq!(&exp, f.root(), "expected {exp:?}, got {:?}.", f.root());
    }

    #[test]
    fn test_grow_min_samples_split() {
        let sample = Dataset::from_rows(vec![
            vec![0.0, 1.0],
            vec![1.0, 2.0],
            vec![2.0, 2.0],
            vec![3.0, 1.0],
        ]);
        let f = DecisionTreeBuilder::new(2)
            .min_samples_split(4)
            .build()
            .produce(&sample);

        let exp = Node::leaf(vec![0.0, 0.5, 0.5]);
        assert_eq!(&exp, f.root(), "expected {exp:?}, got {:?}.", f.root());
    }

    #[test]
    fn test_grow_inseparable_rows() {
        // Identical features with different labels cannot be split.
        let sample = Dataset::from_rows(vec![
            vec![1.0, 1.0],
            vec![1.0, 2.0],
            vec![1.0, 2.0],
        ]);
        let f = DecisionTreeBuilder::new(2)
            .build()
            .produce(&sample);

        assert!(f.root().is_leaf());
        let res = f.predict_proba(&[1.0]);
        assert!((res[1] - 1.0 / 3.0).abs() < TEST_TOLERANCE, "got {res:?}.");
        assert!((res[2] - 2.0 / 3.0).abs() < TEST_TOLERANCE, "got {res:?}.");
    }

    #[test]
    #[should_panic(expected = "empty training set")]
    fn test_produce_empty() {
        let sample = Dataset::from_rows(Vec::new());
        DecisionTreeBuilder::new(2).build().produce(&sample);
    }
}
