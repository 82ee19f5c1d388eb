use serde::{Serialize, Deserialize};

use crate::common::checker;
use crate::constants::{DEFAULT_MAX_PURITY, DEFAULT_MIN_SAMPLES_SPLIT};
use super::dtree::DecisionTree;


/// Stopping rules of the tree growth.
/// A node becomes a leaf if it holds at most `min_samples_split` rows
/// or if its majority class makes up at least `max_purity` of the rows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    /// Purity at which a node stops splitting. Must be in `(0, 1]`.
    pub max_purity: f64,
    /// Node size at or below which a node stops splitting.
    /// Must be at least `1`.
    pub min_samples_split: usize,
}


impl TreeParams {
    /// Construct a new instance of `TreeParams`.
    pub fn new(max_purity: f64, min_samples_split: usize) -> Self {
        let params = Self { max_purity, min_samples_split, };
        params.check();
        params
    }


    /// Panics if a parameter is out of range.
    #[inline]
    pub(crate) fn check(&self) {
        checker::check_max_purity(self.max_purity);
        checker::check_min_samples_split(self.min_samples_split);
    }
}


impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_purity: DEFAULT_MAX_PURITY,
            min_samples_split: DEFAULT_MIN_SAMPLES_SPLIT,
        }
    }
}


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
/// 
/// # Example
/// 
/// ```no_run
/// use imbalance_eval::prelude::*;
/// 
/// let sample = Dataset::from_csv("/path/to/data/file.csv", true).unwrap();
/// let tree = DecisionTreeBuilder::new(3)
///     .max_purity(0.95)
///     .min_samples_split(2)
///     .build();
/// let f = tree.produce(&sample);
/// let label = f.predict(&sample[0]);
/// ```
#[derive(Clone, Debug)]
pub struct DecisionTreeBuilder {
    n_classes: usize,
    params: TreeParams,
    verbose: bool,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`]
    /// for labels in `1..=n_classes`.
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_purity: DEFAULT_MAX_PURITY == 1.0,
    /// min_samples_split: DEFAULT_MIN_SAMPLES_SPLIT == 1,
    /// verbose: false,
    /// ```
    pub fn new(n_classes: usize) -> Self {
        assert!(n_classes > 0, "`n_classes` must be positive");
        Self { n_classes, params: TreeParams::default(), verbose: false, }
    }


    /// Set the purity at which a node stops splitting.
    pub fn max_purity(mut self, max_purity: f64) -> Self {
        checker::check_max_purity(max_purity);
        self.params.max_purity = max_purity;
        self
    }


    /// Set the node size at or below which a node stops splitting.
    pub fn min_samples_split(mut self, min_samples_split: usize) -> Self {
        checker::check_min_samples_split(min_samples_split);
        self.params.min_samples_split = min_samples_split;
        self
    }


    /// Set both stopping rules at once.
    pub fn params(mut self, params: TreeParams) -> Self {
        params.check();
        self.params = params;
        self
    }


    /// If `true`, the tree prints a summary after each training.
    /// Default is `false`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::new(self.n_classes, self.params, self.verbose)
    }
}
