#![warn(missing_docs)]

//! 
//! A decision tree classifier and a validation engine
//! for benchmarking class-imbalance undersampling methods.
//! 
//! Every undersampling method needs a classifier to measure
//! how well its resampled training set generalizes.
//! This crate provides the shared machinery:
//! 
//! - A decision tree that grows with exhaustive Gini-impurity splitting
//!     and stops on a purity threshold or a minimum node size.
//!     See [`DecisionTree`] and [`DecisionTreeClassifier`].
//! 
//! - A validation engine that runs a trained classifier over a test set,
//!     builds a confusion matrix, and derives
//!     macro precision/recall/F1, G-mean, MACC, MAUC, MMCC
//!     and Cohen's Kappa.
//!     See [`Validation`].
//! 
//! Class labels are positive integers starting at `1`.
//! Every class-indexed container is sized `n_classes + 1`,
//! and index `0` is never used.
//! 
//! # Example
//! ```no_run
//! use imbalance_eval::prelude::*;
//! 
//! let train = Dataset::from_csv("/path/to/train.csv", false).unwrap();
//! let test  = Dataset::from_csv("/path/to/test.csv", false).unwrap();
//! 
//! let params = TreeParams::new(0.99, 1);
//! let valid = Validation::new(&train, &test, 2, params, false);
//! println!("{valid}");
//! ```

pub mod constants;
pub mod sample;
pub mod hypothesis;
pub mod decision_tree;
pub mod validation;
pub mod research;
pub mod prelude;

pub(crate) mod common;


pub use sample::Dataset;

pub use hypothesis::{
    Classifier,
    Learner,
};

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    TreeParams,
};

pub use validation::{
    ConfusionMatrix,
    Metrics,
    Validation,
};

pub use research::{
    StratifiedKFold,
    train_test_split,
};
