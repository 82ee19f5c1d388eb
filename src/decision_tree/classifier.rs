//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::{self, prelude::*, BufReader, BufWriter};

use crate::{Classifier, Dataset, Learner};
use crate::common::checker;
use super::{
    builder::{DecisionTreeBuilder, TreeParams},
    node::Node,
};


/// Decision tree classifier.
/// This struct owns the root `Node` of a trained tree.
/// 
/// Prediction only reads the tree,
/// so a `DecisionTreeClassifier` can be shared across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    n_classes: usize,
    n_feature: usize,
}


impl DecisionTreeClassifier {
    /// Train a decision tree on `sample`
    /// whose labels lie in `1..=n_classes`.
    /// 
    /// Panics if `sample` is empty.
    pub fn train(sample: &Dataset, n_classes: usize, params: TreeParams)
        -> Self
    {
        DecisionTreeBuilder::new(n_classes)
            .params(params)
            .build()
            .produce(sample)
    }


    /// Wrap a trained tree.
    #[inline]
    pub(super) fn from_raw(root: Node, n_classes: usize, n_feature: usize)
        -> Self
    {
        Self { root, n_classes, n_feature, }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the number of classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }


    /// Returns the number of features of the training set.
    #[inline]
    pub fn n_feature(&self) -> usize {
        self.n_feature
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;
        f.flush()
    }


    /// Write the current decision tree to a JSON file.
    pub fn to_json_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let f = BufWriter::new(File::create(path)?);
        serde_json::to_writer(f, self)
            .map_err(io::Error::from)
    }


    /// Read a decision tree from a JSON file
    /// written by [`DecisionTreeClassifier::to_json_file`].
    pub fn from_json_file<P>(path: P) -> io::Result<Self>
        where P: AsRef<Path>
    {
        let f = BufReader::new(File::open(path)?);
        let tree: Self = serde_json::from_reader(f)
            .map_err(io::Error::from)?;

        if tree.root.max_feature().is_some_and(|j| j >= tree.n_feature) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "The tree reads a feature beyond `n_feature`",
            ));
        }
        if !tree.root.leaves_have_len(tree.n_classes + 1) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "A leaf does not hold `n_classes + 1` probabilities",
            ));
        }
        Ok(tree)
    }
}


impl Classifier for DecisionTreeClassifier {
    #[inline]
    fn predict_proba(&self, example: &[f64]) -> &[f64] {
        checker::check_width(example, self.n_feature);
        self.root.predict_proba(example)
    }
}
