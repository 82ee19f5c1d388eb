//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use std::fmt;

use super::split_by::SplitPoint;


/// A node of a decision tree.
/// A node is either a branch that owns a split point and two children,
/// or a leaf that owns a class-probability vector.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch {
        /// Splitting rule of this node.
        split: SplitPoint,
        /// Child for `example[split.feature] <= split.threshold`.
        left:  Box<Node>,
        /// Child for `example[split.feature] > split.threshold`.
        right: Box<Node>,
    },
    /// A node that have no child.
    Leaf {
        /// Probability of each class. Index `0` is unused.
        proba: Vec<f64>,
    },
}


impl Node {
    /// Construct a branch node.
    pub fn branch(split: SplitPoint, left: Box<Node>, right: Box<Node>)
        -> Self
    {
        Self::Branch { split, left, right, }
    }


    /// Construct a leaf node.
    pub fn leaf(proba: Vec<f64>) -> Self {
        Self::Leaf { proba, }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Walks from this node down to a leaf
    /// and returns the probability vector of the leaf.
    #[inline]
    pub fn predict_proba(&self, example: &[f64]) -> &[f64] {
        let mut node = self;
        loop {
            match node {
                Self::Branch { split, left, right, } => {
                    node = if split.goes_left(example) { &**left } else { &**right };
                },
                Self::Leaf { proba, } => {
                    return &proba[..];
                },
            }
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                left.n_leaves() + right.n_leaves()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                1 + left.depth().max(right.depth())
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// Returns the largest feature index this sub-tree reads.
    pub(crate) fn max_feature(&self) -> Option<usize> {
        match self {
            Self::Branch { split, left, right, } => {
                let feature = split.feature;
                [left.max_feature(), right.max_feature()].into_iter()
                    .flatten()
                    .fold(Some(feature), |acc, f| acc.map(|a| a.max(f)))
            },
            Self::Leaf { .. } => None,
        }
    }


    /// Returns `true` if every leaf of this sub-tree
    /// holds a probability vector of length `len`.
    pub(crate) fn leaves_have_len(&self, len: usize) -> bool {
        match self {
            Self::Branch { left, right, .. } => {
                left.leaves_have_len(len) && right.leaves_have_len(len)
            },
            Self::Leaf { proba, } => proba.len() == len,
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { split, left, right, } => {
                let branch = format!(
                    "\tnode_{id} [ label = \"x[{feat}] <= {thr:.4} ?\" ];\n",
                    feat = split.feature,
                    thr  = split.threshold,
                );

                let left_id = id + 1;
                let (     left,  right_id) = left.to_dot_info(left_id);
                let (mut right, return_id) = right.to_dot_info(right_id);

                let mut info = left;
                info.push(branch);
                info.append(&mut right);

                let left_edge = format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"Yes\" ];\n",
                );
                info.push(left_edge);
                let right_edge = format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"No\" ];\n",
                );
                info.push(right_edge);

                (info, return_id)
            },
            Node::Leaf { proba, } => {
                let proba = proba.iter()
                    .skip(1)
                    .map(|p| format!("{p:.3}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let info = format!(
                    "\tnode_{id} [ label = \"[{proba}]\", shape = box ];\n",
                );

                (vec![info], id + 1)
            }
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { split, left, right, } => {
                f.debug_struct("Branch")
                    .field("split", &split)
                    .field("left", &left)
                    .field("right", &right)
                    .finish()
            },
            Self::Leaf { proba, } => {
                f.debug_struct("Leaf")
                    .field("proba", &proba)
                    .finish()
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> Node {
        let split = SplitPoint { feature: 1, threshold: 0.5, score: 0.0 };
        Node::branch(
            split,
            Box::new(Node::leaf(vec![0.0, 1.0, 0.0])),
            Box::new(Node::leaf(vec![0.0, 0.25, 0.75])),
        )
    }

    #[test]
    fn test_predict_proba_01() {
        let node = stump();
        let res = node.predict_proba(&[9.0, 0.5]);
        let exp = [0.0, 1.0, 0.0];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_predict_proba_02() {
        let node = stump();
        let res = node.predict_proba(&[-9.0, 0.6]);
        let exp = [0.0, 0.25, 0.75];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_shape_01() {
        let node = stump();
        assert_eq!(node.n_leaves(), 2);
        assert_eq!(node.depth(), 1);
        assert_eq!(node.max_feature(), Some(1));
        assert!(!node.is_leaf());
        assert!(node.leaves_have_len(3));
        assert!(!node.leaves_have_len(4));
    }

    #[test]
    fn test_dot_info_01() {
        let (info, next_id) = stump().to_dot_info(0);
        assert_eq!(next_id, 3);
        assert_eq!(info.len(), 5);
    }
}
