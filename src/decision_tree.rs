//! A decision tree grown with exhaustive Gini-impurity splitting.

/// Defines the decision tree learner.
pub(crate) mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub(crate) mod classifier;
/// Defines the builder and the stopping rules.
pub(crate) mod builder;
/// Defines the split search.
pub mod split_by;
/// Defines the inner representation of `DecisionTreeClassifier`.
pub mod node;

mod column;


pub use builder::{DecisionTreeBuilder, TreeParams};
pub use classifier::DecisionTreeClassifier;
pub use dtree::DecisionTree;
pub use node::Node;
pub use split_by::SplitPoint;
