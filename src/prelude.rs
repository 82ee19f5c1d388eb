//! Exports the decision tree, the validation engine, and their traits.
//! 
pub use crate::sample::Dataset;


pub use crate::hypothesis::{
    // Traits
    Classifier,
    Learner,
};


pub use crate::decision_tree::{
    // Learner and its parameters
    DecisionTree,
    DecisionTreeBuilder,
    TreeParams,

    // Trained classifier
    DecisionTreeClassifier,
    Node,
    SplitPoint,
};


pub use crate::validation::{
    ConfusionMatrix,
    Metrics,
    Prediction,
    Validation,
};


pub use crate::research::{
    StratifiedKFold,
    train_test_split,
};
