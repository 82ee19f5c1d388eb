//! Evaluates a decision tree on held-out data.
use colored::Colorize;

use std::fmt;

use crate::{
    Classifier,
    Dataset,
    DecisionTreeClassifier,
    TreeParams,
};
use crate::common::checker;
use super::{
    auc,
    confusion::{ConfusionMatrix, Prediction},
    metrics::Metrics,
};


/// The outcome of evaluating a classifier on a test set.
/// 
/// Everything is computed at construction and is read-only thereafter.
/// 
/// # Example
/// ```no_run
/// use imbalance_eval::prelude::*;
/// 
/// let train = Dataset::from_csv("/path/to/train.csv", false).unwrap();
/// let test  = Dataset::from_csv("/path/to/test.csv", false).unwrap();
/// 
/// let params = TreeParams::default();
/// let valid = Validation::new(&train, &test, 2, params, false);
/// println!("MAUC = {}", valid.mauc());
/// ```
#[derive(Debug, Clone)]
pub struct Validation {
    matrix: ConfusionMatrix,
    predictions: Vec<Prediction>,
    metrics: Metrics,
}


impl Validation {
    /// Train a decision tree on `train` with `params`
    /// and evaluate it on `test`.
    /// 
    /// If `n_classes == 2` and `macro_flag == false`,
    /// the per-class metrics and the AUC are reported for
    /// the minority class of `test`.
    /// Otherwise they are averaged over the classes present in `test`.
    /// 
    /// Panics if `train` or `test` is empty,
    /// or if a label lies outside `1..=n_classes`.
    pub fn new(
        train: &Dataset,
        test: &Dataset,
        n_classes: usize,
        params: TreeParams,
        macro_flag: bool,
    ) -> Self
    {
        let tree = DecisionTreeClassifier::train(train, n_classes, params);
        Self::from_classifier(&tree, test, n_classes, macro_flag)
    }


    /// Evaluate an already trained classifier on `test`.
    /// The metrics follow the same rules as [`Validation::new`].
    pub fn from_classifier<C>(
        classifier: &C,
        test: &Dataset,
        n_classes: usize,
        macro_flag: bool,
    ) -> Self
        where C: Classifier + ?Sized,
    {
        checker::check_testing_set(test, n_classes);

        let (matrix, predictions) = ConfusionMatrix::build(
            classifier, test, n_classes
        );

        let actual = test.labels().collect::<Vec<_>>();
        let counts = matrix.actual_counts();
        let mauc = auc::macro_auc(
            &actual[..], &predictions[..], &counts[..], macro_flag
        );
        let metrics = Metrics::new(&matrix, mauc, macro_flag);

        Self { matrix, predictions, metrics, }
    }


    /// Returns the macro precision.
    #[inline]
    pub fn macro_precision(&self) -> f64 {
        self.metrics.macro_precision
    }


    /// Returns the macro recall.
    #[inline]
    pub fn macro_recall(&self) -> f64 {
        self.metrics.macro_recall
    }


    /// Returns the macro F1 score.
    #[inline]
    pub fn macro_f1(&self) -> f64 {
        self.metrics.macro_f1
    }


    /// Returns the geometric mean of the per-class recall.
    #[inline]
    pub fn g_mean(&self) -> f64 {
        self.metrics.g_mean
    }


    /// Returns the macro accuracy.
    #[inline]
    pub fn macc(&self) -> f64 {
        self.metrics.macc
    }


    /// Returns the macro one-vs-rest AUC.
    #[inline]
    pub fn mauc(&self) -> f64 {
        self.metrics.mauc
    }


    /// Returns the macro Matthews correlation coefficient.
    #[inline]
    pub fn mmcc(&self) -> f64 {
        self.metrics.mmcc
    }


    /// Returns Cohen's Kappa.
    #[inline]
    pub fn cohens_kappa(&self) -> f64 {
        self.metrics.cohens_kappa
    }


    /// Returns the confusion matrix.
    #[inline]
    pub fn confusion_matrix(&self) -> &ConfusionMatrix {
        &self.matrix
    }


    /// Returns all eight metrics.
    #[inline]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }


    /// Returns the prediction for each test example.
    #[inline]
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions[..]
    }
}


impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            "[VALIDATION]".bold().red(),
            format!("{} test examples", self.matrix.total()).bold(),
        )?;
        write!(f, "{}", self.matrix)?;
        write!(f, "{}", self.metrics)
    }
}
