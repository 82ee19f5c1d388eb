use crate::Dataset;


/// A trait that defines the behavor of a probabilistic classifier.
/// You only need to implement `predict_proba` method.
/// 
/// Class-indexed vectors returned by a `Classifier` have length
/// `n_classes + 1`; index `0` is a sentinel and never predicted.
pub trait Classifier {
    /// Computes the class-probability vector of `example`.
    /// `example` is a full row; trailing values past the features
    /// (e.g., the label) are ignored.
    fn predict_proba(&self, example: &[f64]) -> &[f64];


    /// Predicts the class label of `example`.
    /// Returns the class with the maximal probability.
    /// Ties are broken by the lowest class index.
    fn predict(&self, example: &[f64]) -> usize {
        let proba = self.predict_proba(example);
        let mut best = 1_usize;
        for (y, &p) in proba.iter().enumerate().skip(2) {
            if p > proba[best] { best = y; }
        }
        best
    }


    /// Computes the class-probability vectors of `sample`.
    fn predict_proba_all(&self, sample: &Dataset) -> Vec<Vec<f64>> {
        sample.rows()
            .iter()
            .map(|row| self.predict_proba(row).to_vec())
            .collect::<Vec<_>>()
    }


    /// Predicts the labels of `sample`.
    fn predict_all(&self, sample: &Dataset) -> Vec<usize> {
        sample.rows()
            .iter()
            .map(|row| self.predict(row))
            .collect::<Vec<_>>()
    }
}


/// A trait that defines the behavor of a learning algorithm.
/// Given a training sample, a `Learner` produces a `Classifier`.
pub trait Learner {
    /// The classifier this learner produces.
    type Hypothesis: Classifier;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the learner as `(key, value)` pairs.
    /// Used for printing reports.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Trains a classifier on `sample`.
    fn produce(&self, sample: &Dataset) -> Self::Hypothesis;
}
