//! Confusion matrix built from the predictions of a classifier.
use colored::Colorize;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Classifier, Dataset};


/// The prediction of a classifier for one test example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted class label.
    pub label: usize,
    /// Probability of each class. Index `0` is unused.
    pub proba: Vec<f64>,
}


/// A confusion matrix of size `(n_classes + 1) x (n_classes + 1)`.
/// 
/// Entry `[predicted][actual]` counts the test examples of class `actual`
/// that were predicted as `predicted`.
/// Row and column `0` are never filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    matrix: Vec<Vec<usize>>,
    n_classes: usize,
}


impl ConfusionMatrix {
    /// Construct a zero matrix.
    #[inline]
    pub(crate) fn zeros(n_classes: usize) -> Self {
        let matrix = vec![vec![0_usize; n_classes + 1]; n_classes + 1];
        Self { matrix, n_classes }
    }


    /// Build a confusion matrix from predicted and actual labels.
    pub fn from_labels(predicted: &[usize], actual: &[usize], n_classes: usize)
        -> Self
    {
        assert_eq!(
            predicted.len(), actual.len(),
            "# of predicted labels and # of actual labels differ",
        );

        let mut matrix = Self::zeros(n_classes);
        predicted.iter()
            .zip(actual)
            .for_each(|(&p, &a)| { matrix.add(p, a); });
        matrix
    }


    /// Build a confusion matrix by running `classifier` over `sample`.
    /// Returns the matrix and the prediction of each example,
    /// in the order of `sample`.
    pub fn build<C>(classifier: &C, sample: &Dataset, n_classes: usize)
        -> (Self, Vec<Prediction>)
        where C: Classifier + ?Sized,
    {
        let mut matrix = Self::zeros(n_classes);
        let predictions = sample.rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let proba = classifier.predict_proba(row).to_vec();
                let label = classifier.predict(row);
                matrix.add(label, sample.label(i));
                Prediction { label, proba }
            })
            .collect::<Vec<_>>();

        (matrix, predictions)
    }


    /// Count one `(predicted, actual)` pair.
    #[inline]
    pub(crate) fn add(&mut self, predicted: usize, actual: usize) {
        let n_classes = self.n_classes;
        assert!(
            (1..=n_classes).contains(&predicted),
            "Predicted label {predicted} is out of range `1..={n_classes}`"
        );
        assert!(
            (1..=n_classes).contains(&actual),
            "Actual label {actual} is out of range `1..={n_classes}`"
        );
        self.matrix[predicted][actual] += 1;
    }


    /// Returns the count of examples of class `actual`
    /// predicted as `predicted`.
    #[inline]
    pub fn get(&self, predicted: usize, actual: usize) -> usize {
        self.matrix[predicted][actual]
    }


    /// Returns the underlying matrix rows, indexed by the predicted class.
    #[inline]
    pub fn as_rows(&self) -> &[Vec<usize>] {
        &self.matrix[..]
    }


    /// Returns the number of classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }


    /// Returns the number of examples predicted as class `c`.
    #[inline]
    pub fn predicted_count(&self, c: usize) -> usize {
        self.matrix[c].iter().sum()
    }


    /// Returns the number of examples of class `c`.
    #[inline]
    pub fn actual_count(&self, c: usize) -> usize {
        self.matrix.iter().map(|row| row[c]).sum()
    }


    /// Returns the number of examples of each class.
    /// The returned vector has length `n_classes + 1`.
    pub fn actual_counts(&self) -> Vec<usize> {
        (0..=self.n_classes).map(|c| self.actual_count(c))
            .collect()
    }


    /// Returns the number of correctly classified examples.
    #[inline]
    pub fn correct(&self) -> usize {
        (1..=self.n_classes).map(|c| self.matrix[c][c]).sum()
    }


    /// Returns the number of examples.
    #[inline]
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }
}


impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 7;
        let header = (1..=self.n_classes)
            .map(|c| format!("{:>WIDTH$}", format!("A{c}")))
            .collect::<String>();
        writeln!(f, "{:>WIDTH$}{}", "", header.bold().yellow())?;

        for c in 1..=self.n_classes {
            let row = self.matrix[c][1..]
                .iter()
                .enumerate()
                .map(|(k, n)| {
                    let cell = format!("{n:>WIDTH$}");
                    if k + 1 == c { cell.bold().green().to_string() } else { cell }
                })
                .collect::<String>();
            writeln!(f, "{}{row}", format!("{:>WIDTH$}", format!("P{c}")).bold().cyan())?;
        }
        Ok(())
    }
}
