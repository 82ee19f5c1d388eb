//! Summary statistics derived from a confusion matrix.
use colored::Colorize;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::constants::{PRINT_WIDTH, PRINT_PRECISION};
use super::confusion::ConfusionMatrix;


const FULL_WIDTH: usize = 40;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// The one-vs-rest statistics of a single class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// The class label.
    pub class: usize,
    /// `TP / (TP + FP)`. `0` if no example is predicted as this class.
    pub precision: f64,
    /// `TP / (TP + FN)`. `0` if the class has no example.
    pub recall: f64,
    /// Harmonic mean of precision and recall. `0` if both are `0`.
    pub f1: f64,
    /// `(TP + TN) / (TP + FP + FN + TN)`.
    pub accuracy: f64,
    /// Matthews correlation coefficient. `0` if a marginal is `0`.
    pub mcc: f64,
    /// Number of test examples of this class.
    pub support: usize,
}


impl ClassMetrics {
    /// Compute the statistics of class `c`.
    /// 
    /// `TN` counts the correctly classified examples of the other classes,
    /// i.e., the diagonal of `matrix` without class `c`.
    pub fn new(matrix: &ConfusionMatrix, c: usize) -> Self {
        let tp = matrix.get(c, c);
        let predicted = matrix.predicted_count(c);
        let support = matrix.actual_count(c);

        let fp = predicted - tp;
        let fn_ = support - tp;
        let tn = matrix.correct() - tp;

        let (tp, fp, fn_, tn) = (tp as f64, fp as f64, fn_ as f64, tn as f64);

        let precision = if tp + fp > 0f64 { tp / (tp + fp) } else { 0f64 };
        let recall = if tp + fn_ > 0f64 { tp / (tp + fn_) } else { 0f64 };
        let f1 = if precision + recall > 0f64 {
            2f64 * precision * recall / (precision + recall)
        } else {
            0f64
        };

        let total = tp + fp + fn_ + tn;
        let accuracy = if total > 0f64 { (tp + tn) / total } else { 0f64 };

        let marginals = [tp + fp, tp + fn_, tn + fp, tn + fn_];
        let mcc = if marginals.iter().all(|&m| m > 0f64) {
            let denom = marginals.iter().product::<f64>().sqrt();
            (tp * tn - fp * fn_) / denom
        } else {
            0f64
        };

        Self { class: c, precision, recall, f1, accuracy, mcc, support, }
    }
}


/// The summary statistics of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Macro precision.
    pub macro_precision: f64,
    /// Macro recall.
    pub macro_recall: f64,
    /// Macro F1 score.
    pub macro_f1: f64,
    /// Geometric mean of the per-class recall.
    pub g_mean: f64,
    /// Macro accuracy.
    pub macc: f64,
    /// Macro one-vs-rest AUC.
    pub mauc: f64,
    /// Macro Matthews correlation coefficient.
    pub mmcc: f64,
    /// Cohen's Kappa.
    pub cohens_kappa: f64,
}


impl Metrics {
    /// Derive the metrics from `matrix` and a precomputed macro AUC.
    /// 
    /// Only the classes present in the test set take part.
    /// With two classes and `macro_flag == false`,
    /// precision, recall, F1, accuracy and MCC are those of
    /// the minority class rather than the mean over classes.
    /// G-mean and Cohen's Kappa do not depend on `macro_flag`.
    pub fn new(matrix: &ConfusionMatrix, mauc: f64, macro_flag: bool) -> Self {
        let n_classes = matrix.n_classes();
        let per_class = (1..=n_classes)
            .map(|c| ClassMetrics::new(matrix, c))
            .filter(|m| m.support > 0)
            .collect::<Vec<_>>();

        let n_present = per_class.len();
        let g_mean = if n_present == 0 {
            0f64
        } else {
            per_class.iter()
                .map(|m| m.recall)
                .product::<f64>()
                .powf(1f64 / n_present as f64)
        };

        let cohens_kappa = cohens_kappa(matrix);

        let counts = matrix.actual_counts();
        let summary = if n_classes == 2 && !macro_flag {
            minority_class(&counts[..])
                .and_then(|c| per_class.iter().find(|m| m.class == c))
                .map(|m| [m.precision, m.recall, m.f1, m.accuracy, m.mcc])
                .unwrap_or([0f64; 5])
        } else {
            mean(&per_class[..])
        };
        let [macro_precision, macro_recall, macro_f1, macc, mmcc] = summary;

        Self {
            macro_precision,
            macro_recall,
            macro_f1,
            g_mean,
            macc,
            mauc,
            mmcc,
            cohens_kappa,
        }
    }


    /// Serialize the metrics to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }


    /// Returns the metrics as `(name, value)` pairs.
    pub fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("Macro precision", self.macro_precision),
            ("Macro recall", self.macro_recall),
            ("Macro F1", self.macro_f1),
            ("G-mean", self.g_mean),
            ("MACC", self.macc),
            ("MAUC", self.mauc),
            ("MMCC", self.mmcc),
            ("Cohen's Kappa", self.cohens_kappa),
        ]
    }
}


/// Returns the class with the fewest test examples among
/// the classes present in `counts`.
/// Ties go to the larger class label.
pub(crate) fn minority_class(counts: &[usize]) -> Option<usize> {
    counts.iter()
        .enumerate()
        .skip(1)
        .filter(|&(_, &n)| n > 0)
        .fold(None, |best: Option<(usize, usize)>, (c, &n)| {
            match best {
                Some((_, m)) if m < n => best,
                _ => Some((c, n)),
            }
        })
        .map(|(c, _)| c)
}


/// Returns Cohen's Kappa `(p0 - pc) / (1 - pc)`.
/// `0` if the chance agreement `pc` is `1`.
pub(crate) fn cohens_kappa(matrix: &ConfusionMatrix) -> f64 {
    let total = matrix.total() as f64;
    if total == 0f64 { return 0f64; }

    let p0 = matrix.correct() as f64 / total;
    let pc = (1..=matrix.n_classes())
        .map(|c| matrix.predicted_count(c) as f64 * matrix.actual_count(c) as f64)
        .sum::<f64>()
        / (total * total);

    if pc >= 1f64 { 0f64 } else { (p0 - pc) / (1f64 - pc) }
}


/// Returns the arithmetic mean of precision, recall, F1, accuracy and MCC.
fn mean(per_class: &[ClassMetrics]) -> [f64; 5] {
    if per_class.is_empty() { return [0f64; 5]; }

    let n = per_class.len() as f64;
    let mut sum = [0f64; 5];
    for m in per_class {
        let values = [m.precision, m.recall, m.f1, m.accuracy, m.mcc];
        sum.iter_mut()
            .zip(values)
            .for_each(|(s, v)| { *s += v; });
    }
    sum.map(|s| s / n)
}


impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "METRICS".bold(), "",
        )?;
        for (name, value) in self.named() {
            writeln!(
                f,
                "+ {:<STAT_WIDTH$}{:>PRINT_WIDTH$}",
                name.bold(),
                format!("{value:.PRINT_PRECISION$}").bold().green(),
            )?;
        }
        write!(f, "{:=>FULL_WIDTH$}", "")
    }
}
