//! One-vs-rest area under the ROC curve.
use super::confusion::Prediction;
use super::metrics::minority_class;


/// Returns the one-vs-rest AUC of class `pos_label`.
/// 
/// Examples are sorted in descending order of the probability of
/// `pos_label`. The threshold sweeps down the sorted list;
/// examples sharing a probability enter the positive side together.
/// The area under the resulting `(FP, TP)` curve
/// is integrated by the trapezoid rule and normalized by
/// `# of positives * # of negatives`.
/// 
/// Returns `0` if there is no positive or no negative example.
pub fn ovr_auc(actual: &[usize], predictions: &[Prediction], pos_label: usize)
    -> f64
{
    assert_eq!(
        actual.len(), predictions.len(),
        "# of labels and # of predictions differ",
    );

    let mut scored = actual.iter()
        .zip(predictions)
        .map(|(&y, pred)| (pred.proba[pos_label], y == pos_label))
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let n_pos = scored.iter().filter(|(_, is_pos)| *is_pos).count();
    let n_neg = scored.len() - n_pos;
    if n_pos == 0 || n_neg == 0 { return 0f64; }

    let mut area = 0f64;
    let (mut tp, mut fp) = (0f64, 0f64);
    let mut i = 0;
    while i < scored.len() {
        let (tp_prev, fp_prev) = (tp, fp);
        let threshold = scored[i].0;
        while i < scored.len() && scored[i].0 == threshold {
            if scored[i].1 { tp += 1f64; } else { fp += 1f64; }
            i += 1;
        }
        area += (tp + tp_prev) * (fp - fp_prev) / 2f64;
    }

    area / (n_pos as f64 * n_neg as f64)
}


/// Returns the macro AUC over the classes present in `actual`.
/// 
/// With two classes and `macro_flag == false`,
/// returns the AUC of the minority class instead of the mean.
pub(crate) fn macro_auc(
    actual:      &[usize],
    predictions: &[Prediction],
    counts:      &[usize],
    macro_flag:  bool,
) -> f64
{
    let n_classes = counts.len() - 1;

    if n_classes == 2 && !macro_flag {
        return minority_class(counts)
            .map(|c| ovr_auc(actual, predictions, c))
            .unwrap_or(0f64);
    }

    let (sum, n_present) = (1..=n_classes)
        .filter(|&c| counts[c] > 0)
        .fold((0f64, 0_usize), |(sum, n), c| {
            (sum + ovr_auc(actual, predictions, c), n + 1)
        });

    if n_present == 0 { 0f64 } else { sum / n_present as f64 }
}


#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn predictions(pos_proba: &[f64]) -> Vec<Prediction> {
        pos_proba.iter()
            .map(|&p| {
                let label = if p >= 0.5 { 2 } else { 1 };
                Prediction { label, proba: vec![0.0, 1.0 - p, p] }
            })
            .collect()
    }

    #[test]
    fn test_ovr_auc_perfect() {
        let actual = [2, 2, 1, 1];
        let preds = predictions(&[0.9, 0.8, 0.3, 0.1]);
        let res = ovr_auc(&actual, &preds, 2);
        assert!((res - 1.0).abs() < TEST_TOLERANCE, "expected 1, got {res}.");
        let res = ovr_auc(&actual, &preds, 1);
        assert!((res - 1.0).abs() < TEST_TOLERANCE, "expected 1, got {res}.");
    }

    #[test]
    fn test_ovr_auc_reversed() {
        let actual = [1, 1, 2, 2];
        let preds = predictions(&[0.9, 0.8, 0.3, 0.1]);
        let res = ovr_auc(&actual, &preds, 2);
        assert!(res.abs() < TEST_TOLERANCE, "expected 0, got {res}.");
    }

    #[test]
    fn test_ovr_auc_partial() {
        // Positives rank 1st and 3rd: 3 of 4 pairs are ordered.
        let actual = [2, 1, 2, 1];
        let preds = predictions(&[0.9, 0.8, 0.7, 0.1]);
        let res = ovr_auc(&actual, &preds, 2);
        assert!((res - 0.75).abs() < TEST_TOLERANCE, "expected 0.75, got {res}.");
    }

    #[test]
    fn test_ovr_auc_ties() {
        // Every example shares a score: the ROC curve is the diagonal.
        let actual = [2, 1, 2, 1];
        let preds = predictions(&[0.5, 0.5, 0.5, 0.5]);
        let res = ovr_auc(&actual, &preds, 2);
        assert!((res - 0.5).abs() < TEST_TOLERANCE, "expected 0.5, got {res}.");
    }

    #[test]
    fn test_ovr_auc_degenerate() {
        let actual = [2, 2];
        let preds = predictions(&[0.9, 0.1]);
        let res = ovr_auc(&actual, &preds, 2);
        assert_eq!(res, 0.0);
    }

    #[test]
    fn test_macro_auc_minority() {
        // Class 2 is the minority.
        let actual = [1, 1, 1, 2];
        let preds = predictions(&[0.1, 0.2, 0.9, 0.8]);
        let counts = [0, 3, 1];
        let res = macro_auc(&actual, &preds, &counts, false);
        let exp = ovr_auc(&actual, &preds, 2);
        assert!((res - exp).abs() < TEST_TOLERANCE, "expected {exp}, got {res}.");
    }

    #[test]
    fn test_macro_auc_mean() {
        let actual = [1, 1, 1, 2];
        let preds = predictions(&[0.1, 0.2, 0.9, 0.8]);
        let counts = [0, 3, 1];
        let res = macro_auc(&actual, &preds, &counts, true);
        let exp = (ovr_auc(&actual, &preds, 1) + ovr_auc(&actual, &preds, 2)) / 2.0;
        assert!((res - exp).abs() < TEST_TOLERANCE, "expected {exp}, got {res}.");
    }
}
