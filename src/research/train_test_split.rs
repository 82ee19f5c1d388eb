use rand::prelude::*;

use crate::Dataset;
use super::shuffled_classes;


/// Split `sample` into a training set and a test set,
/// keeping the class ratio.
/// 
/// For each class with `n_c` rows,
/// `ceil(n_c * (1 - train_ratio))` shuffled rows go to the test set
/// and the rest go to the training set.
/// A class with a single row is kept in both sets.
/// 
/// Panics if `train_ratio` is not in `(0, 1)`.
pub fn train_test_split(
    sample: &Dataset,
    n_classes: usize,
    train_ratio: f64,
    seed: u64,
) -> (Dataset, Dataset)
{
    assert!(
        0f64 < train_ratio && train_ratio < 1f64,
        "Training ratio should be in `(0, 1)`."
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let classes = shuffled_classes(sample, n_classes, &mut rng);

    let mut train = Vec::new();
    let mut test = Vec::new();
    for rows in classes.iter().filter(|rows| !rows.is_empty()) {
        if rows.len() == 1 {
            train.push(rows[0]);
            test.push(rows[0]);
            continue;
        }

        let n_test = (rows.len() as f64 * (1f64 - train_ratio)).ceil() as usize;
        let n_test = n_test.min(rows.len());
        test.extend_from_slice(&rows[..n_test]);
        train.extend_from_slice(&rows[n_test..]);
    }

    train.sort_unstable();
    test.sort_unstable();
    (sample.subset(&train[..]), sample.subset(&test[..]))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_test_split_01() {
        let rows = (0..10)
            .map(|i| vec![i as f64, if i < 7 { 1.0 } else { 2.0 }])
            .collect::<Vec<_>>();
        let sample = Dataset::from_rows(rows);

        let (train, test) = train_test_split(&sample, 2, 0.7, 1234);

        // ceil(7 * 0.3) = 3, ceil(3 * 0.3) = 1
        let exp = vec![0, 3, 1];
        let res = test.class_counts(2);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
        assert_eq!(train.len() + test.len(), 10);
    }

    #[test]
    fn test_single_row_class() {
        let sample = Dataset::from_rows(vec![
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![2.0, 2.0],
        ]);
        let (train, test) = train_test_split(&sample, 2, 0.5, 1);
        assert_eq!(train.class_counts(2)[2], 1);
        assert_eq!(test.class_counts(2)[2], 1);
    }

    #[test]
    #[should_panic]
    fn test_invalid_ratio() {
        let sample = Dataset::from_rows(vec![vec![0.0, 1.0]]);
        let _ = train_test_split(&sample, 1, 1.0, 1);
    }
}
