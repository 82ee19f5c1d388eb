use rand::prelude::*;
use colored::Colorize;

use crate::Dataset;
use crate::constants::{DEFAULT_N_FOLDS, DEFAULT_SEED};
use super::shuffled_classes;

use std::iter::Iterator;

const WIDTH: usize = 9;

/// A struct that generates stratified
/// pairs of training/test sets for cross validation.
/// 
/// The rows of each class are shuffled and dealt round-robin to the folds,
/// so every fold keeps the class ratio of the whole sample.
/// - A class with a single row appears in every training set
///     and every test set.
/// - A class with fewer rows than folds fills its empty test folds
///     by cycling through its rows.
///     Those rows then appear in both sets of such a fold.
/// 
/// # Example
/// ```no_run
/// use imbalance_eval::prelude::*;
///
/// let sample = Dataset::from_csv("/path/to/sample.csv", false).unwrap();
/// let cv = StratifiedKFold::new(&sample, 2)
///     .n_folds(5)
///     .seed(777)
///     .verbose(true);
/// for (train, test) in cv {
///     let valid = Validation::new(
///         &train, &test, 2, TreeParams::default(), false
///     );
///     println!("[G-mean: {}] [MAUC: {}]", valid.g_mean(), valid.mauc());
/// }
/// ```
pub struct StratifiedKFold<'a> {
    current_fold: usize,
    n_folds: usize,
    n_classes: usize,
    seed: u64,
    sample: &'a Dataset,
    folds: Option<Vec<(Vec<usize>, Vec<usize>)>>,
    verbose: bool,
}


impl<'a> StratifiedKFold<'a> {
    /// Construct a new instance of `StratifiedKFold`
    /// for a sample whose labels lie in `1..=n_classes`.
    #[inline]
    pub fn new(sample: &'a Dataset, n_classes: usize) -> Self {
        assert!(n_classes > 0, "`n_classes` must be positive");
        Self {
            current_fold: 0,
            n_folds: DEFAULT_N_FOLDS,
            seed: DEFAULT_SEED,
            verbose: false,
            folds: None,
            n_classes,
            sample,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(n_folds >= 2, "The number of folds should be at least `2`.");
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `StratifiedKFold` prints the size of each set
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the row indices of the training/test set of each fold.
    fn assign(&self) -> Vec<(Vec<usize>, Vec<usize>)> {
        let k = self.n_folds;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let classes = shuffled_classes(self.sample, self.n_classes, &mut rng);

        let mut folds = vec![(Vec::new(), Vec::new()); k];
        for rows in classes.iter().filter(|rows| !rows.is_empty()) {
            if rows.len() == 1 {
                folds.iter_mut()
                    .for_each(|(train, test)| {
                        train.push(rows[0]);
                        test.push(rows[0]);
                    });
                continue;
            }

            for (f, (train, test)) in folds.iter_mut().enumerate() {
                for (j, &row) in rows.iter().enumerate() {
                    if j % k == f { test.push(row); } else { train.push(row); }
                }
                if f >= rows.len() {
                    test.push(rows[f % rows.len()]);
                }
            }
        }

        folds.iter_mut()
            .for_each(|(train, test)| {
                train.sort_unstable();
                test.sort_unstable();
            });
        folds
    }
}


impl<'a> Iterator for StratifiedKFold<'a> {
    type Item = (Dataset, Dataset);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        if self.folds.is_none() {
            self.folds = Some(self.assign());
        }
        let (train_ix, test_ix) = &self.folds.as_ref()?[self.current_fold];
        let output = (
            self.sample.subset(&train_ix[..]),
            self.sample.subset(&test_ix[..]),
        );
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.len();
            let test_size = output.1.len();
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
