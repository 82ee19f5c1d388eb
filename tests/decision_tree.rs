use std::io::BufReader;
use imbalance_eval::prelude::*;
use imbalance_eval::constants::PROBABILITY_TOLERANCE;


const TOLERANCE: f64 = 1e-9;


const IMBALANCED_CSV: &[u8] = b"\
x0,x1,class
0.10,2.3,1
0.20,1.9,1
0.25,3.1,1
0.40,2.2,1
0.45,0.7,1
0.50,1.1,1
0.55,2.8,1
0.70,0.4,1
0.75,1.5,1
0.80,2.6,1
0.62,0.2,2
0.66,0.3,2
0.90,0.1,2
0.95,0.5,2
0.30,3.3,3
0.35,3.5,3
";


fn imbalanced() -> Dataset {
    let reader = BufReader::new(IMBALANCED_CSV);
    Dataset::from_reader(reader, true).unwrap()
}


/// Returns the class counts of the rows reaching `node`
/// and checks the invariants on every node below.
fn walk(
    node: &Node,
    sample: &Dataset,
    rows: Vec<usize>,
    n_classes: usize,
    params: &TreeParams,
) -> Vec<usize>
{
    let mut counts = vec![0_usize; n_classes + 1];
    rows.iter().for_each(|&i| { counts[sample.label(i)] += 1; });

    match node {
        Node::Leaf { proba } => {
            assert_eq!(proba.len(), n_classes + 1);
            let sum = proba.iter().sum::<f64>();
            assert!((sum - 1.0).abs() < PROBABILITY_TOLERANCE, "got {proba:?}.");
        },
        Node::Branch { split, left, right } => {
            // A branch exists only where the stopping rules do not hold.
            assert!(rows.len() > params.min_samples_split);
            assert!(purity(&counts) < params.max_purity);

            let (lrows, rrows): (Vec<usize>, Vec<usize>) = rows.iter()
                .copied()
                .partition(|&i| split.goes_left(&sample[i]));
            assert!(!lrows.is_empty() && !rrows.is_empty());
            assert_eq!(lrows.len() + rrows.len(), rows.len());
            assert!(lrows.iter().all(|i| !rrows.contains(i)));

            let lcounts = walk(left, sample, lrows, n_classes, params);
            let rcounts = walk(right, sample, rrows, n_classes, params);
            let sum = lcounts.iter()
                .zip(rcounts)
                .map(|(l, r)| l + r)
                .collect::<Vec<_>>();
            assert_eq!(sum, counts);
        },
    }
    counts
}


fn purity(counts: &[usize]) -> f64 {
    let n = counts.iter().sum::<usize>() as f64;
    *counts.iter().max().unwrap() as f64 / n
}


/// Tests for `DecisionTree`.
#[cfg(test)]
pub mod decision_tree_tests {
    use super::*;

    #[test]
    fn perfect_split() {
        let sample = Dataset::from_rows(vec![
            vec![0.0, 0.0, 1.0],
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 2.0],
            vec![1.0, 1.0, 2.0],
        ]);
        let f = DecisionTreeBuilder::new(2)
            .max_purity(0.99)
            .min_samples_split(1)
            .build()
            .produce(&sample);

        match f.root() {
            Node::Branch { split, left, right } => {
                assert_eq!(split.feature, 0);
                assert!((split.threshold - 0.5).abs() < TOLERANCE);
                assert!(left.is_leaf() && right.is_leaf());
            },
            Node::Leaf { .. } => panic!("expected a branch at the root."),
        }

        let exp = vec![1, 1, 2, 2];
        let res = f.predict_all(&sample);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }


    #[test]
    fn single_class() {
        let sample = Dataset::from_rows(vec![
            vec![0.3, 1.0],
            vec![0.1, 1.0],
            vec![0.7, 1.0],
        ]);
        let f = DecisionTreeClassifier::train(&sample, 1, TreeParams::default());
        assert!(f.root().is_leaf());
        assert_eq!(f.predict_proba(&[0.5]), &[0.0, 1.0]);
    }


    #[test]
    fn tree_invariants() {
        let sample = imbalanced();
        let n_classes = 3;
        let params = TreeParams::new(1.0, 1);
        let f = DecisionTreeClassifier::train(&sample, n_classes, params);

        let rows = (0..sample.len()).collect::<Vec<_>>();
        let counts = walk(f.root(), &sample, rows, n_classes, &params);
        assert_eq!(counts, sample.class_counts(n_classes));

        // Distinct feature vectors and `max_purity = 1`
        // give a tree that fits the training set.
        let exp = sample.labels().collect::<Vec<_>>();
        let res = f.predict_all(&sample);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }


    #[test]
    fn stopping_rules_limit_growth() {
        let sample = imbalanced();
        let full = DecisionTreeClassifier::train(
            &sample, 3, TreeParams::new(1.0, 1)
        );
        let small = DecisionTreeClassifier::train(
            &sample, 3, TreeParams::new(0.6, 1)
        );
        let shallow = DecisionTreeClassifier::train(
            &sample, 3, TreeParams::new(1.0, sample.len())
        );

        assert!(small.n_leaves() <= full.n_leaves());
        assert!(shallow.root().is_leaf());
        let exp = [0.0, 10.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0];
        let res = shallow.predict_proba(&[0.0, 0.0]);
        for (e, r) in exp.iter().zip(res) {
            assert!((e - r).abs() < TOLERANCE, "expected {exp:?}, got {res:?}.");
        }
    }


    #[test]
    fn deterministic() {
        let sample = imbalanced();
        let params = TreeParams::new(0.9, 2);
        let f = DecisionTreeClassifier::train(&sample, 3, params);
        let g = DecisionTreeClassifier::train(&sample, 3, params);
        assert_eq!(f.root(), g.root());
        assert_eq!(f.predict_all(&sample), g.predict_all(&sample));
    }


    #[test]
    fn json_and_dot() {
        let sample = imbalanced();
        let f = DecisionTreeClassifier::train(&sample, 3, TreeParams::default());

        let mut dir = std::env::temp_dir();
        dir.push("imbalance_eval_decision_tree_tests");
        std::fs::create_dir_all(&dir).unwrap();

        let json = dir.join("tree.json");
        f.to_json_file(&json).unwrap();
        let g = DecisionTreeClassifier::from_json_file(&json).unwrap();
        assert_eq!(f.root(), g.root());

        let dot = dir.join("tree.dot");
        f.to_dot_file(&dot).unwrap();
        let text = std::fs::read_to_string(&dot).unwrap();
        assert!(text.starts_with("graph"), "got {text}.");
    }


    #[test]
    #[should_panic(expected = "empty training set")]
    fn empty_training_set() {
        let sample = Dataset::from_rows(Vec::new());
        let _ = DecisionTreeClassifier::train(&sample, 2, TreeParams::default());
    }


    #[test]
    #[should_panic]
    fn label_out_of_range() {
        let sample = imbalanced();
        let _ = DecisionTreeClassifier::train(&sample, 2, TreeParams::default());
    }
}
