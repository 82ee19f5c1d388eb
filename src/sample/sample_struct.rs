use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::ops::Index;


/// Struct `Dataset` holds a labeled sample in row-major format.
/// The last column of every row is the class label,
/// which is a positive integer stored as `f64`.
/// 
/// Training and evaluation never mutate a `Dataset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<Vec<f64>>,
    n_feature: usize,
}


impl Dataset {
    /// Construct a `Dataset` from the given rows.
    /// 
    /// Every row must have the same width (at least one feature
    /// plus the label) and every label must be a positive integer.
    /// An empty vector yields an empty `Dataset`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let width = match rows.first() {
            Some(row) => row.len(),
            None => return Self { rows, n_feature: 0 },
        };
        assert!(
            width >= 2,
            "Each row needs at least one feature and a label. got width {width}"
        );

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(), width,
                "Row {i} has {} columns, but row 0 has {width}",
                row.len(),
            );
            let y = row[width - 1];
            assert!(
                y >= 1f64 && y.fract() == 0f64,
                "The label of row {i} must be a positive integer. got {y}"
            );
        }

        Self { rows, n_feature: width - 1 }
    }


    /// Read a CSV format file to `Dataset`.
    /// This method returns `Err` if the file does not exist
    /// or contains a non-numerical value.
    /// 
    /// The last column of the file is the class label.
    pub fn from_csv<P>(file: P, has_header: bool) -> io::Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header)
    }


    /// Read a CSV from [`BufReader`].
    pub fn from_reader<R>(reader: BufReader<R>, has_header: bool)
        -> io::Result<Self>
        where R: Read,
    {
        let mut lines = reader.lines();

        if has_header {
            // Column names carry no information for the tree.
            let _ = lines.next().transpose()?;
        }

        let mut rows = Vec::new();
        for (i, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let row = line.split(',')
                .map(|x| {
                    x.trim().parse::<f64>()
                        .map_err(|_| {
                            io::Error::new(
                                io::ErrorKind::InvalidData,
                                format!(
                                    "The file contains non-numerical value. \
                                    Got {x} in Line {i}"
                                ),
                            )
                        })
                })
                .collect::<io::Result<Vec<_>>>()?;
            rows.push(row);
        }

        Ok(Self::from_rows(rows))
    }


    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }


    /// Returns `true` if this dataset has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Returns the pair of the number of rows and features.
    /// The label column is not counted as a feature.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.n_feature)
    }


    /// Returns the rows of this dataset.
    #[inline]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows[..]
    }


    /// Returns the class label of the `row`-th example.
    #[inline]
    pub fn label(&self, row: usize) -> usize {
        self.rows[row][self.n_feature] as usize
    }


    /// Returns an iterator over the class labels.
    pub fn labels(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.rows.len()).map(|i| self.label(i))
    }


    /// Returns the number of rows for each class.
    /// The returned vector has length `n_classes + 1`
    /// and its `0`-th entry is always `0`.
    pub fn class_counts(&self, n_classes: usize) -> Vec<usize> {
        let mut counts = vec![0_usize; n_classes + 1];
        for y in self.labels() {
            assert!(
                (1..=n_classes).contains(&y),
                "Label {y} is out of range `1..={n_classes}`"
            );
            counts[y] += 1;
        }
        counts
    }


    /// Returns a new `Dataset` that consists of the rows at `indices`.
    pub fn subset(&self, indices: &[usize]) -> Self {
        let rows = indices.iter()
            .map(|&i| self.rows[i].clone())
            .collect::<Vec<_>>();
        Self { rows, n_feature: self.n_feature }
    }
}


impl From<Vec<Vec<f64>>> for Dataset {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::from_rows(rows)
    }
}


impl Index<usize> for Dataset {
    type Output = [f64];

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row][..]
    }
}
