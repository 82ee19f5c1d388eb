//! Pre-sorted feature columns used by the split search.
use fixedbitset::FixedBitSet;

use crate::Dataset;


/// A row of a [`SortedColumn`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Entry {
    /// Index of the row in the training set.
    pub(crate) row: usize,
    /// Value of the feature at `row`.
    pub(crate) value: f64,
    /// Class label of `row`.
    pub(crate) label: usize,
}


/// The `(row, value, label)` triples of one feature,
/// sorted in ascending order of `value`.
/// Built once per feature when growing starts and read-only afterward,
/// so that every node scans a feature in linear time.
#[derive(Clone, Debug)]
pub(crate) struct SortedColumn {
    entries: Vec<Entry>,
}


impl SortedColumn {
    /// Sort the `feature`-th column of `sample`.
    /// Rows sharing a value keep their original order.
    pub(crate) fn new(sample: &Dataset, feature: usize) -> Self {
        let mut entries = sample.rows()
            .iter()
            .enumerate()
            .map(|(row, x)| {
                Entry { row, value: x[feature], label: sample.label(row) }
            })
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| a.value.total_cmp(&b.value));

        Self { entries }
    }


    /// Sort every feature column of `sample`.
    pub(crate) fn all(sample: &Dataset) -> Vec<Self> {
        let n_feature = sample.shape().1;
        (0..n_feature).map(|j| Self::new(sample, j))
            .collect()
    }


    /// Returns the entries whose row is in `mask`, in ascending order.
    #[inline]
    pub(crate) fn active<'a>(&'a self, mask: &'a FixedBitSet)
        -> impl Iterator<Item = &'a Entry> + 'a
    {
        self.entries.iter()
            .filter(move |entry| mask.contains(entry.row))
    }


    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries[..]
    }
}
