//! Struct `Dataset` represents a labeled sample.  
//! Each row holds the feature values followed by an integer class label.

// Provides the dataset struct.
pub(crate) mod sample_struct;


pub use sample_struct::Dataset;
