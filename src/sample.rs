//! Struct `Sample` represents a labeled batch sample.

// Provides named feature columns.
pub(crate) mod feature;
// Provides the signed label matrix.
pub(crate) mod label_matrix;
// Provides sample struct.
pub(crate) mod sample_struct;


pub use feature::{Feature, Features};
pub use label_matrix::LabelMatrix;
pub use sample_struct::Sample;
