//! Defines some common functions used in this library.

/// Constants used as default values.
pub mod constants;

/// Defines a dense row-major matrix.
pub mod matrix;

/// Defines some useful functions such as normalization.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;

pub use matrix::Matrix;
