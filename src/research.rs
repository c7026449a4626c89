//! This directory provides the cross-validation tools
//! used to choose the number of rules.

/// Group-aware k-fold cross-validation.
pub mod cross_validation;

/// Accuracy curves over the number of rules.
pub mod accuracy;


pub use cross_validation::{CrossValidation, GroupFolds};
pub use accuracy::AccuracyCurves;
