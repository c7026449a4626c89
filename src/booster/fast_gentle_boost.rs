//! The Fast Gentle Boosting algorithm for multiclass classification.
//! The weak learner is the single-feature threshold rule of
//! A. Torralba, K. P. Murphy and W. T. Freeman,
//! *Sharing visual features for multiclass and multiview object detection*,
//! IEEE PAMI 2007, without sharing the outputs between classes.
pub mod fgb_algorithm;
mod worst_margin;

pub use fgb_algorithm::FastGentleBoost;
