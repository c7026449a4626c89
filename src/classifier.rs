//! The classifier facade: a trained model, its strategy,
//! and the names of its classes.

/// Strategies and the models they produce.
pub mod trained_model;

/// Provides `GentleBoostClassifier`.
pub mod gentle_boost_classifier;


pub use trained_model::{Strategy, TrainedModel};
pub use gentle_boost_classifier::GentleBoostClassifier;
