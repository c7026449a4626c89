//! Provides the boosted model, its rules, and its text format.

/// Provides `Classifier` trait.
pub mod core;

/// A threshold rule.
pub mod rule;

/// An additive sequence of rules.
pub mod model;

/// Render and parse the human-readable model format.
pub mod text_format;


pub use self::core::Classifier;
pub use self::rule::Rule;
pub use self::model::Model;
pub use self::text_format::{
    render_model,
    render_one_vs_all,
    parse_model,
    parse_one_vs_all,
};
