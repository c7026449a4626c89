//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and the threshold weak learner.

/// Provides WeakLearner trait.
pub mod core;

/// Optimal threshold on a single column.
pub mod threshold_search;

/// Defines the single-feature stump learner.
pub mod gentle_stump;


pub use self::core::WeakLearner;
pub use self::threshold_search::{search, Split};
pub use self::gentle_stump::{GentleStump, Stump};
