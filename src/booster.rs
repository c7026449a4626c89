//! Provides the boosting algorithms.

mod core;

mod fast_gentle_boost;


/// Booster trait
pub use self::core::Booster;

pub use self::fast_gentle_boost::FastGentleBoost;
