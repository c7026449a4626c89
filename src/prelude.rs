//! Exports the standard boosting algorithms and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    FastGentleBoost,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    GentleStump,
    Stump,
};


pub use crate::hypothesis::{
    Classifier,
    Model,
    Rule,
};


pub use crate::sample::{
    Features,
    LabelMatrix,
    Sample,
};


pub use crate::research::{
    CrossValidation,
    AccuracyCurves,
};


pub use crate::classifier::{
    GentleBoostClassifier,
    Strategy,
    TrainedModel,
};
