//! Error types shared by the whole crate.
//!
//! Numerical degeneracies (zero denominators, tied thresholds)
//! are never errors; they are resolved inside the weak learner.
use polars::prelude::PolarsError;


/// Structural failures while parsing the rule text format.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseError {
    /// A non-blank line does not match
    /// `IF (<feature> > <threshold>, [<alpha>, ...], [<beta>, ...])`.
    #[error("line {line}: malformed rule `{text}`")]
    Format {
        /// 1-based line number inside the parsed block.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// `alpha` and `beta` on one line have different lengths.
    #[error(
        "line {line}: alpha and beta must have the same cardinality \
         in `IF (column > threshold, alpha, beta)`, got {alpha} and {beta}"
    )]
    Cardinality {
        /// 1-based line number inside the parsed block.
        line: usize,
        /// Length of the alpha vector.
        alpha: usize,
        /// Length of the beta vector.
        beta: usize,
    },

    /// A line disagrees with the first line on the number of classes.
    #[error(
        "line {line}: number of classes must remain the same between rules, \
         expected {expected}, got {got}"
    )]
    ClassCount {
        /// 1-based line number inside the parsed block.
        line: usize,
        /// Number of classes of the first rule.
        expected: usize,
        /// Number of classes of this rule.
        got: usize,
    },
}


/// Errors reported by training, scoring and persistence.
#[derive(Debug, thiserror::Error)]
pub enum BoostError {
    /// The label matrix and the value matrix disagree on the number of rows.
    #[error("shape mismatch: {labels} label rows but {values} value rows")]
    ShapeMismatch {
        /// Rows of the label matrix.
        labels: usize,
        /// Rows of the value matrix.
        values: usize,
    },

    /// Two feature tables (or names and columns) disagree
    /// on the number of features.
    #[error("feature count mismatch: expected {expected}, got {got}")]
    FeatureCount {
        /// Expected number of features.
        expected: usize,
        /// Actual number of features.
        got: usize,
    },

    /// A row of the value matrix has a different length than the header.
    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRows {
        /// 0-based row index.
        row: usize,
        /// Expected row length.
        expected: usize,
        /// Actual row length.
        got: usize,
    },

    /// A feature column has a different length than the first one.
    #[error("column `{name}` has {got} values, expected {expected}")]
    RaggedColumns {
        /// Name of the column.
        name: String,
        /// Expected column length.
        expected: usize,
        /// Actual column length.
        got: usize,
    },

    /// Two feature columns share a name.
    #[error("feature `{0}` appears more than once")]
    DuplicateFeature(String),

    /// A feature name is empty or contains whitespace,
    /// so a rule on it cannot be written in the text format.
    #[error("invalid feature name `{0}`: must be non-empty without whitespace")]
    InvalidFeatureName(String),

    /// A label row is not exactly one `+1` with `-1` elsewhere.
    #[error("label row {row} must contain exactly one +1 and -1 elsewhere")]
    InvalidLabelRow {
        /// 0-based row index.
        row: usize,
    },

    /// The number of group keys differs from the number of examples.
    #[error("expected {expected} group keys, got {got}")]
    GroupCount {
        /// Number of examples.
        expected: usize,
        /// Number of group keys.
        got: usize,
    },

    /// A cross-validation fold got no hold-out example.
    #[error("fold {fold} has no hold-out examples")]
    EmptyHoldOut {
        /// 1-based fold number.
        fold: usize,
    },

    /// A cross-validation fold left nothing to train on.
    #[error("fold {fold} has no hold-in examples to train on")]
    EmptyHoldIn {
        /// 1-based fold number.
        fold: usize,
    },

    /// Cross-validation was asked to train on a sample without features.
    #[error("the sample has no feature to train on")]
    NoFeature,

    /// A rule refers to a feature the scored table does not have.
    #[error("unknown feature `{0}`")]
    UnknownFeature(String),

    /// A class index is out of range for the model.
    #[error("class {class} is out of range for {n_class} classes")]
    UnknownClass {
        /// Requested class index.
        class: usize,
        /// Number of classes.
        n_class: usize,
    },

    /// The classifier has no model yet.
    #[error("the classifier is not trained")]
    NotTrained,

    /// A persisted model belongs to the other classifier strategy.
    #[error("the model was built for the {found} strategy, not {expected}")]
    StrategyMismatch {
        /// Strategy of the classifier.
        expected: &'static str,
        /// Strategy stored with the model.
        found: &'static str,
    },

    /// Malformed rule text.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Failure while converting a `polars` frame.
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),

    /// Failure while encoding or decoding a persisted model.
    #[error("model blob error: {0}")]
    Json(#[from] serde_json::Error),
}


/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BoostError>;
