//! Default parameters.

/// Number of boosting rounds used when none is given.
pub const DEFAULT_N_ROUNDS: usize = 20;

/// Number of folds of `CrossValidation` used when none is given.
pub const DEFAULT_N_FOLDS: usize = 5;

/// Seed of the group shuffle in `CrossValidation`.
pub const DEFAULT_SEED: u64 = 1234;

/// Separator line between the sub-models of a one-vs-all model.
pub const ONE_VS_ALL_SEPARATOR: &str = "----";

/// Tolerance used by the debug checks on weight matrices.
pub const SIMPLEX_TOLERANCE: f64 = 1e-5;

/// Repetitions of 2-fold cross-validation in `AccuracyCurves`.
pub const HALF_SPLIT_REPEATS: usize = 10;

/// Number of folds of the fine-grained `AccuracyCurves` run.
pub const FINE_SPLIT_FOLDS: usize = 20;

/// Column width used by the verbose printers.
pub const PRINT_WIDTH: usize = 9;
