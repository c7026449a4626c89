#![warn(missing_docs)]

//!
//! A crate that provides the Fast Gentle Boosting algorithm
//! for multiclass classification of numeric feature tables.
//!
//! Each round adds one single-feature threshold rule.
//! The rule gives every class an output above the threshold
//! and another at or below it.
//! Both outputs minimize the weighted squared error
//! and are found in closed form by one sorted pass over the column.
//!
//! The crate includes:
//!
//! - [`FastGentleBoost`], the boosting loop, run by [`Booster::run`]
//!   with the [`GentleStump`] weak learner,
//! - [`Model`] and [`Rule`], with the human-readable text format
//!     ```txt
//!     IF (<feature> > <threshold>, [<alpha>, ...], [<beta>, ...])
//!     ```
//! - [`CrossValidation`] and [`AccuracyCurves`],
//!   group-aware cross-validation
//!   that never splits a group between training and testing,
//! - [`GentleBoostClassifier`], a classifier of either
//!   [`Strategy::Multiclass`] or [`Strategy::OneVsAll`]
//!   that can be trained, shown, parsed, saved and loaded.
//!
//! # Example
//! ```no_run
//! use gentleboost::prelude::*;
//!
//! let names = ["area", "intensity"];
//! let rows = vec![
//!     vec![0.0, 0.5], vec![0.1, 0.5],
//!     vec![1.0, 0.0], vec![1.3, 0.1],
//!     vec![1.1, 1.0], vec![1.2, 1.1],
//! ];
//! let features = Features::from_rows(&names, &rows).unwrap();
//! let labels = LabelMatrix::from_classes(&[0, 0, 1, 1, 2, 2], 3).unwrap();
//! let sample = Sample::new(features, labels)
//!     .unwrap()
//!     .with_class_names(&["debris", "mitotic", "interphase"]);
//!
//! let mut classifier = GentleBoostClassifier::new(Strategy::Multiclass);
//! classifier.train(&sample, 2);
//! println!("{}", classifier.show_model().unwrap());
//! ```

pub mod common;
pub mod error;
pub mod sample;
pub mod weak_learner;
pub mod hypothesis;
pub mod booster;
pub mod research;
pub mod classifier;

pub mod prelude;


pub use error::{BoostError, ParseError, Result};

pub use sample::{Feature, Features, LabelMatrix, Sample};

pub use weak_learner::{WeakLearner, GentleStump, Stump};

pub use hypothesis::{Classifier, Model, Rule};

pub use booster::{Booster, FastGentleBoost};

pub use research::{CrossValidation, GroupFolds, AccuracyCurves};

pub use classifier::{GentleBoostClassifier, Strategy, TrainedModel};
