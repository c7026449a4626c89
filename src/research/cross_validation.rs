use rand::prelude::*;
use colored::Colorize;
use fixedbitset::FixedBitSet;

use crate::{
    Booster,
    FastGentleBoost,
    GentleStump,
    Sample,

    common::checker,
    common::constants::{DEFAULT_N_FOLDS, DEFAULT_SEED, PRINT_WIDTH},
    error::{BoostError, Result},
};

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::Iterator;

const WIDTH: usize = PRINT_WIDTH;


/// Group-aware cross-validation of `FastGentleBoost`.
///
/// Examples sharing a group key (e.g. the cells of one image)
/// always fall on the same side of a fold split.
/// If all examples share the same key,
/// every example is its own group.
///
/// # Example
/// ```no_run
/// use gentleboost::prelude::*;
///
/// # let sample: Sample = unimplemented!();
/// let groups = vec!["plate1", "plate1", "plate2", "plate2", "plate3", "plate3"];
/// let misclassified = CrossValidation::new(&sample, &groups)
///     .unwrap()
///     .n_folds(3)
///     .seed(777)
///     .verbose(true)
///     .run(20)
///     .unwrap();
///
/// let n_sample = sample.shape().0 as f64;
/// for (round, mis) in misclassified.iter().enumerate() {
///     println!("{} rules: accuracy {}", round + 1, 1.0 - *mis as f64 / n_sample);
/// }
/// ```
pub struct CrossValidation<'a, G> {
    sample: &'a Sample,
    groups: &'a [G],
    n_folds: usize,
    seed: u64,
    verbose: bool,
    progress: Option<Box<dyn FnMut(f64) + 'a>>,
}


impl<'a, G> CrossValidation<'a, G>
    where G: Eq + Hash,
{
    /// Construct a new instance of `CrossValidation`.
    /// `groups` holds one key per example of `sample`.
    #[inline]
    pub fn new(sample: &'a Sample, groups: &'a [G]) -> Result<Self> {
        checker::group_count(sample.shape().0, groups.len())?;
        Ok(Self {
            sample,
            groups,
            n_folds: DEFAULT_N_FOLDS,
            seed: DEFAULT_SEED,
            verbose: false,
            progress: None,
        })
    }


    /// Set the number of folds.
    /// Default value is `5`.
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        checker::n_folds(n_folds);
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling the groups.
    /// Default vaule is `1234`.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints one line per fold.
    /// Default vaule is `false`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Register a function called after every fold
    /// with the fraction of folds done.
    #[inline]
    pub fn progress<F>(mut self, progress: F) -> Self
        where F: FnMut(f64) + 'a
    {
        self.progress = Some(Box::new(progress));
        self
    }


    /// Returns the hold-out masks of the folds.
    pub fn folds(&self) -> GroupFolds {
        let n_sample = self.groups.len();

        let mut ids = HashMap::new();
        let mut group_of = Vec::with_capacity(n_sample);
        for key in self.groups {
            let n_ids = ids.len();
            group_of.push(*ids.entry(key).or_insert(n_ids));
        }
        if ids.len() == 1 {
            group_of = (0..n_sample).collect();
        }
        let n_groups = group_of.iter().max().map_or(0, |g| g + 1);

        let mut members = vec![Vec::new(); n_groups];
        group_of.iter()
            .enumerate()
            .for_each(|(i, &g)| members[g].push(i));

        let mut keys = (0..n_groups).collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(self.seed);
        keys.shuffle(&mut rng);

        GroupFolds {
            n_sample,
            members,
            keys,
            fold_min_size: n_sample as f64 / self.n_folds as f64,
            n_folds: self.n_folds,
            current_fold: 0,
        }
    }


    /// Run `FastGentleBoost` for `n_rounds` rounds on every fold and
    /// returns, for each number of rules `1..=n_rounds`,
    /// the number of misclassified hold-out examples summed over folds.
    ///
    /// A fold that stops early repeats its last predictions
    /// up to `n_rounds`.
    pub fn run(&mut self, n_rounds: usize) -> Result<Vec<usize>> {
        let n_sample = self.sample.shape().0;
        if self.sample.shape().1 == 0 {
            return Err(BoostError::NoFeature);
        }

        let mut misclassified = vec![0usize; n_rounds];
        for (k, hold_out) in self.folds().enumerate() {
            let fold = k + 1;

            let test_ix = hold_out.ones().collect::<Vec<_>>();
            if test_ix.is_empty() {
                return Err(BoostError::EmptyHoldOut { fold });
            }
            let train_ix = (0..n_sample)
                .filter(|&i| !hold_out.contains(i))
                .collect::<Vec<_>>();
            if train_ix.is_empty() {
                return Err(BoostError::EmptyHoldIn { fold });
            }

            let train = self.sample.select(&train_ix);
            let test = self.sample.select(&test_ix);

            let weak_learner = GentleStump::init(&train);
            let mut booster = FastGentleBoost::init(&train)
                .n_rounds(n_rounds)
                .held_out(test.features())?;
            let _ = booster.run(&weak_learner);

            let mut predictions = booster.held_out_predictions().to_vec();
            if let Some(last) = predictions.last().cloned() {
                predictions.resize(n_rounds, last);
            }

            let truth = test.labels().classes();
            misclassified.iter_mut()
                .zip(&predictions)
                .for_each(|(m, predicted)| {
                    *m += predicted.iter()
                        .zip(truth)
                        .filter(|(p, t)| p != t)
                        .count();
                });

            if self.verbose {
                let errors = predictions.last()
                    .map(|predicted| {
                        predicted.iter().zip(truth).filter(|(p, t)| p != t).count()
                    })
                    .unwrap_or(0);
                println!(
                    "{}    {}    {}    {}",
                    format!("  [{: >3}'th fold]", fold).bold().red(),
                    format!("[TRAIN {:>WIDTH$}]", train_ix.len()).bold().green(),
                    format!("[TEST {:>WIDTH$}]", test_ix.len()).bold().yellow(),
                    format!("[MISS {:>WIDTH$}]", errors).bold().cyan(),
                );
            }

            if let Some(progress) = self.progress.as_mut() {
                progress(fold as f64 / self.n_folds as f64);
            }
        }

        Ok(misclassified)
    }
}


/// An iterator over the hold-out masks of a [`CrossValidation`].
///
/// Each fold pops shuffled groups until it holds at least
/// `n_sample / n_folds` examples.
/// Once the groups run out, the remaining folds are empty.
#[derive(Debug, Clone)]
pub struct GroupFolds {
    n_sample: usize,
    members: Vec<Vec<usize>>,
    keys: Vec<usize>,
    fold_min_size: f64,
    n_folds: usize,
    current_fold: usize,
}


impl Iterator for GroupFolds {
    type Item = FixedBitSet;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }
        self.current_fold += 1;

        let mut hold_out = FixedBitSet::with_capacity(self.n_sample);
        let mut size = 0usize;
        while (size as f64) < self.fold_min_size {
            let Some(group) = self.keys.pop() else { break; };
            self.members[group].iter()
                .for_each(|&i| hold_out.insert(i));
            size += self.members[group].len();
        }

        Some(hold_out)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Features, LabelMatrix};

    fn sample(n_sample: usize) -> Sample {
        let rows = (0..n_sample)
            .map(|i| vec![i as f64])
            .collect::<Vec<_>>();
        let classes = (0..n_sample).map(|i| i % 2).collect::<Vec<_>>();
        let features = Features::from_rows(&["x"], &rows).unwrap();
        let labels = LabelMatrix::from_classes(&classes, 2).unwrap();
        Sample::new(features, labels).unwrap()
    }

    #[test]
    fn identical_keys_split_by_example() {
        let sample = sample(6);
        let groups = vec![0; 6];
        let folds = CrossValidation::new(&sample, &groups)
            .unwrap()
            .n_folds(3)
            .folds()
            .collect::<Vec<_>>();
        assert_eq!(folds.len(), 3);
        assert!(folds.iter().all(|f| f.count_ones(..) == 2));
    }

    #[test]
    fn folds_are_disjoint() {
        let sample = sample(7);
        let groups = vec!['a', 'b', 'b', 'c', 'c', 'c', 'd'];
        let folds = CrossValidation::new(&sample, &groups)
            .unwrap()
            .n_folds(2)
            .folds()
            .collect::<Vec<_>>();
        let mut seen = FixedBitSet::with_capacity(7);
        for fold in folds {
            assert!(seen.is_disjoint(&fold));
            seen.union_with(&fold);
        }
    }

    #[test]
    fn group_count_is_checked() {
        let sample = sample(4);
        let groups = vec![1, 2, 3];
        assert!(matches!(
            CrossValidation::new(&sample, &groups),
            Err(BoostError::GroupCount { expected: 4, got: 3 })
        ));
    }

    #[test]
    fn same_seed_same_folds() {
        let sample = sample(10);
        let groups = (0..10).map(|i| i / 2).collect::<Vec<_>>();
        let cv = CrossValidation::new(&sample, &groups).unwrap().seed(42);
        let a = cv.folds().collect::<Vec<_>>();
        let b = cv.folds().collect::<Vec<_>>();
        assert_eq!(a, b);
    }
}
