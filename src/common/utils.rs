//! This file provides some common functions
//! such as normalization and argmax.
use rayon::prelude::*;


/// Scales `items` so that they sum to `1`.
/// A zero vector is left unchanged.
#[inline(always)]
pub(crate) fn normalize(items: &mut [f64]) {
    let z = items.iter()
        .map(|it| it.abs())
        .sum::<f64>();

    if z == 0f64 { return; }

    items.par_iter_mut()
        .for_each(|item| { *item /= z; });
}


/// Returns the index of the first maximal entry.
/// NaN entries never win.
#[inline(always)]
pub fn argmax(row: &[f64]) -> usize {
    let mut best = 0;
    for (k, v) in row.iter().enumerate().skip(1) {
        if *v > row[best] || row[best].is_nan() {
            best = k;
        }
    }
    best
}


/// Returns the index of the first minimal entry.
/// NaN entries never win.
#[inline(always)]
pub(crate) fn argmin(items: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in items.iter().enumerate().skip(1) {
        if *v < items[best] || items[best].is_nan() {
            best = i;
        }
    }
    best
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_prefers_first() {
        assert_eq!(argmax(&[0.5, 1.0, 1.0]), 1);
        assert_eq!(argmax(&[f64::NAN, -1.0]), 1);
    }

    #[test]
    fn argmin_prefers_first() {
        assert_eq!(argmin(&[0.5, 0.1, 0.1]), 1);
    }

    #[test]
    fn normalize_to_one() {
        let mut v = vec![1.0, 3.0];
        normalize(&mut v);
        assert_eq!(v, vec![0.25, 0.75]);

        let mut z = vec![0.0, 0.0];
        normalize(&mut z);
        assert_eq!(z, vec![0.0, 0.0]);
    }
}
