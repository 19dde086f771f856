use rand::{Rng, RngCore};

use crate::model::nation::{City, Nation};

/// First-cumulative-exceeds weighted selection: subtract each weight from
/// `roll` in order and select the first index where the running value
/// drops to ≤ 0. With an all-zero weight vector and a roll of 0 this
/// selects index 0, so enumeration order decides ties.
///
/// # Panics
/// Panics if `weights` is empty.
pub(crate) fn weighted_index(weights: &[f64], roll: f64) -> usize {
    assert!(!weights.is_empty(), "weighted_index: empty weight vector");
    let mut remaining = roll;
    for (i, w) in weights.iter().enumerate() {
        remaining -= w;
        if remaining <= 0.0 {
            return i;
        }
    }
    // Floating-point shortfall: the roll exceeded the summed weights by a
    // rounding error. The last candidate takes it.
    weights.len() - 1
}

/// Draw a launch/impact site from a nation's capital and major cities,
/// weighted by list position (capital heaviest).
pub(crate) fn pick_site<'a>(nation: &'a Nation, rng: &mut dyn RngCore) -> &'a City {
    let sites: Vec<&City> = nation.sites().collect();
    let n = sites.len();
    let weights: Vec<f64> = (0..n).map(|i| (n - i) as f64).collect();
    let total: f64 = weights.iter().sum();
    let roll = rng.random_range(0.0..total);
    sites[weighted_index(&weights, roll)]
}
