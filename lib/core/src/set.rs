//! Set-based similarity
//!
//! Both measures are exact: intersection and union sizes are counted, never
//! estimated. An empty operand always scores 0.0 rather than NaN.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Jaccard overlap between two sets
///
/// # Returns
/// `|s1 ∩ s2| / |s1 ∪ s2|`, or 0.0 when either set is empty
pub fn jaccard_overlap<T, S>(s1: &HashSet<T, S>, s2: &HashSet<T, S>) -> f64
where
    T: Eq + Hash,
    S: BuildHasher,
{
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    let intersection = s1.intersection(s2).count();
    // |A ∪ B| = |A| + |B| - |A ∩ B|, same count as materializing the union
    let union = s1.len() + s2.len() - intersection;

    intersection as f64 / union as f64
}

/// Fraction of `source` elements that are also in `target`
///
/// Asymmetric: measures how much of `source` is covered by `target`.
/// Returns 0.0 when either set is empty.
pub fn hit_percent<T, S>(source: &HashSet<T, S>, target: &HashSet<T, S>) -> f64
where
    T: Eq + Hash,
    S: BuildHasher,
{
    if source.is_empty() || target.is_empty() {
        return 0.0;
    }

    let intersection = source.iter().filter(|item| target.contains(*item)).count();
    intersection as f64 / source.len() as f64
}
