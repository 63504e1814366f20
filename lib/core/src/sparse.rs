//! Sparse vector operations over keyed weights
//!
//! A sparse vector is any `HashMap<K, V>` whose values convert to `f64`.
//! Keys absent from a map have weight zero.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Euclidean norm of a vector, 0.0 when empty
#[inline]
pub fn magnitude<K, V, S>(vector: &HashMap<K, V, S>) -> f64
where
    V: Copy + Into<f64>,
{
    vector
        .values()
        .map(|&w| {
            let w: f64 = w.into();
            w * w
        })
        .sum::<f64>()
        .sqrt()
}

/// Inner product between two vectors
///
/// Iterates over `small` and looks keys up in `large`, so pass the vector
/// with fewer entries first. The result does not depend on the order.
pub fn dot_product<K, V, S1, S2>(small: &HashMap<K, V, S1>, large: &HashMap<K, V, S2>) -> f64
where
    K: Eq + Hash,
    V: Copy + Into<f64>,
    S2: BuildHasher,
{
    small
        .iter()
        .filter_map(|(key, &w)| large.get(key).map(|&other| w.into() * other.into()))
        .sum()
}

/// Cosine similarity between two vectors
///
/// A zero-magnitude operand is not special-cased: the division follows IEEE
/// semantics and yields NaN (or infinity).
pub fn cosine_similarity<K, V, S1, S2>(small: &HashMap<K, V, S1>, large: &HashMap<K, V, S2>) -> f64
where
    K: Eq + Hash,
    V: Copy + Into<f64>,
    S2: BuildHasher,
{
    let dot = dot_product(small, large);
    let m1 = magnitude(small);
    let m2 = magnitude(large);
    dot / (m1 * m2)
}

/// Get an L2-normalized copy of a vector
pub fn l2_normalize<K, V, S>(vector: &HashMap<K, V, S>) -> Result<HashMap<K, f64>>
where
    K: Eq + Hash + Clone,
    V: Copy + Into<f64>,
{
    if vector.is_empty() {
        return Err(Error::EmptyVector);
    }

    let norm = magnitude(vector);
    Ok(vector
        .iter()
        .map(|(key, &w)| (key.clone(), w.into() / norm))
        .collect())
}

/// Normalize a vector to unit length in place
///
/// The norm is computed once before any weight is touched.
pub fn l2_normalize_in_place<K, S>(vector: &mut HashMap<K, f64, S>) -> Result<()> {
    if vector.is_empty() {
        return Err(Error::EmptyVector);
    }

    let norm = magnitude(&*vector);
    for w in vector.values_mut() {
        *w /= norm;
    }
    Ok(())
}
