//! Divergence between discrete distributions
//!
//! Distributions are maps from key to a non-negative mass. They do not need
//! to be normalized.

use ahash::AHashMap;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Jensen-Shannon divergence between two distributions
///
/// Builds the mixture `m = (p + q) / 2` over the union of keys, treating a
/// key missing from one side as zero mass, then averages `KL(p, m)` and
/// `KL(q, m)`.
pub fn js_divergence<K, V, S>(p: &HashMap<K, V, S>, q: &HashMap<K, V, S>) -> f64
where
    K: Eq + Hash,
    V: Copy + Into<f64>,
    S: BuildHasher,
{
    let mut m: AHashMap<&K, f64> = AHashMap::with_capacity(p.len().max(q.len()));
    for (key, &mass) in p {
        m.insert(key, mass.into() / 2.0);
    }
    for (key, &mass) in q {
        *m.entry(key).or_insert(0.0) += mass.into() / 2.0;
    }

    (kl_divergence(p, &m) + kl_divergence(q, &m)) / 2.0
}

/// Kullback-Leibler divergence of `pq` from the mixture `m`
///
/// Every key of `pq` must be present in `m`, which holds by construction when
/// `m` is the mixture built in [`js_divergence`]. A missing key panics.
fn kl_divergence<K, V, S>(pq: &HashMap<K, V, S>, m: &AHashMap<&K, f64>) -> f64
where
    K: Eq + Hash,
    V: Copy + Into<f64>,
    S: BuildHasher,
{
    pq.iter()
        .map(|(key, &mass)| {
            let pi: f64 = mass.into();
            let mi = m[&key];
            pi * (pi / mi).ln()
        })
        .sum()
}
