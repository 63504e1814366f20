//! Top-k selection over keyed scores
//!
//! Selection runs in O(n log k) through [`BoundedHeap`], a fixed-capacity
//! min-heap that keeps the `k` greatest items seen so far and evicts the
//! worst one on overflow. The input is never fully sorted.

use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// Fixed-capacity heap keeping the greatest items pushed into it
#[derive(Debug, Clone)]
pub struct BoundedHeap<T: Ord> {
    // Min-heap: the worst retained item sits on top, ready for eviction
    heap: BinaryHeap<Reverse<T>>,
    capacity: usize,
}

impl<T: Ord> BoundedHeap<T> {
    #[inline]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
        }
    }

    /// Offer an item to the heap
    ///
    /// Returns the item that no longer fits: the evicted worst item, or
    /// `item` itself when it is not better than everything retained.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(item));
            return None;
        }

        match self.heap.peek_mut() {
            Some(mut worst) if item > worst.0 => {
                let evicted = std::mem::replace(&mut worst.0, item);
                // Dropping the PeekMut restores the heap order
                drop(worst);
                Some(evicted)
            }
            _ => Some(item),
        }
    }

    /// The smallest retained item, next in line for eviction
    #[inline]
    pub fn peek_worst(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retained items, best first
    pub fn into_sorted_vec(self) -> Vec<T> {
        // Ascending order of Reverse<T> is descending order of T
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(item)| item)
            .collect()
    }

    /// Retained items in arbitrary order
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_iter().map(|Reverse(item)| item).collect()
    }
}

impl<T: Ord> Extend<T> for BoundedHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// Heap entry ordered by its rank only; keys and values need no ordering
struct Ranked<R, K, V> {
    rank: R,
    key: K,
    value: V,
}

impl<R: Ord, K, V> PartialEq for Ranked<R, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl<R: Ord, K, V> Eq for Ranked<R, K, V> {}

impl<R: Ord, K, V> Ord for Ranked<R, K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl<R: Ord, K, V> PartialOrd for Ranked<R, K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keep the `k` entries whose values rank highest under `rank_fn`
///
/// Ties are broken arbitrarily. With fewer than `k` entries every entry is
/// returned; `k == 0` returns an empty map.
pub fn top_k_by<K, V, S, R, F>(counts: &HashMap<K, V, S>, k: usize, rank_fn: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    R: Ord,
    F: Fn(&V) -> R,
{
    let mut heap = BoundedHeap::new(k.min(counts.len()));
    heap.extend(counts.iter().map(|(key, value)| Ranked {
        rank: rank_fn(value),
        key,
        value,
    }));

    heap.into_vec()
        .into_iter()
        .map(|entry| (entry.key.clone(), entry.value.clone()))
        .collect()
}

/// Keep the `k` entries with the largest numeric values (e.g. term counts)
///
/// NaN ranks above every number.
pub fn top_k<K, V, S>(counts: &HashMap<K, V, S>, k: usize) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Copy + Into<f64>,
{
    top_k_by(counts, k, |&value| OrderedFloat(Into::<f64>::into(value)))
}

/// Keep the `k` entries with the greatest values under their natural order
pub fn top_k_comparable<K, V, S>(counts: &HashMap<K, V, S>, k: usize) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Ord + Clone,
{
    top_k_by(counts, k, V::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    #[test]
    fn test_bounded_heap_keeps_greatest() {
        let mut heap = BoundedHeap::new(3);
        heap.extend([5, 1, 9, 3, 7, 2, 8]);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek_worst(), Some(&7));
        assert_eq!(heap.into_sorted_vec(), vec![9, 8, 7]);
    }

    #[test]
    fn test_bounded_heap_push_reports_eviction() {
        let mut heap = BoundedHeap::new(2);
        assert_eq!(heap.push(4), None);
        assert_eq!(heap.push(6), None);
        assert_eq!(heap.push(5), Some(4));
        assert_eq!(heap.push(1), Some(1));
        // Equal to the worst does not displace it
        assert_eq!(heap.push(5), Some(5));
        assert_eq!(heap.into_sorted_vec(), vec![6, 5]);
    }

    #[test]
    fn test_bounded_heap_zero_capacity() {
        let mut heap = BoundedHeap::new(0);
        assert_eq!(heap.push(1), Some(1));
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), 0);
        assert_eq!(heap.peek_worst(), None);
    }

    #[test]
    fn test_bounded_heap_matches_full_sort() {
        let mut values: Vec<u32> = (0..500).collect();
        values.shuffle(&mut rand::rng());

        let mut heap = BoundedHeap::new(25);
        heap.extend(values.iter().copied());

        let expected: Vec<u32> = (475..500).rev().collect();
        assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn test_top_k() {
        let mut map = HashMap::new();
        map.insert("one", 1.0);
        map.insert("two", 2.0);
        map.insert("three", 3.0);

        let top = top_k(&map, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top.get("two"), Some(&2.0));
        assert_eq!(top.get("three"), Some(&3.0));
    }

    #[test]
    fn test_top_k_integer_counts() {
        let counts: HashMap<String, u32> = [("the", 120), ("cat", 4), ("sat", 9), ("mat", 2)]
            .into_iter()
            .map(|(term, count)| (term.to_string(), count))
            .collect();

        let top = top_k(&counts, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top["the"], 120);
        assert_eq!(top["sat"], 9);
    }

    #[test]
    fn test_top_k_larger_than_input() {
        let map: HashMap<&str, f64> = [("a", 1.0), ("b", 0.5)].into_iter().collect();
        assert_eq!(top_k(&map, 10), map);
    }

    #[test]
    fn test_top_k_zero() {
        let map: HashMap<&str, f64> = [("a", 1.0)].into_iter().collect();
        assert!(top_k(&map, 0).is_empty());
    }

    #[test]
    fn test_top_k_comparable() {
        let mut map = HashMap::new();
        map.insert("one", "a");
        map.insert("two", "aa");
        map.insert("three", "aaa");

        let top = top_k_comparable(&map, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top.get("three"), Some(&"aaa"));
    }

    #[test]
    fn test_top_k_by_custom_rank() {
        let map: HashMap<&str, i32> = [("a", -5), ("b", 2), ("c", -1)].into_iter().collect();
        // Rank by absolute value
        let top = top_k_by(&map, 1, |v| v.abs());
        assert_eq!(top.get("a"), Some(&-5));
    }
}
