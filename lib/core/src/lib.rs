//! # shobai Core
//!
//! Pure, stateless statistics for text and IR experiments.
//!
//! This crate provides:
//!
//! - [`set`] - Jaccard overlap and hit-rate over sets
//! - [`divergence`] - Jensen-Shannon divergence between keyed distributions
//! - [`sparse`] - Magnitude, dot product, cosine similarity and L2 normalization
//!   of keyed sparse vectors
//! - [`ranking`] - Similarity quantization and (I/N)DCG
//! - [`topk`] - Top-k selection backed by a fixed-capacity [`BoundedHeap`]
//!
//! Every function borrows its inputs for the duration of the call and keeps
//! no state, so all of them can be called concurrently.
//!
//! ## Example
//!
//! ```rust
//! use shobai_core::{cosine_similarity, jaccard_overlap, quantize_similarity, top_k};
//! use std::collections::{HashMap, HashSet};
//!
//! let a: HashSet<&str> = ["rust", "ir", "bm25"].into_iter().collect();
//! let b: HashSet<&str> = ["rust", "ir", "ndcg"].into_iter().collect();
//! assert_eq!(jaccard_overlap(&a, &b), 0.5);
//!
//! let v1: HashMap<&str, f64> = [("rust", 2.0), ("ir", 1.0)].into_iter().collect();
//! let v2: HashMap<&str, f64> = [("rust", 4.0), ("ir", 2.0)].into_iter().collect();
//! assert!((cosine_similarity(&v1, &v2) - 1.0).abs() < 1e-12);
//!
//! assert_eq!(quantize_similarity(0.9, 6).unwrap(), 5);
//!
//! let counts: HashMap<&str, u32> = [("the", 40), ("cat", 3), ("sat", 5)].into_iter().collect();
//! let top = top_k(&counts, 2);
//! assert!(top.contains_key("the") && top.contains_key("sat"));
//! ```

pub mod error;
pub mod set;
pub mod divergence;
pub mod sparse;
pub mod ranking;
pub mod topk;

pub use error::{Error, Result};
pub use set::{hit_percent, jaccard_overlap};
pub use divergence::js_divergence;
pub use sparse::{cosine_similarity, dot_product, l2_normalize, l2_normalize_in_place, magnitude};
pub use ranking::{compute_dcg, compute_idcg, compute_ndcg, quantize_similarity};
pub use topk::{top_k, top_k_by, top_k_comparable, BoundedHeap};
