//! # shobai
//!
//! Small, reusable numeric and I/O helpers for text and IR experiments.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install shobai
//! shobai overlap a.txt b.txt --stopwords stopwords.txt
//! shobai ndcg 3 2 3 0 1 2
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use shobai::prelude::*;
//! use std::collections::HashMap;
//!
//! let ranked = [3.0, 2.0, 3.0, 0.0, 1.0, 2.0];
//! let dcg = compute_dcg(&ranked).unwrap();
//! let idcg = compute_idcg(&ranked).unwrap();
//! assert!(idcg.last() >= dcg.last());
//!
//! let p: HashMap<&str, f64> = [("a", 0.5), ("b", 0.5)].into_iter().collect();
//! assert_eq!(js_divergence(&p, &p), 0.0);
//! ```
//!
//! ## Crate Structure
//!
//! shobai is composed of two crates:
//!
//! - [`shobai-core`](https://docs.rs/shobai-core) - Set similarity, divergence, sparse vectors,
//!   ranking metrics, top-k selection
//! - [`shobai-io`](https://docs.rs/shobai-io) - Line reader, progress tracker, resource
//!   resolution, stopword and IDF loaders

pub mod text;

// Re-export core
pub use shobai_core::{
    jaccard_overlap, hit_percent,
    js_divergence,
    magnitude, dot_product, cosine_similarity, l2_normalize, l2_normalize_in_place,
    quantize_similarity, compute_dcg, compute_idcg, compute_ndcg,
    top_k, top_k_by, top_k_comparable, BoundedHeap,
    Error, Result,
};

// Re-export I/O
pub use shobai_io::{
    LineReader,
    ProgressReport, ProgressSink, ProgressTracker, TracingSink,
    ResourceLocator,
    count_lines, read_idfs, read_stopwords,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        jaccard_overlap, hit_percent,
        js_divergence,
        magnitude, dot_product, cosine_similarity, l2_normalize, l2_normalize_in_place,
        quantize_similarity, compute_dcg, compute_idcg, compute_ndcg,
        top_k, top_k_by, top_k_comparable, BoundedHeap,
        LineReader, ProgressTracker, TracingSink, ResourceLocator,
    };
}
