//! Ranking-quality metrics and similarity quantization

use crate::error::{Error, Result};

/// Map a similarity in [0, 1] onto a discrete level in [0, num_levels - 1]
///
/// Uses equal-width bins with floor bucketing; a similarity of exactly 1.0
/// falls into the last bin instead of opening a new one. Values sitting on a
/// bin boundary may land in either neighbour because of floating-point
/// rounding.
///
/// # Arguments
/// * `similarity` - Similarity score in [0.0, 1.0]
/// * `num_levels` - Number of discrete levels, at least 2
///
/// # Returns
/// `min(floor(similarity * num_levels), num_levels - 1)`
pub fn quantize_similarity(similarity: f64, num_levels: usize) -> Result<usize> {
    // Written so that NaN fails the range check as well
    if !(0.0..=1.0).contains(&similarity) {
        return Err(Error::SimilarityOutOfRange(similarity));
    }
    if num_levels <= 1 {
        return Err(Error::TooFewLevels(num_levels));
    }

    let level = (similarity * num_levels as f64).floor() as usize;
    Ok(level.min(num_levels - 1))
}

/// Discounted Cumulative Gain at every rank of a relevance vector
///
/// `dcg[0] = rel[0]` and `dcg[i] = dcg[i - 1] + rel[i] / log2(i + 1)`, so
/// each entry is the cumulative gain up to and including that rank.
pub fn compute_dcg(relevance: &[f64]) -> Result<Vec<f64>> {
    if relevance.is_empty() {
        return Err(Error::EmptyRelevance);
    }

    let mut dcg = Vec::with_capacity(relevance.len());
    let mut cumulative = relevance[0];
    dcg.push(cumulative);
    for (i, &rel) in relevance.iter().enumerate().skip(1) {
        cumulative += rel / ((i + 1) as f64).log2();
        dcg.push(cumulative);
    }
    Ok(dcg)
}

/// Ideal DCG: the DCG of the same relevance values sorted in decreasing order
pub fn compute_idcg(relevance: &[f64]) -> Result<Vec<f64>> {
    if relevance.is_empty() {
        return Err(Error::EmptyRelevance);
    }

    let mut ideal = relevance.to_vec();
    ideal.sort_by(|a, b| b.total_cmp(a));
    compute_dcg(&ideal)
}

/// Normalized DCG at every rank, `dcg[i] / idcg[i]`
///
/// Ranks where the ideal gain is zero score 0.0.
pub fn compute_ndcg(relevance: &[f64]) -> Result<Vec<f64>> {
    let dcg = compute_dcg(relevance)?;
    let idcg = compute_idcg(relevance)?;

    Ok(dcg
        .iter()
        .zip(&idcg)
        .map(|(&actual, &ideal)| if ideal == 0.0 { 0.0 } else { actual / ideal })
        .collect())
}
