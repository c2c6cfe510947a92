use crate::domain::error::StoreError;
use crate::domain::values::lambda::Lambda;

/// Greedy maximal marginal relevance over a candidate pool.
///
/// Each round picks the remaining candidate maximizing
/// `lambda * cosine(query, c) - (1 - lambda) * max_selected cosine(c, s)`,
/// so the first pick is always the most query-relevant candidate and later
/// picks are penalized for duplicating earlier ones. Ties go to the smallest
/// candidate index. Returns up to `k` candidate indices in selection order.
pub fn maximal_marginal_relevance(
    query: &[f32],
    candidates: &[Vec<f32>],
    k: usize,
    lambda: Lambda,
) -> Result<Vec<usize>, StoreError> {
    for c in candidates {
        if c.len() != query.len() {
            return Err(StoreError::DimensionMismatch {
                expected: query.len(),
                got: c.len(),
            });
        }
    }
    if k == 0 || candidates.is_empty() {
        return Ok(Vec::new());
    }

    let lambda = lambda.value();
    let relevance: Vec<f64> = candidates
        .iter()
        .map(|c| cosine_similarity(query, c))
        .collect();

    let mut selected: Vec<usize> = Vec::with_capacity(k.min(candidates.len()));
    let mut remaining: Vec<usize> = (0..candidates.len()).collect();

    while selected.len() < k && !remaining.is_empty() {
        let mut best_pos = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (pos, &i) in remaining.iter().enumerate() {
            let redundancy = if selected.is_empty() {
                0.0
            } else {
                selected
                    .iter()
                    .map(|&j| cosine_similarity(&candidates[i], &candidates[j]))
                    .fold(f64::NEG_INFINITY, f64::max)
            };
            let score = lambda * relevance[i] - (1.0 - lambda) * redundancy;
            // Strict comparison over ascending indices breaks ties low
            if score > best_score {
                best_score = score;
                best_pos = pos;
            }
        }
        selected.push(remaining.remove(best_pos));
    }

    Ok(selected)
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}
