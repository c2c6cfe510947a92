use crate::domain::error::StoreError;
use crate::index::matrix::VectorMatrix;

/// Exact nearest-neighbor scan: the `k` rows closest to `query` by squared
/// Euclidean distance, ascending. Equal distances keep ascending row order,
/// so results are deterministic. Returns `min(k, rows)` entries; an empty
/// matrix yields an empty result rather than an error.
pub fn nearest(
    matrix: &VectorMatrix,
    query: &[f32],
    k: usize,
) -> Result<Vec<(usize, f32)>, StoreError> {
    if let Some(dim) = matrix.dimension() {
        if query.len() != dim {
            return Err(StoreError::DimensionMismatch {
                expected: dim,
                got: query.len(),
            });
        }
    }
    if k == 0 || matrix.is_empty() {
        return Ok(Vec::new());
    }

    let mut scored: Vec<(usize, f32)> = matrix
        .iter_rows()
        .enumerate()
        .map(|(i, row)| (i, squared_distance(query, row)))
        .collect();

    // Stable sort keeps row order for equal distances
    scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    Ok(scored)
}

fn squared_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
