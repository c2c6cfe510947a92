use crate::domain::error::StoreError;

/// Append-only, row-major matrix of fixed-width vectors. The width is set by
/// the first appended batch; rows are never updated or removed.
#[derive(Debug, Clone, Default)]
pub struct VectorMatrix {
    data: Vec<f32>,
    dim: Option<usize>,
    rows: usize,
}

impl VectorMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append vectors as new rows and return their row indices, contiguous
    /// and in input order. The whole batch is validated before any row is
    /// written, so a width mismatch leaves the matrix untouched.
    pub fn append(&mut self, vectors: &[Vec<f32>]) -> Result<Vec<usize>, StoreError> {
        let Some(first) = vectors.first() else {
            return Ok(Vec::new());
        };
        if first.is_empty() && self.dim.is_none() {
            return Err(StoreError::InvalidInput(
                "cannot index zero-width vectors".into(),
            ));
        }
        let dim = self.dim.unwrap_or(first.len());
        for v in vectors {
            if v.len() != dim {
                return Err(StoreError::DimensionMismatch {
                    expected: dim,
                    got: v.len(),
                });
            }
        }

        self.dim = Some(dim);
        let start = self.rows;
        self.data.reserve(vectors.len() * dim);
        for v in vectors {
            self.data.extend_from_slice(v);
        }
        self.rows += vectors.len();
        Ok((start..self.rows).collect())
    }

    /// Row `i`; callers must pass an index previously returned by `append`.
    pub fn row(&self, i: usize) -> &[f32] {
        let dim = self.dim.unwrap_or(0);
        &self.data[i * dim..(i + 1) * dim]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.dim.unwrap_or(1).max(1))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn dimension(&self) -> Option<usize> {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}
