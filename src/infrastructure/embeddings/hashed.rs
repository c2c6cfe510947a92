use crate::domain::error::StoreError;
use crate::domain::ports::embedding::{EmbeddingProvider, InputType};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Deterministic offline embedder: each whitespace token is hashed into a
/// bucket of the output vector, then the vector is L2-normalized. No
/// semantic similarity, but identical texts always embed identically, which
/// is all prototyping and tests need.
#[derive(Debug, Clone)]
pub struct HashedProvider {
    dimension: usize,
}

impl HashedProvider {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimension];
        for token in text.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let hash = hasher.finish();
            let bucket = (hash as usize) % self.dimension;
            vector[bucket] += ((hash >> 32) as f32) / (u32::MAX as f32);
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }
        vector
    }
}

impl Default for HashedProvider {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HashedProvider {
    async fn embed(
        &self,
        texts: &[String],
        _input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, StoreError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
