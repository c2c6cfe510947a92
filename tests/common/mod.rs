//! Shared test helpers.

use memdex::{EmbeddingProvider, InMemoryDocstore, InputType, MemdexStore, StoreError};
use std::sync::Arc;

/// Maps a handful of known tokens to fixed 2-d vectors so distances are easy
/// to reason about; anything else embeds to the zero vector.
pub struct FixtureProvider;

#[async_trait::async_trait]
impl EmbeddingProvider for FixtureProvider {
    async fn embed(
        &self,
        texts: &[String],
        _input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, StoreError> {
        Ok(texts
            .iter()
            .map(|t| match t.as_str() {
                "one" => vec![1.0, 0.0],
                "two" => vec![0.0, 1.0],
                "three" => vec![1.0, 1.0],
                _ => vec![0.0, 0.0],
            })
            .collect())
    }

    fn dimension(&self) -> usize {
        2
    }
}

/// Maps "a"/"b"/"c" to orthogonal unit vectors, so equal strings are exact
/// matches and distinct strings are equidistant.
pub struct OrthogonalProvider;

#[async_trait::async_trait]
impl EmbeddingProvider for OrthogonalProvider {
    async fn embed(
        &self,
        texts: &[String],
        _input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, StoreError> {
        Ok(texts
            .iter()
            .map(|t| match t.as_str() {
                "a" => vec![1.0, 0.0, 0.0],
                "b" => vec![0.0, 1.0, 0.0],
                "c" => vec![0.0, 0.0, 1.0],
                _ => vec![0.0, 0.0, 0.0],
            })
            .collect())
    }

    fn dimension(&self) -> usize {
        3
    }
}

pub fn setup() -> MemdexStore<InMemoryDocstore> {
    MemdexStore::new(Arc::new(FixtureProvider), InMemoryDocstore::new())
}

pub fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
