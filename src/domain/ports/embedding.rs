use crate::domain::error::StoreError;

#[derive(Debug, Clone, Copy)]
pub enum InputType {
    Document,
    Query,
}

#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of texts. Every vector returned by a provider must have
    /// the same width for the lifetime of a store instance.
    async fn embed(
        &self,
        texts: &[String],
        input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, StoreError>;

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, StoreError> {
        let mut vectors = self.embed(&[text.to_string()], InputType::Query).await?;
        vectors
            .pop()
            .ok_or_else(|| StoreError::Embedding("provider returned no embedding".into()))
    }

    fn dimension(&self) -> usize;
}
