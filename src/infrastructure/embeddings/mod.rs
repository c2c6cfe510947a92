pub mod hashed;
pub mod openai;
pub mod voyage;

use crate::domain::ports::embedding::EmbeddingProvider;
use std::sync::Arc;

/// Pick a provider from `MEMDEX_EMBEDDING_PROVIDER` / `_API_KEY` / `_MODEL`.
/// Defaults to the offline hashed provider.
pub fn provider_from_env() -> Arc<dyn EmbeddingProvider> {
    let provider = std::env::var("MEMDEX_EMBEDDING_PROVIDER").unwrap_or_else(|_| "hashed".into());
    let api_key = std::env::var("MEMDEX_EMBEDDING_API_KEY").unwrap_or_default();
    let model = std::env::var("MEMDEX_EMBEDDING_MODEL").ok();

    match provider.as_str() {
        "openai" => Arc::new(openai::OpenAiProvider::new(api_key, model)),
        "voyage" => Arc::new(voyage::VoyageProvider::new(api_key, model, None)),
        _ => Arc::new(hashed::HashedProvider::default()),
    }
}
