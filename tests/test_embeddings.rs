use memdex::infrastructure::embeddings::hashed::HashedProvider;
use memdex::infrastructure::embeddings::openai::OpenAiProvider;
use memdex::infrastructure::embeddings::provider_from_env;
use memdex::infrastructure::embeddings::voyage::VoyageProvider;
use memdex::{EmbeddingProvider, InputType};

#[tokio::test]
async fn test_hashed_provider_is_deterministic() {
    let provider = HashedProvider::new(64);
    let first = provider
        .embed(&["the quick brown fox".to_string()], InputType::Document)
        .await
        .unwrap();
    let second = provider
        .embed(&["the quick brown fox".to_string()], InputType::Document)
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_hashed_provider_output_width_matches_dimension() {
    let provider = HashedProvider::new(32);
    assert_eq!(provider.dimension(), 32);

    let vectors = provider
        .embed(&["alpha".to_string(), "beta".to_string()], InputType::Document)
        .await
        .unwrap();
    assert_eq!(vectors.len(), 2);
    assert!(vectors.iter().all(|v| v.len() == 32));
}

#[tokio::test]
async fn test_hashed_provider_normalizes_output() {
    let provider = HashedProvider::new(64);
    let vectors = provider
        .embed(&["some words here".to_string()], InputType::Document)
        .await
        .unwrap();
    let norm: f32 = vectors[0].iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 1e-4);
}

#[tokio::test]
async fn test_hashed_provider_distinguishes_texts() {
    let provider = HashedProvider::new(64);
    let vectors = provider
        .embed(
            &["first text".to_string(), "completely different".to_string()],
            InputType::Document,
        )
        .await
        .unwrap();
    assert_ne!(vectors[0], vectors[1]);
}

#[tokio::test]
async fn test_embed_query_returns_single_vector() {
    let provider = HashedProvider::new(16);
    let vector = provider.embed_query("a query").await.unwrap();
    assert_eq!(vector.len(), 16);
}

#[test]
fn test_openai_provider_reports_model_dimension() {
    let small = OpenAiProvider::new(String::new(), None);
    assert_eq!(small.dimension(), 1536);

    let large = OpenAiProvider::new(String::new(), Some("text-embedding-3-large".into()));
    assert_eq!(large.dimension(), 3072);
}

#[test]
fn test_voyage_provider_reports_model_dimension() {
    let lite = VoyageProvider::new(String::new(), None, None);
    assert_eq!(lite.dimension(), 512);

    let full = VoyageProvider::new(String::new(), Some("voyage-3".into()), None);
    assert_eq!(full.dimension(), 1024);
}

#[test]
fn test_provider_from_env_defaults_to_hashed() {
    std::env::remove_var("MEMDEX_EMBEDDING_PROVIDER");
    let provider = provider_from_env();
    assert_eq!(provider.dimension(), 256);
}
