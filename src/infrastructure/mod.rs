pub mod docstore;
pub mod embeddings;
