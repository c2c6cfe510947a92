pub mod docstore;
pub mod embedding;
