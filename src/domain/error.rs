use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Invalid k: {0}")]
    InvalidK(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// For callers that demand at least one hit from a search; the search
    /// paths themselves return an empty result set on an empty index.
    #[error("Index is empty")]
    EmptyIndex,

    /// A row is mapped to an id the docstore does not know. The index and
    /// docstore have diverged; there is no recovery path.
    #[error("Could not find document for id {0}")]
    DocumentNotFound(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
