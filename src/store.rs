use crate::domain::entities::document::Document;
use crate::domain::error::StoreError;
use crate::domain::ports::docstore::{AddableDocstore, Docstore};
use crate::domain::ports::embedding::{EmbeddingProvider, InputType};
use crate::domain::values::lambda::Lambda;
use crate::index::matrix::VectorMatrix;
use crate::index::{knn, mmr};
use crate::infrastructure::docstore::in_memory::InMemoryDocstore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Matrix rows and their docstore ids grow together under one lock, so a
/// reader can never observe a row without an id or an id without a row.
struct IndexState {
    matrix: VectorMatrix,
    row_to_id: Vec<String>,
}

/// In-memory vector store: an append-only matrix of embeddings joined to a
/// docstore by generated ids. Insertion needs an `AddableDocstore`; stores
/// built on a read-only `Docstore` only expose the search paths.
pub struct MemdexStore<D: Docstore> {
    embedder: Arc<dyn EmbeddingProvider>,
    docstore: D,
    state: Mutex<IndexState>,
}

impl<D: Docstore> MemdexStore<D> {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, docstore: D) -> Self {
        Self {
            embedder,
            docstore,
            state: Mutex::new(IndexState {
                matrix: VectorMatrix::new(),
                row_to_id: Vec::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.state.lock().map(|s| s.matrix.rows()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dimension(&self) -> Option<usize> {
        self.state.lock().ok().and_then(|s| s.matrix.dimension())
    }

    pub async fn similarity_search(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<Document>, StoreError> {
        let results = self.similarity_search_with_score(query, k).await?;
        Ok(results.into_iter().map(|(doc, _)| doc).collect())
    }

    /// Like `similarity_search`, with the squared Euclidean distance of each
    /// hit attached (smaller is closer).
    pub async fn similarity_search_with_score(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<(Document, f32)>, StoreError> {
        let embedding = self.embedder.embed_query(query).await?;

        let hits: Vec<(String, f32)> = {
            let state = self.lock_state()?;
            knn::nearest(&state.matrix, &embedding, k)?
                .into_iter()
                .map(|(row, distance)| (state.row_to_id[row].clone(), distance))
                .collect()
        };
        tracing::debug!(requested = k, returned = hits.len(), "similarity search");

        let mut results = Vec::with_capacity(hits.len());
        for (id, distance) in hits {
            results.push((self.docstore.search(&id)?, distance));
        }
        Ok(results)
    }

    /// Fetch the `fetch_k` nearest rows, then MMR-select `k` of them that
    /// balance query relevance against redundancy with each other. `lambda`
    /// defaults to 0.5 (equal weight).
    pub async fn max_marginal_relevance_search(
        &self,
        query: &str,
        k: usize,
        fetch_k: usize,
        lambda: Option<f64>,
    ) -> Result<Vec<Document>, StoreError> {
        if fetch_k < k {
            return Err(StoreError::InvalidK(format!(
                "fetch_k ({fetch_k}) must be at least k ({k})"
            )));
        }
        let lambda = match lambda {
            Some(value) => Lambda::new(value).map_err(StoreError::InvalidInput)?,
            None => Lambda::default(),
        };

        let embedding = self.embedder.embed_query(query).await?;

        let ids: Vec<String> = {
            let state = self.lock_state()?;
            let pool = knn::nearest(&state.matrix, &embedding, fetch_k)?;
            let candidates: Vec<Vec<f32>> = pool
                .iter()
                .map(|&(row, _)| state.matrix.row(row).to_vec())
                .collect();
            mmr::maximal_marginal_relevance(&embedding, &candidates, k, lambda)?
                .into_iter()
                .map(|i| state.row_to_id[pool[i].0].clone())
                .collect()
        };
        tracing::debug!(requested = k, fetch_k, selected = ids.len(), "mmr search");

        let mut documents = Vec::with_capacity(ids.len());
        for id in &ids {
            documents.push(self.docstore.search(id)?);
        }
        Ok(documents)
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, IndexState>, StoreError> {
        self.state
            .lock()
            .map_err(|e| StoreError::Internal(e.to_string()))
    }
}

impl<D: AddableDocstore> MemdexStore<D> {
    /// Embed `texts`, append them to the index, and write their documents to
    /// the docstore under fresh UUID ids. Returns the ids in input order.
    ///
    /// Embedding failure and dimension mismatches leave the store untouched;
    /// there is no rollback for a docstore failure after the index has grown.
    pub async fn add_texts(
        &self,
        texts: &[String],
        metadatas: Option<&[serde_json::Value]>,
    ) -> Result<Vec<String>, StoreError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        if let Some(metadatas) = metadatas {
            if metadatas.len() != texts.len() {
                return Err(StoreError::InvalidInput(format!(
                    "got {} metadatas for {} texts",
                    metadatas.len(),
                    texts.len()
                )));
            }
        }

        let embeddings = self.embedder.embed(texts, InputType::Document).await?;
        if embeddings.len() != texts.len() {
            return Err(StoreError::Embedding(format!(
                "provider returned {} embeddings for {} texts",
                embeddings.len(),
                texts.len()
            )));
        }

        let documents: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Document::new(text.clone(), metadatas.map(|m| m[i].clone())))
            .collect();

        let ids: Vec<String> = {
            let mut state = self.lock_state()?;
            state.matrix.append(&embeddings)?;
            let ids: Vec<String> = documents
                .iter()
                .map(|_| uuid::Uuid::new_v4().to_string())
                .collect();
            state.row_to_id.extend(ids.iter().cloned());
            ids
        };

        let by_id: HashMap<String, Document> = ids.iter().cloned().zip(documents).collect();
        self.docstore.add(by_id)?;

        tracing::debug!(added = ids.len(), "added texts to index");
        Ok(ids)
    }
}

impl MemdexStore<InMemoryDocstore> {
    /// Build a store over a fresh in-memory docstore from raw texts.
    pub async fn from_texts(
        texts: &[String],
        metadatas: Option<&[serde_json::Value]>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self, StoreError> {
        let store = Self::new(embedder, InMemoryDocstore::new());
        store.add_texts(texts, metadatas).await?;
        Ok(store)
    }
}
