use crate::domain::entities::document::Document;
use crate::domain::error::StoreError;
use crate::domain::ports::docstore::{AddableDocstore, Docstore};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryDocstore {
    documents: Mutex<HashMap<String, Document>>,
}

impl InMemoryDocstore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: HashMap<String, Document>) -> Self {
        Self {
            documents: Mutex::new(documents),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.lock().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Docstore for InMemoryDocstore {
    fn search(&self, id: &str) -> Result<Document, StoreError> {
        let documents = self
            .documents
            .lock()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        documents
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::DocumentNotFound(id.to_string()))
    }
}

impl AddableDocstore for InMemoryDocstore {
    fn add(&self, new: HashMap<String, Document>) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        documents.extend(new);
        Ok(())
    }
}
