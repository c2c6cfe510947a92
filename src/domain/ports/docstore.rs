use crate::domain::entities::document::Document;
use crate::domain::error::StoreError;
use std::collections::HashMap;

pub trait Docstore: Send + Sync {
    /// Look up a document by id. Absent ids are `DocumentNotFound`.
    fn search(&self, id: &str) -> Result<Document, StoreError>;
}

/// Docstores that accept new documents. `MemdexStore::add_texts` is only
/// available for stores built on one of these, so a read-only docstore can
/// never be asked to insert.
pub trait AddableDocstore: Docstore {
    fn add(&self, documents: HashMap<String, Document>) -> Result<(), StoreError>;
}
