use memdex::{AddableDocstore, Docstore, Document, InMemoryDocstore, StoreError};
use serde_json::json;
use std::collections::HashMap;

#[test]
fn test_add_then_search_round_trip() {
    let docstore = InMemoryDocstore::new();
    let mut docs = HashMap::new();
    docs.insert(
        "id-1".to_string(),
        Document::new("hello".to_string(), Some(json!({"k": "v"}))),
    );
    docstore.add(docs).unwrap();

    let doc = docstore.search("id-1").unwrap();
    assert_eq!(doc.page_content, "hello");
    assert_eq!(doc.metadata, json!({"k": "v"}));
    assert_eq!(docstore.len(), 1);
}

#[test]
fn test_missing_id_is_document_not_found() {
    let docstore = InMemoryDocstore::new();
    let err = docstore.search("missing").unwrap_err();
    assert!(matches!(err, StoreError::DocumentNotFound(id) if id == "missing"));
}

#[test]
fn test_with_documents_preseeds_store() {
    let mut docs = HashMap::new();
    docs.insert("0".to_string(), Document::new("seed".to_string(), None));
    let docstore = InMemoryDocstore::with_documents(docs);

    assert!(!docstore.is_empty());
    assert_eq!(docstore.search("0").unwrap().page_content, "seed");
}

#[test]
fn test_document_metadata_defaults_to_empty_object() {
    let doc = Document::new("text".to_string(), None);
    assert_eq!(doc.metadata, json!({}));
}
