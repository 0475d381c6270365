use std::collections::HashMap;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, Document};

/// The URI ↔ docId bijection for one index, plus the ordered document
/// list. `docId` is always the document's position in that list — assigned
/// once at registration and never reused.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: Vec<Document>,
    uri_to_doc: HashMap<String, DocId>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        DocumentRegistry::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DocumentRegistry {
            documents: Vec::with_capacity(capacity),
            uri_to_doc: HashMap::with_capacity(capacity),
        }
    }

    pub fn register(&mut self, uri: impl Into<String>) -> Result<DocId> {
        let uri = uri.into();
        if self.uri_to_doc.contains_key(&uri) {
            return Err(Error::new(ErrorKind::DuplicateUri, uri));
        }
        let doc_id = DocId::new(self.documents.len() as u64);
        self.uri_to_doc.insert(uri.clone(), doc_id);
        self.documents.push(Document::new(uri));
        Ok(doc_id)
    }

    pub fn resolve(&self, doc_id: DocId) -> Result<&str> {
        self.documents
            .get(doc_id.value() as usize)
            .map(|doc| doc.uri.as_str())
            .ok_or_else(|| Error::new(ErrorKind::DocIdOutOfRange, doc_id.value().to_string()))
    }

    pub fn doc_id_for(&self, uri: &str) -> Option<DocId> {
        self.uri_to_doc.get(uri).copied()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
