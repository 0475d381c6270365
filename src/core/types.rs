use serde::{Deserialize, Serialize};

/// Dense document identifier. Equal to the document's position in the
/// owning index's document list — assigned once at registration and never
/// reused or reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u64);

impl DocId {
    pub fn new(id: u64) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id)
    }
}

/// A document known to an index, identified by its caller-supplied URI.
/// Documents are immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub uri: String,
}

impl Document {
    pub fn new(uri: impl Into<String>) -> Self {
        Document { uri: uri.into() }
    }
}
