use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::KeywordAnalyzer;
use crate::analysis::content::Content;
use crate::core::error::Result;
use crate::core::types::DocId;
use crate::query::results::KeywordResult;

/// A single field's keyword (exact-match) inverted index: term → {doc →
/// frequency}. `termId` is the insertion order of first occurrence and is
/// never observed outside this struct.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    term_index: HashMap<String, usize>,
    postings: Vec<HashMap<DocId, u64>>,
}

/// Per-field stats reported by `Index::stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStats {
    pub term_count: usize,
}

impl KeywordIndex {
    pub fn new() -> Self {
        KeywordIndex::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        KeywordIndex {
            term_index: HashMap::with_capacity(capacity),
            postings: Vec::with_capacity(capacity),
        }
    }

    pub fn index(&mut self, doc: DocId, content: Content) -> Result<()> {
        let terms = KeywordAnalyzer.analyze(content)?;
        for term in terms {
            match self.term_index.get(&term) {
                Some(&term_id) => {
                    *self.postings[term_id].entry(doc).or_insert(0) += 1;
                }
                None => {
                    let term_id = self.postings.len();
                    self.term_index.insert(term, term_id);
                    self.postings.push(HashMap::from([(doc, 1)]));
                }
            }
        }
        Ok(())
    }

    pub fn term_query(&self, term: &str) -> KeywordResult {
        match self.term_index.get(term) {
            Some(&term_id) => KeywordResult(self.postings[term_id].clone()),
            None => KeywordResult::default(),
        }
    }

    /// Union across `terms`. For a docId matched by more than one term, the
    /// frequency kept is the frequency contributed by whichever term was
    /// merged last — a deliberate quirk inherited from the reference
    /// implementation (`index/index_keyword.go`'s `TermsQuery`), not a sum.
    pub fn terms_query(&self, terms: &[String]) -> KeywordResult {
        let mut result = HashMap::new();
        for term in terms {
            for (doc, freq) in self.term_query(term).0 {
                result.insert(doc, freq);
            }
        }
        KeywordResult(result)
    }

    pub fn stats(&self) -> FieldStats {
        FieldStats {
            term_count: self.term_index.len(),
        }
    }
}
