use crate::analysis::content::Content;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::index::keyword::{FieldStats, KeywordIndex};
use crate::index::text::TextIndex;
use crate::query::results::{KeywordResult, PostingResult, TermFreqResult};

/// A per-field index, tagged by the capability it carries. Leaf evaluators
/// dispatch by pattern-matching this enum rather than by a runtime
/// "does this support trait X" check on a trait object — the capability a
/// query needs is baked into the variant it's allowed to match.
pub enum FieldIndex {
    Keyword(KeywordIndex),
    Text(TextIndex),
}

impl FieldIndex {
    pub fn index(&mut self, doc: DocId, content: Content) -> Result<()> {
        match self {
            FieldIndex::Keyword(idx) => idx.index(doc, content),
            FieldIndex::Text(idx) => idx.index(doc, content),
        }
    }

    pub fn stats(&self) -> FieldStats {
        match self {
            FieldIndex::Keyword(idx) => idx.stats(),
            FieldIndex::Text(idx) => idx.stats(),
        }
    }

    pub fn as_keyword(&self, field: &str) -> Result<&KeywordIndex> {
        match self {
            FieldIndex::Keyword(idx) => Ok(idx),
            FieldIndex::Text(_) => Err(capability_mismatch(field, "term/terms")),
        }
    }

    pub fn as_text(&self, field: &str) -> Result<&TextIndex> {
        match self {
            FieldIndex::Text(idx) => Ok(idx),
            FieldIndex::Keyword(_) => Err(capability_mismatch(field, "match/match_phrase")),
        }
    }

    pub fn term_query(&self, field: &str, term: &str) -> Result<KeywordResult> {
        Ok(self.as_keyword(field)?.term_query(term))
    }

    pub fn terms_query(&self, field: &str, terms: &[String]) -> Result<KeywordResult> {
        Ok(self.as_keyword(field)?.terms_query(terms))
    }

    pub fn match_query(&self, field: &str, term: &str) -> Result<TermFreqResult> {
        self.as_text(field)?.match_query(term)
    }

    pub fn phrase_query(&self, field: &str, term: &str) -> Result<PostingResult> {
        self.as_text(field)?.phrase_query(term)
    }
}

fn capability_mismatch(field: &str, capability: &str) -> Error {
    Error::new(
        ErrorKind::CapabilityMismatch,
        format!("field '{field}' does not support {capability} queries"),
    )
}
