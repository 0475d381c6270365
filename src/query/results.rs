use std::collections::{BTreeSet, HashMap};

use crate::core::types::DocId;

/// Every leaf and boolean result exposes a sorted-by-docId projection.
/// Scoring is a non-goal, so this is the only thing query evaluation
/// ultimately needs to agree on.
pub trait DocSet {
    fn docs(&self) -> Vec<DocId>;
}

fn sorted(ids: impl Iterator<Item = DocId>) -> Vec<DocId> {
    let mut v: Vec<DocId> = ids.collect();
    v.sort_unstable();
    v
}

/// `term` / `terms` result: docId → frequency.
///
/// `terms_query`'s union is last-writer-wins by construction (see
/// `index::keyword::KeywordIndex::terms_query`) — callers should treat the
/// frequency here as informational, not authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordResult(pub HashMap<DocId, u64>);

impl KeywordResult {
    pub fn frequency(&self, doc: DocId) -> Option<u64> {
        self.0.get(&doc).copied()
    }
}

impl DocSet for KeywordResult {
    fn docs(&self) -> Vec<DocId> {
        sorted(self.0.keys().copied())
    }
}

/// `match` result: docId → per-query-term match counts, in query order,
/// zero-padded for query terms absent from that document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFreqResult(pub HashMap<DocId, Vec<u64>>);

impl DocSet for TermFreqResult {
    fn docs(&self) -> Vec<DocId> {
        sorted(self.0.keys().copied())
    }
}

/// `match_phrase` result: docId → sorted starting positions of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingResult(pub HashMap<DocId, Vec<u64>>);

impl DocSet for PostingResult {
    fn docs(&self) -> Vec<DocId> {
        sorted(self.0.keys().copied())
    }
}

/// The result of a full (leaf or boolean) query: a plain set of docIds.
/// `multi_match` and the boolean compositor both produce this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult(pub BTreeSet<DocId>);

impl QueryResult {
    pub fn from_docs(docs: impl IntoIterator<Item = DocId>) -> Self {
        QueryResult(docs.into_iter().collect())
    }

    pub fn contains(&self, doc: DocId) -> bool {
        self.0.contains(&doc)
    }

    pub fn insert(&mut self, doc: DocId) {
        self.0.insert(doc);
    }

    pub fn remove(&mut self, doc: &DocId) {
        self.0.remove(doc);
    }

    pub fn retain_intersection(&mut self, other: &QueryResult) {
        self.0.retain(|d| other.contains(*d));
    }

    pub fn extend(&mut self, other: &QueryResult) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl DocSet for QueryResult {
    fn docs(&self) -> Vec<DocId> {
        self.0.iter().copied().collect()
    }
}

impl<T: DocSet> From<&T> for QueryResult {
    fn from(result: &T) -> Self {
        QueryResult::from_docs(result.docs())
    }
}
