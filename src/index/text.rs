use std::collections::HashMap;

use crate::analysis::analyzer::FullTextAnalyzer;
use crate::analysis::content::Content;
use crate::analysis::tokenizer::tokenize;
use crate::core::error::Result;
use crate::core::types::DocId;
use crate::index::keyword::FieldStats;
use crate::query::results::{PostingResult, TermFreqResult};

/// Per (term, doc) position → successor-termId map. The value recorded at
/// position `p` is the termId of the token at `p+1` in the same document,
/// written as a `0` placeholder at index time and patched in when the next
/// token is processed (see `TextIndex::index`). `0` left unpatched means
/// "no recorded successor" (end of document) — termId `0` is otherwise a
/// legal term, but the phrase walk never needs to distinguish the two: it
/// only ever asks "is the successor here equal to the term I expect next",
/// and an unpatched placeholder can only spuriously match when the
/// expected next term also happens to be termId 0.
type PositionMap = HashMap<u64, usize>;

/// A single field's positional (full-text) inverted index: term → {doc →
/// position map}. The hardest part of the engine — phrase matching is
/// O(matches) rather than O(positions × phrase length) because the
/// successor link lets `phrase_query` reject a starting position with two
/// O(1) lookups instead of walking every position of every term.
#[derive(Debug, Default)]
pub struct TextIndex {
    term_index: HashMap<String, usize>,
    postings: Vec<HashMap<DocId, PositionMap>>,
}

impl TextIndex {
    pub fn new() -> Self {
        TextIndex::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TextIndex {
            term_index: HashMap::with_capacity(capacity),
            postings: Vec::with_capacity(capacity),
        }
    }

    fn term_id(&mut self, term: &str) -> usize {
        if let Some(&id) = self.term_index.get(term) {
            return id;
        }
        let id = self.postings.len();
        self.term_index.insert(term.to_string(), id);
        self.postings.push(HashMap::new());
        id
    }

    pub fn index(&mut self, doc: DocId, content: Content) -> Result<()> {
        let terms = FullTextAnalyzer.analyze(content)?;
        let mut prev_tid: Option<usize> = None;

        for (j, term) in terms.iter().enumerate() {
            let tid = self.term_id(term);

            if let Some(prev) = prev_tid {
                // patch the successor link the previous token left as a
                // placeholder: it was followed by `tid`, not end-of-doc.
                self.postings[prev]
                    .get_mut(&doc)
                    .expect("previous token's position map was created this call")
                    .insert((j - 1) as u64, tid);
            }

            self.postings[tid]
                .entry(doc)
                .or_default()
                .insert(j as u64, 0);

            prev_tid = Some(tid);
        }
        Ok(())
    }

    /// OR-semantics term-frequency match: absent query terms are skipped,
    /// not a failure. Each matching term contributes a zero-padded count
    /// at its query position for every document it occurs in.
    pub fn match_query(&self, query: &str) -> Result<TermFreqResult> {
        let terms = tokenize(query);
        let mut result: HashMap<DocId, Vec<u64>> = HashMap::new();

        for (i, term) in terms.iter().enumerate() {
            let Some(&tid) = self.term_index.get(term) else {
                continue;
            };
            for (doc, posmap) in &self.postings[tid] {
                let counts = result.entry(*doc).or_default();
                while counts.len() < i {
                    counts.push(0);
                }
                counts.push(posmap.len() as u64);
            }
        }

        Ok(TermFreqResult(result))
    }

    /// Exact contiguous phrase match using the successor-link prune.
    /// Returns an empty result (not an error) if any query term is absent
    /// from the dictionary.
    pub fn phrase_query(&self, query: &str) -> Result<PostingResult> {
        let terms = tokenize(query);
        let m = terms.len();
        let mut result: HashMap<DocId, Vec<u64>> = HashMap::new();

        if m == 0 {
            return Ok(PostingResult(result));
        }

        let mut term_ids = Vec::with_capacity(m);
        for term in &terms {
            match self.term_index.get(term) {
                Some(&id) => term_ids.push(id),
                None => return Ok(PostingResult(result)),
            }
        }

        let first = term_ids[0];

        // A single-term "phrase" is just every occurrence of that term —
        // the successor-link walk below only fires for m >= 2.
        if m == 1 {
            for (doc, posmap) in &self.postings[first] {
                if !posmap.is_empty() {
                    result.insert(*doc, posmap.keys().copied().collect());
                }
            }
            for positions in result.values_mut() {
                positions.sort_unstable();
            }
            return Ok(PostingResult(result));
        }

        for (doc, posmap) in &self.postings[first] {
            // quick reject: every term must appear somewhere in this doc
            let mut ok = true;
            for &tid in &term_ids[1..] {
                if !self.postings[tid].contains_key(doc) {
                    ok = false;
                    break;
                }
            }
            if !ok {
                continue;
            }

            'positions: for (&start, &successor) in posmap.iter() {
                if successor != term_ids[1] {
                    continue 'positions;
                }

                for i in 1..m {
                    let tid = term_ids[i];
                    let pos = start + i as u64;
                    let Some(&successor) = self.postings[tid].get(doc).and_then(|p| p.get(&pos))
                    else {
                        continue 'positions;
                    };
                    if i == m - 1 {
                        result.entry(*doc).or_default().push(start);
                    } else if successor != term_ids[i + 1] {
                        continue 'positions;
                    }
                }
            }
        }

        for positions in result.values_mut() {
            positions.sort_unstable();
        }

        Ok(PostingResult(result))
    }

    pub fn stats(&self) -> FieldStats {
        FieldStats {
            term_count: self.term_index.len(),
        }
    }
}
