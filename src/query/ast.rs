use serde::{Deserialize, Serialize};

/// A single-field, single-term or single-phrase matcher. Each variant names
/// the field(s) it runs against and the capability that field's index must
/// support (see `query::executor` for the capability check).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafQuery {
    Term { field: String, term: String },
    Terms { field: String, terms: Vec<String> },
    Match { field: String, term: String },
    MatchPhrase { field: String, term: String },
    MultiMatch { fields: Vec<String>, term: String },
}

/// A query is either a single leaf matcher or a boolean composition of
/// `must` / `should` / `must_not` / `filter` clauses — never both at once.
/// When `leaf` is set the boolean lists are ignored by the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub leaf: Option<LeafQuery>,
    #[serde(default)]
    pub must: Vec<Query>,
    #[serde(default)]
    pub should: Vec<Query>,
    #[serde(default)]
    pub must_not: Vec<Query>,
    #[serde(default)]
    pub filter: Vec<Query>,
}

impl Query {
    pub fn leaf(leaf: LeafQuery) -> Self {
        Query {
            leaf: Some(leaf),
            ..Default::default()
        }
    }

    pub fn term(field: impl Into<String>, term: impl Into<String>) -> Self {
        Query::leaf(LeafQuery::Term {
            field: field.into(),
            term: term.into(),
        })
    }

    pub fn terms(field: impl Into<String>, terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Query::leaf(LeafQuery::Terms {
            field: field.into(),
            terms: terms.into_iter().map(Into::into).collect(),
        })
    }

    pub fn match_query(field: impl Into<String>, term: impl Into<String>) -> Self {
        Query::leaf(LeafQuery::Match {
            field: field.into(),
            term: term.into(),
        })
    }

    pub fn match_phrase(field: impl Into<String>, term: impl Into<String>) -> Self {
        Query::leaf(LeafQuery::MatchPhrase {
            field: field.into(),
            term: term.into(),
        })
    }

    pub fn multi_match(fields: impl IntoIterator<Item = impl Into<String>>, term: impl Into<String>) -> Self {
        Query::leaf(LeafQuery::MultiMatch {
            fields: fields.into_iter().map(Into::into).collect(),
            term: term.into(),
        })
    }

    pub fn bool_query() -> Self {
        Query::default()
    }

    pub fn with_must(mut self, clause: Query) -> Self {
        self.must.push(clause);
        self
    }

    pub fn with_should(mut self, clause: Query) -> Self {
        self.should.push(clause);
        self
    }

    pub fn with_must_not(mut self, clause: Query) -> Self {
        self.must_not.push(clause);
        self
    }

    pub fn with_filter(mut self, clause: Query) -> Self {
        self.filter.push(clause);
        self
    }
}

/// A terms aggregation bucketed by field value. Parsing follows the wire
/// shape; evaluation is out of scope for this crate — see
/// `engine::Engine::search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsAgg {
    pub field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregation {
    pub terms: Option<TermsAgg>,
}
