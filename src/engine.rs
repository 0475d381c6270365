use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::content::Content;
use crate::core::config::EngineConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::index::document_index::{Index, Stats};
use crate::query::ast::{Aggregation, Query};
use crate::query::executor::evaluate;
use crate::query::results::DocSet;

/// A search request at the engine boundary: an optional query and an
/// optional aggregation. Aggregations are parsed into this shape but never
/// evaluated — bucketing and scoring are both out of scope for this crate
/// (see `SPEC_FULL.md` §10).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: Option<Query>,
    pub agg: Option<Aggregation>,
}

/// `{"hits": [docId, ...]}` when a query ran, `{}` when it didn't.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<Vec<DocId>>,
}

/// A named collection of indexes. The only entity with mutable
/// cross-index state — creation, deletion, listing, stats and search all
/// flow through it. Single-threaded with respect to one `Engine`; callers
/// needing concurrent access serialize at this boundary themselves.
#[derive(Default)]
pub struct Engine {
    indexes: HashMap<String, Index>,
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Engine::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Engine {
            indexes: HashMap::new(),
            config,
        }
    }

    pub fn new_index<I>(&mut self, name: impl Into<String>, raw_schema: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, HashMap<String, String>)>,
    {
        let name = name.into();
        if self.indexes.contains_key(&name) {
            return Err(Error::new(ErrorKind::IndexAlreadyExists, name));
        }
        let index = Index::with_config(raw_schema, self.config)?;
        self.indexes.insert(name, index);
        Ok(())
    }

    pub fn delete_index(&mut self, name: &str) -> Result<()> {
        self.indexes
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::new(ErrorKind::IndexNotFound, name.to_string()))
    }

    pub fn get_index(&self, name: &str) -> Result<&Index> {
        self.indexes
            .get(name)
            .ok_or_else(|| Error::new(ErrorKind::IndexNotFound, name.to_string()))
    }

    fn get_index_mut(&mut self, name: &str) -> Result<&mut Index> {
        self.indexes
            .get_mut(name)
            .ok_or_else(|| Error::new(ErrorKind::IndexNotFound, name.to_string()))
    }

    /// Index names in arbitrary order — nothing in this crate relies on a
    /// particular listing order.
    pub fn list(&self) -> Vec<String> {
        self.indexes.keys().cloned().collect()
    }

    pub fn stats(&self, name: &str) -> Result<Stats> {
        Ok(self.get_index(name)?.stats())
    }

    pub fn index(
        &mut self,
        name: &str,
        uri: impl Into<String>,
        content: HashMap<String, Content>,
    ) -> Result<DocId> {
        self.get_index_mut(name)?.index(uri, content)
    }

    pub fn search(&self, name: &str, request: &SearchRequest) -> Result<SearchResponse> {
        let index = self.get_index(name)?;
        match &request.query {
            Some(query) => {
                let result = evaluate(query, index)?;
                Ok(SearchResponse {
                    hits: Some(result.docs()),
                })
            }
            None => Ok(SearchResponse { hits: None }),
        }
    }
}
