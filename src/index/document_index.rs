use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::content::Content;
use crate::core::config::EngineConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::index::field::FieldIndex;
use crate::index::keyword::{FieldStats, KeywordIndex};
use crate::index::registry::DocumentRegistry;
use crate::index::text::TextIndex;
use crate::schema::schema::{FieldKind, Schema};

/// Aggregate statistics for one `Index`: document count plus per-field
/// term counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub document_count: usize,
    pub fields: HashMap<String, FieldStats>,
}

/// One named index: a fixed schema, a document registry, and one field
/// index (keyword or text) per schema field. The schema is set at
/// construction and never mutated afterwards.
pub struct Index {
    schema: Schema,
    registry: DocumentRegistry,
    fields: HashMap<String, FieldIndex>,
}

impl Index {
    /// Builds an index from the raw wire schema shape
    /// (`{field: {"type": "text"|"keyword"}}`, expressed as an ordered
    /// list so duplicate field names are rejected rather than silently
    /// merged). Fails with `UnknownFieldKind`, `MissingFieldKind` or
    /// `FieldAlreadyExists` on a malformed schema.
    pub fn new<I>(raw_schema: I) -> Result<Index>
    where
        I: IntoIterator<Item = (String, HashMap<String, String>)>,
    {
        Index::with_config(raw_schema, EngineConfig::default())
    }

    pub fn with_config<I>(raw_schema: I, config: EngineConfig) -> Result<Index>
    where
        I: IntoIterator<Item = (String, HashMap<String, String>)>,
    {
        let schema = Schema::from_raw(raw_schema)?;
        Ok(Index::from_schema(schema, config))
    }

    /// Builds an index from an already-validated `Schema`. Infallible —
    /// `Schema` construction is where malformed-schema errors surface.
    pub fn from_schema(schema: Schema, config: EngineConfig) -> Index {
        let hint = config.index_capacity_hint;
        let mut fields = HashMap::new();
        for field in schema.field_names() {
            let field_index = match schema.kind_of(field) {
                Some(FieldKind::Text) => FieldIndex::Text(TextIndex::with_capacity(hint)),
                Some(FieldKind::Keyword) => FieldIndex::Keyword(KeywordIndex::with_capacity(hint)),
                None => unreachable!("field_names only yields fields present in the schema"),
            };
            fields.insert(field.to_string(), field_index);
        }
        Index {
            schema,
            registry: DocumentRegistry::with_capacity(hint),
            fields,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn field(&self, name: &str) -> Result<&FieldIndex> {
        self.fields
            .get(name)
            .ok_or_else(|| Error::new(ErrorKind::FieldNotFound, name.to_string()))
    }

    pub fn resolve(&self, doc_id: DocId) -> Result<&str> {
        self.registry.resolve(doc_id)
    }

    /// Registers `uri` and indexes `content` into each named field's
    /// index. Registration failing with `DuplicateUri` leaves nothing
    /// indexed. Once the URI is registered, a later per-field failure
    /// (unknown field, type mismatch, bad stream) leaves the document
    /// registered and whatever fields were indexed before the error
    /// intact — the caller gets the first error, the partial state stays.
    pub fn index(&mut self, uri: impl Into<String>, content: HashMap<String, Content>) -> Result<DocId> {
        let doc_id = self.registry.register(uri)?;
        for (field, value) in content {
            let field_index = self
                .fields
                .get_mut(&field)
                .ok_or_else(|| Error::new(ErrorKind::FieldNotFound, field.clone()))?;
            field_index.index(doc_id, value)?;
        }
        Ok(doc_id)
    }

    pub fn stats(&self) -> Stats {
        Stats {
            document_count: self.registry.len(),
            fields: self
                .fields
                .iter()
                .map(|(name, idx)| (name.clone(), idx.stats()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: &str) -> HashMap<String, String> {
        HashMap::from([("type".to_string(), kind.to_string())])
    }

    fn movie_schema() -> Vec<(String, HashMap<String, String>)> {
        vec![
            ("title".to_string(), spec("text")),
            ("genre".to_string(), spec("keyword")),
        ]
    }

    #[test]
    fn unknown_field_kind_fails_construction() {
        let err = Index::new([("x".to_string(), spec("vector"))]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownFieldKind);
    }

    #[test]
    fn indexing_unknown_field_fails_but_keeps_document_registered() {
        let mut idx = Index::new(movie_schema()).unwrap();
        let content = HashMap::from([("nope".to_string(), Content::Text("x".into()))]);
        let err = idx.index("doc://1", content).unwrap_err();
        assert_eq!(err.kind, ErrorKind::FieldNotFound);
        assert_eq!(idx.stats().document_count, 1);
        assert_eq!(idx.resolve(DocId::new(0)).unwrap(), "doc://1");
    }

    #[test]
    fn duplicate_uri_fails_and_leaves_first_document_intact() {
        let mut idx = Index::new(movie_schema()).unwrap();
        idx.index("doc://1", HashMap::from([("title".to_string(), Content::Text("a".into()))]))
            .unwrap();
        let err = idx
            .index("doc://1", HashMap::from([("title".to_string(), Content::Text("b".into()))]))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateUri);
        assert_eq!(idx.stats().document_count, 1);
    }

    #[test]
    fn stats_report_document_count_and_per_field_term_counts() {
        let mut idx = Index::new(movie_schema()).unwrap();
        idx.index(
            "doc://1",
            HashMap::from([
                ("title".to_string(), Content::Text("the shawshank redemption".into())),
                ("genre".to_string(), Content::Strings(vec!["drama".into()])),
            ]),
        )
        .unwrap();
        let stats = idx.stats();
        assert_eq!(stats.document_count, 1);
        assert_eq!(stats.fields["title"], FieldStats { term_count: 3 });
        assert_eq!(stats.fields["genre"], FieldStats { term_count: 1 });
    }
}
