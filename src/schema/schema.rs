use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, ErrorKind, Result};

/// The two field kinds an index can declare. Keyword fields are exact-match
/// and unanalyzed beyond their content shape; text fields are tokenized and
/// carry position data for phrase matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Keyword,
}

impl FieldKind {
    fn parse(raw: &str) -> Option<FieldKind> {
        match raw {
            "text" => Some(FieldKind::Text),
            "keyword" => Some(FieldKind::Keyword),
            _ => None,
        }
    }
}

/// A field name → kind mapping, fixed at index creation and never mutated
/// afterwards. Each field name is unique.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: HashMap<String, FieldKind>,
}

impl Schema {
    pub fn new() -> Self {
        Schema {
            fields: HashMap::new(),
        }
    }

    /// Programmatic builder for callers that already know field kinds —
    /// used by tests and by any embedder that isn't going through the raw
    /// `{field: {"type": "..."}}` wire shape.
    pub fn with_field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.insert(name.into(), kind);
        self
    }

    /// Builds a schema from the raw wire shape: an ordered list of
    /// `(field, {"type": "text"|"keyword"})` entries. A list rather than a
    /// map so a duplicate field name can be rejected instead of silently
    /// overwriting the earlier entry.
    pub fn from_raw<I>(fields: I) -> Result<Schema>
    where
        I: IntoIterator<Item = (String, HashMap<String, String>)>,
    {
        let mut schema = Schema::new();
        for (field, spec) in fields {
            if schema.fields.contains_key(&field) {
                return Err(Error::new(ErrorKind::FieldAlreadyExists, field));
            }
            let kind = match spec.get("type") {
                None => return Err(Error::new(ErrorKind::MissingFieldKind, field)),
                Some(raw) => FieldKind::parse(raw).ok_or_else(|| {
                    Error::new(
                        ErrorKind::UnknownFieldKind,
                        format!("field '{field}' declares unknown type '{raw}'"),
                    )
                })?,
            };
            schema.fields.insert(field, kind);
        }
        Ok(schema)
    }

    pub fn kind_of(&self, field: &str) -> Option<FieldKind> {
        self.fields.get(field).copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
