//! In-memory inverted-index search engine core.
//!
//! Indexing and query evaluation only — HTTP transport, DSL parsing, a
//! CLI, persistence, relevance scoring and aggregation evaluation are all
//! external collaborators and live outside this crate.
//!
//! ```text
//! Engine → Index → (per field) Analyzer → field index (keyword | text)
//! Engine → boolean compositor → (recursive) compositor / leaf evaluator → field index
//! ```

pub mod analysis;
pub mod core;
pub mod engine;
pub mod index;
pub mod query;
pub mod schema;

pub use engine::{Engine, SearchRequest, SearchResponse};
pub use schema::{FieldKind, Schema};
