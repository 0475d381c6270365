pub mod schema;

pub use schema::{FieldKind, Schema};
