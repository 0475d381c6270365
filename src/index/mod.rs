pub mod document_index;
pub mod field;
pub mod keyword;
pub mod registry;
pub mod text;

pub use document_index::{Index, Stats};
pub use field::FieldIndex;
pub use keyword::{FieldStats, KeywordIndex};
pub use registry::DocumentRegistry;
pub use text::TextIndex;
