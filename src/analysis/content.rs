use std::io::Read;

/// The shape of a value an analyzer is asked to turn into terms.
///
/// This is the sum type called for by the field-kind contract: a single
/// string, a sequence of strings (keyword fields only), or a byte stream
/// that is read to exhaustion once and then dropped. Modelling it as an
/// enum rather than `dyn Any` lets each analyzer match on exactly the
/// shapes it understands and reject the rest with `TypeMismatch`.
pub enum Content {
    Text(String),
    Strings(Vec<String>),
    Stream(Box<dyn Read>),
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<Vec<String>> for Content {
    fn from(value: Vec<String>) -> Self {
        Content::Strings(value)
    }
}
