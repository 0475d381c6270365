use std::io::Read;

use crate::analysis::content::Content;
use crate::analysis::tokenizer::tokenize;
use crate::core::error::{Error, ErrorKind, Result};

/// Normalizes inbound content for a `text` field into a token sequence.
///
/// Accepts a plain string or a byte stream (read to EOF and dropped on
/// every exit path — the `Box<dyn Read>` is owned by this call and never
/// escapes it, so Rust's drop glue closes it whether analysis succeeds or
/// fails). Anything else is a `TypeMismatch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullTextAnalyzer;

impl FullTextAnalyzer {
    pub fn analyze(&self, content: Content) -> Result<Vec<String>> {
        match content {
            Content::Text(text) => Ok(tokenize(&text)),
            Content::Stream(mut stream) => {
                let mut buf = String::new();
                stream
                    .read_to_string(&mut buf)
                    .map_err(|e| Error::new(ErrorKind::InputRead, e.to_string()))?;
                Ok(tokenize(&buf))
            }
            Content::Strings(_) => Err(Error::new(
                ErrorKind::TypeMismatch,
                "full-text field requires a string or byte stream",
            )),
        }
    }
}

/// Normalizes inbound content for a `keyword` field into a term sequence.
///
/// A single string becomes a one-element sequence containing the whole
/// string, unsplit. A sequence of strings passes through unchanged.
/// Streams are not supported for keyword fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordAnalyzer;

impl KeywordAnalyzer {
    pub fn analyze(&self, content: Content) -> Result<Vec<String>> {
        match content {
            Content::Text(text) => Ok(vec![text]),
            Content::Strings(terms) => Ok(terms),
            Content::Stream(_) => Err(Error::new(
                ErrorKind::TypeMismatch,
                "keyword field requires a string or a sequence of strings",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn full_text_tokenizes_a_string() {
        let out = FullTextAnalyzer.analyze(Content::Text("a b c".into())).unwrap();
        assert_eq!(out, vec!["a", "b", "c"]);
    }

    #[test]
    fn full_text_reads_a_stream_to_exhaustion() {
        let stream: Box<dyn Read> = Box::new(Cursor::new(b"once upon a time".to_vec()));
        let out = FullTextAnalyzer.analyze(Content::Stream(stream)).unwrap();
        assert_eq!(out, vec!["once", "upon", "a", "time"]);
    }

    #[test]
    fn full_text_rejects_string_sequences() {
        let err = FullTextAnalyzer
            .analyze(Content::Strings(vec!["a".into()]))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
    }

    #[test]
    fn keyword_does_not_tokenize_a_single_string() {
        let out = KeywordAnalyzer.analyze(Content::Text("crime drama".into())).unwrap();
        assert_eq!(out, vec!["crime drama"]);
    }

    #[test]
    fn keyword_passes_through_a_string_sequence() {
        let out = KeywordAnalyzer
            .analyze(Content::Strings(vec!["crime".into(), "drama".into()]))
            .unwrap();
        assert_eq!(out, vec!["crime", "drama"]);
    }

    #[test]
    fn keyword_rejects_streams() {
        let stream: Box<dyn Read> = Box::new(Cursor::new(b"x".to_vec()));
        let err = KeywordAnalyzer.analyze(Content::Stream(stream)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
    }
}
