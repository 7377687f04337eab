//! Corpus conversion error types

use thiserror::Error;

/// Errors raised while reading, extracting, normalizing or exporting articles
#[derive(Error, Debug)]
pub enum CorpusError {
    /// IO error while reading the export or writing the corpus
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document or rendered corpus is not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A structural marker is not a valid CSS selector
    #[error("Invalid selector {selector:?}: {message}")]
    Selector {
        /// The offending selector text
        selector: String,
        /// Parser message
        message: String,
    },

    /// A required sub-element is absent from an article container
    #[error("Article {article}: missing {field} element")]
    MissingElement {
        /// 0-based position of the article container in the document
        article: usize,
        /// Name of the missing field (journal, date, title, content)
        field: &'static str,
    },

    /// The header block does not contain a "day month year" date
    #[error("No date found in {0:?}")]
    DateFormat(String),

    /// Month name is not part of the active month table
    #[error("Unknown month name: {0}")]
    UnknownMonth(String),

    /// Export format token is not one of lexico, iramuteq, txm, text
    #[error("Unrecognized corpus format: {0}")]
    UnknownDialect(String),

    /// XML serialization failure
    #[error("XML error: {0}")]
    Xml(String),
}

/// Result type alias using CorpusError
pub type Result<T> = std::result::Result<T, CorpusError>;
