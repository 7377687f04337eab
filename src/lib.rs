#![doc = include_str!("../README.md")]

/// Europresse article extraction and normalization
pub mod article;
mod config;
mod error;
/// Corpus export dialects
pub mod export;
mod pipeline;

pub use article::{
    ArticleRecord, Normalizer, RawArticle, extract_articles, normalize_author, normalize_date,
    normalize_journal, normalize_title,
};
pub use config::{ConvertConfig, DEFAULT_WRAP_WIDTH, Markers, MonthNames, TitlePunctuation};
pub use error::{CorpusError, Result};
pub use export::{Dialect, export_corpus};
pub use pipeline::{build_corpus, convert_file, read_document};
