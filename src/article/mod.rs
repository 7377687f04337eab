//! Europresse article records
//!
//! This module is organized into:
//! - `types`: Raw and normalized article structures
//! - `extract`: Locating article containers and their fields in the HTML export
//! - `normalize`: Canonical date, journal, title and author forms

mod extract;
mod normalize;
mod types;

pub use self::extract::extract_articles;
pub use self::normalize::{
    Normalizer, normalize_author, normalize_date, normalize_journal, normalize_title,
};
pub use self::types::{ArticleRecord, RawArticle};
