//! Corpus export dialects
//!
//! Serializes normalized articles for text-analysis tools:
//! - `lexico`: Lexico3 `<key=value>` headers
//! - `iramuteq`: Iramuteq `****` starred-variable lines
//! - `txm`: TXM XML corpus
//! - `text`: labelled plain text
//!
//! A corpus is fully serialized in memory before its file is created, so a
//! failed export never leaves a partial file behind.

mod iramuteq;
mod lexico;
mod text;
mod txm;
mod wrap;

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::config::{ConvertConfig, DEFAULT_WRAP_WIDTH};
use crate::{ArticleRecord, CorpusError, Result};

pub use self::wrap::{LINE_BREAK, WordLines, word_lines, wrap_words};

/// Output format
///
/// Parsed from the tokens `lexico`, `iramuteq`, `txm` and `text`. Tokens
/// match exactly: case and surrounding whitespace are significant.
///
/// # Example
///
/// ```
/// use europresse_corpus::Dialect;
///
/// let dialect: Dialect = "iramuteq".parse().unwrap();
/// assert_eq!(dialect, Dialect::Iramuteq);
/// assert_eq!(dialect.file_name(), "corpus_Iramuteq.txt");
/// assert!("foo".parse::<Dialect>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// Lexico3
    Lexico,
    /// Iramuteq
    Iramuteq,
    /// TXM XML
    Txm,
    /// Plain text
    Text,
}

impl Dialect {
    /// Every dialect, in prompt order
    pub const ALL: [Dialect; 4] = [Dialect::Lexico, Dialect::Iramuteq, Dialect::Txm, Dialect::Text];

    /// Selection token
    pub fn token(self) -> &'static str {
        match self {
            Dialect::Lexico => "lexico",
            Dialect::Iramuteq => "iramuteq",
            Dialect::Txm => "txm",
            Dialect::Text => "text",
        }
    }

    /// Fixed output file name
    pub fn file_name(self) -> &'static str {
        match self {
            Dialect::Lexico => "corpus_lexico3.txt",
            Dialect::Iramuteq => "corpus_Iramuteq.txt",
            Dialect::Txm => "corpus_TXM.xml",
            Dialect::Text => "corpus_text.txt",
        }
    }

    /// Format name shown to the user
    pub fn label(self) -> &'static str {
        match self {
            Dialect::Lexico => "Lexico3",
            Dialect::Iramuteq => "Iramuteq",
            Dialect::Txm => "TXM",
            Dialect::Text => "textuel simple",
        }
    }

    /// Line printed after a successful export
    pub fn confirmation(self) -> String {
        format!("Corpus exporté au format {} !", self.label())
    }

    /// Serialize `records` into `out`
    ///
    /// `wrap_width` only affects [`Dialect::Txm`].
    pub fn write<W: Write>(
        self,
        records: &[ArticleRecord],
        wrap_width: usize,
        out: &mut W,
    ) -> Result<()> {
        match self {
            Dialect::Lexico => lexico::write_corpus(records, out),
            Dialect::Iramuteq => iramuteq::write_corpus(records, out),
            Dialect::Txm => txm::write_corpus(records, wrap_width, out),
            Dialect::Text => text::write_corpus(records, out),
        }
    }

    /// Serialize `records` into a string using the default TXM width
    ///
    /// ```
    /// use europresse_corpus::{ArticleRecord, Dialect};
    ///
    /// let records = vec![ArticleRecord::new("2020-01-03", "Le-Monde", "Titre", "Corps")];
    /// let text = Dialect::Text.render(&records).unwrap();
    /// assert_eq!(text, "Date : 2020-01-03 Journal : Le-Monde Title : Titre\nCorps\n");
    /// ```
    pub fn render(self, records: &[ArticleRecord]) -> Result<String> {
        self.render_with_width(records, DEFAULT_WRAP_WIDTH)
    }

    /// Serialize `records` into a string
    ///
    /// Every dialect writes UTF-8, so [`CorpusError::Utf8`] is not expected here.
    pub fn render_with_width(self, records: &[ArticleRecord], wrap_width: usize) -> Result<String> {
        let mut buf = Vec::new();
        self.write(records, wrap_width, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Dialect {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.token() == s)
            .ok_or_else(|| CorpusError::UnknownDialect(s.to_string()))
    }
}

/// Write `records` to the dialect's file in `config.output_dir`
///
/// An existing file is overwritten. Returns the path written.
pub fn export_corpus(
    records: &[ArticleRecord],
    dialect: Dialect,
    config: &ConvertConfig,
) -> Result<PathBuf> {
    let body = dialect.render_with_width(records, config.wrap_width)?;
    let path = config.output_dir.join(dialect.file_name());
    fs::write(&path, body)?;

    info!(
        "Exported {} articles as {} to {}",
        records.len(),
        dialect,
        path.display()
    );
    Ok(path)
}
