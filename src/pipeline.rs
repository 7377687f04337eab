//! End-to-end conversion: read, extract, normalize, export

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::article::{ArticleRecord, Normalizer, extract_articles};
use crate::config::ConvertConfig;
use crate::export::{Dialect, export_corpus};
use crate::Result;

/// Read an HTML export into memory
///
/// The file must be UTF-8.
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8(bytes)?)
}

/// Extract and normalize every article of `html`
///
/// Records are returned in document order. Any extraction or normalization
/// failure aborts the whole conversion.
///
/// # Example
///
/// ```
/// use europresse_corpus::{build_corpus, ConvertConfig};
///
/// let html = r#"<article>
///   <span class="DocPublicationName">Le Monde</span>
///   <span class="DocHeader">Le Monde, vendredi 3 janvier 2020</span>
///   <p class="titreArticleVisu rdp__articletitle">Un "titre"</p>
///   <div class="docAuthors">Jean Dupont</div>
///   <div class="docOcurrContainer">Le corps.</div>
/// </article>"#;
///
/// let records = build_corpus(html, &ConvertConfig::default()).unwrap();
/// assert_eq!(records[0].date, "2020-01-03");
/// assert_eq!(records[0].title, "Un-titre");
/// assert_eq!(records[0].author.as_deref(), Some("Jean-Dupont"));
/// ```
pub fn build_corpus(html: &str, config: &ConvertConfig) -> Result<Vec<ArticleRecord>> {
    let raws = extract_articles(html, &config.markers)?;
    let records = Normalizer::from_config(config).normalize_all(&raws)?;
    info!("Built corpus of {} articles", records.len());
    Ok(records)
}

/// Convert the export at `input` and write it in `dialect`
///
/// Returns the path of the corpus file.
pub fn convert_file(
    input: impl AsRef<Path>,
    dialect: Dialect,
    config: &ConvertConfig,
) -> Result<PathBuf> {
    let html = read_document(input)?;
    let records = build_corpus(&html, config)?;
    export_corpus(&records, dialect, config)
}
