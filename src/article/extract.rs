//! Article extraction from an HTML export
//!
//! Walks the parsed document, finds every article container and reads the
//! text of its field blocks. Nothing is normalized here.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::Markers;
use crate::{CorpusError, Result};

use super::types::RawArticle;

/// Compiled form of [`Markers`]
#[derive(Debug)]
struct Selectors {
    article: Selector,
    journal: Selector,
    header: Selector,
    title: Selector,
    author: Selector,
    content: Selector,
}

impl Selectors {
    fn compile(markers: &Markers) -> Result<Self> {
        Ok(Self {
            article: compile(&markers.article)?,
            journal: compile(&markers.journal)?,
            header: compile(&markers.header)?,
            title: compile(&markers.title)?,
            author: compile(&markers.author)?,
            content: compile(&markers.content)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| CorpusError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Concatenated text of the first descendant matching `selector`
fn first_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(|element| element.text().collect())
}

fn required(
    container: ElementRef<'_>,
    selector: &Selector,
    article: usize,
    field: &'static str,
) -> Result<String> {
    first_text(container, selector).ok_or(CorpusError::MissingElement { article, field })
}

/// Extract the raw fields of every article in `html`
///
/// Articles are returned in document order. The first container missing a
/// journal, header, title or content block aborts extraction. A missing
/// author block yields `author: None`.
///
/// # Example
///
/// ```
/// use europresse_corpus::{extract_articles, Markers};
///
/// let html = r#"<article>
///   <span class="DocPublicationName">Le Monde</span>
///   <span class="DocHeader">vendredi 3 janvier 2020</span>
///   <p class="titreArticleVisu rdp__articletitle">Un titre</p>
///   <div class="docOcurrContainer">Le corps.</div>
/// </article>"#;
///
/// let articles = extract_articles(html, &Markers::europresse()).unwrap();
/// assert_eq!(articles.len(), 1);
/// assert_eq!(articles[0].title, "Un titre");
/// assert!(articles[0].author.is_none());
/// ```
pub fn extract_articles(html: &str, markers: &Markers) -> Result<Vec<RawArticle>> {
    let selectors = Selectors::compile(markers)?;
    let document = Html::parse_document(html);

    let mut articles = Vec::new();
    for (index, container) in document.select(&selectors.article).enumerate() {
        let journal = required(container, &selectors.journal, index, "journal")?;
        let header = required(container, &selectors.header, index, "date")?;
        let title = required(container, &selectors.title, index, "title")?;
        let author = first_text(container, &selectors.author);
        let content = required(container, &selectors.content, index, "content")?;

        debug!(
            "Extracted article {}: journal={:?} author={}",
            index,
            journal.trim(),
            author.is_some()
        );

        articles.push(RawArticle {
            journal,
            header,
            title,
            author,
            content,
        });
    }

    debug!("Extracted {} articles", articles.len());
    Ok(articles)
}
