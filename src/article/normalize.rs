//! Field normalization
//!
//! Turns the raw text of each field into the canonical form written to the
//! corpus: ISO dates, hyphenated names, cleaned titles.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::warn;

use crate::config::{ConvertConfig, MonthNames, TitlePunctuation};
use crate::{CorpusError, Result};

use super::types::{ArticleRecord, RawArticle};

/// "day month year", e.g. "3 janvier 2020"
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2}) (\w+) ([0-9]{4})").expect("date pattern is valid")
});

/// Characters always removed from titles
const TITLE_STRIPPED: [char; 3] = ['~', '*', '"'];

/// Extract a "day month year" date from `text` and format it as `YYYY-MM-DD`
///
/// The first match in `text` is used; surrounding text is ignored. A day
/// that does not exist in that month is logged and emitted unchanged.
///
/// # Examples
///
/// ```
/// use europresse_corpus::{normalize_date, MonthNames};
///
/// let months = MonthNames::french();
/// assert_eq!(normalize_date("3 janvier 2020", &months).unwrap(), "2020-01-03");
/// assert_eq!(normalize_date("Le Monde, mercredi 25 décembre 2019", &months).unwrap(), "2019-12-25");
/// assert!(normalize_date("pas de date", &months).is_err());
/// ```
pub fn normalize_date(text: &str, months: &MonthNames) -> Result<String> {
    let caps = DATE_PATTERN
        .captures(text)
        .ok_or_else(|| CorpusError::DateFormat(text.trim().to_string()))?;

    // Both groups are ASCII digits of bounded length
    let day: u32 = caps[1]
        .parse()
        .map_err(|_| CorpusError::DateFormat(text.trim().to_string()))?;
    let year: i32 = caps[3]
        .parse()
        .map_err(|_| CorpusError::DateFormat(text.trim().to_string()))?;

    let month = months
        .number(&caps[2])
        .ok_or_else(|| CorpusError::UnknownMonth(caps[2].to_string()))?;

    // Days outside the calendar are kept as written
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        warn!("Date {:?} is not a calendar date", caps[0].to_string());
    }

    Ok(format!("{year:04}-{month:02}-{day:02}"))
}

/// Trim the publication name and replace spaces with hyphens
///
/// ```
/// use europresse_corpus::normalize_journal;
///
/// assert_eq!(normalize_journal("  Le Monde diplomatique \n"), "Le-Monde-diplomatique");
/// ```
pub fn normalize_journal(text: &str) -> String {
    text.trim().replace(' ', "-")
}

/// Clean a headline and replace spaces with hyphens
///
/// With [`TitlePunctuation::Observed`] only `~`, `*` and `"` are removed.
/// With [`TitlePunctuation::Full`] every ASCII punctuation character except
/// the hyphen is removed. Both modes are idempotent.
///
/// ```
/// use europresse_corpus::{normalize_title, TitlePunctuation};
///
/// assert_eq!(
///     normalize_title("La \"réforme\" des retraites, enfin ?", TitlePunctuation::Observed),
///     "La-réforme-des-retraites,-enfin-?"
/// );
/// assert_eq!(
///     normalize_title("La \"réforme\" des retraites, enfin ?", TitlePunctuation::Full),
///     "La-réforme-des-retraites-enfin-"
/// );
/// ```
pub fn normalize_title(text: &str, mode: TitlePunctuation) -> String {
    let stripped: String = match mode {
        TitlePunctuation::Observed => text
            .trim()
            .chars()
            .filter(|c| !TITLE_STRIPPED.contains(c))
            .collect(),
        TitlePunctuation::Full => text
            .trim()
            .chars()
            .filter(|c| *c == '-' || !c.is_ascii_punctuation())
            .collect(),
    };
    stripped.replace(' ', "-")
}

/// Hyphenate an author name and remove asterisks
///
/// ```
/// use europresse_corpus::normalize_author;
///
/// assert_eq!(normalize_author("Jean *Dupont "), "Jean-Dupont");
/// ```
pub fn normalize_author(text: &str) -> String {
    text.trim().replace(' ', "-").replace('*', "")
}

/// Applies the field rules to raw articles
///
/// # Example
///
/// ```
/// use europresse_corpus::{ConvertConfig, Normalizer, RawArticle};
///
/// let normalizer = Normalizer::from_config(&ConvertConfig::default());
/// let raw = RawArticle {
///     journal: "Le Monde".to_string(),
///     header: "Le Monde, vendredi 3 janvier 2020".to_string(),
///     title: "Un titre".to_string(),
///     author: None,
///     content: "Corps.".to_string(),
/// };
/// let record = normalizer.normalize(&raw).unwrap();
/// assert_eq!(record.date, "2020-01-03");
/// assert_eq!(record.journal, "Le-Monde");
/// assert_eq!(record.title, "Un-titre");
/// assert!(record.author.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    months: MonthNames,
    title_punctuation: TitlePunctuation,
}

impl Normalizer {
    /// Create a normalizer with an explicit month table and title mode
    pub fn new(months: MonthNames, title_punctuation: TitlePunctuation) -> Self {
        Self {
            months,
            title_punctuation,
        }
    }

    /// Create a normalizer from a conversion config
    pub fn from_config(config: &ConvertConfig) -> Self {
        Self::new(config.months.clone(), config.title_punctuation)
    }

    /// Normalize one article
    ///
    /// Content is passed through unchanged.
    pub fn normalize(&self, raw: &RawArticle) -> Result<ArticleRecord> {
        let date = normalize_date(&raw.header, &self.months)?;
        if raw.content.trim().is_empty() {
            warn!("Article dated {} has an empty body", date);
        }

        Ok(ArticleRecord {
            date,
            journal: normalize_journal(&raw.journal),
            title: normalize_title(&raw.title, self.title_punctuation),
            author: raw.author.as_deref().map(normalize_author),
            content: raw.content.clone(),
        })
    }

    /// Normalize articles in order, stopping at the first failure
    pub fn normalize_all(&self, raws: &[RawArticle]) -> Result<Vec<ArticleRecord>> {
        raws.iter().map(|raw| self.normalize(raw)).collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(MonthNames::french(), TitlePunctuation::Observed)
    }
}
