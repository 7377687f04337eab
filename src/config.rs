//! Conversion configuration

use std::path::PathBuf;

/// CSS selectors locating an article and its fields in the export
///
/// The defaults match the markup of Europresse HTML exports.
///
/// # Example
///
/// ```
/// use europresse_corpus::Markers;
///
/// let markers = Markers::europresse();
/// assert_eq!(markers.article, "article");
/// assert_eq!(markers.journal, "span.DocPublicationName");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Markers {
    /// Article container
    pub article: String,
    /// Publication name
    pub journal: String,
    /// Header block holding the date string
    pub header: String,
    /// Title block
    pub title: String,
    /// Author block (optional in the document)
    pub author: String,
    /// Article body
    pub content: String,
}

impl Markers {
    /// Selectors used by Europresse exports
    pub fn europresse() -> Self {
        Self {
            article: "article".to_string(),
            journal: "span.DocPublicationName".to_string(),
            header: "span.DocHeader".to_string(),
            title: "p.titreArticleVisu".to_string(),
            author: "div.docAuthors".to_string(),
            content: "div.docOcurrContainer".to_string(),
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::europresse()
    }
}

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Month-name table used to turn "3 janvier 2020" into a month number
///
/// Lookups are case-insensitive and return 1-based indexes (January = 1).
///
/// # Example
///
/// ```
/// use europresse_corpus::MonthNames;
///
/// let months = MonthNames::french();
/// assert_eq!(months.number("décembre"), Some(12));
/// assert_eq!(months.number("Janvier"), Some(1));
/// assert_eq!(months.number("december"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthNames {
    names: Vec<String>,
}

impl MonthNames {
    /// Build a table from twelve month names, January first
    pub fn from_names(names: [&str; 12]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_lowercase()).collect(),
        }
    }

    /// French calendar month names
    pub fn french() -> Self {
        Self::from_names(FRENCH_MONTHS)
    }

    /// English calendar month names
    pub fn english() -> Self {
        Self::from_names(ENGLISH_MONTHS)
    }

    /// Look up a month name, returning its 1-based number
    pub fn number(&self, name: &str) -> Option<u32> {
        let name = name.to_lowercase();
        self.names
            .iter()
            .position(|n| *n == name)
            .map(|i| i as u32 + 1)
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self::french()
    }
}

/// Which punctuation is removed from titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TitlePunctuation {
    /// Strip `~`, `*` and `"` only
    #[default]
    Observed,
    /// Strip every ASCII punctuation character
    Full,
}

/// Settings for one conversion run
///
/// # Example
///
/// ```
/// use europresse_corpus::{ConvertConfig, MonthNames, TitlePunctuation};
///
/// let config = ConvertConfig::new()
///     .with_months(MonthNames::english())
///     .with_title_punctuation(TitlePunctuation::Full)
///     .with_output_dir("out");
/// assert_eq!(config.wrap_width, 10);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvertConfig {
    /// Selectors for the article container and its fields
    #[cfg_attr(feature = "serde", serde(default))]
    pub markers: Markers,

    /// Month-name table for date parsing
    #[cfg_attr(feature = "serde", serde(default))]
    pub months: MonthNames,

    /// Title punctuation stripping mode
    #[cfg_attr(feature = "serde", serde(default))]
    pub title_punctuation: TitlePunctuation,

    /// Words per line in TXM content
    #[cfg_attr(feature = "serde", serde(default = "default_wrap_width"))]
    pub wrap_width: usize,

    /// Directory receiving the corpus file
    #[cfg_attr(feature = "serde", serde(default = "default_output_dir"))]
    pub output_dir: PathBuf,
}

/// Default number of words per TXM line
pub const DEFAULT_WRAP_WIDTH: usize = 10;

#[cfg(feature = "serde")]
fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

#[cfg(feature = "serde")]
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl ConvertConfig {
    /// Europresse markers, French months, observed title cleanup, current directory
    pub fn new() -> Self {
        Self {
            markers: Markers::europresse(),
            months: MonthNames::french(),
            title_punctuation: TitlePunctuation::Observed,
            wrap_width: DEFAULT_WRAP_WIDTH,
            output_dir: PathBuf::from("."),
        }
    }

    /// Replace the structural markers
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Replace the month-name table
    pub fn with_months(mut self, months: MonthNames) -> Self {
        self.months = months;
        self
    }

    /// Set the title punctuation mode
    pub fn with_title_punctuation(mut self, mode: TitlePunctuation) -> Self {
        self.title_punctuation = mode;
        self
    }

    /// Set words per TXM line (values below 1 are treated as 1)
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new()
    }
}
