//! Article data structures

/// Field text read from one article container, before normalization
///
/// Each string is the concatenated text of the matching element. `author`
/// is `None` when the container has no author block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    /// Publication name block
    pub journal: String,
    /// Header block; contains the date somewhere in its text
    pub header: String,
    /// Title block
    pub title: String,
    /// Author block, if present
    pub author: Option<String>,
    /// Body block
    pub content: String,
}

/// A normalized article ready for export
///
/// Records keep document order and are never modified after normalization.
///
/// # Examples
///
/// ```
/// use europresse_corpus::ArticleRecord;
///
/// let record = ArticleRecord::new("2020-01-03", "Le-Monde", "Titre", "Corps du texte")
///     .with_author("Jean-Dupont");
/// assert_eq!(record.author.as_deref(), Some("Jean-Dupont"));
/// assert!(record.has_author());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArticleRecord {
    /// Publication date, `YYYY-MM-DD`
    pub date: String,
    /// Publication name with spaces replaced by hyphens
    pub journal: String,
    /// Cleaned, hyphenated headline
    pub title: String,
    /// Hyphenated author; absent when the source had no author block
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub author: Option<String>,
    /// Article body as extracted
    pub content: String,
}

impl ArticleRecord {
    /// Create a record without an author
    pub fn new(
        date: impl Into<String>,
        journal: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            journal: journal.into(),
            title: title.into(),
            author: None,
            content: content.into(),
        }
    }

    /// Set the author
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Whether the source article exposed an author block
    pub fn has_author(&self) -> bool {
        self.author.is_some()
    }
}
