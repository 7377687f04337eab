//! Word-count line wrapping for TXM content

use std::iter::FusedIterator;
use std::str::SplitWhitespace;

/// Separator placed between wrapped lines
pub const LINE_BREAK: &str = "\n\r";

/// Lazy iterator over lines of at most `width` whitespace-delimited words
///
/// Cloning the iterator restarts from the clone point.
///
/// # Example
///
/// ```
/// use europresse_corpus::export::word_lines;
///
/// let lines: Vec<String> = word_lines("a b c d e", 2).collect();
/// assert_eq!(lines, vec!["a b", "c d", "e"]);
/// ```
#[derive(Debug, Clone)]
pub struct WordLines<'a> {
    words: SplitWhitespace<'a>,
    width: usize,
}

impl Iterator for WordLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut line = String::new();
        for word in self.words.by_ref().take(self.width) {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        (!line.is_empty()).then_some(line)
    }
}

impl FusedIterator for WordLines<'_> {}

/// Split `text` into lines of `width` words (a width of 0 is treated as 1)
pub fn word_lines(text: &str, width: usize) -> WordLines<'_> {
    WordLines {
        words: text.split_whitespace(),
        width: width.max(1),
    }
}

/// Wrap `text` to `width` words per line, joined with [`LINE_BREAK`]
///
/// ```
/// use europresse_corpus::export::wrap_words;
///
/// assert_eq!(wrap_words("a b c d e f g h i j k l", 10), "a b c d e f g h i j\n\rk l");
/// ```
pub fn wrap_words(text: &str, width: usize) -> String {
    word_lines(text, width).collect::<Vec<_>>().join(LINE_BREAK)
}
