//! TXM dialect
//!
//! An XML document with a `<corpus>` root and one `<article>` element per
//! record. Fields become attributes; the body is wrapped to a fixed number
//! of words per line.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::{ArticleRecord, CorpusError, Result};

use super::wrap::wrap_words;

fn xml_error(e: impl std::fmt::Display) -> CorpusError {
    CorpusError::Xml(e.to_string())
}

/// Reject characters that XML 1.0 does not allow in documents
///
/// Tab, line feed and carriage return are the only permitted C0 controls.
fn check_xml_chars(field: &str, value: &str) -> Result<()> {
    match value
        .chars()
        .find(|&c| (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r'))
    {
        Some(c) => Err(CorpusError::Xml(format!(
            "{} contains control character U+{:04X}",
            field, c as u32
        ))),
        None => Ok(()),
    }
}

/// Escape element text, keeping carriage returns as character references
///
/// XML readers turn a literal CR into LF, which would lose the line break
/// sequence.
fn escape_text(text: &str) -> String {
    escape(text).replace('\r', "&#13;")
}

pub(super) fn write_corpus<W: Write>(
    records: &[ArticleRecord],
    wrap_width: usize,
    out: &mut W,
) -> Result<()> {
    let mut writer = Writer::new(out);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;
    writer.get_mut().write_all(b"\n")?;

    writer
        .write_event(Event::Start(BytesStart::new("corpus")))
        .map_err(xml_error)?;

    for record in records {
        check_xml_chars("date", &record.date)?;
        check_xml_chars("journal", &record.journal)?;
        check_xml_chars("title", &record.title)?;
        if let Some(author) = &record.author {
            check_xml_chars("author", author)?;
        }
        check_xml_chars("content", &record.content)?;

        let mut article = BytesStart::new("article");
        // push_attribute escapes values
        article.push_attribute(("date", record.date.as_str()));
        article.push_attribute(("journal", record.journal.as_str()));
        article.push_attribute(("titre", record.title.as_str()));
        if let Some(author) = &record.author {
            article.push_attribute(("auteur", author.as_str()));
        }
        writer
            .write_event(Event::Start(article))
            .map_err(xml_error)?;

        let body = escape_text(&wrap_words(&record.content, wrap_width));
        writer
            .write_event(Event::Text(BytesText::from_escaped(body)))
            .map_err(xml_error)?;

        writer
            .write_event(Event::End(BytesEnd::new("article")))
            .map_err(xml_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("corpus")))
        .map_err(xml_error)?;

    Ok(())
}
