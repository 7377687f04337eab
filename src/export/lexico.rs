//! Lexico3 dialect
//!
//! One `<key=value>` line per field, each terminated by a carriage return,
//! then the body followed by a carriage return.

use std::io::Write;

use crate::{ArticleRecord, Result};

pub(super) fn write_corpus<W: Write>(records: &[ArticleRecord], out: &mut W) -> Result<()> {
    for record in records {
        write!(out, "<date={}>\r", record.date)?;
        write!(out, "<journal={}>\r", record.journal)?;
        write!(out, "<title={}>\r", record.title)?;
        if let Some(author) = &record.author {
            write!(out, "<author={}>\r", author)?;
        }
        write!(out, "{}\r", record.content)?;
    }
    Ok(())
}
