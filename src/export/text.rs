//! Plain text dialect

use std::io::Write;

use crate::{ArticleRecord, Result};

pub(super) fn write_corpus<W: Write>(records: &[ArticleRecord], out: &mut W) -> Result<()> {
    for record in records {
        write!(
            out,
            "Date : {} Journal : {} Title : {}",
            record.date, record.journal, record.title
        )?;
        if let Some(author) = &record.author {
            write!(out, " Auteur : {}", author)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", record.content)?;
    }
    Ok(())
}
