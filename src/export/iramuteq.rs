//! Iramuteq dialect
//!
//! Each article opens with a `****` line of starred variables. Asterisks in
//! the body would be read as variables, so they are removed.

use std::io::Write;

use crate::{ArticleRecord, Result};

pub(super) fn write_corpus<W: Write>(records: &[ArticleRecord], out: &mut W) -> Result<()> {
    for record in records {
        write!(out, "**** *date_{} *journal_{}", record.date, record.journal)?;
        if let Some(author) = &record.author {
            write!(out, " *author_{}", author)?;
        }
        writeln!(out, " *title_{}", record.title)?;
        writeln!(out, "{}", record.content.replace('*', ""))?;
    }
    Ok(())
}
