//! Reading translation tables.
//!
//! A table row is `<selector>,<word>[,<extra css>]`. Quoting is not supported:
//! the line is split on every `,` and everything after the second field is
//! joined back together as the extra CSS.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{error::Error, selector::normalize_selector, types::TranslationRecord};

/// Parse translation records from any reader, ignoring the first `skip_lines` lines.
///
/// Blank lines and rows with an empty selector are dropped. Input must be UTF-8.
pub fn from_reader<R: Read>(
    mut reader: R,
    skip_lines: usize,
) -> Result<Vec<TranslationRecord>, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str(&text, skip_lines)
}

/// Parse translation records from a string, ignoring the first `skip_lines` lines.
pub fn from_str(s: &str, skip_lines: usize) -> Result<Vec<TranslationRecord>, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(strip_leading_lines(s, skip_lines).as_bytes());

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        if is_blank_row(&row) {
            continue;
        }
        if let Some(record) = record_from_fields(row.iter()) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Parse translation records from a file.
pub fn read_from<P: AsRef<Path>>(
    path: P,
    skip_lines: usize,
) -> Result<Vec<TranslationRecord>, Error> {
    let file = File::open(path).map_err(Error::Io)?;
    from_reader(BufReader::new(file), skip_lines)
}

/// Like [`read_from`], but a table that cannot be opened or read yields no records.
pub fn read_from_or_empty<P: AsRef<Path>>(path: P, skip_lines: usize) -> Vec<TranslationRecord> {
    let path = path.as_ref();
    match read_from(path, skip_lines) {
        Ok(records) => records,
        Err(e) => {
            tracing::debug!("treating {} as empty: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Drops `count` lines, ending a line at `\r\n`, `\n` or a lone `\r` like the
/// csv reader's default terminator does.
fn strip_leading_lines(s: &str, count: usize) -> &str {
    let mut rest = s;
    for _ in 0..count {
        let Some(end) = rest.find(['\r', '\n']) else {
            return "";
        };
        let after = if rest[end..].starts_with("\r\n") { end + 2 } else { end + 1 };
        rest = &rest[after..];
    }
    rest
}

/// A row whose only field is whitespace counts as a blank line.
fn is_blank_row(row: &csv::StringRecord) -> bool {
    row.len() == 1 && row.get(0).is_some_and(|field| field.trim().is_empty())
}

fn record_from_fields<'a, I>(mut fields: I) -> Option<TranslationRecord>
where
    I: Iterator<Item = &'a str>,
{
    let selector = fields.next().unwrap_or("");
    if selector.is_empty() {
        return None;
    }
    let word = fields.next().unwrap_or("");
    let extra_css = fields.collect::<Vec<_>>().join(",");
    Some(TranslationRecord::new(
        normalize_selector(selector),
        word,
        extra_css,
    ))
}
