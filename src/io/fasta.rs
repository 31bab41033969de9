//! Sequence input as plain text or FASTA.
//!
//! Text without any `>` header is one unnamed record holding every line.
//! With headers, each `>name` line opens a record and the lines until the
//! next header are its sequence. Lines starting with `;` are comments.
//! Sequence text is kept as written; [`Sequence::from_text`] does the
//! filtering.
//!
//! [`Sequence::from_text`]: crate::model::sequence::Sequence::from_text

use std::io::BufRead;

use super::{Format, error::Error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Header text after `>`, or `None` for headerless input.
    pub name: Option<String>,
    pub text: String,
}

pub fn read<R: BufRead>(reader: R) -> Result<Vec<SequenceRecord>, Error> {
    let mut records: Vec<SequenceRecord> = Vec::new();
    let mut header_line = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let ln = i + 1;
        let trimmed = line.trim();

        if trimmed.starts_with(';') {
            continue;
        }

        if let Some(name) = trimmed.strip_prefix('>') {
            close_record(records.last(), header_line)?;
            records.push(SequenceRecord {
                name: Some(name.trim().to_string()),
                text: String::new(),
            });
            header_line = ln;
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }

        match records.last_mut() {
            Some(record) => record.text.push_str(trimmed),
            None => records.push(SequenceRecord {
                name: None,
                text: trimmed.to_string(),
            }),
        }
    }

    close_record(records.last(), header_line)?;
    Ok(records)
}

fn close_record(record: Option<&SequenceRecord>, header_line: usize) -> Result<(), Error> {
    match record {
        Some(r) if r.name.is_some() && r.text.is_empty() => Err(Error::parse(
            Format::Fasta,
            header_line,
            "record has no sequence lines",
        )),
        _ => Ok(()),
    }
}
