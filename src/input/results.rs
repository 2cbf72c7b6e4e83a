use std::borrow::Cow;
use std::io::BufRead;

use crate::config::ParseOptions;
use crate::input::InputError;

/// Target column resolved against the table header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    pub name: String,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Missing,
    Value(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    pub group: &'a str,
    pub measurement: Measurement,
}

/// Drops the line terminator and, when enabled, every double-quote character.
pub fn clean_line<'a>(line: &'a str, options: &ParseOptions) -> Cow<'a, str> {
    let line = line.trim_end_matches(['\n', '\r']);
    if options.strip_quotes && line.contains('"') {
        Cow::Owned(line.replace('"', ""))
    } else {
        Cow::Borrowed(line)
    }
}

/// Reads one raw line into `buf` and checks it is UTF-8. `None` at end of input.
pub fn read_line<'b>(
    reader: &mut dyn BufRead,
    buf: &'b mut Vec<u8>,
    line_no: usize,
) -> Result<Option<&'b str>, InputError> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    std::str::from_utf8(buf)
        .map(Some)
        .map_err(|e| InputError::InvalidUtf8 {
            line: line_no,
            offset: e.valid_up_to(),
        })
}

pub fn read_header(
    reader: &mut dyn BufRead,
    options: &ParseOptions,
) -> Result<Vec<String>, InputError> {
    let mut buf = Vec::new();
    let header_line = read_line(reader, &mut buf, 1)?.ok_or(InputError::EmptyInput)?;
    let header = clean_line(header_line, options);
    Ok(header.split('\t').map(str::to_string).collect())
}

pub fn resolve_column(header: &[String], column: &str) -> Result<ColumnSelection, InputError> {
    let index = header
        .iter()
        .position(|c| c == column)
        .ok_or_else(|| InputError::UnknownColumn {
            column: column.to_string(),
            available: header.to_vec(),
        })?;
    Ok(ColumnSelection {
        name: column.to_string(),
        index,
    })
}

/// Splits a cleaned data line into its group identifier and the selected measurement.
pub fn parse_row<'a>(
    line: &'a str,
    line_no: usize,
    column: &ColumnSelection,
    options: &ParseOptions,
) -> Result<Row<'a>, InputError> {
    let fields: Vec<&str> = line.split('\t').collect();
    let group = fields[0];
    let raw = fields
        .get(column.index)
        .copied()
        .ok_or_else(|| InputError::InvalidTsvRow {
            line: line_no,
            reason: format!(
                "expected at least {} fields, found {}",
                column.index + 1,
                fields.len()
            ),
        })?;

    if raw == options.missing_token {
        return Ok(Row {
            group,
            measurement: Measurement::Missing,
        });
    }

    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::InvalidValue {
            line: line_no,
            column: column.name.clone(),
            value: raw.to_string(),
        })?;
    Ok(Row {
        group,
        measurement: Measurement::Value(value),
    })
}

/// Gene symbols referenced by a group identifier, one per exon identifier.
///
/// `geneA_E1+geneB_E2` yields `geneA` then `geneB`. An exon identifier without a
/// symbol separator is taken whole. Duplicates are kept so callers see one symbol
/// per exon.
pub fn gene_symbols<'a>(
    group: &'a str,
    options: &'a ParseOptions,
) -> impl Iterator<Item = &'a str> + 'a {
    group.split(options.group_separator).map(move |exon| {
        exon.split_once(options.symbol_separator)
            .map_or(exon, |(symbol, _)| symbol)
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/results.rs"]
mod tests;
