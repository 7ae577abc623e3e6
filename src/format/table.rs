// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// An ordered table of named columns and data rows.
///
/// Rows are normalized to the header width: short rows are padded with empty
/// cells, over-wide rows are rejected. Cell text is stored as-is after field
/// parsing; emptiness (after trimming) is decided by the tree builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableParseError> {
        if columns.is_empty() {
            return Err(TableParseError::EmptyHeader);
        }

        let width = columns.len();
        let mut normalized = Vec::<Vec<String>>::with_capacity(rows.len());
        for (idx, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(TableParseError::RowTooWide {
                    row_no: idx + 1,
                    cells: row.len(),
                    columns: width,
                });
            }
            row.resize(width, String::new());
            normalized.push(row);
        }

        Ok(Self { columns, rows: normalized })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The diagram title: the header name of column 0.
    pub fn title(&self) -> &str {
        &self.columns[0]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableParseError {
    EmptyHeader,
    EmptyInput,
    UnsupportedFormat { path: String },
    RowTooWide { row_no: usize, cells: usize, columns: usize },
    UnclosedQuote { line_no: usize },
    InvalidJson { message: String },
}

impl fmt::Display for TableParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHeader => f.write_str("table has no columns (empty header)"),
            Self::EmptyInput => f.write_str("input contains no header line"),
            Self::UnsupportedFormat { path } => {
                write!(f, "unsupported table format: {path} (expected .csv, .tsv, or .json)")
            }
            Self::RowTooWide { row_no, cells, columns } => write!(
                f,
                "data row {row_no} has {cells} cells but the header declares {columns} columns"
            ),
            Self::UnclosedQuote { line_no } => {
                write!(f, "unclosed quoted field on line {line_no}")
            }
            Self::InvalidJson { message } => write!(f, "invalid JSON table: {message}"),
        }
    }
}

impl std::error::Error for TableParseError {}

/// Parses `source` as the table format implied by `path`'s extension.
pub fn parse_table(path: &Path, source: &str) -> Result<Table, TableParseError> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    match extension {
        "csv" => parse_delimited(source, ','),
        "tsv" => parse_delimited(source, '\t'),
        "json" => parse_json(source),
        _ => Err(TableParseError::UnsupportedFormat { path: path.display().to_string() }),
    }
}

/// Parses a delimiter-separated table. The first non-blank line is the header.
///
/// Minimal RFC-4180 quoting: a field may be wrapped in `"` with `""` as an
/// escaped quote; quoted fields keep their inner whitespace, unquoted fields
/// are trimmed. Embedded newlines inside quoted fields are not supported.
pub fn parse_delimited(source: &str, delimiter: char) -> Result<Table, TableParseError> {
    let mut columns = None::<Vec<String>>;
    let mut rows = Vec::<Vec<String>>::new();

    for (line_idx, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = split_record(line, delimiter, line_idx + 1)?;
        match columns {
            None => columns = Some(record),
            Some(_) => rows.push(record),
        }
    }

    let columns = columns.ok_or(TableParseError::EmptyInput)?;
    Table::new(columns, rows)
}

fn split_record(
    line: &str,
    delimiter: char,
    line_no: usize,
) -> Result<Vec<String>, TableParseError> {
    let mut fields = Vec::<String>::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut in_quotes = false;

    let finish = |field: &mut String, quoted: &mut bool, fields: &mut Vec<String>| {
        let value = if *quoted { field.clone() } else { field.trim().to_owned() };
        fields.push(value);
        field.clear();
        *quoted = false;
    };

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else if ch == delimiter {
            finish(&mut field, &mut quoted, &mut fields);
        } else if ch == '"' && field.trim().is_empty() && !quoted {
            in_quotes = true;
            quoted = true;
            field.clear();
        } else {
            field.push(ch);
        }
    }

    if in_quotes {
        return Err(TableParseError::UnclosedQuote { line_no });
    }
    finish(&mut field, &mut quoted, &mut fields);

    Ok(fields)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TableDoc {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

/// Parses a JSON table document: `{"columns": [...], "rows": [[...], ...]}`.
///
/// Cells are strings or `null`; `null` becomes an empty cell.
pub fn parse_json(source: &str) -> Result<Table, TableParseError> {
    let doc: TableDoc = serde_json::from_str(source)
        .map_err(|err| TableParseError::InvalidJson { message: err.to_string() })?;

    let rows = doc
        .rows
        .into_iter()
        .map(|row| row.into_iter().map(Option::unwrap_or_default).collect())
        .collect();

    Table::new(doc.columns, rows)
}
