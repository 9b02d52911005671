use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record};

/// Number of leading lines discarded before the data block starts.
pub const HEADER_LINES: usize = 30;

const COLUMNS: [&str; 3] = ["time", "value", "color"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("reading {} failed: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file ends after {found} of {expected} header lines")]
    TruncatedHeader { found: usize, expected: usize },

    #[error("line {line}: expected 3 fields, found {found}")]
    TokenCount { line: usize, found: usize },

    #[error("line {line}: {column} field '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        token: String,
    },
}

impl ReadError {
    /// The source was unavailable, unreadable or too short.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ReadError::Open { .. }
                | ReadError::Io(_)
                | ReadError::ReadFile { .. }
                | ReadError::TruncatedHeader { .. }
        )
    }

    /// A data line was malformed.
    pub fn is_parse(&self) -> bool {
        !self.is_io()
    }

    /// 1-based line number of the offending data line, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ReadError::TokenCount { line, .. } | ReadError::InvalidNumber { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Reads `TIME VALUE COLOR` triples after a fixed-length header.
///
/// The header lines are skipped without looking at them; there is no
/// attempt to detect where the data really starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reader {
    header_lines: usize,
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader {
    pub fn new() -> Self {
        Self::with_header_lines(HEADER_LINES)
    }

    pub fn with_header_lines(header_lines: usize) -> Self {
        Reader { header_lines }
    }

    pub fn header_lines(&self) -> usize {
        self.header_lines
    }

    /// Parse a whole source. The first bad line aborts the read.
    ///
    /// Header lines are skipped as raw bytes, so they may hold any
    /// encoding. `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn read<R: BufRead>(&self, mut source: R) -> Result<Dataset, ReadError> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        let mut lines = Lines { rest: &bytes };

        for found in 0..self.header_lines {
            if lines.next().is_none() {
                return Err(ReadError::TruncatedHeader {
                    found,
                    expected: self.header_lines,
                });
            }
        }

        let mut dataset = Dataset::new();
        for (offset, line) in lines.enumerate() {
            let line_no = self.header_lines + offset + 1;
            // Undecodable bytes end up in a token that fails to parse.
            dataset.push(parse_line(&String::from_utf8_lossy(line), line_no)?);
        }

        log::debug!(
            "parsed {} records after {} header lines",
            dataset.len(),
            self.header_lines
        );
        Ok(dataset)
    }

    /// Open `path` and parse it. The file is closed before returning.
    pub fn read_file(&self, path: &Path) -> Result<Dataset, ReadError> {
        let file = File::open(path).map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = self
            .read(BufReader::new(file))
            .map_err(|e| match e {
                ReadError::Io(source) => ReadError::ReadFile {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })?;
        log::info!("read {} records from {}", dataset.len(), path.display());
        Ok(dataset)
    }
}

/// Splits a buffer into lines the way text-mode files do: `\r\n`, `\n`
/// and `\r` are all terminators, and a final unterminated line counts.
struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(end) = self.rest.iter().position(|&b| b == b'\n' || b == b'\r') else {
            let line = self.rest;
            self.rest = &[];
            return Some(line);
        };
        let line = &self.rest[..end];
        let skip = if self.rest[end..].starts_with(b"\r\n") { 2 } else { 1 };
        self.rest = &self.rest[end + skip..];
        Some(line)
    }
}

/// Parse `source` with the default 30-line header.
pub fn read<R: BufRead>(source: R) -> Result<Dataset, ReadError> {
    Reader::new().read(source)
}

/// Open and parse `path` with the default 30-line header.
pub fn read_file(path: &Path) -> Result<Dataset, ReadError> {
    Reader::new().read_file(path)
}

fn parse_line(line: &str, line_no: usize) -> Result<Record, ReadError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [time, value, color] = tokens[..] else {
        return Err(ReadError::TokenCount {
            line: line_no,
            found: tokens.len(),
        });
    };

    let mut fields = [0.0f64; 3];
    for ((slot, token), column) in fields.iter_mut().zip([time, value, color]).zip(COLUMNS) {
        *slot = token.parse().map_err(|_| ReadError::InvalidNumber {
            line: line_no,
            column,
            token: token.to_string(),
        })?;
    }

    let [time, value, color] = fields;
    Ok(Record { time, value, color })
}
