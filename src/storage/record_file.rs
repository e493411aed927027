//! A read-only, line-oriented file of delimited records
//!
//! The [`RecordFile`] is re-read from the start for every query. Lines that
//! cannot be parsed are skipped: a short line or one that is not valid UTF-8
//! is logged as a warning, a bad id only at debug level.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    marker::PhantomData,
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::domain::{ParseError, Record};

/// Failure to read the record file. Both variants end the program.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file could not be opened.
    #[error("failed to open '{}': {source}", path.display())]
    Open {
        /// Location of the file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// Reading a line failed part way through the file.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// Location of the file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

/// A delimited record file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    path: PathBuf,
    delimiter: char,
}

impl RecordFile {
    /// Describes the file at `path` whose fields are separated by `delimiter`.
    #[must_use]
    pub const fn new(path: PathBuf, delimiter: char) -> Self {
        Self { path, delimiter }
    }

    /// Location of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Open`] if the file cannot be opened.
    pub fn open(&self) -> Result<BufReader<File>, SourceError> {
        File::open(&self.path)
            .map(BufReader::new)
            .map_err(|source| SourceError::Open {
                path: self.path.clone(),
                source,
            })
    }

    /// Scans the whole file and collects the records selected by `filter`,
    /// in file order.
    ///
    /// The collection is typically one of the linked lists, whose
    /// `FromIterator` implementation appends each record in turn.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file cannot be opened or read.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load<R, C>(&self, filter: &str) -> Result<C, SourceError>
    where
        R: Record,
        C: FromIterator<R>,
    {
        matching(self.open()?, self.delimiter, filter)
            .collect::<io::Result<C>>()
            .map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })
    }
}

/// Splits `line` into at most `R::FIELDS` fields and parses the record.
///
/// # Errors
///
/// Returns [`ParseError`] if the line has too few fields or a field is
/// invalid.
pub fn parse_line<R: Record>(line: &str, delimiter: char) -> Result<R, ParseError> {
    let fields: Vec<&str> = line.splitn(R::FIELDS, delimiter).collect();
    if fields.len() != R::FIELDS {
        return Err(ParseError::FieldCount {
            expected: R::FIELDS,
            found: fields.len(),
        });
    }
    R::from_fields(&fields)
}

/// Iterates over the records in `reader` that match `filter`.
pub fn matching<R: Record, B: BufRead>(
    reader: B,
    delimiter: char,
    filter: &str,
) -> Matching<'_, R, B> {
    Matching {
        lines: reader.split(b'\n'),
        delimiter,
        filter,
        scanned: 0,
        matched: 0,
        record: PhantomData,
    }
}

/// Iterator returned by [`matching`].
///
/// Yields an error only when the underlying reader fails; unparseable lines,
/// including lines that are not valid UTF-8, are skipped.
#[derive(Debug)]
pub struct Matching<'f, R, B> {
    lines: io::Split<B>,
    delimiter: char,
    filter: &'f str,
    scanned: usize,
    matched: usize,
    record: PhantomData<fn() -> R>,
}

impl<R: Record, B: BufRead> Iterator for Matching<'_, R, B> {
    type Item = io::Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let mut bytes = match line {
                Ok(bytes) => bytes,
                Err(e) => return Some(Err(e)),
            };
            self.scanned += 1;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Skipping line {}: {e}", self.scanned);
                    continue;
                }
            };

            match parse_line::<R>(&line, self.delimiter) {
                Ok(record) if record.matches(self.filter) => {
                    self.matched += 1;
                    return Some(Ok(record));
                }
                Ok(_) => {}
                Err(e @ ParseError::FieldCount { .. }) => {
                    tracing::warn!("Skipping line {}: {e}: {line}", self.scanned);
                }
                Err(e @ ParseError::InvalidId { .. }) => {
                    tracing::debug!("Skipping line {}: {e}", self.scanned);
                }
            }
        }

        tracing::debug!(
            "Scanned {} lines, {} matched '{}'",
            self.scanned,
            self.matched,
            self.filter
        );
        None
    }
}
