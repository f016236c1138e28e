//! CSV decoding: one source file in, a lazy sequence of raw records out.

use csv::{Reader, ReaderBuilder, StringRecord};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Result, SourceError};
use crate::schema::TableSchema;
use crate::types::RawRecord;

/// Feeds every byte the CSV reader pulls through a SHA-256 hasher
struct DigestReader<R> {
    inner: R,
    hasher: Sha256,
}

impl<R: Read> Read for DigestReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }
}

/// Streams a header-first, comma-delimited file as [`RawRecord`]s laid out
/// in the order of one table's fields.
///
/// The header is matched against the schema once, when the decoder is
/// built, so a file lacking a column fails before any row is read. The
/// sequence is single pass: once exhausted it cannot be restarted, a second
/// load has to open the file again.
pub struct CsvDecoder<R = File> {
    path: PathBuf,
    reader: Reader<DigestReader<R>>,
    /// Header position of each schema field
    columns: Vec<usize>,
    buf: StringRecord,
    done: bool,
}

impl CsvDecoder<File> {
    pub fn open(path: &Path, schema: &TableSchema) -> Result<Self> {
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(path, file, schema)
    }
}

impl<R: Read> CsvDecoder<R> {
    /// Decode from any reader; `origin` is only used in error messages.
    pub fn from_reader(origin: &Path, rdr: R, schema: &TableSchema) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(DigestReader {
                inner: rdr,
                hasher: Sha256::new(),
            });

        let headers: Vec<String> = reader
            .headers()
            .map_err(|source| SourceError::Decode {
                path: origin.to_path_buf(),
                source,
            })?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let columns = schema.header_positions(&headers)?;

        Ok(Self {
            path: origin.to_path_buf(),
            reader,
            columns,
            buf: StringRecord::new(),
            done: false,
        })
    }

    /// Hex SHA-256 of the bytes read so far, which is the whole file once
    /// the decoder is exhausted.
    pub fn sha256(&self) -> String {
        hex::encode(self.reader.get_ref().hasher.clone().finalize())
    }
}

impl<R: Read> Iterator for CsvDecoder<R> {
    type Item = std::result::Result<RawRecord, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_record(&mut self.buf) {
            Ok(true) => {
                let line = self.buf.position().map(|p| p.line()).unwrap_or_default();
                // Rows always match the header width; the reader rejects ragged ones
                let values = self
                    .columns
                    .iter()
                    .map(|&i| self.buf.get(i).unwrap_or_default().to_string())
                    .collect();
                Some(Ok(RawRecord { line, values }))
            }
            Ok(false) => {
                self.done = true;
                None
            }
            Err(source) => {
                self.done = true;
                Some(Err(SourceError::Decode {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}
