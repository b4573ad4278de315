//! flDPnn2 stride report reader
//!
//! # Format
//!
//! flDPnn2 writes one text report for a whole batch of proteins:
//! - a fixed 8-line preamble (tool banner, column legend), then
//! - exactly 5 lines per protein, repeating to end of file:
//!
//! ```text
//! >sp|P12345|EXAMPLE
//! Predicted IDRs: 12-45,80-100
//! M,K,V,...            (residue codes)
//! 1,1,0,...            (per-residue disorder call)
//! 0.91,0.88,0.12,...   (per-residue disorder propensity)
//! ```
//!
//! The reader decodes each 5-line block into a [`DisorderRecord`] with named
//! fields and an explicit block-arity check, rather than slicing the file by
//! line-modulo position. IDR ranges are gap-merged on the way in (see
//! [`crate::intervals::merge_ranges`]).
//!
//! # Tolerant vs strict
//!
//! Predictor reports routinely carry trailing noise, so by default a final
//! block of fewer than 5 lines is dropped and a short preamble simply yields
//! no records. [`StrideOptions::strict`] turns both conditions into errors
//! for callers that want truncated files surfaced.
//!
//! # Example
//!
//! ```no_run
//! use idrtools::formats::stride::DisorderTable;
//!
//! # fn main() -> idrtools::Result<()> {
//! let table = DisorderTable::from_path("fldpnn2.txt")?;
//! for record in table.iter() {
//!     println!("{}: {} residues, {} IDRs",
//!         record.id, record.len(), record.merged_ranges.len());
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{IdrError, Result};
use crate::intervals::{merge_ranges, DEFAULT_MERGE_GAP};
use crate::types::DisorderRecord;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Fixed preamble length of an flDPnn2 report
pub const HEADER_LINES: usize = 8;

/// Lines per protein record
pub const RECORD_LINES: usize = 5;

/// Parsing options for the stride reader
#[derive(Debug, Clone, Copy)]
pub struct StrideOptions {
    /// Error on a short preamble or a trailing partial record instead of
    /// silently tolerating them
    pub strict: bool,
    /// Gap tolerance for IDR range merging
    pub merge_gap: u32,
}

impl Default for StrideOptions {
    fn default() -> Self {
        Self {
            strict: false,
            merge_gap: DEFAULT_MERGE_GAP,
        }
    }
}

/// Streaming reader over the 5-line protein blocks of an flDPnn2 report
///
/// Yields one [`DisorderRecord`] per block. The 8-line preamble is consumed
/// before the first record.
pub struct StrideReportReader<R: BufRead> {
    reader: R,
    options: StrideOptions,
    line_buffer: String,
    line_number: usize,
    header_skipped: bool,
    finished: bool,
}

impl StrideReportReader<BufReader<File>> {
    /// Create a reader from a local file path with default options
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with(path, StrideOptions::default())
    }

    /// Create a reader from a local file path
    pub fn from_path_with<P: AsRef<Path>>(path: P, options: StrideOptions) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader_with(BufReader::new(file), options))
    }
}

impl StrideReportReader<BufReader<MultiGzDecoder<File>>> {
    /// Create a reader from a gzip-compressed report with default options
    pub fn from_gzip_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_gzip_path_with(path, StrideOptions::default())
    }

    /// Create a reader from a gzip-compressed report
    pub fn from_gzip_path_with<P: AsRef<Path>>(path: P, options: StrideOptions) -> Result<Self> {
        let file = File::open(path)?;
        let decoder = MultiGzDecoder::new(file);
        Ok(Self::from_reader_with(BufReader::new(decoder), options))
    }
}

impl<R: BufRead> StrideReportReader<R> {
    /// Create a reader from any buffered reader with default options
    ///
    /// Useful for testing or in-memory sources.
    pub fn from_reader(reader: R) -> Self {
        Self::from_reader_with(reader, StrideOptions::default())
    }

    /// Create a reader from any buffered reader
    pub fn from_reader_with(reader: R, options: StrideOptions) -> Self {
        Self {
            reader,
            options,
            line_buffer: String::with_capacity(1024),
            line_number: 0,
            header_skipped: false,
            finished: false,
        }
    }

    /// Current line number (1-based), for error reporting
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next physical line, trimmed. `Ok(None)` at EOF.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.line_buffer.clear();
        match self.reader.read_line(&mut self.line_buffer)? {
            0 => Ok(None),
            _ => {
                self.line_number += 1;
                Ok(Some(self.line_buffer.trim().to_string()))
            }
        }
    }

    /// Consume the fixed 8-line preamble. Returns false if the input ended
    /// before the preamble did.
    fn skip_header(&mut self) -> Result<bool> {
        for _ in 0..HEADER_LINES {
            if self.read_line()?.is_none() {
                if self.options.strict {
                    return Err(IdrError::InvalidStrideFormat {
                        line: self.line_number,
                        msg: format!(
                            "report ended inside the {}-line preamble",
                            HEADER_LINES
                        ),
                    });
                }
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn read_record(&mut self) -> Result<Option<DisorderRecord>> {
        if self.finished {
            return Ok(None);
        }
        if !self.header_skipped {
            self.header_skipped = true;
            if !self.skip_header()? {
                self.finished = true;
                return Ok(None);
            }
        }

        let mut block: Vec<(usize, String)> = Vec::with_capacity(RECORD_LINES);
        for _ in 0..RECORD_LINES {
            match self.read_line()? {
                Some(line) => block.push((self.line_number, line)),
                None => break,
            }
        }

        match block.len() {
            0 => {
                self.finished = true;
                Ok(None)
            }
            n if n < RECORD_LINES => {
                self.finished = true;
                if self.options.strict {
                    Err(IdrError::InvalidStrideFormat {
                        line: self.line_number,
                        msg: format!(
                            "truncated record block: expected {} lines, got {}",
                            RECORD_LINES, n
                        ),
                    })
                } else {
                    // Trailing partial block: dropped without signal
                    Ok(None)
                }
            }
            _ => Ok(Some(self.decode_block(&block)?)),
        }
    }

    fn decode_block(&self, block: &[(usize, String)]) -> Result<DisorderRecord> {
        let (_, id_line) = &block[0];
        let (_, ranges_line) = &block[1];
        let (residues_no, residues_line) = &block[2];
        let (flags_no, flags_line) = &block[3];
        let (scores_no, scores_line) = &block[4];

        let id = id_line.strip_prefix('>').unwrap_or(id_line).to_string();
        let merged_ranges = merge_ranges(ranges_line, self.options.merge_gap);

        let residues = parse_residues(residues_line, *residues_no)?;
        let disordered_flags = parse_flags(flags_line, *flags_no)?;
        let scores = parse_scores(scores_line, *scores_no)?;

        if residues.len() != disordered_flags.len() || residues.len() != scores.len() {
            return Err(IdrError::InvalidStrideFormat {
                line: *scores_no,
                msg: format!(
                    "field lengths disagree for '{}': {} residues, {} flags, {} scores",
                    id,
                    residues.len(),
                    disordered_flags.len(),
                    scores.len()
                ),
            });
        }

        Ok(DisorderRecord {
            id,
            idr_ranges_raw: ranges_line.clone(),
            merged_ranges,
            residues,
            disordered_flags,
            scores,
        })
    }
}

impl<R: BufRead> Iterator for StrideReportReader<R> {
    type Item = Result<DisorderRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Split a comma-joined field line into trimmed tokens. An empty line is an
/// empty sequence, not a single empty token.
fn comma_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim).filter(|t| !t.is_empty())
}

fn parse_residues(line: &str, line_no: usize) -> Result<Vec<u8>> {
    comma_tokens(line)
        .map(|token| {
            let mut bytes = token.bytes();
            match (bytes.next(), bytes.next()) {
                (Some(b), None) => Ok(b),
                _ => Err(IdrError::InvalidValue {
                    field: "residues".to_string(),
                    line: line_no,
                    reason: format!("expected a single-letter code, got '{}'", token),
                }),
            }
        })
        .collect()
}

fn parse_flags(line: &str, line_no: usize) -> Result<Vec<u8>> {
    comma_tokens(line)
        .map(|token| {
            token.parse::<u8>().map_err(|e| IdrError::InvalidValue {
                field: "disordered_flags".to_string(),
                line: line_no,
                reason: format!("'{}': {}", token, e),
            })
        })
        .collect()
}

fn parse_scores(line: &str, line_no: usize) -> Result<Vec<f64>> {
    comma_tokens(line)
        .map(|token| {
            token.parse::<f64>().map_err(|e| IdrError::InvalidValue {
                field: "scores".to_string(),
                line: line_no,
                reason: format!("'{}': {}", token, e),
            })
        })
        .collect()
}

/// The reduced `{ID, fldpnn2_score}` view of a disorder table row
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    /// Sequence identifier
    pub id: String,
    /// Per-residue disorder propensity
    pub fldpnn2_score: Vec<f64>,
}

/// All records of one flDPnn2 report, in file order
///
/// Identifiers are assumed unique upstream; duplicates are kept as separate
/// rows and [`DisorderTable::get`] returns the first match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisorderTable {
    records: Vec<DisorderRecord>,
}

impl DisorderTable {
    /// Parse a report from a local file path with default options
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        StrideReportReader::from_path(path)?.collect()
    }

    /// Parse a report from a local file path
    pub fn from_path_with<P: AsRef<Path>>(path: P, options: StrideOptions) -> Result<Self> {
        StrideReportReader::from_path_with(path, options)?.collect()
    }

    /// Parse a gzip-compressed report
    pub fn from_gzip_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        StrideReportReader::from_gzip_path(path)?.collect()
    }

    /// Parse a report from any buffered reader with default options
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        StrideReportReader::from_reader(reader).collect()
    }

    /// Parse a report from any buffered reader
    pub fn from_reader_with<R: BufRead>(reader: R, options: StrideOptions) -> Result<Self> {
        StrideReportReader::from_reader_with(reader, options).collect()
    }

    /// First record with the given identifier
    pub fn get(&self, id: &str) -> Option<&DisorderRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Iterate over records in file order
    pub fn iter(&self) -> std::slice::Iter<'_, DisorderRecord> {
        self.records.iter()
    }

    /// Records as a slice
    pub fn records(&self) -> &[DisorderRecord] {
        &self.records
    }

    /// Consume the table, returning its records
    pub fn into_records(self) -> Vec<DisorderRecord> {
        self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The minimal `{ID, fldpnn2_score}` shape: identifier plus score track
    pub fn score_view(&self) -> Vec<ScoreRow> {
        self.records
            .iter()
            .map(|r| ScoreRow {
                id: r.id.clone(),
                fldpnn2_score: r.scores.clone(),
            })
            .collect()
    }
}

impl FromIterator<DisorderRecord> for DisorderTable {
    fn from_iter<I: IntoIterator<Item = DisorderRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DisorderTable {
    type Item = DisorderRecord;
    type IntoIter = std::vec::IntoIter<DisorderRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
