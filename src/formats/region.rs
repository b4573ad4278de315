//! PSPHunter region annotation reader
//!
//! # Format
//!
//! FASTA-like: a `>` header opens a protein block, followed by one
//! space-separated data row per residue:
//!
//! ```text
//! >P12345
//! 1 M 0.12 0
//! 2 K -0.05 1
//! ```
//!
//! A data row carries four tokens: position (integer), residue code,
//! probability (signed float), and a 0/1 region flag. Rows not matching that
//! shape are tool noise and are skipped by default; [`RegionOptions::strict`]
//! rejects them instead. A data row before any header is a structural error
//! in both modes.

use crate::error::{IdrError, Result};
use crate::types::RegionRecord;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parsing options for the region reader
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionOptions {
    /// Error on non-conforming data rows instead of skipping them
    pub strict: bool,
}

/// Outcome of matching one line against the 4-token data-row shape
enum RowShape {
    /// Well-formed data row: residue code and region flag
    Data(u8, bool),
    /// Does not match the shape; skipped in tolerant mode
    NoMatch,
}

/// Match a line against `pos(int) aa(letter) prob(signed float) flag(0|1)`.
fn match_row(line: &str) -> RowShape {
    let mut tokens = line.split_whitespace();
    let (Some(pos), Some(aa), Some(prob), Some(flag), None) = (
        tokens.next(),
        tokens.next(),
        tokens.next(),
        tokens.next(),
        tokens.next(),
    ) else {
        return RowShape::NoMatch;
    };

    if pos.parse::<u64>().is_err() || prob.parse::<f64>().is_err() {
        return RowShape::NoMatch;
    }
    let aa_byte = match aa.as_bytes() {
        [b] => *b,
        _ => return RowShape::NoMatch,
    };
    let region = match flag {
        "0" => false,
        "1" => true,
        _ => return RowShape::NoMatch,
    };
    RowShape::Data(aa_byte, region)
}

/// Single-pass state-machine reader over PSPHunter blocks
///
/// Yields one [`RegionRecord`] per header, committed when the next header
/// begins or the input ends. Output order is commit order.
pub struct RegionReportReader<R: BufRead> {
    reader: R,
    options: RegionOptions,
    line_buffer: String,
    line_number: usize,
    current: Option<RegionRecord>,
    finished: bool,
}

impl RegionReportReader<BufReader<File>> {
    /// Create a reader from a local file path with default options
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with(path, RegionOptions::default())
    }

    /// Create a reader from a local file path
    pub fn from_path_with<P: AsRef<Path>>(path: P, options: RegionOptions) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader_with(BufReader::new(file), options))
    }
}

impl RegionReportReader<BufReader<MultiGzDecoder<File>>> {
    /// Create a reader from a gzip-compressed report with default options
    pub fn from_gzip_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let decoder = MultiGzDecoder::new(file);
        Ok(Self::from_reader_with(
            BufReader::new(decoder),
            RegionOptions::default(),
        ))
    }
}

impl<R: BufRead> RegionReportReader<R> {
    /// Create a reader from any buffered reader with default options
    pub fn from_reader(reader: R) -> Self {
        Self::from_reader_with(reader, RegionOptions::default())
    }

    /// Create a reader from any buffered reader
    pub fn from_reader_with(reader: R, options: RegionOptions) -> Self {
        Self {
            reader,
            options,
            line_buffer: String::with_capacity(256),
            line_number: 0,
            current: None,
            finished: false,
        }
    }

    /// Current line number (1-based), for error reporting
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_record(&mut self) -> Result<Option<RegionRecord>> {
        if self.finished {
            return Ok(self.current.take());
        }

        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer)? {
                0 => {
                    // EOF commits the final open record
                    self.finished = true;
                    return Ok(self.current.take());
                }
                _ => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if let Some(name) = line.strip_prefix('>') {
                        let committed = self
                            .current
                            .replace(RegionRecord::new(name.to_string()));
                        if let Some(record) = committed {
                            return Ok(Some(record));
                        }
                        continue;
                    }

                    match match_row(line) {
                        RowShape::Data(aa, region) => match self.current.as_mut() {
                            Some(record) => {
                                record.aa.push(aa);
                                record.dregion.push(region);
                            }
                            None => {
                                return Err(IdrError::InvalidRegionFormat {
                                    line: self.line_number,
                                    msg: "data row before any '>' header".to_string(),
                                })
                            }
                        },
                        RowShape::NoMatch => {
                            if self.options.strict {
                                return Err(IdrError::InvalidRegionFormat {
                                    line: self.line_number,
                                    msg: format!("line matches no known shape: '{}'", line),
                                });
                            }
                            // Tool noise: skipped without signal
                        }
                    }
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for RegionReportReader<R> {
    type Item = Result<RegionRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.finished = true;
                self.current = None;
                Some(Err(e))
            }
        }
    }
}

/// All records of one PSPHunter report, in commit order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionTable {
    records: Vec<RegionRecord>,
}

impl RegionTable {
    /// Parse a report from a local file path with default options
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        RegionReportReader::from_path(path)?.collect()
    }

    /// Parse a report from a local file path
    pub fn from_path_with<P: AsRef<Path>>(path: P, options: RegionOptions) -> Result<Self> {
        RegionReportReader::from_path_with(path, options)?.collect()
    }

    /// Parse a gzip-compressed report
    pub fn from_gzip_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        RegionReportReader::from_gzip_path(path)?.collect()
    }

    /// Parse a report from any buffered reader with default options
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        RegionReportReader::from_reader(reader).collect()
    }

    /// Parse a report from any buffered reader
    pub fn from_reader_with<R: BufRead>(reader: R, options: RegionOptions) -> Result<Self> {
        RegionReportReader::from_reader_with(reader, options).collect()
    }

    /// First record with the given name
    pub fn get(&self, name: &str) -> Option<&RegionRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Iterate over records in commit order
    pub fn iter(&self) -> std::slice::Iter<'_, RegionRecord> {
        self.records.iter()
    }

    /// Records as a slice
    pub fn records(&self) -> &[RegionRecord] {
        &self.records
    }

    /// Consume the table, returning its records
    pub fn into_records(self) -> Vec<RegionRecord> {
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
}

impl FromIterator<RegionRecord> for RegionTable {
    fn from_iter<I: IntoIterator<Item = RegionRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RegionTable {
    type Item = RegionRecord;
    type IntoIter = std::vec::IntoIter<RegionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_two_records() {
        let data = ">p1\n1 A 0.1 0\n2 C 0.9 1\n>p2\n1 D -0.2 0\n";
        let table = RegionTable::from_reader(Cursor::new(data)).unwrap();

        assert_eq!(table.len(), 2);
        let p1 = table.get("p1").unwrap();
        assert_eq!(p1.aa, b"AC");
        assert_eq!(p1.dregion, vec![false, true]);

        let p2 = table.get("p2").unwrap();
        assert_eq!(p2.aa, b"D");
        assert_eq!(p2.dregion, vec![false]);
    }

    #[test]
    fn test_commit_order_is_first_seen() {
        let data = ">z\n1 A 0.1 0\n>a\n1 C 0.2 1\n";
        let table = RegionTable::from_reader(Cursor::new(data)).unwrap();
        let names: Vec<_> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn test_malformed_row_skipped() {
        // Wrong token count, then non-numeric position: both ignored,
        // subsequent rows still land in the record
        let data = ">p1\n1 A 0.1 0\nnot a data row\nxx C 0.5 1\n2 C 0.9 1\n";
        let table = RegionTable::from_reader(Cursor::new(data)).unwrap();

        let p1 = table.get("p1").unwrap();
        assert_eq!(p1.aa, b"AC");
        assert_eq!(p1.dregion, vec![false, true]);
    }

    #[test]
    fn test_malformed_row_strict() {
        let data = ">p1\n1 A 0.1 0\nnot a data row\n";
        let options = RegionOptions { strict: true };
        let result = RegionTable::from_reader_with(Cursor::new(data), options);
        assert!(matches!(
            result.unwrap_err(),
            IdrError::InvalidRegionFormat { .. }
        ));
    }

    #[test]
    fn test_blank_lines_ignored_in_strict_mode() {
        let data = ">p1\n\n1 A 0.1 0\n\n";
        let options = RegionOptions { strict: true };
        let table = RegionTable::from_reader_with(Cursor::new(data), options).unwrap();
        assert_eq!(table.get("p1").unwrap().aa, b"A");
    }

    #[test]
    fn test_data_row_before_header_rejected() {
        let data = "1 A 0.1 0\n>p1\n";
        let result = RegionTable::from_reader(Cursor::new(data));
        assert!(matches!(
            result.unwrap_err(),
            IdrError::InvalidRegionFormat { .. }
        ));
    }

    #[test]
    fn test_flag_other_than_zero_one_skipped() {
        let data = ">p1\n1 A 0.1 2\n2 C 0.9 1\n";
        let table = RegionTable::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(table.get("p1").unwrap().aa, b"C");
    }

    #[test]
    fn test_header_only_record_kept() {
        let data = ">p1\n>p2\n1 A 0.1 0\n";
        let table = RegionTable::from_reader(Cursor::new(data)).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.get("p1").unwrap().is_empty());
        assert_eq!(table.get("p2").unwrap().aa, b"A");
    }

    #[test]
    fn test_empty_input() {
        let table = RegionTable::from_reader(Cursor::new("")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_reparse_is_deterministic() {
        let data = ">p1\n1 A 0.1 0\n2 C 0.9 1\n>p2\n1 D -0.2 0\n";
        let first = RegionTable::from_reader(Cursor::new(data)).unwrap();
        let second = RegionTable::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(first, second);
    }
}
