//! FASTA export of identifier→sequence mappings
//!
//! Sequence-based predictors take FASTA input, while identifier mappings
//! (e.g. UniProt exports) arrive as CSV with an identifier column and a
//! `Sequence` column. This module bridges the two: read the mapping, emit
//! `>id\nsequence\n` blocks separated by blank lines.

use crate::error::{IdrError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column holding the sequence in a mapping CSV
pub const SEQUENCE_COLUMN: &str = "Sequence";

/// Default identifier column of a UniProt mapping export
pub const DEFAULT_ID_COLUMN: &str = "Entry";

/// Write `(id, sequence)` pairs as FASTA blocks separated by blank lines.
///
/// # Example
///
/// ```
/// use idrtools::io::fasta::write_fasta;
///
/// let records = vec![
///     ("P1".to_string(), "MKV".to_string()),
///     ("P2".to_string(), "ACD".to_string()),
/// ];
/// let mut out = Vec::new();
/// write_fasta(&mut out, &records).unwrap();
/// assert_eq!(out, b">P1\nMKV\n\n>P2\nACD\n");
/// ```
pub fn write_fasta<W: Write>(writer: &mut W, records: &[(String, String)]) -> Result<()> {
    for (i, (id, sequence)) in records.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        writeln!(writer, ">{}", id)?;
        writeln!(writer, "{}", sequence)?;
    }
    Ok(())
}

/// Convert a headered mapping CSV into a FASTA file.
///
/// Reads `id_column` and the `Sequence` column from `csv_path`, writes the
/// FASTA to `out_path`, and returns the number of records written. A missing
/// column is an [`IdrError::InvalidValue`].
pub fn fasta_from_mapping<P: AsRef<Path>, Q: AsRef<Path>>(
    csv_path: P,
    out_path: Q,
    id_column: &str,
) -> Result<usize> {
    let file = File::open(csv_path)?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = reader.headers()?.clone();
    let id_idx = column_index(&headers, id_column)?;
    let seq_idx = column_index(&headers, SEQUENCE_COLUMN)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let id = row.get(id_idx).unwrap_or("").to_string();
        let sequence = row.get(seq_idx).unwrap_or("").to_string();
        records.push((id, sequence));
    }

    let out = File::create(out_path)?;
    let mut writer = BufWriter::new(out);
    write_fasta(&mut writer, &records)?;
    writer.flush()?;

    Ok(records.len())
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| IdrError::InvalidValue {
            field: name.to_string(),
            line: 1,
            reason: "column not found in CSV header".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_fasta_single_record() {
        let records = vec![("P1".to_string(), "MKV".to_string())];
        let mut out = Vec::new();
        write_fasta(&mut out, &records).unwrap();
        assert_eq!(out, b">P1\nMKV\n");
    }

    #[test]
    fn test_write_fasta_blank_line_between_records() {
        let records = vec![
            ("P1".to_string(), "MKV".to_string()),
            ("P2".to_string(), "ACD".to_string()),
        ];
        let mut out = Vec::new();
        write_fasta(&mut out, &records).unwrap();
        assert_eq!(out, b">P1\nMKV\n\n>P2\nACD\n");
    }

    #[test]
    fn test_write_fasta_empty() {
        let mut out = Vec::new();
        write_fasta(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
