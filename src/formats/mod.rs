//! Predictor report parsers.
//!
//! This module holds one parser per predictor output format:
//! - [`stride`]: flDPnn2 stride reports (fixed preamble, 5 lines per protein)
//! - [`region`]: PSPHunter region annotations (FASTA-like, one row per residue)
//!
//! Both parsers follow the same shape:
//! - **Iterator-based reader**: one record per `next()`, errors surfaced per
//!   record through `Result`
//! - **Table assembly**: `*Table::from_path` collects a whole report into an
//!   ordered, identifier-keyed table
//! - **Tolerant by default**: report noise (trailing partial blocks,
//!   non-conforming rows) is skipped; a `strict` option rejects it instead
//! - **Compression support**: `from_gzip_path` constructors for compressed
//!   reports

pub mod region;
pub mod stride;

// Re-export commonly used types
pub use region::{RegionOptions, RegionReportReader, RegionTable};
pub use stride::{DisorderTable, ScoreRow, StrideOptions, StrideReportReader};
