//! idrtools: parsers and diagnostics for protein disorder predictor outputs
//!
//! # Overview
//!
//! Disorder and phase-separation predictors (flDPnn2, PSPHunter) emit flat
//! text reports in tool-specific shapes. idrtools normalizes them into
//! identifier-keyed tables and renders per-protein diagnostic plots that
//! overlay disorder propensity, amino-acid composition signals, and predicted
//! functional regions.
//!
//! ## Quick Start
//!
//! ```no_run
//! use idrtools::{DisorderTable, RegionTable};
//!
//! # fn main() -> idrtools::Result<()> {
//! let disorder = DisorderTable::from_path("fldpnn2.txt")?;
//! let regions = RegionTable::from_path("psp.txt")?;
//!
//! for record in disorder.iter() {
//!     println!("{}: {} residues, IDRs at {:?}",
//!         record.id, record.len(), record.merged_ranges);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`formats`]: predictor report parsers (flDPnn2 stride reports, PSPHunter
//!   region annotations)
//! - [`intervals`]: IDR range extraction and gap-merging
//! - [`composition`]: aromatic and net-charge sequence signals
//! - [`io`]: CSV identifier-mapping to FASTA conversion
//! - [`plot`]: one-shot SVG plot rendering (feature `plot`, default on)
//!
//! Parsing is single-threaded and synchronous: a call either returns a
//! complete table or fails with an [`IdrError`]. Report noise (trailing
//! partial blocks, malformed rows) is tolerated by default; both parsers
//! accept a `strict` option that rejects it instead.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod composition;
pub mod error;
pub mod formats;
pub mod intervals;
pub mod io;
#[cfg(feature = "plot")]
pub mod plot;
pub mod types;

pub use error::{IdrError, Result};
pub use formats::region::{RegionOptions, RegionReportReader, RegionTable};
pub use formats::stride::{DisorderTable, ScoreRow, StrideOptions, StrideReportReader};
pub use intervals::{contiguous_regions, extract_ranges, merge_ranges};
pub use types::{DisorderRecord, RegionRecord};
