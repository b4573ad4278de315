//! Input/output helpers
//!
//! - [`fasta`]: CSV identifier-mapping to FASTA conversion

pub mod fasta;

pub use fasta::{fasta_from_mapping, write_fasta};
