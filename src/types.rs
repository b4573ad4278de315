//! Common record types used throughout idrtools

/// One protein's worth of flDPnn2 output (one 5-line block of the stride report)
///
/// The three per-residue vectors are always the same length; the stride
/// reader rejects blocks where they disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct DisorderRecord {
    /// Sequence identifier (without '>' prefix)
    pub id: String,
    /// Verbatim IDR range text as it appeared in the report (e.g. "12-45,80-100")
    pub idr_ranges_raw: String,
    /// Gap-merged IDR ranges: sorted, non-overlapping, start <= end
    pub merged_ranges: Vec<(u32, u32)>,
    /// Single-letter amino acid codes, one per position
    pub residues: Vec<u8>,
    /// Per-residue disorder call (0 or 1), parallel to `residues`
    pub disordered_flags: Vec<u8>,
    /// Per-residue disorder propensity in [0, 1], parallel to `residues`
    pub scores: Vec<f64>,
}

impl DisorderRecord {
    /// Number of residues in the record
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Check if the record covers no residues
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// One protein's worth of PSPHunter output (one header-delimited block)
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    /// Protein name (header text after '>')
    pub name: String,
    /// Single-letter amino acid codes, one per accepted data row
    pub aa: Vec<u8>,
    /// Predicted functional-region membership, parallel to `aa`
    pub dregion: Vec<bool>,
}

impl RegionRecord {
    /// Create an empty record for the given name
    pub fn new(name: String) -> Self {
        Self {
            name,
            aa: Vec::new(),
            dregion: Vec::new(),
        }
    }

    /// Number of annotated residues
    pub fn len(&self) -> usize {
        self.aa.len()
    }

    /// Check if the record has no annotated residues
    pub fn is_empty(&self) -> bool {
        self.aa.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disorder_record_len() {
        let record = DisorderRecord {
            id: "P12345".to_string(),
            idr_ranges_raw: "1-3".to_string(),
            merged_ranges: vec![(1, 3)],
            residues: b"MKV".to_vec(),
            disordered_flags: vec![1, 1, 1],
            scores: vec![0.9, 0.8, 0.7],
        };
        assert_eq!(record.len(), 3);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_region_record_new_is_empty() {
        let record = RegionRecord::new("p1".to_string());
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
    }
}
