//! Interval utilities for IDR ranges
//!
//! flDPnn2 writes predicted disordered regions as free-form text containing
//! `start-end` pairs (e.g. `"12-45,80-100"`). Nearby ranges usually describe
//! the same biological region split by a few ordered residues, so the stride
//! reader fuses ranges separated by at most a small gap before exposing them.

use std::sync::OnceLock;

use regex::Regex;

/// Gap tolerance used by the stride reader when merging IDR ranges
pub const DEFAULT_MERGE_GAP: u32 = 10;

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)-(\d+)").expect("valid range pattern"))
}

/// Extract all `start-end` integer pairs from free-form text, left to right.
///
/// Returns an empty vector when the text contains no ranges. Tokens are
/// pre-validated by the pattern shape, so the inner parses cannot fail for
/// values that fit in `u32`; pairs with out-of-range components are dropped.
///
/// # Example
///
/// ```
/// use idrtools::intervals::extract_ranges;
///
/// assert_eq!(extract_ranges("12-45,80-100"), vec![(12, 45), (80, 100)]);
/// assert_eq!(extract_ranges("no ranges here"), vec![]);
/// ```
pub fn extract_ranges(text: &str) -> Vec<(u32, u32)> {
    range_pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let start = caps[1].parse().ok()?;
            let end = caps[2].parse().ok()?;
            Some((start, end))
        })
        .collect()
}

/// Extract and gap-merge `start-end` ranges from free-form text.
///
/// Two ranges separated by at most `gap` positions are fused into one
/// spanning range. Ranges are sorted by start before folding, so the result
/// is sorted and non-overlapping regardless of input order.
///
/// # Example
///
/// ```
/// use idrtools::intervals::merge_ranges;
///
/// // 22 - 20 = 2 <= 10: fused
/// assert_eq!(merge_ranges("12-20,22-25", 10), vec![(12, 25)]);
/// // 40 - 20 = 20 > 10: kept apart
/// assert_eq!(merge_ranges("12-20,40-50", 10), vec![(12, 20), (40, 50)]);
/// ```
pub fn merge_ranges(text: &str, gap: u32) -> Vec<(u32, u32)> {
    let mut ranges = extract_ranges(text);
    ranges.sort_by_key(|&(start, _)| start);

    let mut merged: Vec<(u32, u32)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(tail) if start.saturating_sub(tail.1) <= gap => {
                tail.1 = tail.1.max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Find the inclusive index spans of contiguous `true` runs.
///
/// Used to turn per-residue region flags into drawable spans.
///
/// # Example
///
/// ```
/// use idrtools::intervals::contiguous_regions;
///
/// let flags = [false, true, true, false, true];
/// assert_eq!(contiguous_regions(&flags), vec![(1, 2), (4, 4)]);
/// ```
pub fn contiguous_regions(flags: &[bool]) -> Vec<(usize, usize)> {
    let mut regions = Vec::new();
    let mut run_start = None;

    for (i, &flag) in flags.iter().enumerate() {
        match (flag, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                regions.push((start, i - 1));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        regions.push((start, flags.len() - 1));
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_merge_within_gap() {
        assert_eq!(merge_ranges("12-20,22-25", 10), vec![(12, 25)]);
    }

    #[test]
    fn test_no_merge_beyond_gap() {
        assert_eq!(merge_ranges("12-20,40-50", 10), vec![(12, 20), (40, 50)]);
    }

    #[test]
    fn test_merge_empty_text() {
        assert_eq!(merge_ranges("", 10), vec![]);
    }

    #[test]
    fn test_merge_single_range() {
        assert_eq!(merge_ranges("5-9", 10), vec![(5, 9)]);
    }

    #[test]
    fn test_merge_chain() {
        // Each neighbour within the gap: one spanning range
        assert_eq!(merge_ranges("1-5,8-12,15-20", 10), vec![(1, 20)]);
    }

    #[test]
    fn test_merge_contained_range() {
        // Second range entirely inside the first: tail end must not shrink
        assert_eq!(merge_ranges("10-50,20-30", 10), vec![(10, 50)]);
    }

    #[test]
    fn test_merge_unsorted_input() {
        // Out-of-order report text still yields sorted, merged output
        assert_eq!(merge_ranges("40-50,12-20", 10), vec![(12, 20), (40, 50)]);
    }

    #[test]
    fn test_extract_ignores_surrounding_noise() {
        assert_eq!(extract_ranges("IDRs: 3-7; 9-14 (predicted)"), vec![(3, 7), (9, 14)]);
    }

    #[test]
    fn test_contiguous_regions_basic() {
        let flags = [false, true, true, false, true];
        assert_eq!(contiguous_regions(&flags), vec![(1, 2), (4, 4)]);
    }

    #[test]
    fn test_contiguous_regions_all_true() {
        assert_eq!(contiguous_regions(&[true, true, true]), vec![(0, 2)]);
    }

    #[test]
    fn test_contiguous_regions_empty() {
        assert_eq!(contiguous_regions(&[]), vec![]);
        assert_eq!(contiguous_regions(&[false, false]), vec![]);
    }

    proptest! {
        /// Merged output is sorted, non-overlapping, and separated by more than the gap
        #[test]
        fn test_merge_invariants(
            ranges in proptest::collection::vec((0u32..5000, 0u32..200), 0..20),
            gap in 0u32..50,
        ) {
            let text = ranges
                .iter()
                .map(|(s, len)| format!("{}-{}", s, s + len))
                .collect::<Vec<_>>()
                .join(",");

            let merged = merge_ranges(&text, gap);
            for pair in merged.windows(2) {
                prop_assert!(pair[0].1 < pair[1].0);
                prop_assert!(pair[1].0 - pair[0].1 > gap);
            }
            for &(start, end) in &merged {
                prop_assert!(start <= end);
            }
        }

        /// Every input position stays covered after merging
        #[test]
        fn test_merge_preserves_coverage(
            ranges in proptest::collection::vec((0u32..1000, 0u32..100), 1..10),
        ) {
            let text = ranges
                .iter()
                .map(|(s, len)| format!("{}-{}", s, s + len))
                .collect::<Vec<_>>()
                .join(",");

            let merged = merge_ranges(&text, 10);
            for (s, len) in &ranges {
                let (start, end) = (*s, s + len);
                prop_assert!(
                    merged.iter().any(|&(ms, me)| ms <= start && end <= me),
                    "range {}-{} lost after merge", start, end
                );
            }
        }
    }
}
