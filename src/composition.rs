//! Amino-acid composition signals
//!
//! Diagnostic overlays for disorder plots: aromatic residue positions and a
//! sliding-window net-charge profile. Aromatic content and charge patterning
//! are the usual first things to look at when judging whether a disordered
//! region could drive phase separation.

/// Check whether a residue is aromatic (F, Y, or W)
pub fn is_aromatic(aa: u8) -> bool {
    matches!(aa, b'F' | b'Y' | b'W')
}

/// Formal charge contribution of a residue at physiological pH
///
/// D/E contribute -1, K/R +1, H +0.5 (partially protonated); everything else
/// is treated as neutral.
pub fn residue_charge(aa: u8) -> f64 {
    match aa {
        b'D' | b'E' => -1.0,
        b'K' | b'R' => 1.0,
        b'H' => 0.5,
        _ => 0.0,
    }
}

/// Positions (0-based) of aromatic residues in a sequence
///
/// # Example
///
/// ```
/// use idrtools::composition::aromatic_positions;
///
/// assert_eq!(aromatic_positions(b"MFKYW"), vec![1, 3, 4]);
/// ```
pub fn aromatic_positions(seq: &[u8]) -> Vec<usize> {
    seq.iter()
        .enumerate()
        .filter(|(_, &aa)| is_aromatic(aa))
        .map(|(i, _)| i)
        .collect()
}

/// Net charge summed over a sliding window, reported at window centers
///
/// Returns `(center_position, net_charge)` pairs for every full window.
/// Sequences shorter than the window yield an empty profile.
///
/// # Example
///
/// ```
/// use idrtools::composition::net_charge_profile;
///
/// // K(+1) D(-1) K(+1) over window 2: [0.0, 0.0]
/// let profile = net_charge_profile(b"KDK", 2);
/// assert_eq!(profile, vec![(1, 0.0), (2, 0.0)]);
/// ```
pub fn net_charge_profile(seq: &[u8], window: usize) -> Vec<(usize, f64)> {
    if window == 0 || seq.len() < window {
        return Vec::new();
    }

    let charges: Vec<f64> = seq.iter().map(|&aa| residue_charge(aa)).collect();
    charges
        .windows(window)
        .enumerate()
        .map(|(i, block)| (i + window / 2, block.iter().sum()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aromatic_set() {
        assert!(is_aromatic(b'F'));
        assert!(is_aromatic(b'Y'));
        assert!(is_aromatic(b'W'));
        assert!(!is_aromatic(b'A'));
        assert!(!is_aromatic(b'f')); // codes are uppercase by convention
    }

    #[test]
    fn test_residue_charges() {
        assert_eq!(residue_charge(b'D'), -1.0);
        assert_eq!(residue_charge(b'E'), -1.0);
        assert_eq!(residue_charge(b'K'), 1.0);
        assert_eq!(residue_charge(b'R'), 1.0);
        assert_eq!(residue_charge(b'H'), 0.5);
        assert_eq!(residue_charge(b'G'), 0.0);
    }

    #[test]
    fn test_aromatic_positions() {
        assert_eq!(aromatic_positions(b"MFKYW"), vec![1, 3, 4]);
        assert_eq!(aromatic_positions(b"MKGA"), Vec::<usize>::new());
    }

    #[test]
    fn test_net_charge_profile_window_counts() {
        // len 10, window 10: exactly one full window, centered at 5
        let seq = b"KKKKKDDDDD";
        let profile = net_charge_profile(seq, 10);
        assert_eq!(profile, vec![(5, 0.0)]);
    }

    #[test]
    fn test_net_charge_profile_sliding() {
        let profile = net_charge_profile(b"KKDD", 2);
        assert_eq!(profile, vec![(1, 2.0), (2, 0.0), (3, -2.0)]);
    }

    #[test]
    fn test_net_charge_profile_short_sequence() {
        assert_eq!(net_charge_profile(b"KD", 10), vec![]);
        assert_eq!(net_charge_profile(b"KD", 0), vec![]);
    }
}
