
/// Returns the number of non-gap symbols in an aligned sequence.
/// # Arguments
/// * `sequence` - the aligned sequence
/// * `gap_symbol` - the symbol representing a gap
/// # Examples
/// ```rust
/// use msa_rep::sequence_scoring::ungapped_length;
/// assert_eq!(ungapped_length(b"AC-GT--", b'-'), 4);
/// assert_eq!(ungapped_length(b"----", b'-'), 0);
/// ```
pub fn ungapped_length(sequence: &[u8], gap_symbol: u8) -> usize {
    sequence.iter()
        .filter(|&&c| c != gap_symbol)
        .count()
}

/// Returns the fraction of positions in the sequence that are gaps.
/// An empty sequence is treated as entirely gap, the worst possible score.
/// # Arguments
/// * `sequence` - the aligned sequence
/// * `gap_symbol` - the symbol representing a gap
/// # Examples
/// ```rust
/// use msa_rep::sequence_scoring::gap_fraction;
/// assert_eq!(gap_fraction(b"AC-G", b'-'), 0.25);
/// assert_eq!(gap_fraction(b"ACGT", b'-'), 0.0);
/// assert_eq!(gap_fraction(b"", b'-'), 1.0);
/// ```
pub fn gap_fraction(sequence: &[u8], gap_symbol: u8) -> f64 {
    if sequence.is_empty() {
        return 1.0;
    }
    let gaps = sequence.len() - ungapped_length(sequence, gap_symbol);
    gaps as f64 / sequence.len() as f64
}

/// Returns the fraction of comparable positions where the sequence matches the consensus.
/// A position is comparable only if neither symbol is a gap and the consensus is not ambiguous.
/// Positions past the end of the shorter input are ignored.
/// If nothing is comparable, this returns 0.0.
/// # Arguments
/// * `sequence` - the aligned sequence to score
/// * `consensus` - the consensus built from the alignment
/// * `gap_symbol` - the symbol representing a gap
/// * `ambiguous_symbol` - the consensus symbol for tied columns
/// # Examples
/// ```rust
/// use msa_rep::sequence_scoring::consensus_identity;
/// // the ambiguous and gapped columns are skipped, leaving 3 of 4 matches
/// assert_eq!(consensus_identity(b"ACGTA-", b"ACXTT-", b'-', b'X'), 0.75);
/// assert_eq!(consensus_identity(b"----", b"ACGT", b'-', b'X'), 0.0);
/// ```
pub fn consensus_identity(sequence: &[u8], consensus: &[u8], gap_symbol: u8, ambiguous_symbol: u8) -> f64 {
    let mut matches: usize = 0;
    let mut comparable: usize = 0;
    for (&s, &c) in sequence.iter().zip(consensus.iter()) {
        if s == gap_symbol || c == gap_symbol || c == ambiguous_symbol {
            continue;
        }
        comparable += 1;
        if s == c {
            matches += 1;
        }
    }

    if comparable > 0 {
        matches as f64 / comparable as f64
    } else {
        0.0
    }
}
