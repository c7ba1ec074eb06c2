
/*!
This module provides the per-column majority consensus for a set of aligned sequences.
Each column is decided independently: gaps do not vote, a unique most-frequent symbol wins, and a tie for most frequent produces the ambiguous symbol.

# Example usage
```rust
use msa_rep::consensus::build_consensus;

let sequences: [&[u8]; 4] = [
    b"ACGT-",
    b"ACGA-",
    b"ATGA-",
    b"ATG--"
];

// column 2 is a 2-2 tie, column 4 is all gaps
let consensus = build_consensus(&sequences, b'-', b'X');
assert_eq!(consensus, b"AXGA-".to_vec());
```
*/

use rustc_hash::FxHashMap as HashMap;

/// Returns the consensus symbol for a single alignment column.
/// # Arguments
/// * `column` - the symbols in the column, one per sequence
/// * `gap_symbol` - the symbol representing a gap, these are not counted
/// * `ambiguous_symbol` - the symbol returned when the top two counts are tied
/// # Examples
/// ```rust
/// use msa_rep::consensus::column_consensus;
/// assert_eq!(column_consensus(b"AAC-".iter().cloned(), b'-', b'X'), b'A');
/// assert_eq!(column_consensus(b"AC--".iter().cloned(), b'-', b'X'), b'X');
/// assert_eq!(column_consensus(b"----".iter().cloned(), b'-', b'X'), b'-');
/// ```
pub fn column_consensus<I: IntoIterator<Item = u8>>(column: I, gap_symbol: u8, ambiguous_symbol: u8) -> u8 {
    let mut counts: HashMap<u8, usize> = Default::default();
    for symbol in column.into_iter().filter(|&s| s != gap_symbol) {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    // only the top two counts matter, whichever symbol is "first" among equals does not
    let mut best: Option<(u8, usize)> = None;
    let mut second_count: usize = 0;
    for (&symbol, &count) in counts.iter() {
        match best {
            Some((_best_symbol, best_count)) if count <= best_count => {
                second_count = second_count.max(count);
            },
            Some((_best_symbol, best_count)) => {
                second_count = best_count;
                best = Some((symbol, count));
            },
            None => {
                best = Some((symbol, count));
            }
        }
    }

    match best {
        None => gap_symbol,
        Some((symbol, count)) if count > second_count => symbol,
        Some(_) => ambiguous_symbol
    }
}

/// Builds the majority consensus of a set of aligned sequences.
/// The consensus is as long as the longest sequence; shorter sequences are treated as gaps past their end.
/// # Arguments
/// * `sequences` - the aligned sequences, typically of equal length
/// * `gap_symbol` - the symbol representing a gap
/// * `ambiguous_symbol` - the symbol for columns where the top two counts are tied
pub fn build_consensus<S: AsRef<[u8]>>(sequences: &[S], gap_symbol: u8, ambiguous_symbol: u8) -> Vec<u8> {
    let consensus_len = sequences.iter()
        .map(|s| s.as_ref().len())
        .max()
        .unwrap_or(0);

    (0..consensus_len)
        .map(|i| {
            let column = sequences.iter()
                .map(|s| s.as_ref().get(i).cloned().unwrap_or(gap_symbol));
            column_consensus(column, gap_symbol, ambiguous_symbol)
        })
        .collect()
}

/// Returns the number of columns in a consensus that were marked ambiguous.
/// # Arguments
/// * `consensus` - a consensus from `build_consensus(...)`
/// * `ambiguous_symbol` - the ambiguous symbol that was used to build it
pub fn count_ambiguous(consensus: &[u8], ambiguous_symbol: u8) -> usize {
    consensus.iter()
        .filter(|&&c| c == ambiguous_symbol)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sequence() {
        let sequence = b"MKV-LAT";
        let consensus = build_consensus(&[sequence], b'-', b'X');
        assert_eq!(consensus, sequence.to_vec());
    }

    #[test]
    fn test_unanimous_and_split() {
        let sequences = [
            b"AC".to_vec(),
            b"AG".to_vec(),
        ];
        // column 0 is unanimous, column 1 is a 50/50 split
        let consensus = build_consensus(&sequences, b'-', b'X');
        assert_eq!(consensus, b"AX".to_vec());
    }

    #[test]
    fn test_majority() {
        let sequences = [
            b"AAAA-".to_vec(),
            b"AAAA-".to_vec(),
            b"AATA-".to_vec()
        ];
        let consensus = build_consensus(&sequences, b'-', b'X');
        assert_eq!(consensus, b"AAAA-".to_vec());
    }

    #[test]
    fn test_gaps_do_not_vote() {
        // the gap is the most common, but only residues are counted
        let column = b"---A-";
        assert_eq!(column_consensus(column.iter().cloned(), b'-', b'X'), b'A');
    }

    #[test]
    fn test_tie_below_top() {
        // A is the clear winner, the C/G tie underneath it does not matter
        let column = b"AAACG";
        assert_eq!(column_consensus(column.iter().cloned(), b'-', b'X'), b'A');

        // three way tie at the top
        let column = b"ACG";
        assert_eq!(column_consensus(column.iter().cloned(), b'-', b'X'), b'X');

        // the winner shows up last
        let column = b"CGAAA";
        assert_eq!(column_consensus(column.iter().cloned(), b'-', b'X'), b'A');
    }

    #[test]
    fn test_ragged() {
        let sequences = [
            b"ACGTAA".to_vec(),
            b"ACGT".to_vec(),
            b"ACG".to_vec()
        ];
        let consensus = build_consensus(&sequences, b'-', b'X');

        // length follows the longest input, the tail is only supported by the first sequence
        assert_eq!(consensus.len(), 6);
        assert_eq!(consensus, b"ACGTAA".to_vec());
    }

    #[test]
    fn test_empty() {
        let sequences: Vec<Vec<u8>> = vec![];
        assert!(build_consensus(&sequences, b'-', b'X').is_empty());
    }

    #[test]
    fn test_count_ambiguous() {
        assert_eq!(count_ambiguous(b"AXGX-", b'X'), 2);
        assert_eq!(count_ambiguous(b"ACGT", b'X'), 0);
    }
}
