/*!
# msa_rep
This library picks a single representative sequence from a multiple sequence alignment.

Key steps:
* Sequences with an anomalously short ungapped length are removed, using an absolute floor and/or a fraction of the median length; if this would remove everything, nothing is removed
* A per-column majority consensus is built from the remaining sequences, with tied columns marked ambiguous
* Each remaining sequence is scored by identity to the consensus, and the best one is returned unchanged

Ties on identity are broken by lower gap fraction, then by ungapped length closest to the median of the remaining sequences, then by input order.

# Example usage
```rust
use msa_rep::rep_config::RepConfigBuilder;
use msa_rep::representative::pick_representative;
use msa_rep::sequence_record::SequenceRecord;

let records = vec![
    SequenceRecord::new("s1".to_string(), "s1 full".to_string(), b"MKVLAT".to_vec()),
    SequenceRecord::new("s2".to_string(), "s2 full".to_string(), b"MKVIAT".to_vec()),
    SequenceRecord::new("s3".to_string(), "s3 fragment".to_string(), b"----AT".to_vec()),
    SequenceRecord::new("s4".to_string(), "s4 full".to_string(), b"MRVLAT".to_vec()),
];

// drop anything shorter than half the median length
let config = RepConfigBuilder::default()
    .min_len_frac(0.5)
    .build()
    .unwrap();

// s1 matches the consensus everywhere
let representative = pick_representative(&records, config).unwrap();
assert_eq!(representative.record().id(), "s1");
assert_eq!(representative.retained_indices(), &[0, 1, 3]);
assert_eq!(representative.consensus(), b"MKVLAT");
```
*/

/// Majority-vote consensus over alignment columns
pub mod consensus;
/// Utility for generating examples
pub mod example_gen;
/// Ungapped length filtering with a failsafe
pub mod length_filter;
/// Configuration for representative selection
pub mod rep_config;
/// Main functionality for scoring candidates and picking the representative
pub mod representative;
/// The aligned sequence record type
pub mod sequence_record;
/// Basic per-sequence scoring utilities
pub mod sequence_scoring;
