
/*!
This module provides access to the RepresentativePicker, which chooses the single input sequence that best typifies an alignment.
Short sequences are first removed by a length filter, then each survivor is scored against the majority consensus of the survivors.
The winner has the highest consensus identity; ties go to the lowest gap fraction, then the length closest to the survivor median, and finally the earliest survivor.

# Example usage
```rust
use msa_rep::representative::RepresentativePicker;
use msa_rep::sequence_record::SequenceRecord;

let records = [
    SequenceRecord::new("frag".to_string(), "fragment".to_string(), b"--GTAC---".to_vec()),
    SequenceRecord::new("var1".to_string(), "variant".to_string(), b"ACGTACGTT".to_vec()),
    SequenceRecord::new("best".to_string(), "typical".to_string(), b"ACGTACGTA".to_vec()), // this should be the representative
    SequenceRecord::new("var2".to_string(), "variant".to_string(), b"ACCTACGTA".to_vec())
];

// add all the records
let mut picker: RepresentativePicker = Default::default();
for r in records.iter() {
    picker.add_record(r).unwrap();
}

// pick and check the result
let representative = picker.pick().unwrap();
assert_eq!(representative.record().id(), "best");
assert_eq!(representative.input_index(), 2);
assert_eq!(representative.consensus(), b"ACGTACGTA");
```
*/

use itertools::Itertools;
use log::{debug, trace};
use simple_error::bail;
use std::cmp::Ordering;

use crate::consensus::{build_consensus, count_ambiguous};
use crate::length_filter::{median_length, LengthFilter};
use crate::rep_config::RepConfig;
use crate::sequence_record::SequenceRecord;
use crate::sequence_scoring::{consensus_identity, gap_fraction, ungapped_length};

/// The ranking scores for one candidate sequence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateScore {
    /// Fraction of comparable positions matching the consensus, higher is better
    identity: f64,
    /// Fraction of the aligned sequence that is gap, lower is better
    gap_fraction: f64,
    /// Absolute difference between the ungapped length and the median ungapped length of the candidates, lower is better
    length_deviation: f64,
    /// Position of the candidate among the candidates, lower is better
    local_index: usize
}

impl CandidateScore {
    /// Constructor
    pub fn new(identity: f64, gap_fraction: f64, length_deviation: f64, local_index: usize) -> CandidateScore {
        CandidateScore {
            identity,
            gap_fraction,
            length_deviation,
            local_index
        }
    }

    /// Compares two candidates such that the better candidate is `Ordering::Less`.
    /// Keys in priority order: identity (desc), gap fraction (asc), length deviation (asc), local index (asc).
    pub fn rank_cmp(&self, other: &CandidateScore) -> Ordering {
        other.identity.total_cmp(&self.identity)
            .then_with(|| self.gap_fraction.total_cmp(&other.gap_fraction))
            .then_with(|| self.length_deviation.total_cmp(&other.length_deviation))
            .then_with(|| self.local_index.cmp(&other.local_index))
    }

    // Getters
    pub fn identity(&self) -> f64 {
        self.identity
    }

    pub fn gap_fraction(&self) -> f64 {
        self.gap_fraction
    }

    pub fn length_deviation(&self) -> f64 {
        self.length_deviation
    }

    pub fn local_index(&self) -> usize {
        self.local_index
    }
}

/// Scores every candidate against the consensus.
/// The length deviation is measured from `candidate_median`, which should be the median ungapped length of these candidates.
/// # Arguments
/// * `sequences` - the aligned candidate sequences, in candidate order
/// * `consensus` - the consensus of the candidates
/// * `candidate_median` - the median ungapped length of the candidates
/// * `gap_symbol` - the symbol representing a gap
/// * `ambiguous_symbol` - the consensus symbol for tied columns
pub fn score_candidates<S: AsRef<[u8]>>(sequences: &[S], consensus: &[u8], candidate_median: f64, gap_symbol: u8, ambiguous_symbol: u8) -> Vec<CandidateScore> {
    sequences.iter().enumerate()
        .map(|(local_index, sequence)| {
            let sequence = sequence.as_ref();
            let length = ungapped_length(sequence, gap_symbol);
            CandidateScore::new(
                consensus_identity(sequence, consensus, gap_symbol, ambiguous_symbol),
                gap_fraction(sequence, gap_symbol),
                (length as f64 - candidate_median).abs(),
                local_index
            )
        })
        .collect()
}

/// Returns the local indices of the candidates from best to worst.
/// # Arguments
/// * `scores` - the candidate scores from `score_candidates(...)`
/// # Panics
/// * if `scores` is empty
pub fn rank_candidates(scores: &[CandidateScore]) -> Vec<usize> {
    assert!(!scores.is_empty(), "Cannot rank an empty candidate set");
    scores.iter()
        .sorted_by(|a, b| a.rank_cmp(b))
        .map(|s| s.local_index())
        .collect()
}

/// Selects the representative from a set of candidate records that have already passed length filtering.
/// The consensus and length median are computed over exactly these candidates.
/// # Arguments
/// * `candidates` - the surviving records, in input order
/// * `gap_symbol` - the symbol representing a gap
/// * `ambiguous_symbol` - the consensus symbol for tied columns
/// # Panics
/// * if `candidates` is empty
/// # Examples
/// ```rust
/// use msa_rep::representative::select;
/// use msa_rep::sequence_record::SequenceRecord;
/// let records = vec![
///     SequenceRecord::new("s1".to_string(), "s1".to_string(), b"AAAA-".to_vec()),
///     SequenceRecord::new("s2".to_string(), "s2".to_string(), b"AAAA-".to_vec()),
///     SequenceRecord::new("s3".to_string(), "s3".to_string(), b"AATA-".to_vec())
/// ];
/// let candidates: Vec<&SequenceRecord> = records.iter().collect();
/// // s1 and s2 are identical, the earlier one wins
/// let chosen = select(&candidates, b'-', b'X');
/// assert_eq!(chosen.id(), "s1");
/// ```
pub fn select<'a>(candidates: &[&'a SequenceRecord], gap_symbol: u8, ambiguous_symbol: u8) -> &'a SequenceRecord {
    assert!(!candidates.is_empty(), "Cannot select from an empty candidate set");
    let sequences: Vec<&[u8]> = candidates.iter().map(|r| r.sequence()).collect();
    let consensus = build_consensus(&sequences, gap_symbol, ambiguous_symbol);
    let lengths: Vec<usize> = candidates.iter().map(|r| r.ungapped_length(gap_symbol)).collect();
    let scores = score_candidates(&sequences, &consensus, median_length(&lengths), gap_symbol, ambiguous_symbol);
    let best_local = rank_candidates(&scores)[0];
    candidates[best_local]
}

/// Contains the chosen representative along with everything that went into choosing it
#[derive(Clone, Debug, PartialEq)]
pub struct Representative<'a> {
    /// The chosen record, exactly as it was provided
    record: &'a SequenceRecord,
    /// Index of the chosen record in the full input
    input_index: usize,
    /// Index of the chosen record among the candidates that survived length filtering
    local_index: usize,
    /// The consensus of the surviving candidates
    consensus: Vec<u8>,
    /// The scores for each surviving candidate, in candidate order
    scores: Vec<CandidateScore>,
    /// Indices into the full input of each surviving candidate
    retained_indices: Vec<usize>,
    /// If true, the length filter would have removed everything and was disabled
    failsafe_triggered: bool,
    /// Median ungapped length over the full input
    median_length_all: f64,
    /// Median ungapped length over the surviving candidates
    median_length_retained: f64
}

impl<'a> Representative<'a> {
    /// Returns the score of the chosen record.
    pub fn score(&self) -> &CandidateScore {
        &self.scores[self.local_index]
    }

    // Getters
    pub fn record(&self) -> &'a SequenceRecord {
        self.record
    }

    pub fn input_index(&self) -> usize {
        self.input_index
    }

    pub fn local_index(&self) -> usize {
        self.local_index
    }

    pub fn consensus(&self) -> &[u8] {
        &self.consensus
    }

    pub fn scores(&self) -> &[CandidateScore] {
        &self.scores
    }

    pub fn retained_indices(&self) -> &[usize] {
        &self.retained_indices
    }

    pub fn failsafe_triggered(&self) -> bool {
        self.failsafe_triggered
    }

    pub fn median_length_all(&self) -> f64 {
        self.median_length_all
    }

    pub fn median_length_retained(&self) -> f64 {
        self.median_length_retained
    }
}

/// Core utility that picks a representative record from an alignment.
/// Records are borrowed, so the chosen one can be handed back without copying.
#[derive(Debug, Default)]
pub struct RepresentativePicker<'a> {
    /// Contains all the records that have been added so far, in input order
    records: Vec<&'a SequenceRecord>,
    /// The config for this run
    config: RepConfig
}

impl<'a> RepresentativePicker<'a> {
    /// Creates a new instance of RepresentativePicker.
    /// # Arguments
    /// * `config` - the filtering and symbol options
    /// # Errors
    /// * None so far
    pub fn with_config(config: RepConfig) -> Result<RepresentativePicker<'a>, Box<dyn std::error::Error>> {
        Ok(RepresentativePicker {
            records: vec![],
            config
        })
    }

    /// Adds a new record to the end of the input.
    /// # Arguments
    /// * `record` - the aligned record to add
    /// # Errors
    /// * None so far
    pub fn add_record(&mut self, record: &'a SequenceRecord) -> Result<(), Box<dyn std::error::Error>> {
        self.records.push(record);
        Ok(())
    }

    /// Adds a collection of records in order.
    /// # Arguments
    /// * `records` - the aligned records to add
    /// # Errors
    /// * if any individual add fails
    pub fn add_records<I: IntoIterator<Item = &'a SequenceRecord>>(&mut self, records: I) -> Result<(), Box<dyn std::error::Error>> {
        for record in records.into_iter() {
            self.add_record(record)?;
        }
        Ok(())
    }

    /// The core function that gets called after adding all the records.
    /// # Errors
    /// * if no records were added
    pub fn pick(&self) -> Result<Representative<'a>, Box<dyn std::error::Error>> {
        if self.records.is_empty() {
            bail!("No sequences found.");
        }

        let gap_symbol = self.config.gap_symbol;
        let ambiguous_symbol = self.config.ambiguous_symbol;

        // filter against the full input
        let length_filter = LengthFilter::from_records(&self.records, self.config.min_len, self.config.min_len_frac, gap_symbol);
        let candidates: Vec<&'a SequenceRecord> = length_filter.apply(&self.records)
            .into_iter()
            .copied()
            .collect();
        debug!("Length filter retained {} / {} sequences (median length {})", candidates.len(), self.records.len(), length_filter.median_length());

        // everything past here is relative to the survivors only
        let sequences: Vec<&[u8]> = candidates.iter().map(|r| r.sequence()).collect();
        let consensus = build_consensus(&sequences, gap_symbol, ambiguous_symbol);
        debug!("Consensus length: {}, ambiguous columns: {}", consensus.len(), count_ambiguous(&consensus, ambiguous_symbol));

        let median_length_retained = median_length(&length_filter.retained_lengths());
        let scores = score_candidates(&sequences, &consensus, median_length_retained, gap_symbol, ambiguous_symbol);
        for (record, score) in candidates.iter().zip(scores.iter()) {
            trace!("\t{} => {:?}", record.id(), score);
        }

        let local_index = rank_candidates(&scores)[0];
        let input_index = length_filter.retained_indices()[local_index];
        let record = candidates[local_index];
        debug!("Representative: {} (input index {}, identity {})", record.id(), input_index, scores[local_index].identity());

        Ok(Representative {
            record,
            input_index,
            local_index,
            consensus,
            scores,
            retained_indices: length_filter.retained_indices().to_vec(),
            failsafe_triggered: length_filter.failsafe_triggered(),
            median_length_all: length_filter.median_length(),
            median_length_retained
        })
    }

    // getters
    pub fn records(&self) -> &[&'a SequenceRecord] {
        &self.records
    }

    pub fn config(&self) -> &RepConfig {
        &self.config
    }
}

/// Convenience wrapper that runs a RepresentativePicker over a slice of records.
/// # Arguments
/// * `records` - the aligned records, in input order
/// * `config` - the filtering and symbol options
/// # Errors
/// * if `records` is empty
pub fn pick_representative<'a>(records: &'a [SequenceRecord], config: RepConfig) -> Result<Representative<'a>, Box<dyn std::error::Error>> {
    let mut picker = RepresentativePicker::with_config(config)?;
    picker.add_records(records)?;
    picker.pick()
}
