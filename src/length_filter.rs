/*!
Removes sequences that are too short to be a good representative before any scoring happens.
A sequence is kept if its ungapped length passes both an absolute floor and a floor relative to the median length of all inputs.
If the thresholds would remove every sequence, the filter disables itself and everything is kept.

# Example usage
```rust
use msa_rep::length_filter::LengthFilter;

// the last sequence is a fragment
let lengths = vec![5, 5, 5, 1];
let length_filter = LengthFilter::new(lengths, 3, 0.0);
assert_eq!(length_filter.retained_indices(), &[0, 1, 2]);
assert!(!length_filter.failsafe_triggered());

// nothing passes, so nothing is removed
let length_filter = LengthFilter::new(vec![5, 5, 5, 1], 10, 0.0);
assert_eq!(length_filter.retained_indices(), &[0, 1, 2, 3]);
assert!(length_filter.failsafe_triggered());
```
*/

use itertools::Itertools;
use log::debug;

use crate::sequence_record::SequenceRecord;

/// Returns the median of a collection of lengths.
/// For an even number of values, this is the mean of the two middle values.
/// An empty collection has a median of 0.0.
/// # Arguments
/// * `lengths` - the lengths to get the median of, order does not matter
/// # Examples
/// ```rust
/// use msa_rep::length_filter::median_length;
/// assert_eq!(median_length(&[5, 1, 3]), 3.0);
/// assert_eq!(median_length(&[4, 1, 3, 10]), 3.5);
/// assert_eq!(median_length(&[]), 0.0);
/// ```
pub fn median_length(lengths: &[usize]) -> f64 {
    if lengths.is_empty() {
        return 0.0;
    }

    let sorted: Vec<usize> = lengths.iter().cloned().sorted_unstable().collect();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    }
}

/// The outcome of length filtering over a population of sequences.
#[derive(Clone, Debug, PartialEq)]
pub struct LengthFilter {
    /// The ungapped length of every input, in input order
    lengths: Vec<usize>,
    /// The median of `lengths`, this is the reference for the relative threshold
    median_length: f64,
    /// Indices into the input that survived filtering, in input order
    retained_indices: Vec<usize>,
    /// If true, the thresholds removed everything and were ignored
    failsafe_triggered: bool
}

impl LengthFilter {
    /// Runs the length filter on a collection of ungapped lengths.
    /// # Arguments
    /// * `lengths` - the ungapped length of each input sequence, in input order
    /// * `min_len` - the absolute minimum length to keep, 0 disables this check
    /// * `min_len_frac` - the minimum length to keep as a fraction of the median length, values <= 0.0 disable this check
    pub fn new(lengths: Vec<usize>, min_len: usize, min_len_frac: f64) -> LengthFilter {
        let median_length = median_length(&lengths);
        let relative_floor = min_len_frac * median_length;

        let mut retained_indices: Vec<usize> = lengths.iter().enumerate()
            .filter(|&(_i, &l)| {
                let absolute_ok = min_len == 0 || l >= min_len;
                let relative_ok = min_len_frac <= 0.0 || l as f64 >= relative_floor;
                absolute_ok && relative_ok
            })
            .map(|(i, _l)| i)
            .collect();

        let failsafe_triggered = retained_indices.is_empty() && !lengths.is_empty();
        if failsafe_triggered {
            debug!("Length filter (min_len={min_len}, min_len_frac={min_len_frac}) removed all {} sequences, disabling filter", lengths.len());
            retained_indices = (0..lengths.len()).collect();
        }

        LengthFilter {
            lengths,
            median_length,
            retained_indices,
            failsafe_triggered
        }
    }

    /// Runs the length filter on a collection of records.
    /// # Arguments
    /// * `records` - the input records, in input order
    /// * `min_len` - the absolute minimum length to keep, 0 disables this check
    /// * `min_len_frac` - the minimum length to keep as a fraction of the median length, values <= 0.0 disable this check
    /// * `gap_symbol` - the symbol representing a gap
    pub fn from_records<R: AsRef<SequenceRecord>>(records: &[R], min_len: usize, min_len_frac: f64, gap_symbol: u8) -> LengthFilter {
        let lengths: Vec<usize> = records.iter()
            .map(|r| r.as_ref().ungapped_length(gap_symbol))
            .collect();
        LengthFilter::new(lengths, min_len, min_len_frac)
    }

    /// Returns the retained items from a slice that is parallel to the original input.
    /// # Arguments
    /// * `items` - anything in the same order as the lengths this filter was built from
    /// # Panics
    /// * if `items` is not the same length as the filtered input
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        assert_eq!(items.len(), self.lengths.len());
        self.retained_indices.iter()
            .map(|&i| &items[i])
            .collect()
    }

    /// Returns the ungapped lengths of the retained inputs, in input order.
    pub fn retained_lengths(&self) -> Vec<usize> {
        self.retained_indices.iter()
            .map(|&i| self.lengths[i])
            .collect()
    }

    /// Returns the number of inputs that were removed.
    pub fn num_removed(&self) -> usize {
        self.lengths.len() - self.retained_indices.len()
    }

    // Getters
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn median_length(&self) -> f64 {
        self.median_length
    }

    pub fn retained_indices(&self) -> &[usize] {
        &self.retained_indices
    }

    pub fn failsafe_triggered(&self) -> bool {
        self.failsafe_triggered
    }
}

/// Filters records by ungapped length, returning the survivors in input order.
/// If no record survives, all records are returned.
/// # Arguments
/// * `records` - the input records
/// * `min_len` - the absolute minimum length to keep, 0 disables this check
/// * `min_len_frac` - the minimum length to keep as a fraction of the median length, values <= 0.0 disable this check
/// * `gap_symbol` - the symbol representing a gap
/// # Examples
/// ```rust
/// use msa_rep::length_filter::filter;
/// use msa_rep::sequence_record::SequenceRecord;
/// let records = vec![
///     SequenceRecord::new("a".to_string(), "a".to_string(), b"ACGT".to_vec()),
///     SequenceRecord::new("b".to_string(), "b".to_string(), b"A---".to_vec()),
///     SequenceRecord::new("c".to_string(), "c".to_string(), b"ACG-".to_vec())
/// ];
/// // median is 3, so the floor is 1.5
/// let kept = filter(&records, 0, 0.5, b'-');
/// let kept_ids: Vec<&str> = kept.iter().map(|r| r.id()).collect();
/// assert_eq!(kept_ids, vec!["a", "c"]);
/// ```
pub fn filter<'a>(records: &'a [SequenceRecord], min_len: usize, min_len_frac: f64, gap_symbol: u8) -> Vec<&'a SequenceRecord> {
    let length_filter = LengthFilter::from_records(records, min_len, min_len_frac, gap_symbol);
    length_filter.apply(records)
}
