
use crate::sequence_scoring::ungapped_length;

/// A single row of an alignment: identifier, free-text description, and the aligned residues (gaps included).
/// Records are never modified once created, the chosen representative is handed back exactly as it was provided.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SequenceRecord {
    /// The record identifier, typically the first word of a FASTA header
    id: String,
    /// The remainder of the header
    description: String,
    /// The aligned sequence, including gap symbols
    sequence: Vec<u8>
}

impl SequenceRecord {
    /// Constructor
    pub fn new(id: String, description: String, sequence: Vec<u8>) -> SequenceRecord {
        SequenceRecord {
            id,
            description,
            sequence
        }
    }

    /// Returns the number of non-gap symbols in the aligned sequence.
    /// # Arguments
    /// * `gap_symbol` - the symbol representing a gap
    pub fn ungapped_length(&self, gap_symbol: u8) -> usize {
        ungapped_length(&self.sequence, gap_symbol)
    }

    // Getters
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }
}

impl AsRef<SequenceRecord> for SequenceRecord {
    fn as_ref(&self) -> &SequenceRecord {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_getters() {
        let record = SequenceRecord::new("seq1".to_string(), "seq1 some protein".to_string(), b"AC--GT-".to_vec());
        assert_eq!(record.id(), "seq1");
        assert_eq!(record.description(), "seq1 some protein");
        assert_eq!(record.sequence(), b"AC--GT-");
        assert_eq!(record.ungapped_length(b'-'), 4);

        // alternate gap symbol
        assert_eq!(record.ungapped_length(b'.'), 7);
    }
}
