
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};

use crate::sequence_record::SequenceRecord;

/// Residues used for generated alignments; excludes the default ambiguous symbol
const RESIDUES: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// Creates an aligned test set we can verify is working.
/// Returns the true consensus and the records, with full length records first followed by the fragments.
/// # Arguments
/// * `alphabet_size` - the number of residues to use, e.g. 4 for a DNA-like alphabet; max 20
/// * `aln_len` - the number of alignment columns
/// * `num_samples` - the number of full length records to generate from the consensus
/// * `error_rate` - overall error rate, assumes substitution and deletion (gap) are equally likely sub-components of this error rate
/// * `num_fragments` - the number of additional records that only cover at most half of the alignment
/// * `seed` - the random seed
pub fn generate_alignment(alphabet_size: usize, aln_len: usize, num_samples: usize, error_rate: f64, num_fragments: usize, seed: u64) -> (Vec<u8>, Vec<SequenceRecord>) {
    assert!(alphabet_size > 1 && alphabet_size <= RESIDUES.len());
    assert!((0.0..=1.0).contains(&error_rate));
    assert!(aln_len > 1);

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let base_distribution = Uniform::new(0, alphabet_size);
    let basem1_distribution = Uniform::new(1, alphabet_size);
    let error_distribution = Uniform::new(0.0, 1.0);
    let error_type_distribution = Uniform::new(0, 2);

    let consensus_indices: Vec<usize> = (0..aln_len)
        .map(|_i| rng.sample(base_distribution))
        .collect();
    let consensus: Vec<u8> = consensus_indices.iter()
        .map(|&c| RESIDUES[c])
        .collect();

    let mut records: Vec<SequenceRecord> = Vec::with_capacity(num_samples + num_fragments);
    for sample_index in 0..(num_samples + num_fragments) {
        let mut sequence: Vec<u8> = consensus_indices.iter()
            .map(|&c| {
                let is_error = rng.sample(error_distribution) < error_rate;
                if is_error {
                    match rng.sample(error_type_distribution) {
                        0 => {
                            // substitution
                            let sub_offset = rng.sample(basem1_distribution);
                            RESIDUES[(c + sub_offset) % alphabet_size]
                        },
                        1 => {
                            // deletion
                            b'-'
                        },
                        _ => panic!("no impl")
                    }
                } else {
                    RESIDUES[c]
                }
            })
            .collect();

        let id = if sample_index < num_samples {
            format!("sample_{sample_index}")
        } else {
            // fragment, gap out everything outside a window of at most half the alignment
            let window_len = (aln_len / 2).max(1);
            let start = rng.sample(Uniform::new_inclusive(0, aln_len - window_len));
            for (i, s) in sequence.iter_mut().enumerate() {
                if i < start || i >= start + window_len {
                    *s = b'-';
                }
            }
            format!("fragment_{}", sample_index - num_samples)
        };
        let description = format!("{id} generated");
        records.push(SequenceRecord::new(id, description, sequence));
    }

    (consensus, records)
}
