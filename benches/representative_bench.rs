use criterion::{black_box, criterion_group, criterion_main, Criterion};

use msa_rep::example_gen::generate_alignment;
use msa_rep::rep_config::RepConfigBuilder;
use msa_rep::representative::RepresentativePicker;

pub fn bench_representative(c: &mut Criterion) {
    let alphabet_size = 20;
    let aln_lens = [1000, 10000];
    let num_samples = [8, 100];
    let error_rates = [0.0, 0.05];

    let mut benchmark_group = c.benchmark_group("representative-group");
    benchmark_group.sample_size(10);

    // drop anything under 80% of the median
    let config = RepConfigBuilder::default()
        .min_len_frac(0.8)
        .build().unwrap();

    for &al in aln_lens.iter() {
        for &ns in num_samples.iter() {
            // a quarter of the inputs are fragments
            let num_fragments = ns / 4;
            for &er in error_rates.iter() {
                let (_consensus, dataset) = generate_alignment(alphabet_size, al, ns, er, num_fragments, 0);
                let test_label = format!("representative_{alphabet_size}x{al}x{ns}_{er}");
                benchmark_group.bench_function(&test_label, |b| b.iter(|| {
                    black_box({
                        let mut picker = RepresentativePicker::with_config(config.clone()).unwrap();
                        picker.add_records(dataset.iter()).unwrap();
                        let representative = picker.pick().unwrap();
                        representative.input_index()
                    });
                }));
            }
        }
    }

    benchmark_group.finish();
}

criterion_group!(benches, bench_representative);
criterion_main!(benches);
