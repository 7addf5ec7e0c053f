use criterion::{black_box, criterion_group, criterion_main, Criterion};
use edit_align::{align_intervals_hyp_to_ref, edit_distance};

fn benchmark_edit_distance(c: &mut Criterion) {
    let reference: Vec<&str> = "the quick brown fox jumps over the lazy dog near the river bank"
        .split_whitespace()
        .collect();
    let hypothesis: Vec<&str> = "a quick brown fox jumped over lazy dogs near the river bank today"
        .split_whitespace()
        .collect();

    c.bench_function("edit_distance", |b| {
        b.iter(|| edit_distance(black_box(&reference), black_box(&hypothesis)))
    });
}

fn benchmark_align_intervals(c: &mut Criterion) {
    let reference: Vec<char> = "abbbacccaa".repeat(20).chars().collect();
    let hypothesis: Vec<char> = "abacaa".repeat(20).chars().collect();
    let intervals: Vec<(usize, usize)> = (0..20).map(|k| (k * 6 + 1, k * 6 + 3)).collect();

    c.bench_function("align_intervals_hyp_to_ref", |b| {
        b.iter(|| {
            align_intervals_hyp_to_ref(
                black_box(&hypothesis),
                black_box(&reference),
                black_box(&intervals),
            )
        })
    });
}

criterion_group!(benches, benchmark_edit_distance, benchmark_align_intervals);
criterion_main!(benches);
