use criterion::{black_box, criterion_group, criterion_main, Criterion};
use random_choices::{Choice, Randomizer};

fn population(n: usize, uniform: bool) -> Vec<Choice<usize>> {
    (0..n)
        .map(|i| {
            if uniform {
                Choice::uniform(i)
            } else {
                Choice::new(i, 1.0 + (i % 7) as f64).expect("weight ok")
            }
        })
        .collect()
}

fn bench_with_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_replacement");

    let sizes = [10, 1_000, 100_000];
    let k = 1_000;

    for &size in &sizes {
        group.bench_function(format!("uniform_n{}_k{}", size, k), |b| {
            let mut r = Randomizer::seeded(1).with_population(population(size, true));
            b.iter(|| black_box(r.sample_with_replacement(black_box(k))))
        });
    }

    for &size in &sizes {
        group.bench_function(format!("weighted_n{}_k{}", size, k), |b| {
            let mut r = Randomizer::seeded(1).with_population(population(size, false));
            b.iter(|| black_box(r.sample_with_replacement(black_box(k))))
        });
    }
    group.finish();
}

fn bench_without_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("without_replacement");

    let sizes = [100, 1_000];
    let k = 50;

    for &size in &sizes {
        group.bench_function(format!("replenish_n{}_k{}", size, k), |b| {
            let mut r = Randomizer::seeded(1).with_population(population(size, false));
            b.iter(|| black_box(r.sample_without_replacement(black_box(k), true)))
        });
    }
    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    let sizes = [1_000, 100_000];

    for &size in &sizes {
        let pop = population(size, false);
        group.bench_function(format!("recompute_n{}", size), |b| {
            let mut r = Randomizer::seeded(1);
            b.iter(|| {
                r.set_population(pop.clone());
                black_box(r.total_weight());
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_with_replacement,
    bench_without_replacement,
    bench_stats
);
criterion_main!(benches);
