use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fixed_bitset::FixedBitSet;
use std::{collections::HashSet, hint::black_box};

const UNIVERSES: &[usize] = &[64, 500, 5000];

fn sparse(universe: usize, step: usize) -> FixedBitSet<u32, u64> {
    let mut set = FixedBitSet::new(universe).unwrap();
    set.extend((0..universe as u32).step_by(step));
    set
}

fn bench_element_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_operations");

    group.bench_function("insert", |b| {
        let mut set = FixedBitSet::<u32, u64>::new(500).unwrap();
        let mut i = 0;
        b.iter(|| {
            set.insert(black_box(i % 500));
            i += 1;
        });
    });

    group.bench_function("remove", |b| {
        let mut set = sparse(500, 1);
        let mut i = 0;
        b.iter(|| {
            set.remove(black_box(i % 500));
            i += 1;
        });
    });

    group.bench_function("contains", |b| {
        let set = sparse(500, 2);
        let mut i = 0;
        b.iter(|| {
            black_box(set.contains(i % 500));
            i += 1;
        });
    });

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &universe in UNIVERSES {
        let set = sparse(universe, 2);

        group.bench_with_input(BenchmarkId::new("iter", universe), &set, |b, set| {
            b.iter(|| {
                for e in set {
                    black_box(e);
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("for_each_member", universe),
            &set,
            |b, set| {
                b.iter(|| {
                    set.for_each_member(|e| {
                        black_box(e);
                        true
                    })
                });
            },
        );
    }

    group.finish();
}

fn bench_set_operations_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_operations");

    for &universe in UNIVERSES {
        let a = sparse(universe, 2);
        let b = sparse(universe, 3);

        group.bench_with_input(
            BenchmarkId::new("union_with", universe),
            &(&a, &b),
            |bench, (a, b)| {
                let mut dst = (*a).clone();
                bench.iter(|| {
                    dst.union_with(b);
                    black_box(&dst);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("intersect_with", universe),
            &(&a, &b),
            |bench, (a, b)| {
                let mut dst = (*a).clone();
                bench.iter(|| {
                    dst.intersect_with(b);
                    black_box(&dst);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("copy_from", universe),
            &(&a, &b),
            |bench, (a, b)| {
                let mut dst = (*a).clone();
                bench.iter(|| {
                    dst.copy_from(b);
                    black_box(&dst);
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("complement", universe), &a, |bench, a| {
            let mut dst = a.clone();
            bench.iter(|| {
                dst.complement();
                black_box(&dst);
            });
        });

        group.bench_with_input(BenchmarkId::new("is_empty", universe), &a, |bench, a| {
            bench.iter(|| black_box(a.is_empty()));
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &universe in UNIVERSES {
        let indices: Vec<u32> = (0..universe as u32).step_by(2).collect();

        group.bench_with_input(
            BenchmarkId::new("fixed_bitset", universe),
            &indices,
            |b, indices| {
                b.iter(|| {
                    let mut set = FixedBitSet::<u32, u64>::new(universe).unwrap();
                    set.extend(indices);
                    black_box(set);
                });
            },
        );

        // Compare with HashSet for reference
        group.bench_with_input(BenchmarkId::new("hashset", universe), &indices, |b, indices| {
            b.iter(|| {
                let set: HashSet<u32> = indices.iter().copied().collect();
                black_box(set);
            });
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for &universe in UNIVERSES {
        let set = sparse(universe, 2);

        group.bench_with_input(BenchmarkId::new("clone", universe), &set, |b, set| {
            b.iter(|| black_box(set.clone()));
        });

        group.bench_with_input(BenchmarkId::new("clone_from", universe), &set, |b, set| {
            let mut dst = FixedBitSet::<u32, u64>::new(universe).unwrap();
            b.iter(|| {
                dst.clone_from(set);
                black_box(&dst);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_element_operations,
    bench_iteration,
    bench_set_operations_bulk,
    bench_build,
    bench_clone,
);

criterion_main!(benches);
