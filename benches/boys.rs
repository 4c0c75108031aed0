use boys_function::{boys_into, boys_range_into, DoubleDouble};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const ARGUMENTS: [f64; 8] = [0.0, 0.4, 1.7, 3.3, 4.9, 7.5, 18.0, 60.0];

fn bench_full_range(c: &mut Criterion) {
    let mut out = [0.0_f64; 9];
    c.bench_function("boys_f64_m8", |b| {
        b.iter(|| {
            for &t in &ARGUMENTS {
                let _ = boys_into(black_box(t), &mut out).unwrap();
            }
        });
    });

    let mut out = [DoubleDouble::default(); 9];
    let arguments = ARGUMENTS.map(DoubleDouble::from);
    c.bench_function("boys_double_double_m8", |b| {
        b.iter(|| {
            for &t in &arguments {
                let _ = boys_into(black_box(t), &mut out).unwrap();
            }
        });
    });
}

fn bench_range_limited(c: &mut Criterion) {
    let mut out = [0.0_f64; 9];
    c.bench_function("boys_range_f64_m8", |b| {
        b.iter(|| {
            for &t in &ARGUMENTS {
                let _ = boys_range_into(black_box(t), black_box(0.35), &mut out).unwrap();
            }
        });
    });
}

criterion_group!(benches, bench_full_range, bench_range_limited);
criterion_main!(benches);
