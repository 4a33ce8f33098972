use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use greiner_hormann::polygon::{BooleanOp, BooleanOptions, Polygon};
use test_polygons::*;

fn bench_boolean(b: &mut Bencher, subject: &Polygon<f64>, clip: &Polygon<f64>, op: BooleanOp) {
    b.iter(|| {
        let _ = subject.boolean(clip, op);
    })
}

fn bench_boolean_with_index(
    b: &mut Bencher,
    subject: &Polygon<f64>,
    clip: &Polygon<f64>,
    op: BooleanOp,
) {
    let index = clip.create_aabb_index();
    let mut options = BooleanOptions::new();
    options.clip_aabb_index = Some(&index);
    b.iter(|| {
        let _ = subject.boolean_opt(clip, op, &options);
    })
}

fn star_boolean_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("star_boolean");
    let point_counts = &[8, 64, 512, 4096];
    for &n in point_counts {
        let subject = star(n, 0.0);
        let clip = {
            let mut s = star(n, std::f64::consts::PI / n as f64);
            s.translate_mut(10.0, 5.0);
            s
        };
        for op in [BooleanOp::Intersect, BooleanOp::Union, BooleanOp::Difference] {
            group.bench_with_input(
                BenchmarkId::new(format!("{op:?}"), n),
                &n,
                |b, _| bench_boolean(b, &subject, &clip, op),
            );
        }
        group.bench_with_input(BenchmarkId::new("IntersectPrebuiltIndex", n), &n, |b, _| {
            bench_boolean_with_index(b, &subject, &clip, BooleanOp::Intersect)
        });
    }

    group.finish();
}

fn aabb_index_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_aabb_index");
    for &n in &[64, 4096] {
        let p = star(n, 0.0);
        group.bench_with_input(BenchmarkId::new("star", n), &n, |b, _| {
            b.iter(|| p.create_aabb_index())
        });
    }

    group.finish();
}

criterion_group!(benches, star_boolean_group, aabb_index_group);
criterion_main!(benches);
