use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizij_tween_core::{AdvanceOptions, EasingLibrary, Tween, TweenConfig};

fn bench_advance(c: &mut Criterion) {
    let cfg = TweenConfig::default()
        .with_duration(1.5)
        .with_loops(0)
        .with_pingpong(true);

    c.bench_function("advance_linear_60fps", |b| {
        let mut tween = Tween::new(cfg.clone()).expect("valid config");
        b.iter(|| black_box(tween.advance(black_box(1.0 / 60.0), AdvanceOptions::new())))
    });

    c.bench_function("advance_all_curves", |b| {
        let curves: Vec<_> = EasingLibrary::iter().collect();
        let mut tween = Tween::new(cfg.clone()).expect("valid config");
        b.iter(|| {
            let mut acc = 0.0;
            for curve in &curves {
                acc += tween.advance(1.0 / 240.0, AdvanceOptions::new().curve(*curve));
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
