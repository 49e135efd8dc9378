//! Benchmarks for frame fan-out.
//!
//! Run with: cargo bench -p pose-interp-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pose_interp_core::{Config, Engine, FrameSet, InterpolationKind, ManualClock, PoseConfig};

fn engine(frames: usize) -> Engine<FrameSet, ManualClock> {
    let cfg = Config {
        duration: 5.0,
        intermediate_frames: frames,
        start: PoseConfig {
            position: [-1.0, 0.0, 0.0],
            euler: [0.3, -0.2, 2.9],
            quat: None,
        },
        end: PoseConfig {
            position: [1.0, 0.5, 0.0],
            euler: [-0.4, 0.6, -2.8],
            quat: None,
        },
        ..Config::default()
    };
    match Engine::from_config_with_time_source(FrameSet::default(), &cfg, ManualClock::new()) {
        Ok(eng) => eng,
        Err(e) => panic!("bench config rejected: {e}"),
    }
}

fn bench_update_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_frames");
    for frames in [2usize, 10, 100] {
        group.throughput(Throughput::Elements((3 * (frames + 1)) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(frames), &frames, |b, &n| {
            let mut eng = engine(n);
            b.iter(|| {
                eng.update_frames();
                black_box(eng.targets());
            });
        });
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut eng = engine(10);
    let time = eng.time_source().clone();
    eng.start();
    c.bench_function("tick_running", |b| {
        b.iter(|| {
            if !eng.is_running() {
                eng.reset();
                eng.start();
            }
            time.advance(1e-6);
            eng.tick();
            black_box(eng.current_time());
        });
    });
}

fn bench_sample(c: &mut Criterion) {
    let eng = engine(10);
    let mut group = c.benchmark_group("sample");
    for kind in InterpolationKind::ALL {
        group.bench_function(kind.label(), |b| {
            b.iter(|| black_box(eng.sample(kind, black_box(2.5))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_update_frames, bench_tick, bench_sample);
criterion_main!(benches);
