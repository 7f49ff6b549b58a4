//! Benchmarks for the frame scan loop
//!
//! Measures end-to-end analysis throughput over synthetic streams:
//! - a clean stream of valid frames (the fast path)
//! - marker-free noise (pure prefix scanning)
//! - a stream with corrupted trailers (re-synchronization seek-backs)

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use framesift::test_utils::{build_frame, build_stream};
use framesift::{FrameType, Framesift, StreamSource};
use std::hint::black_box;

/// Keep engine logs quiet unless RUST_LOG asks for them; warn-level noise
/// from the corrupted-trailer bench would otherwise skew timings.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn valid_stream(frames_per_type: u32) -> Vec<u8> {
    build_stream(
        (1..=frames_per_type)
            .flat_map(|seq| FrameType::ALL.map(move |t| build_frame(t, seq, seq as u8))),
    )
}

fn bench_clean_stream(c: &mut Criterion) {
    init_tracing();
    let stream = valid_stream(10);

    let mut group = c.benchmark_group("scan_clean_stream");
    group.throughput(Throughput::Bytes(stream.len() as u64));

    group.bench_function("valid_frames", |b| {
        b.iter(|| {
            let mut source = StreamSource::from_bytes(black_box(stream.clone()));
            let stats = Framesift::analyze(&mut source).expect("analysis failed");
            black_box(stats)
        })
    });

    group.finish();
}

fn bench_marker_free_noise(c: &mut Criterion) {
    init_tracing();
    let noise: Vec<u8> = (0..1_000_000u32).map(|i| (i % 0x7B) as u8).collect();

    let mut group = c.benchmark_group("scan_noise");
    group.throughput(Throughput::Bytes(noise.len() as u64));

    group.bench_function("marker_free", |b| {
        b.iter(|| {
            let mut source = StreamSource::from_bytes(black_box(noise.clone()));
            let stats = Framesift::analyze(&mut source).expect("analysis failed");
            black_box(stats)
        })
    });

    group.finish();
}

fn bench_corrupted_trailers(c: &mut Criterion) {
    init_tracing();
    let mut stream = Vec::new();
    for seq in 1..=50u32 {
        let mut frame = build_frame(FrameType::Frame1, seq, seq as u8);
        if seq % 2 == 0 {
            let last = frame.len() - 1;
            frame[last] ^= 0xFF;
        }
        stream.extend(frame);
    }

    let mut group = c.benchmark_group("scan_resync");
    group.throughput(Throughput::Bytes(stream.len() as u64));

    group.bench_function("half_corrupted", |b| {
        b.iter(|| {
            let mut source = StreamSource::from_bytes(black_box(stream.clone()));
            let stats = Framesift::analyze(&mut source).expect("analysis failed");
            black_box(stats)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_clean_stream, bench_marker_free_noise, bench_corrupted_trailers);
criterion_main!(benches);
