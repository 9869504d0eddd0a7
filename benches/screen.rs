//! Screen benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use conio::core::Screen;
use conio::io::{Console, Fd, QueuedSource};

fn bench_sequential_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");

    // Measure storing glyphs along a row
    let bytes = b"Hello, World! ".repeat(5);

    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("put_chars", |b| {
        b.iter(|| {
            let mut screen = Screen::new();
            for &ch in &bytes {
                screen.put_char(ch);
            }
            black_box(screen)
        })
    });

    group.finish();
}

fn bench_scroll_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");

    // Fill the display and keep scrolling
    let mut input = Vec::new();
    for i in 0..100 {
        input.extend_from_slice(format!("Line {}: Some text content here\n", i).as_bytes());
    }

    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("scroll", |b| {
        b.iter(|| {
            let mut screen = Screen::new();
            for &ch in &input {
                screen.put_char(ch);
            }
            black_box(screen)
        })
    });

    group.finish();
}

fn bench_positioned_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");

    group.bench_function("put_char_at", |b| {
        b.iter(|| {
            let mut screen = Screen::new();
            for row in 0..60u8 {
                for col in 0..80u8 {
                    screen.put_char_at(col, row, b'X');
                }
            }
            black_box(screen)
        })
    });

    group.finish();
}

fn bench_console_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("console");

    // The whole write surface: full-display payload in one call
    let payload = b"0123456789".repeat(480);

    group.throughput(Throughput::Bytes(payload.len() as u64));

    group.bench_function("write", |b| {
        b.iter(|| {
            let mut console = Console::new(QueuedSource::new());
            console.write(Fd::STDOUT, &payload);
            black_box(console.screen().cursor())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_writes,
    bench_scroll_churn,
    bench_positioned_writes,
    bench_console_write
);

criterion_main!(benches);
