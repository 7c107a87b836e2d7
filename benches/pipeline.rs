//! Benchmarks for the blocks pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blocks::{execute, parse_script, script_events, Canvas, Colour, EventLog};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A script of `lines` lines, each mixing every token kind.
fn generated_script(lines: usize) -> String {
    let mut source = String::from("# generated\n");
    for i in 0..lines {
        source.push_str(&format!(
            "block.color-red.repeat-{} space-1 block.size-2.color-blue bogus end\n",
            i % 5 + 1
        ));
    }
    source
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let fixture = load_fixture("skyline.blocks");
    let large = generated_script(1_000);

    group.bench_function("parse_fixture", |b| {
        b.iter(|| parse_script(black_box(&fixture)))
    });

    group.bench_function("parse_1000_lines", |b| {
        b.iter(|| parse_script(black_box(&large)))
    });

    group.finish();
}

// -- Execution benchmarks --

fn bench_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution");

    let large = generated_script(1_000);
    let commands = parse_script(&large);

    group.bench_function("execute_1000_lines", |b| {
        b.iter(|| {
            let mut log = EventLog::new();
            execute(black_box(&commands), &mut log);
            log
        })
    });

    group.bench_function("run_1000_lines", |b| {
        b.iter(|| script_events(black_box(&large)))
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let fixture = load_fixture("skyline.blocks");
    let events = script_events(&fixture);

    group.bench_function("rasterise_fixture_unit_16", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new();
            for event in &events {
                event.replay(&mut canvas);
            }
            canvas.rasterise("skyline", black_box(16), Colour::WHITE).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_execution, bench_rendering);
criterion_main!(benches);
