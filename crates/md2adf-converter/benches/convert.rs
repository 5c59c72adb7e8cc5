//! Benchmarks for markdown to ADF conversion.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use md2adf_converter::convert;

/// Generate an issue description with the given number of sections.
fn generate_markdown(sections: usize) -> String {
    let mut md = String::with_capacity(sections * 400);
    md.push_str("# Incident report\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        md.push_str("Observed **high latency** on *checkout* after `deploy` ");
        md.push_str("([runbook](https://example.com/runbook)).\n\n");
        md.push_str("- first step\n- second step\n1. verify\n2. close\n\n");
        md.push_str("| Service | Status |\n|---|---|\n| api | degraded |\n| web | ok |\n\n");
        md.push_str("```sh\nkubectl rollout undo deploy/api\n```\n\n");
    }
    md
}

fn bench_convert_simple(c: &mut Criterion) {
    c.bench_function("convert_simple", |b| {
        b.iter(|| convert("# Hello\n\nSimple **content**."));
    });
}

fn bench_convert_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_sections");

    for sections in [1, 10, 100] {
        let markdown = generate_markdown(sections);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(sections),
            &markdown,
            |b, markdown| {
                b.iter(|| convert(markdown).to_adf());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_convert_simple, bench_convert_varying_sizes);
criterion_main!(benches);
