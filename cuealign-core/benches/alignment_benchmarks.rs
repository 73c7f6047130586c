//! Benchmarks for script segmentation and per-delta alignment latency

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cuealign_core::{segment, AlignerConfig, Aligner, ManualClock};
use std::hint::black_box;

const ENGLISH: &str = "Good evening everyone and thank you for coming tonight. \
We have a lot to cover, so let us begin with the numbers from 2.5 million users! \
Did anyone expect that? ";
const CHINESE: &str = "你好世界。今天天气很好，我们开始吧！大家准备好了吗？";

/// Repeat a paragraph until the script has roughly `segments` segments
fn generate_script(paragraph: &str, segments: usize) -> String {
    let per_paragraph = segment(paragraph).len().max(1);
    paragraph.repeat(segments.div_ceil(per_paragraph))
}

/// Transcript prefixes a recogniser would emit while reading `script` aloud
fn transcript_prefixes(script: &str) -> Vec<String> {
    let mut prefixes = Vec::new();
    let mut spoken = String::new();
    for word in script.split_whitespace() {
        if !spoken.is_empty() {
            spoken.push(' ');
        }
        spoken.push_str(word.trim_matches(|c: char| !c.is_alphanumeric()));
        prefixes.push(spoken.clone());
    }
    prefixes
}

fn benchmark_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for (name, paragraph) in [("english", ENGLISH), ("chinese", CHINESE)] {
        let script = generate_script(paragraph, 1_000);
        group.throughput(Throughput::Bytes(script.len() as u64));
        group.bench_with_input(BenchmarkId::new(name, "1k_segments"), &script, |b, script| {
            b.iter(|| segment(black_box(script)));
        });
    }

    group.finish();
}

fn benchmark_live_reading(c: &mut Criterion) {
    let mut group = c.benchmark_group("live_reading");

    for segments in [10, 100] {
        let script = generate_script(ENGLISH, segments);
        let prefixes = transcript_prefixes(&script);

        group.throughput(Throughput::Elements(prefixes.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("english_word_by_word", segments),
            &prefixes,
            |b, prefixes| {
                b.iter(|| {
                    let clock = ManualClock::new();
                    let mut aligner =
                        Aligner::with_clock(&script, AlignerConfig::default(), clock.clone())
                            .unwrap();
                    for prefix in prefixes {
                        clock.advance(std::time::Duration::from_millis(120));
                        black_box(aligner.consume_transcript(prefix));
                    }
                    aligner.state()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_segmentation, benchmark_live_reading);
criterion_main!(benches);
