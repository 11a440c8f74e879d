//! Benchmark harness: measures analyze → gap → render pipeline performance.
//!
//! Run with: cargo bench -p gapscope-cli

use std::time::Instant;

use gapscope_core::{KeywordMap, OpportunityRecord};
use gapscope_render::JsonlWriter;
use gapscope_score::GapFinder;
use gapscope_text::KeywordAnalyzer;

const TOPICS: &[&str] = &[
    "keyword research",
    "content strategy",
    "link building",
    "technical audit",
    "local citations",
    "schema markup",
    "page speed",
    "internal linking",
];

fn synthetic_pages(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let a = TOPICS[i % TOPICS.len()];
            let b = TOPICS[(i * 3 + 1) % TOPICS.len()];
            let c = TOPICS[(i * 5 + 2) % TOPICS.len()];
            format!(
                "<h1>{a} guide</h1> A practical {a} checklist for {b}. \
                 Teams combine {a} with {c} to improve rankings. \
                 Review {b} tools and {c} examples every quarter. \
                 Read our {a} case study number {i}."
            )
        })
        .collect()
}

fn bench_analyze(analyzer: &KeywordAnalyzer, pages: &[String]) -> KeywordMap {
    analyzer.analyze_documents(pages, 2)
}

fn bench_gaps(competitor: &KeywordMap, user: &KeywordMap) -> Vec<OpportunityRecord> {
    GapFinder::default().find_gaps(competitor, user)
}

fn bench_render(records: &[OpportunityRecord]) -> String {
    JsonlWriter::new(0.8).render(records).unwrap()
}

fn run_benchmark(label: &str, page_count: usize) {
    let analyzer = KeywordAnalyzer::default();
    let pages = synthetic_pages(page_count);
    let user = analyzer.analyze_text(&pages[0], 1);
    let iterations = 5;

    // Warmup
    let competitor = bench_analyze(&analyzer, &pages);
    let _ = bench_gaps(&competitor, &user);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = bench_analyze(&analyzer, &pages);
    }
    let analyze_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = bench_gaps(&competitor, &user);
    }
    let gaps_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    let records = bench_gaps(&competitor, &user);
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = bench_render(&records);
    }
    let render_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    let total_ms = analyze_ms + gaps_ms + render_ms;

    println!("{label}:");
    println!("  Pages:     {page_count}");
    println!("  Keywords:  {}", competitor.len());
    println!("  Gaps:      {}", records.len());
    println!("  Analyze:   {analyze_ms:.1}ms");
    println!("  Gaps:      {gaps_ms:.1}ms");
    println!("  Render:    {render_ms:.1}ms");
    println!("  Total:     {total_ms:.1}ms");
    println!();
}

fn main() {
    println!("gapscope Pipeline Benchmarks");
    println!("============================\n");

    run_benchmark("Small crawl (10 pages)", 10);
    run_benchmark("Medium crawl (50 pages)", 50);
    run_benchmark("Large crawl (200 pages)", 200);

    println!("Done.");
}
