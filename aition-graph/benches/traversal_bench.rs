use criterion::{criterion_group, criterion_main, Criterion};

use aition_core::traits::ICausalStore;
use aition_graph::patterns::PatternAnalyzer;
use aition_graph::traversal::{Direction, TraversalEngine};
use aition_storage::StorageEngine;
use test_fixtures::edge;

/// ~600 edges: 200 nodes, up to 3 forward edges per node.
fn build_fanout_store() -> StorageEngine {
    let store = StorageEngine::open_in_memory().unwrap();
    let n = 200;
    let mut stamp = 0_i64;
    let mut count = 0;
    for i in 0..n {
        for j in 1..=3 {
            let target = i + j;
            if target < n {
                store
                    .store(
                        edge("agent-1", &format!("n{i}"), &format!("n{target}"))
                            .at(stamp)
                            .strength(0.7)
                            .build(),
                    )
                    .unwrap();
                stamp += 1;
                count += 1;
            }
        }
    }
    assert!(count >= 580, "should have ~600 edges, got {count}");
    store
}

fn bench_traversal_depth_5(c: &mut Criterion) {
    let store = build_fanout_store();
    let engine = TraversalEngine::new(&store);

    c.bench_function("traversal_depth_5_600_edges", |b| {
        b.iter(|| {
            engine.traverse("n0", Direction::Forward, 5).unwrap();
        });
    });
}

fn bench_traversal_bidirectional(c: &mut Criterion) {
    let store = build_fanout_store();
    let engine = TraversalEngine::new(&store);

    c.bench_function("traversal_both_depth_3_600_edges", |b| {
        b.iter(|| {
            engine.traverse("n100", Direction::Both, 3).unwrap();
        });
    });
}

fn bench_pattern_analysis(c: &mut Criterion) {
    let store = build_fanout_store();
    let analyzer = PatternAnalyzer::new(&store);

    c.bench_function("pattern_analysis_600_edges", |b| {
        b.iter(|| {
            analyzer.analyze("agent-1").unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_traversal_depth_5,
    bench_traversal_bidirectional,
    bench_pattern_analysis
);
criterion_main!(benches);
