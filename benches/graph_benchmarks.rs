use artistgraph::{
    export, ArtistGraph, ArtistId, ArtistNode, PageRankConfig, ProviderResult, RawArtist,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Synthetic relation with fan-out 5: artist n{i} relates to the next five
/// ids modulo twice the requested bound, so exploration always saturates.
fn synthetic_related(id: &ArtistId, bound: usize) -> Vec<RawArtist> {
    let n: usize = id.as_str()[1..].parse().unwrap_or(0);
    (1..=5)
        .map(|k| {
            let m = (n * 5 + k) % (bound * 2);
            RawArtist::new(format!("n{}", m), format!("Artist {}", m), 40)
        })
        .collect()
}

fn populated_graph(bound: usize) -> ArtistGraph {
    let provider =
        |id: &ArtistId| -> ProviderResult<Vec<RawArtist>> { Ok(synthetic_related(id, bound)) };
    let seed = ArtistNode::from_record(RawArtist::new("n0", "Artist 0", 40)).unwrap();
    let mut graph = ArtistGraph::new(seed);
    graph.populate(&provider, bound).unwrap();
    graph
}

/// Benchmark bounded exploration throughput
fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("populate");

    for bound in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(bound), bound, |b, &bound| {
            b.iter(|| {
                let graph = populated_graph(bound);
                black_box(graph.len());
            });
        });
    }
    group.finish();
}

/// Benchmark the fixed-iteration ranking pass
fn bench_page_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_rank");

    for bound in [10, 100, 1000].iter() {
        let graph = populated_graph(*bound);
        let config = PageRankConfig::default();

        group.bench_with_input(BenchmarkId::from_parameter(bound), bound, |b, _| {
            b.iter(|| {
                let mut ranked = graph.clone();
                ranked.run_page_rank(&config);
                black_box(ranked.rank_sum());
            });
        });
    }
    group.finish();
}

/// Benchmark payload rendering
fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for bound in [10, 100, 1000].iter() {
        let mut graph = populated_graph(*bound);
        graph.run_page_rank(&PageRankConfig::default());

        group.bench_with_input(BenchmarkId::from_parameter(bound), bound, |b, _| {
            b.iter(|| {
                let payload = export(&graph);
                black_box(payload.nodes.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_populate, bench_page_rank, bench_export);
criterion_main!(benches);
