use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use traitgraph::algo::components::decompose_strongly_connected_components;
use traitgraph::algo::predefined_graphs::{create_cycle, create_random_graph};
use traitgraph::algo::reachability::ReachabilityQueries;
use traitgraph::algo::traversal::{Bfs, TraversalDirection};
use traitgraph::implementation::petgraph_impl;
use traitgraph::interface::{ImmutableGraphContainer, NavigableGraph};

fn bench_petgraph_forward_bfs_cycle_10000(criterion: &mut Criterion) {
    let mut graph = petgraph_impl::new::<(), ()>();
    let root = create_cycle(&mut graph, 10_000).unwrap();

    criterion.bench_function("petgraph_bfs_cycle_10000", |b| {
        b.iter(|| {
            for node in Bfs::new(&graph, TraversalDirection::Forward, root) {
                black_box(node);
            }
        })
    });
}

fn bench_petgraph_reachable_from_random_1000(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let mut graph = petgraph_impl::new::<(), ()>();
    create_random_graph(&mut graph, 1000, 2000, &mut random);
    let start = graph.node_indices().next().unwrap();

    criterion.bench_function("petgraph_reachable_from_random_1000", |b| {
        b.iter(|| black_box(graph.reachable_from(start)))
    });
}

fn bench_petgraph_reachable_without_edge_random_1000(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let mut graph = petgraph_impl::new::<(), ()>();
    create_random_graph(&mut graph, 1000, 2000, &mut random);
    let start = graph
        .node_indices()
        .find(|&node| graph.out_degree(node) > 0)
        .unwrap();
    let edge = graph.out_neighbors(start).next().unwrap().edge_id;

    criterion.bench_function("petgraph_reachable_without_edge_random_1000", |b| {
        b.iter(|| black_box(graph.without_edge(edge).reachable_from(start)))
    });
}

fn bench_petgraph_strongly_connected_components_random_10000(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let mut graph = petgraph_impl::new::<(), ()>();
    create_random_graph(&mut graph, 10_000, 15_000, &mut random);

    criterion.bench_function("petgraph_scc_random_10000", |b| {
        b.iter(|| black_box(decompose_strongly_connected_components(&graph)))
    });
}

criterion_group!(
    benches,
    bench_petgraph_forward_bfs_cycle_10000,
    bench_petgraph_reachable_from_random_1000,
    bench_petgraph_reachable_without_edge_random_1000,
    bench_petgraph_strongly_connected_components_random_10000,
);
criterion_main!(benches);
