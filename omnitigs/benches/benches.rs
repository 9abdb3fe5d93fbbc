use criterion::{black_box, criterion_group, criterion_main, Criterion};
use omnitigs::omnitigs::Omnitigs;
use omnitigs::traitgraph::algo::components::{
    decompose_strongly_connected_components, extract_subgraph, strongly_connected_component_of,
};
use omnitigs::traitgraph::algo::predefined_graphs::{create_cycle, create_random_graph};
use omnitigs::traitgraph::implementation::petgraph_impl;
use omnitigs::traitgraph::interface::ImmutableGraphContainer;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_compute_omnitigs_cycle_100(criterion: &mut Criterion) {
    let mut graph = petgraph_impl::new::<(), ()>();
    create_cycle(&mut graph, 100);

    criterion.bench_function("compute_omnitigs_cycle_100", |b| {
        b.iter(|| black_box(Omnitigs::compute(&graph).unwrap()))
    });
}

fn bench_compute_omnitigs_random_scc(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let mut graph = petgraph_impl::new::<(), ()>();
    create_random_graph(&mut graph, 200, 300, &mut random);

    // Search in the largest strongly connected component, like on an assembly graph.
    let roots = decompose_strongly_connected_components(&graph);
    let largest_root = graph
        .node_indices()
        .max_by_key(|&root| roots.iter().filter(|&&other| other == root).count())
        .unwrap();
    let component = strongly_connected_component_of(&graph, largest_root);
    let subgraph: petgraph_impl::PetGraph<(), ()> = extract_subgraph(&graph, &component);

    criterion.bench_function("compute_omnitigs_random_scc_200", |b| {
        b.iter(|| black_box(Omnitigs::compute(&subgraph).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_compute_omnitigs_cycle_100,
    bench_compute_omnitigs_random_scc,
);
criterion_main!(benches);
