use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use respath::runtime::config::load_topology_config;
use respath::{FrontierKind, Graph, ShortestPaths};
use serde_json::{json, Value};

#[derive(Debug, Parser)]
#[command(name = "spf_bench")]
#[command(about = "Compare linear-scan and heap frontiers on random topologies")]
struct Args {
    #[arg(long, default_value_t = 200)]
    nodes: usize,
    #[arg(long, default_value_t = 0.05)]
    density: f64,
    #[arg(long, default_value_t = 3)]
    seeds: usize,
    #[arg(long, default_value_t = 1)]
    start_seed: u64,
    #[arg(long, default_value_t = 8)]
    iterations: usize,
    #[arg(long)]
    topology: Option<PathBuf>,
    #[arg(long)]
    output_json: Option<PathBuf>,
}

#[derive(Debug, Clone)]
struct LcgRng {
    state: u64,
}

impl LcgRng {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        let raw = self.next_u64() >> 11;
        (raw as f64) / ((1_u64 << 53) as f64)
    }

    fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

// Ring backbone keeps every vertex reachable; extra chords follow `density`.
fn generate_graph(seed: u64, nodes: usize, density: f64) -> Graph<u32> {
    let mut rng = LcgRng::new(seed);
    let mut graph = Graph::new();
    let nodes = nodes as u32;

    for node in 1..=nodes {
        graph.add_vertex(node);
    }
    if nodes >= 2 {
        for node in 1..=nodes {
            let next = if node == nodes { 1 } else { node + 1 };
            graph.add_edge(node, next, rng.range_f64(1.0, 20.0));
        }
    }

    let p = density.clamp(0.0, 1.0);
    for u in 1..=nodes {
        for v in (u + 1)..=nodes {
            if rng.next_f64() < p {
                graph.add_edge(u, v, rng.range_f64(1.0, 20.0));
            }
        }
    }
    graph
}

fn bench_frontier(
    graph: &Graph<u32>,
    source: u32,
    frontier: FrontierKind,
    iterations: usize,
) -> Result<(Value, ShortestPaths<u32>)> {
    let mut elapsed_ms = 0.0;
    let mut last = None;

    for _ in 0..iterations.max(1) {
        let start = Instant::now();
        let paths = graph.run_from_with(&source, frontier)?;
        elapsed_ms += start.elapsed().as_secs_f64() * 1000.0;
        last = Some(paths);
    }
    let Some(paths) = last else {
        bail!("no iterations ran");
    };

    let reachable = paths.states().filter(|(_, state)| state.distance.is_finite()).count();
    let row = json!({
        "frontier": frontier.as_str(),
        "runtime_ms": elapsed_ms / iterations.max(1) as f64,
        "reachable": reachable,
    });
    Ok((row, paths))
}

fn bench_graph(graph: &Graph<u32>, iterations: usize) -> Result<Value> {
    let Some(source) = graph.vertex_ids().next().copied() else {
        bail!("topology has no vertices");
    };

    let (linear_row, linear) = bench_frontier(graph, source, FrontierKind::LinearScan, iterations)?;
    let (heap_row, heap) = bench_frontier(graph, source, FrontierKind::Heap, iterations)?;
    let agree = linear
        .states()
        .zip(heap.states())
        .all(|((_, a), (_, b))| a.distance == b.distance);
    if !agree {
        bail!("frontiers disagree on distances from {source}");
    }

    Ok(json!({
        "nodes": graph.len(),
        "edges": graph.edge_count(),
        "source": source,
        "frontiers": [linear_row, heap_row],
    }))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut runs = Vec::new();
    if let Some(path) = &args.topology {
        let graph = load_topology_config(path)?.build_graph();
        runs.push(bench_graph(&graph, args.iterations)?);
    } else {
        for offset in 0..args.seeds.max(1) {
            let seed = args.start_seed + offset as u64;
            let graph = generate_graph(seed, args.nodes, args.density);
            let mut row = bench_graph(&graph, args.iterations)?;
            if let Some(map) = row.as_object_mut() {
                map.insert("seed".to_string(), json!(seed));
            }
            runs.push(row);
        }
    }

    let payload = json!({
        "config": {
            "nodes": args.nodes,
            "density": args.density,
            "seeds": args.seeds,
            "start_seed": args.start_seed,
            "iterations": args.iterations,
            "topology": args.topology,
        },
        "runs": runs,
    });

    if let Some(path) = args.output_json {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec_pretty(&payload)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}
