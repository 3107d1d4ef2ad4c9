use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use respath::render::{DotRenderer, GraphRenderer, TopologyView};
use respath::runtime::config::load_topology_config;
use respath::FrontierKind;
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "respath")]
#[command(about = "Least-resistance paths over a weighted undirected topology")]
struct Args {
    #[arg(long)]
    topology: PathBuf,
    #[arg(long)]
    source: Option<u32>,
    #[arg(long)]
    target: Option<u32>,
    #[arg(long)]
    frontier: Option<FrontierKind>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(long)]
    dot: Option<PathBuf>,
    #[arg(long, default_value = "INFO")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let cfg = load_topology_config(&args.topology)?;
    let graph = cfg.build_graph();
    let frontier = args.frontier.unwrap_or(cfg.frontier);
    let Some(source) = args.source.or(cfg.query.source) else {
        bail!("no source vertex: pass --source or set query.source in the topology");
    };
    let target = args.target.or(cfg.query.target);

    info!(
        "topology {}: {} vertices, {} edges",
        cfg.name,
        graph.len(),
        graph.edge_count()
    );

    let paths = graph
        .run_from_with(&source, frontier)
        .context("cannot run from requested source")?;
    let path = target
        .map(|target| paths.path_between(&source, &target))
        .transpose()
        .context("cannot reconstruct requested path")?;

    match args.format {
        OutputFormat::Text => {
            if let (Some(target), Some(path)) = (target, &path) {
                if path.is_reachable() {
                    println!("path: {path}");
                } else {
                    println!("no path from {source} to {target}");
                }
            }
            for line in paths.report_lines() {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let body = json!({
                "topology": cfg.name,
                "source": source,
                "frontier": frontier.as_str(),
                "vertices": paths.summary(),
                "path": path.as_ref().filter(|path| path.is_reachable()),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&body).context("failed to encode result json")?
            );
        }
    }

    if let Some(dot_path) = &args.dot {
        let file = File::create(dot_path)
            .with_context(|| format!("failed to create dot file {}", dot_path.display()))?;
        let highlight = path
            .as_ref()
            .filter(|path| path.is_reachable())
            .map(|path| path.nodes.as_slice());
        let view: &dyn TopologyView<u32> = &graph;
        DotRenderer::new(BufWriter::new(file), cfg.name.as_str()).render(view, highlight)?;
        info!("wrote {}", dot_path.display());
    }
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let level = level.parse::<Level>()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .init();
    Ok(())
}
