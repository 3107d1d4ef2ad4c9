use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::model::graph::Graph;
use crate::route_compute::FrontierKind;

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeConfig {
    pub a: u32,
    pub b: u32,
    pub resistance: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryConfig {
    pub source: Option<u32>,
    pub target: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopologyConfig {
    pub name: String,
    pub vertices: Vec<u32>,
    pub edges: Vec<EdgeConfig>,
    pub query: QueryConfig,
    pub frontier: FrontierKind,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    a: u32,
    b: u32,
    #[serde(alias = "weight")]
    resistance: f64,
}

#[derive(Debug, Deserialize, Default)]
struct RawQuery {
    source: Option<u32>,
    target: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawTopologyConfig {
    name: Option<String>,
    vertices: Option<Vec<u32>>,
    #[serde(default)]
    edges: Vec<RawEdge>,
    query: Option<RawQuery>,
    frontier: Option<FrontierKind>,
}

pub fn load_topology_config(path: &Path) -> Result<TopologyConfig> {
    let raw_text = fs::read_to_string(path)
        .with_context(|| format!("failed to read topology file {}", path.display()))?;
    parse_topology_config(&raw_text)
        .with_context(|| format!("invalid topology file {}", path.display()))
}

/// Parses a YAML (or JSON) topology document. Without an explicit
/// `vertices` list, every edge endpoint becomes a vertex.
pub fn parse_topology_config(raw_text: &str) -> Result<TopologyConfig> {
    let raw_cfg: RawTopologyConfig =
        serde_yaml::from_str(raw_text).context("failed to parse topology yaml")?;

    let edges: Vec<EdgeConfig> = raw_cfg
        .edges
        .into_iter()
        .map(|edge| EdgeConfig {
            a: edge.a,
            b: edge.b,
            resistance: edge.resistance,
        })
        .collect();

    let vertices = match raw_cfg.vertices {
        Some(vertices) => vertices,
        None => edges
            .iter()
            .flat_map(|edge| [edge.a, edge.b])
            .collect::<BTreeSet<u32>>()
            .into_iter()
            .collect(),
    };

    let query = raw_cfg.query.unwrap_or_default();

    Ok(TopologyConfig {
        name: raw_cfg
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "graph".to_string()),
        vertices,
        edges,
        query: QueryConfig {
            source: query.source,
            target: query.target,
        },
        frontier: raw_cfg.frontier.unwrap_or_default(),
    })
}

impl TopologyConfig {
    pub fn build_graph(&self) -> Graph<u32> {
        let mut graph = Graph::new();
        for id in &self.vertices {
            graph.add_vertex(*id);
        }
        for edge in &self.edges {
            if !graph.contains_vertex(&edge.a) || !graph.contains_vertex(&edge.b) {
                warn!(
                    "topology {}: drop edge {} -- {} with undeclared endpoint",
                    self.name, edge.a, edge.b
                );
                continue;
            }
            graph.add_edge(edge.a, edge.b, edge.resistance);
        }
        graph
    }
}
