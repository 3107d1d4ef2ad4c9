use std::collections::BTreeSet;
use std::io::Write;

use anyhow::{Context, Result};

use super::{GraphRenderer, TopologyView};
use crate::model::graph::VertexId;

/// Writes an undirected Graphviz description; layout is left to `dot`.
#[derive(Debug)]
pub struct DotRenderer<W> {
    out: W,
    name: String,
}

impl<W: Write> DotRenderer<W> {
    pub fn new(out: W, name: impl Into<String>) -> Self {
        Self {
            out,
            name: name.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn quote(raw: &str) -> String {
    format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
}

fn path_edges<Id: VertexId>(highlight: Option<&[Id]>) -> BTreeSet<(&Id, &Id)> {
    highlight
        .unwrap_or(&[])
        .windows(2)
        .map(|pair| {
            if pair[0] <= pair[1] {
                (&pair[0], &pair[1])
            } else {
                (&pair[1], &pair[0])
            }
        })
        .collect()
}

impl<W: Write, Id: VertexId> GraphRenderer<Id> for DotRenderer<W> {
    fn render(&mut self, view: &dyn TopologyView<Id>, highlight: Option<&[Id]>) -> Result<()> {
        let highlighted = path_edges(highlight);
        let on_path: BTreeSet<&Id> = highlight.unwrap_or(&[]).iter().collect();

        let mut text = format!("graph {} {{\n", quote(&self.name));
        text.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");
        for id in view.vertex_ids() {
            if on_path.contains(&id) {
                text.push_str(&format!("  {} [penwidth=2];\n", quote(&id.to_string())));
            } else {
                text.push_str(&format!("  {};\n", quote(&id.to_string())));
            }
        }
        for id in view.vertex_ids() {
            for (neighbor, resistance) in view.neighbors_of(id) {
                if id > neighbor {
                    continue;
                }
                let style = if highlighted.contains(&(id, neighbor)) {
                    ", color=\"red\", penwidth=2"
                } else {
                    ""
                };
                text.push_str(&format!(
                    "  {} -- {} [label=\"{resistance}\"{style}];\n",
                    quote(&id.to_string()),
                    quote(&neighbor.to_string()),
                ));
            }
        }
        text.push_str("}\n");

        self.out
            .write_all(text.as_bytes())
            .context("failed to write dot output")?;
        self.out.flush().context("failed to flush dot output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::Graph;

    fn render_to_string(graph: &Graph<u32>, highlight: Option<&[u32]>) -> String {
        let view: &dyn TopologyView<u32> = graph;
        let mut renderer = DotRenderer::new(Vec::new(), "circuit");
        renderer.render(view, highlight).expect("write to vec");
        String::from_utf8(renderer.into_inner()).expect("utf-8")
    }

    fn small() -> Graph<u32> {
        let mut graph = Graph::new();
        for id in [1, 2, 3, 4] {
            graph.add_vertex(id);
        }
        graph.add_edge(1, 2, 7.0);
        graph.add_edge(2, 3, 2.5);
        graph.add_edge(1, 3, 9.0);
        graph
    }

    #[test]
    fn each_edge_is_written_once_with_label() {
        let dot = render_to_string(&small(), None);
        assert!(dot.starts_with("graph \"circuit\" {\n"));
        assert!(dot.contains("  \"4\";\n"));
        assert!(dot.contains("  \"1\" -- \"2\" [label=\"7\"];\n"));
        assert!(dot.contains("  \"2\" -- \"3\" [label=\"2.5\"];\n"));
        assert_eq!(dot.matches(" -- ").count(), 3);
        assert!(!dot.contains("red"));
    }

    #[test]
    fn highlighted_path_edges_are_red() {
        let path = [3, 2, 1];
        let dot = render_to_string(&small(), Some(&path[..]));
        assert!(dot.contains("  \"1\" -- \"2\" [label=\"7\", color=\"red\", penwidth=2];\n"));
        assert!(dot.contains("  \"2\" -- \"3\" [label=\"2.5\", color=\"red\", penwidth=2];\n"));
        assert!(dot.contains("  \"1\" -- \"3\" [label=\"9\"];\n"));
        assert!(dot.contains("  \"2\" [penwidth=2];\n"));
        assert!(dot.contains("  \"4\";\n"));
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }
}
