use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use crate::error::GraphError;

/// Bound for vertex identifiers: comparable for deterministic iteration and
/// printable for reports and errors.
pub trait VertexId: Ord + Clone + fmt::Debug + fmt::Display {}

impl<T> VertexId for T where T: Ord + Clone + fmt::Debug + fmt::Display {}

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<Id> {
    id: Id,
    neighbors: Vec<(Id, f64)>,
}

impl<Id: VertexId> Vertex<Id> {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    /// `(neighbor, resistance)` pairs in insertion order.
    pub fn neighbors(&self) -> &[(Id, f64)] {
        &self.neighbors
    }

    pub fn resistance_to(&self, neighbor: &Id) -> Option<f64> {
        self.neighbors
            .iter()
            .find(|(id, _)| id == neighbor)
            .map(|(_, resistance)| *resistance)
    }

    // Keeps the first resistance recorded for a neighbor.
    fn add_neighbor(&mut self, neighbor: Id, resistance: f64) -> bool {
        if self.neighbors.iter().any(|(id, _)| *id == neighbor) {
            return false;
        }
        self.neighbors.push((neighbor, resistance));
        true
    }
}

/// One undirected edge, reported once with `a <= b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<Id> {
    pub a: Id,
    pub b: Id,
    pub resistance: f64,
}

/// Weighted undirected graph. Owns every vertex; traversal results live in
/// [`crate::ShortestPaths`] so the topology is never mutated by a run.
///
/// Edge resistances must be non-negative for shortest-path results to be
/// correct. They are not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<Id> {
    vertices: BTreeMap<Id, Vertex<Id>>,
}

impl<Id: VertexId> Default for Graph<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: VertexId> Graph<Id> {
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    /// Inserts a vertex if absent. Returns `false` when it already existed.
    pub fn add_vertex(&mut self, id: Id) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.vertices.insert(id.clone(), Vertex::new(id));
        true
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// Silently does nothing when either endpoint is missing; use
    /// [`Graph::try_add_edge`] for the strict variant. Returns whether any
    /// neighbor entry was inserted.
    pub fn add_edge(&mut self, a: Id, b: Id, resistance: f64) -> bool {
        if !self.vertices.contains_key(&a) || !self.vertices.contains_key(&b) {
            debug!("ignore edge {a} -- {b}: endpoint not in graph");
            return false;
        }
        if !resistance.is_finite() || resistance < 0.0 {
            warn!("edge {a} -- {b} has unsupported resistance {resistance}");
        }

        let mut inserted = false;
        if let Some(vertex) = self.vertices.get_mut(&a) {
            inserted |= vertex.add_neighbor(b.clone(), resistance);
        }
        if let Some(vertex) = self.vertices.get_mut(&b) {
            inserted |= vertex.add_neighbor(a, resistance);
        }
        inserted
    }

    pub fn try_add_edge(&mut self, a: Id, b: Id, resistance: f64) -> Result<(), GraphError> {
        for endpoint in [&a, &b] {
            if !self.vertices.contains_key(endpoint) {
                return Err(GraphError::vertex_not_found(endpoint));
            }
        }
        self.add_edge(a, b, resistance);
        Ok(())
    }

    pub fn contains_vertex(&self, id: &Id) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn vertex(&self, id: &Id) -> Option<&Vertex<Id>> {
        self.vertices.get(id)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<Id>> {
        self.vertices.values()
    }

    /// Vertex ids in ascending order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &Id> {
        self.vertices.keys()
    }

    pub fn neighbors(&self, id: &Id) -> Option<&[(Id, f64)]> {
        self.vertices.get(id).map(Vertex::neighbors)
    }

    pub fn edges(&self) -> Vec<Edge<Id>> {
        let mut out = Vec::new();
        for (id, vertex) in &self.vertices {
            for (neighbor, resistance) in vertex.neighbors() {
                if id <= neighbor {
                    out.push(Edge {
                        a: id.clone(),
                        b: neighbor.clone(),
                        resistance: *resistance,
                    });
                }
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<u32> {
        let mut graph = Graph::new();
        for id in [1, 2, 3] {
            graph.add_vertex(id);
        }
        graph.add_edge(1, 2, 7.0);
        graph.add_edge(2, 3, 10.0);
        graph.add_edge(1, 3, 9.0);
        graph
    }

    #[test]
    fn add_edge_is_symmetric() {
        let graph = triangle();
        for edge in graph.edges() {
            let a = graph.vertex(&edge.a).expect("vertex a");
            let b = graph.vertex(&edge.b).expect("vertex b");
            assert_eq!(a.resistance_to(&edge.b), Some(edge.resistance));
            assert_eq!(b.resistance_to(&edge.a), Some(edge.resistance));
        }
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn repeated_inserts_do_not_change_graph() {
        let mut graph = triangle();
        let before = graph.clone();

        assert!(!graph.add_vertex(2));
        assert!(!graph.add_edge(1, 2, 7.0));
        assert!(!graph.add_edge(2, 1, 7.0));
        assert_eq!(graph, before);
    }

    #[test]
    fn duplicate_edge_keeps_first_resistance() {
        let mut graph = triangle();
        graph.add_edge(1, 2, 100.0);
        assert_eq!(graph.vertex(&1).and_then(|v| v.resistance_to(&2)), Some(7.0));
        assert_eq!(graph.neighbors(&1).map(<[_]>::len), Some(2));
    }

    #[test]
    fn edge_to_missing_vertex_is_ignored() {
        let mut graph = triangle();
        let before = graph.clone();

        assert!(!graph.add_edge(1, 42, 3.0));
        assert!(!graph.add_edge(42, 1, 3.0));
        assert_eq!(graph, before);
        assert!(!graph.contains_vertex(&42));
    }

    #[test]
    fn try_add_edge_reports_missing_endpoint() {
        let mut graph = triangle();
        assert_eq!(
            graph.try_add_edge(3, 9, 1.0),
            Err(GraphError::VertexNotFound("9".to_string()))
        );
        assert_eq!(graph.try_add_edge(3, 3, 1.0), Ok(()));
        assert_eq!(graph.vertex(&3).and_then(|v| v.resistance_to(&3)), Some(1.0));
    }

    #[test]
    fn string_ids_are_supported() {
        let mut graph: Graph<String> = Graph::new();
        graph.add_vertex("anode".to_string());
        graph.add_vertex("cathode".to_string());
        assert!(graph.add_edge("anode".to_string(), "cathode".to_string(), 4.5));
        assert_eq!(
            graph.vertex_ids().cloned().collect::<Vec<_>>(),
            vec!["anode".to_string(), "cathode".to_string()]
        );
    }
}
