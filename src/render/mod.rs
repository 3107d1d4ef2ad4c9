mod dot;

use anyhow::Result;

use crate::model::graph::{Graph, VertexId};

pub use dot::DotRenderer;

/// Read-only view a renderer draws from.
pub trait TopologyView<Id> {
    fn vertex_ids(&self) -> Vec<&Id>;

    /// `(neighbor, resistance)` pairs; empty for unknown ids.
    fn neighbors_of(&self, id: &Id) -> &[(Id, f64)];
}

impl<Id: VertexId> TopologyView<Id> for Graph<Id> {
    fn vertex_ids(&self) -> Vec<&Id> {
        Graph::vertex_ids(self).collect()
    }

    fn neighbors_of(&self, id: &Id) -> &[(Id, f64)] {
        self.neighbors(id).unwrap_or(&[])
    }
}

pub trait GraphRenderer<Id> {
    /// Draws `view`, emphasizing consecutive pairs of `highlight` when given.
    fn render(&mut self, view: &dyn TopologyView<Id>, highlight: Option<&[Id]>) -> Result<()>;
}
