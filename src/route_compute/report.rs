use tracing::info;

use super::{ShortestPaths, VertexSummary};
use crate::model::graph::VertexId;

impl<Id: VertexId> ShortestPaths<Id> {
    pub fn summary(&self) -> Vec<VertexSummary<Id>> {
        self.states
            .iter()
            .map(|(id, state)| VertexSummary {
                id: id.clone(),
                distance: state.distance.is_finite().then_some(state.distance),
                predecessor: state.predecessor.clone(),
                visited: state.visited,
            })
            .collect()
    }

    /// One line per vertex in ascending id order.
    pub fn report_lines(&self) -> Vec<String> {
        self.states
            .iter()
            .map(|(id, state)| match &state.predecessor {
                Some(predecessor) => format!(
                    "vertex {id}: resistance {} from {predecessor}",
                    state.distance
                ),
                None if id == &self.source => {
                    format!("vertex {id}: resistance {} (source)", state.distance)
                }
                None => format!("vertex {id}: unreached"),
            })
            .collect()
    }

    pub fn report(&self) {
        for line in self.report_lines() {
            info!("{line}");
        }
    }
}
