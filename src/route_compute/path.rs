use std::collections::BTreeMap;

use super::{PathResult, ShortestPaths, VertexState};
use crate::error::GraphError;
use crate::model::graph::VertexId;

/// Follows predecessor links back from `target` until a vertex without one.
///
/// The chain only starts at the run's source when `target` was reached.
pub fn reconstruct_path<Id: VertexId>(states: &BTreeMap<Id, VertexState<Id>>, target: &Id) -> Vec<Id> {
    let mut reversed = vec![target.clone()];
    let mut current = target;
    // Predecessor chains are acyclic; the bound guards against hand-built maps.
    for _ in 0..states.len() {
        let Some(parent) = states.get(current).and_then(|state| state.predecessor.as_ref()) else {
            break;
        };
        reversed.push(parent.clone());
        current = parent;
    }
    reversed.reverse();
    reversed
}

impl<Id: VertexId> ShortestPaths<Id> {
    /// Path and accumulated resistance from `source` to `target`.
    ///
    /// For an unreachable target the distance is infinite and the returned
    /// chain is not anchored at `source`. Use [`ShortestPaths::path_to`] to
    /// get `None` instead.
    ///
    /// `source` must be the vertex the run started from.
    pub fn path_between(&self, source: &Id, target: &Id) -> Result<PathResult<Id>, GraphError> {
        if !self.states.contains_key(source) {
            return Err(GraphError::vertex_not_found(source));
        }
        if source != &self.source {
            return Err(GraphError::source_mismatch(&self.source, source));
        }
        let distance = self
            .distance(target)
            .ok_or_else(|| GraphError::vertex_not_found(target))?;
        Ok(PathResult {
            nodes: reconstruct_path(&self.states, target),
            distance,
        })
    }

    /// Path from the run's source to `target`, or `None` when `target` is
    /// unknown or unreachable.
    pub fn path_to(&self, target: &Id) -> Option<PathResult<Id>> {
        if !self.is_reachable(target) {
            return None;
        }
        let path = self.path_between(&self.source, target).ok()?;
        path.starts_at(&self.source).then_some(path)
    }
}
