use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use super::frontier::DistanceFrontier;
use super::{FrontierKind, ShortestPaths, SpfObserver, VertexState};
use crate::error::GraphError;
use crate::model::graph::{Graph, VertexId};

type States<Id> = BTreeMap<Id, VertexState<Id>>;

impl<Id: VertexId> Graph<Id> {
    /// Least-resistance distances and predecessors from `source`, using the
    /// linear-scan frontier.
    pub fn run_from(&self, source: &Id) -> Result<ShortestPaths<Id>, GraphError> {
        self.run_from_with(source, FrontierKind::LinearScan)
    }

    pub fn run_from_with(
        &self,
        source: &Id,
        frontier: FrontierKind,
    ) -> Result<ShortestPaths<Id>, GraphError> {
        compute_spf(self, source, frontier, &mut ())
    }

    pub fn run_from_observed<O: SpfObserver<Id>>(
        &self,
        source: &Id,
        frontier: FrontierKind,
        observer: &mut O,
    ) -> Result<ShortestPaths<Id>, GraphError> {
        compute_spf(self, source, frontier, observer)
    }
}

/// Single-source relaxation. Fails without allocating any state when
/// `source` is not a vertex of `graph`.
pub fn compute_spf<Id, O>(
    graph: &Graph<Id>,
    source: &Id,
    frontier: FrontierKind,
    observer: &mut O,
) -> Result<ShortestPaths<Id>, GraphError>
where
    Id: VertexId,
    O: SpfObserver<Id>,
{
    if !graph.contains_vertex(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    let mut states: States<Id> = graph
        .vertex_ids()
        .map(|id| (id.clone(), VertexState::default()))
        .collect();
    if let Some(state) = states.get_mut(source) {
        state.distance = 0.0;
    }

    match frontier {
        FrontierKind::LinearScan => run_linear_scan(graph, source, &mut states, observer),
        FrontierKind::Heap => run_heap(graph, source, &mut states, observer),
    }

    let result = ShortestPaths {
        source: source.clone(),
        frontier,
        states,
    };
    debug!(
        "spf from {source} ({frontier}): visited {} of {} vertices",
        result.visited_count(),
        graph.len()
    );
    Ok(result)
}

fn run_linear_scan<Id, O>(graph: &Graph<Id>, source: &Id, states: &mut States<Id>, observer: &mut O)
where
    Id: VertexId,
    O: SpfObserver<Id>,
{
    let mut unvisited: BTreeSet<Id> = graph.vertex_ids().cloned().collect();
    let mut current = source.clone();

    loop {
        relax_neighbors(graph, &current, states, observer, |_, _| {});
        settle(&current, states, observer);
        unvisited.remove(&current);

        match nearest_unvisited(&unvisited, states) {
            Some(next) => current = next,
            None => break,
        }
    }
}

fn run_heap<Id, O>(graph: &Graph<Id>, source: &Id, states: &mut States<Id>, observer: &mut O)
where
    Id: VertexId,
    O: SpfObserver<Id>,
{
    let mut frontier = DistanceFrontier::new();
    frontier.push(source.clone(), 0.0);

    loop {
        let Some((current, _)) = frontier.pop_min(|node, cost| match states.get(node) {
            Some(state) => state.visited || cost > state.distance,
            None => true,
        }) else {
            break;
        };

        relax_neighbors(graph, &current, states, observer, |node, cost| {
            frontier.push(node.clone(), cost)
        });
        settle(&current, states, observer);
    }
}

// First unvisited vertex (ascending id) with the smallest finite distance.
fn nearest_unvisited<Id: VertexId>(unvisited: &BTreeSet<Id>, states: &States<Id>) -> Option<Id> {
    let mut best: Option<(&Id, f64)> = None;
    for id in unvisited {
        let distance = states.get(id).map_or(f64::INFINITY, |state| state.distance);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((id, distance)),
        }
    }
    best.filter(|(_, distance)| distance.is_finite())
        .map(|(id, _)| id.clone())
}

fn relax_neighbors<Id, O, F>(
    graph: &Graph<Id>,
    current: &Id,
    states: &mut States<Id>,
    observer: &mut O,
    mut on_improved: F,
) where
    Id: VertexId,
    O: SpfObserver<Id>,
    F: FnMut(&Id, f64),
{
    let Some(base) = states.get(current).map(|state| state.distance) else {
        return;
    };
    let Some(neighbors) = graph.neighbors(current) else {
        return;
    };

    for (neighbor, resistance) in neighbors {
        let Some(state) = states.get_mut(neighbor) else {
            continue;
        };
        if state.visited {
            continue;
        }
        let candidate = base + *resistance;
        if candidate < state.distance {
            let previous = state.distance;
            state.distance = candidate;
            state.predecessor = Some(current.clone());
            trace!("relax {neighbor}: {previous} -> {candidate} via {current}");
            observer.on_relax(neighbor, previous, candidate, current);
            on_improved(neighbor, candidate);
        }
    }
}

fn settle<Id, O>(current: &Id, states: &mut States<Id>, observer: &mut O)
where
    Id: VertexId,
    O: SpfObserver<Id>,
{
    if let Some(state) = states.get_mut(current) {
        state.visited = true;
        observer.on_settle(current, state.distance);
    }
}
