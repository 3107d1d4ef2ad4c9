use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::graph::VertexId;

/// How the next vertex to finalize is picked. Config files and the CLI
/// accept the same spellings through [`FromStr`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum FrontierKind {
    /// Scan every unvisited vertex, O(V) per step.
    #[default]
    LinearScan,
    /// Binary heap keyed by `(distance, id)`.
    Heap,
}

impl FrontierKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LinearScan => "linear_scan",
            Self::Heap => "heap",
        }
    }
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrontierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "linear_scan" | "linear" | "scan" => Ok(Self::LinearScan),
            "heap" | "binary_heap" => Ok(Self::Heap),
            other => Err(format!("unknown frontier '{other}' (expected linear_scan or heap)")),
        }
    }
}

impl TryFrom<String> for FrontierKind {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// Traversal state of one vertex within a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexState<Id> {
    pub distance: f64,
    pub predecessor: Option<Id>,
    pub visited: bool,
}

impl<Id> Default for VertexState<Id> {
    fn default() -> Self {
        Self {
            distance: f64::INFINITY,
            predecessor: None,
            visited: false,
        }
    }
}

/// Outcome of one single-source run. Every vertex of the graph has an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<Id> {
    pub(crate) source: Id,
    pub(crate) frontier: FrontierKind,
    pub(crate) states: BTreeMap<Id, VertexState<Id>>,
}

impl<Id: VertexId> ShortestPaths<Id> {
    pub fn source(&self) -> &Id {
        &self.source
    }

    pub fn frontier(&self) -> FrontierKind {
        self.frontier
    }

    pub fn state(&self, id: &Id) -> Option<&VertexState<Id>> {
        self.states.get(id)
    }

    /// States in ascending id order.
    pub fn states(&self) -> impl Iterator<Item = (&Id, &VertexState<Id>)> {
        self.states.iter()
    }

    /// Accumulated resistance from the source; `None` for unknown ids,
    /// infinity for unreached ones.
    pub fn distance(&self, id: &Id) -> Option<f64> {
        self.states.get(id).map(|state| state.distance)
    }

    pub fn predecessor(&self, id: &Id) -> Option<&Id> {
        self.states.get(id).and_then(|state| state.predecessor.as_ref())
    }

    pub fn is_reachable(&self, id: &Id) -> bool {
        self.distance(id).is_some_and(f64::is_finite)
    }

    pub fn visited_count(&self) -> usize {
        self.states.values().filter(|state| state.visited).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<Id> {
    pub nodes: Vec<Id>,
    pub distance: f64,
}

impl<Id: VertexId> PathResult<Id> {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    pub fn starts_at(&self, id: &Id) -> bool {
        self.nodes.first() == Some(id)
    }

    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

impl<Id: fmt::Display> fmt::Display for PathResult<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, node) in self.nodes.iter().enumerate() {
            if idx > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, " (resistance {})", self.distance)
    }
}

/// Serializable per-vertex row of a run. Unreached vertices carry no
/// distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexSummary<Id> {
    pub id: Id,
    pub distance: Option<f64>,
    pub predecessor: Option<Id>,
    pub visited: bool,
}
