pub mod error;
pub mod model;
pub mod render;
pub mod route_compute;
pub mod runtime;

pub use error::GraphError;
pub use model::graph::{Edge, Graph, Vertex, VertexId};
pub use route_compute::{
    FrontierKind, PathResult, ShortestPaths, SpfObserver, VertexState, VertexSummary,
};
