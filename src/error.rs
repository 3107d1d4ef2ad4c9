use thiserror::Error;

/// Errors returned by graph construction and shortest-path queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The referenced vertex id is not part of the graph.
    #[error("vertex {0} not found")]
    VertexNotFound(String),

    /// A path was requested from a vertex other than the one the run
    /// started at.
    #[error("paths were computed from {expected}, not from {got}")]
    SourceMismatch { expected: String, got: String },
}

impl GraphError {
    pub fn vertex_not_found(id: &impl std::fmt::Display) -> Self {
        Self::VertexNotFound(id.to_string())
    }

    pub fn source_mismatch(expected: &impl std::fmt::Display, got: &impl std::fmt::Display) -> Self {
        Self::SourceMismatch {
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }
}
