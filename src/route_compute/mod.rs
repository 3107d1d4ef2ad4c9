mod frontier;
mod path;
mod report;
mod spf;
#[cfg(test)]
pub(crate) mod test_support;
mod traits;
mod types;

pub use path::reconstruct_path;
pub use spf::compute_spf;
pub use traits::SpfObserver;
pub use types::{FrontierKind, PathResult, ShortestPaths, VertexState, VertexSummary};
