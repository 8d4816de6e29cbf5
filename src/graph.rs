use std::fmt::{Debug, Display, Formatter};

use thiserror::Error;

pub mod matrix;
pub mod shortest_path;
pub mod traversal;

pub use matrix::MatrixGraph;
pub use shortest_path::{AllPairsPaths, ShortestPaths};
pub use traversal::Bfs;

/// Vertices are indices in `0..vertex_count`.
pub type Vertex = usize;
pub type Weight = i32;

/// Matrix cell value meaning "no edge". Also the distance of an unreachable vertex.
pub const NO_EDGE: Weight = Weight::MAX;

/// Vertex count of the classic fixed-size graph.
pub const CLASSIC_VERTICES: usize = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Directed,
    /// Every link and unlink is mirrored.
    Undirected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("negative edge {from} -> {to} with weight {weight}")]
    NegativeEdge {
        from: Vertex,
        to: Vertex,
        weight: Weight,
    },
    #[error("negative cycle through vertex {vertex}")]
    NegativeCycle { vertex: Vertex },
}

/// Used to pretty print a Weight, outputting ∞ if it is NO_EDGE.
pub struct PrettyWeight(pub Weight);

impl Display for PrettyWeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 == NO_EDGE {
            write!(f, "∞")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Debug for PrettyWeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}
