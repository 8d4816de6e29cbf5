//! Dense weighted graph stored as a vertex_count x vertex_count matrix.

use std::fmt::{Debug, Formatter};

use debug_tree::{add_branch_to, add_leaf_to, AsTree, TreeBuilder};

use super::{Direction, PrettyWeight as W, Vertex, Weight, CLASSIC_VERTICES, NO_EDGE};
use crate::check::check_index;

#[derive(Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    n: usize,
    direction: Direction,
    /// Row-major, `matrix[u * n + v]` is the weight of u -> v.
    matrix: Vec<Weight>,
}

impl Debug for MatrixGraph {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        self.tree_dbg(&builder);
        writeln!(f, "{}", builder.string())
    }
}

impl MatrixGraph {
    /// Directed graph on `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self::with_direction(n, Direction::Directed)
    }

    pub fn with_direction(n: usize, direction: Direction) -> Self {
        Self {
            n,
            direction,
            matrix: vec![NO_EDGE; n * n],
        }
    }

    /// Directed graph on the classic 7 vertices.
    pub fn classic() -> Self {
        Self::new(CLASSIC_VERTICES)
    }

    /// Directed graph on `n` vertices with the given `(from, to, weight)` edges.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (Vertex, Vertex, Weight)>) -> Self {
        let mut g = Self::new(n);
        for (u, v, w) in edges {
            g.link(u, v, w);
        }
        g
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn idx(&self, u: Vertex, v: Vertex) -> usize {
        check_index("vertex", u, self.n);
        check_index("vertex", v, self.n);
        u * self.n + v
    }

    /// Sets the weight of u -> v, replacing any previous edge. Linking with `NO_EDGE` unlinks.
    pub fn link(&mut self, u: Vertex, v: Vertex, weight: Weight) {
        let i = self.idx(u, v);
        self.matrix[i] = weight;
        if self.direction == Direction::Undirected {
            let j = self.idx(v, u);
            self.matrix[j] = weight;
        }
        log::trace!("link {u} -> {v} = {:?}", W(weight));
    }

    pub fn unlink(&mut self, u: Vertex, v: Vertex) {
        self.link(u, v, NO_EDGE);
    }

    pub fn is_adjacent(&self, u: Vertex, v: Vertex) -> bool {
        self.matrix[self.idx(u, v)] != NO_EDGE
    }

    /// Weight of u -> v, if the edge exists.
    pub fn weight(&self, u: Vertex, v: Vertex) -> Option<Weight> {
        let w = self.matrix[self.idx(u, v)];
        (w != NO_EDGE).then_some(w)
    }

    /// Outgoing weights of u, `NO_EDGE` where there is no edge.
    pub fn row(&self, u: Vertex) -> &[Weight] {
        check_index("vertex", u, self.n);
        &self.matrix[u * self.n..(u + 1) * self.n]
    }

    pub(crate) fn cells(&self) -> &[Weight] {
        &self.matrix
    }

    /// Out-neighbours of u with their weights, by increasing index.
    pub fn neighbors(&self, u: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        self.row(u)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, w)| w != NO_EDGE)
    }

    /// All edges as `(from, to, weight)`. Undirected edges are listed once, with `from <= to`.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, Weight)> + '_ {
        let undirected = self.direction == Direction::Undirected;
        (0..self.n).flat_map(move |u| {
            self.neighbors(u)
                .filter(move |&(v, _)| !undirected || u <= v)
                .map(move |(v, w)| (u, v, w))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn tree_dbg<T: AsTree>(&self, tree: &T) {
        add_branch_to!(*tree, "MatrixGraph n={} {:?}", self.n, self.direction);
        for u in 0..self.n {
            let mut out = self.neighbors(u).peekable();
            if out.peek().is_none() {
                continue;
            }
            add_branch_to!(*tree, "[{u}]");
            for (v, w) in out {
                add_leaf_to!(*tree, "-> {v} ({w})");
            }
        }
    }
}
