//! Depth and breadth first traversals. Neighbours are always explored by increasing index,
//! so the visit order only depends on the graph and the start vertex.
//!
//! Every call owns its visited markers; nothing is shared between traversals.

use super::{MatrixGraph, Vertex};
use crate::check::check_index;
use crate::queue::RingQueue;

impl MatrixGraph {
    /// Calls `visit` on every vertex reachable from `start`, in depth first order.
    pub fn dfs(&self, start: Vertex, mut visit: impl FnMut(Vertex)) {
        check_index("start vertex", start, self.vertex_count());
        let mut visited = vec![false; self.vertex_count()];
        self.dfs_from(start, &mut visited, &mut visit);
    }

    fn dfs_from(&self, u: Vertex, visited: &mut [bool], visit: &mut impl FnMut(Vertex)) {
        log::trace!("dfs visit {u}");
        visit(u);
        visited[u] = true;
        for (v, _) in self.neighbors(u) {
            if !visited[v] {
                self.dfs_from(v, visited, visit);
            }
        }
    }

    /// Calls `visit` on every vertex reachable from `start`, in breadth first order.
    pub fn bfs(&self, start: Vertex, mut visit: impl FnMut(Vertex)) {
        for u in self.bfs_iter(start) {
            visit(u);
        }
    }

    /// Lazy breadth first traversal from `start`.
    pub fn bfs_iter(&self, start: Vertex) -> Bfs<'_> {
        check_index("start vertex", start, self.vertex_count());
        let mut visited = vec![false; self.vertex_count()];
        // Every vertex enters the queue at most once.
        let mut queue = RingQueue::new(self.vertex_count());
        visited[start] = true;
        queue
            .push(start)
            .expect("queue is sized to the vertex count");
        Bfs {
            graph: self,
            queue,
            visited,
        }
    }

    pub fn dfs_order(&self, start: Vertex) -> Vec<Vertex> {
        let mut order = Vec::with_capacity(self.vertex_count());
        self.dfs(start, |u| order.push(u));
        order
    }

    pub fn bfs_order(&self, start: Vertex) -> Vec<Vertex> {
        self.bfs_iter(start).collect()
    }
}

#[derive(Debug)]
pub struct Bfs<'a> {
    graph: &'a MatrixGraph,
    queue: RingQueue<Vertex>,
    visited: Vec<bool>,
}

impl Iterator for Bfs<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        let u = self.queue.pop()?;
        log::trace!("bfs visit {u}");
        let graph = self.graph;
        for (v, _) in graph.neighbors(u) {
            if !self.visited[v] {
                self.visited[v] = true;
                self.queue
                    .push(v)
                    .expect("queue is sized to the vertex count");
            }
        }
        Some(u)
    }
}
