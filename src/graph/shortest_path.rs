//! Dijkstra (single source, no negative weights) and Floyd-Warshall (all pairs).

use super::{GraphError, MatrixGraph, PrettyWeight as W, Vertex, Weight, NO_EDGE};
use crate::check::check_index;

/// `a + b`, or None if either side is missing or the sum doesn't fit.
fn relaxed(a: Weight, b: Weight) -> Option<Weight> {
    if a == NO_EDGE || b == NO_EDGE {
        return None;
    }
    a.checked_add(b).filter(|&d| d != NO_EDGE)
}

/// Result of [`MatrixGraph::dijkstra`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: Vertex,
    dist: Vec<Weight>,
    /// Previous vertex on the shortest path. None for the source and unreachable vertices.
    pred: Vec<Option<Vertex>>,
}

impl ShortestPaths {
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Distance to each vertex, `NO_EDGE` if unreachable.
    pub fn dist(&self) -> &[Weight] {
        &self.dist
    }

    pub fn predecessors(&self) -> &[Option<Vertex>] {
        &self.pred
    }

    pub fn distance(&self, v: Vertex) -> Option<Weight> {
        check_index("vertex", v, self.dist.len());
        (self.dist[v] != NO_EDGE).then_some(self.dist[v])
    }

    pub fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        check_index("vertex", v, self.pred.len());
        self.pred[v]
    }

    /// Vertices from the source to `v`, both included. None if `v` is unreachable.
    pub fn path_to(&self, v: Vertex) -> Option<Vec<Vertex>> {
        self.distance(v)?;
        let mut path = vec![v];
        let mut u = v;
        while let Some(p) = self.pred[u] {
            path.push(p);
            u = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Result of [`MatrixGraph::floyd`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairsPaths {
    n: usize,
    /// Row-major. The diagonal keeps the weight of the shortest cycle, `NO_EDGE` if none.
    dist: Vec<Weight>,
    /// Row-major. Vertex through which the shortest i -> j path was last improved.
    midpoint: Vec<Option<Vertex>>,
}

impl AllPairsPaths {
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    fn idx(&self, i: Vertex, j: Vertex) -> usize {
        check_index("vertex", i, self.n);
        check_index("vertex", j, self.n);
        i * self.n + j
    }

    pub fn distance(&self, i: Vertex, j: Vertex) -> Option<Weight> {
        let d = self.dist[self.idx(i, j)];
        (d != NO_EDGE).then_some(d)
    }

    /// Distances from i, `NO_EDGE` where unreachable.
    pub fn row(&self, i: Vertex) -> &[Weight] {
        check_index("vertex", i, self.n);
        &self.dist[i * self.n..(i + 1) * self.n]
    }

    pub fn midpoint(&self, i: Vertex, j: Vertex) -> Option<Vertex> {
        self.midpoint[self.idx(i, j)]
    }

    /// Vertices of the shortest path from i to j, both included. None if j is unreachable.
    pub fn path(&self, i: Vertex, j: Vertex) -> Option<Vec<Vertex>> {
        if i == j {
            return Some(vec![i]);
        }
        self.distance(i, j)?;
        let mut path = vec![i];
        self.expand(i, j, &mut path);
        path.push(j);
        Some(path)
    }

    /// Pushes the inner vertices of the i -> j path.
    fn expand(&self, i: Vertex, j: Vertex, path: &mut Vec<Vertex>) {
        if let Some(k) = self.midpoint(i, j) {
            self.expand(i, k, path);
            path.push(k);
            self.expand(k, j, path);
        }
    }
}

impl MatrixGraph {
    fn reject_negative_out_edges(&self, u: Vertex) -> Result<(), GraphError> {
        match self.neighbors(u).find(|&(_, w)| w < 0) {
            Some((v, weight)) => {
                log::debug!("dijkstra: negative edge {u} -> {v} ({weight})");
                Err(GraphError::NegativeEdge {
                    from: u,
                    to: v,
                    weight,
                })
            }
            None => Ok(()),
        }
    }

    /// Single source shortest paths in O(V^2).
    ///
    /// Fails on the first negative edge leaving the source or a settled vertex, instead of
    /// returning wrong distances.
    pub fn dijkstra(&self, start: Vertex) -> Result<ShortestPaths, GraphError> {
        let n = self.vertex_count();
        check_index("start vertex", start, n);
        self.reject_negative_out_edges(start)?;
        let mut dist = self.row(start).to_vec();
        dist[start] = 0;
        let mut pred: Vec<Option<Vertex>> = (0..n)
            .map(|v| (v != start && dist[v] != NO_EDGE).then_some(start))
            .collect();
        let mut visited = vec![false; n];
        visited[start] = true;
        loop {
            // Closest unsettled vertex, lowest index on ties.
            let Some(u) = (0..n)
                .filter(|&v| !visited[v] && dist[v] != NO_EDGE)
                .min_by_key(|&v| dist[v])
            else {
                break;
            };
            visited[u] = true;
            self.reject_negative_out_edges(u)?;
            for (v, w) in self.neighbors(u) {
                if visited[v] {
                    continue;
                }
                if let Some(d) = relaxed(dist[u], w) {
                    if d < dist[v] {
                        log::trace!("relax {v}: {:?} -> {d} via {u}", W(dist[v]));
                        dist[v] = d;
                        pred[v] = Some(u);
                    }
                }
            }
        }
        Ok(ShortestPaths {
            source: start,
            dist,
            pred,
        })
    }

    /// All pairs shortest paths in O(V^3).
    ///
    /// Fails as soon as a diagonal entry is improved to a negative value, i.e. a negative
    /// cycle is found. Nothing is returned in that case.
    pub fn floyd(&self) -> Result<AllPairsPaths, GraphError> {
        let n = self.vertex_count();
        let mut dist = self.cells().to_vec();
        let mut midpoint = vec![None; n * n];
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let Some(d) = relaxed(dist[i * n + k], dist[k * n + j]) else {
                        continue;
                    };
                    if d < dist[i * n + j] {
                        dist[i * n + j] = d;
                        midpoint[i * n + j] = Some(k);
                        if i == j && d < 0 {
                            log::debug!("floyd: negative cycle through {i} (weight {d})");
                            return Err(GraphError::NegativeCycle { vertex: i });
                        }
                    }
                }
            }
        }
        Ok(AllPairsPaths { n, dist, midpoint })
    }
}
