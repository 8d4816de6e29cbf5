use classic_structures::{MatrixGraph, Vertex, Weight, NO_EDGE};

/// Bellman-Ford distances from `start`, `NO_EDGE` where unreachable. O(V^3) on a matrix.
/// Only meant for graphs without negative cycles.
#[allow(dead_code)]
pub fn bellman_ford(g: &MatrixGraph, start: Vertex) -> Vec<Weight> {
    let n = g.vertex_count();
    let mut dist = vec![i64::MAX; n];
    dist[start] = 0;
    for _ in 0..n {
        let mut changed = false;
        for u in 0..n {
            if dist[u] == i64::MAX {
                continue;
            }
            for (v, w) in g.neighbors(u) {
                if dist[u] + (w as i64) < dist[v] {
                    dist[v] = dist[u] + w as i64;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist.into_iter()
        .map(|d| if d == i64::MAX { NO_EDGE } else { d as Weight })
        .collect()
}

/// Sum of the edge weights along `path`, None if some edge is missing.
#[allow(dead_code)]
pub fn path_weight(g: &MatrixGraph, path: &[Vertex]) -> Option<Weight> {
    path.windows(2).map(|e| g.weight(e[0], e[1])).sum()
}
