use classic_structures::{
    graph::PrettyWeight as W, ByteMap, MatrixGraph, ProbedHashTable, TableError, Vertex,
};

fn show_path(g: &MatrixGraph, from: Vertex, to: Vertex) {
    match g.floyd() {
        Ok(all) => println!(
            "Shortest path {} -> {}: {:?} (weight {})",
            from,
            to,
            all.path(from, to),
            W(all.row(from)[to])
        ),
        Err(e) => println!("Floyd failed: {e}"),
    }
}

fn insert(t: &mut ProbedHashTable, key: &str, value: i32) {
    match t.insert(key, value) {
        Ok(()) => println!(
            "Inserted {key} = {value} (len {}, capacity {})",
            t.len(),
            t.capacity()
        ),
        Err(TableError::KeyAlreadyExists) => println!("{key} is already there"),
        Err(e) => println!("Insert of {key} failed: {e}"),
    }
}

fn main() {
    let g = MatrixGraph::from_edges(
        7,
        [
            (0, 1, 2),
            (0, 3, 1),
            (1, 4, 10),
            (1, 3, 3),
            (2, 0, 4),
            (2, 5, 5),
            (3, 2, 2),
            (3, 4, 2),
            (3, 5, 8),
            (3, 6, 4),
            (6, 5, 1),
        ],
    );
    println!("Created the 7 vertex example graph with {} edges", g.edge_count());
    println!("DFS from 0: {:?}", g.dfs_order(0));
    println!("BFS from 0: {:?}", g.bfs_order(0));
    match g.dijkstra(0) {
        Ok(sp) => {
            for v in 0..g.vertex_count() {
                println!(
                    "dist[{v}] = {} path {:?}",
                    W(sp.dist()[v]),
                    sp.path_to(v).unwrap_or_default()
                );
            }
        }
        Err(e) => println!("Dijkstra failed: {e}"),
    }
    show_path(&g, 2, 6);

    let mut t = ProbedHashTable::new();
    for (i, key) in ["one", "two", "three", "four", "five", "six"].iter().enumerate() {
        insert(&mut t, key, i as i32 + 1);
    }
    insert(&mut t, "two", 22);
    println!("get(three) = {:?}", t.get("three"));
    println!("modify(three) -> {:?}", t.modify("three", 33));
    println!("remove(one) -> {:?}", t.remove("one"));
    println!("remove(one) again -> {:?}", t.remove("one"));
    println!("{t:?}");
}
