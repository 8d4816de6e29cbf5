//! Classic data structures with non-trivial invariants: an open addressing hash table with
//! quadratic probing and prime growth, and a dense matrix graph with traversals and
//! shortest paths. A fixed-capacity ring queue and fail-fast checks support both.

pub mod check;
pub mod graph;
pub mod hash_table;
pub mod queue;

pub use graph::{Direction, GraphError, MatrixGraph, Vertex, Weight, NO_EDGE};
pub use hash_table::{ByteMap, ProbedHashTable, TableConfig, TableError};
pub use queue::{QueueError, RingQueue};
