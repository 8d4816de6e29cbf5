use std::collections::TryReserveError;

use thiserror::Error;

pub mod probe;
pub mod probed;

pub use probed::ProbedHashTable;

/// Initial capacity of a growable table.
pub const DEFAULT_CAPACITY: usize = 7;
/// Capacity of the classic fixed-size table.
pub const FIXED_CAPACITY: usize = 17;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("key not found")]
    KeyNotFound,
    #[error("key already exists")]
    KeyAlreadyExists,
    #[error("table is full (fixed capacity {capacity})")]
    Full { capacity: usize },
    #[error("could not allocate the slot array")]
    Allocation(#[from] TryReserveError),
    /// The next prime capacity overflows `usize` or exceeds `TableConfig::max_capacity`.
    #[error("no capacity of at least {requested} slots fits the limit of {limit}")]
    CapacityOverflow { requested: usize, limit: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Rounded up to a prime, at least 3.
    pub initial_capacity: usize,
    /// If false, inserts that would push the load factor past 1/2 fail with `TableError::Full`.
    pub resizable: bool,
    /// Growth past this many slots fails with `TableError::CapacityOverflow`.
    pub max_capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            resizable: true,
            max_capacity: usize::MAX,
        }
    }
}

impl TableConfig {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// A table that never grows.
    pub fn fixed(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            resizable: false,
            max_capacity: usize::MAX,
        }
    }

    pub fn with_max_capacity(self, max_capacity: usize) -> Self {
        Self {
            max_capacity,
            ..self
        }
    }
}

/// Associative container from byte strings to values. Keys are copied into the map.
pub trait ByteMap<V>
where
    Self: Sized,
{
    /// New empty map.
    fn new() -> Self;
    /// Value stored under `key`, if any.
    fn get(&self, key: impl AsRef<[u8]>) -> Option<&V>;
    fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut V>;
    /// Adds a new key. Fails with `KeyAlreadyExists` if it is already present.
    fn insert(&mut self, key: impl AsRef<[u8]>, value: V) -> Result<(), TableError>;
    /// Overwrites the value of an existing key, returning the old one.
    fn modify(&mut self, key: impl AsRef<[u8]>, value: V) -> Result<V, TableError> {
        self.get_mut(key)
            .map(|v| std::mem::replace(v, value))
            .ok_or(TableError::KeyNotFound)
    }
    /// Removes `key`, returning its value.
    fn remove(&mut self, key: impl AsRef<[u8]>) -> Result<V, TableError>;
    /// Removes everything. Calling it on an empty map does nothing.
    fn clear(&mut self);
    /// Number of keys.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.get(key).is_some()
    }
}
