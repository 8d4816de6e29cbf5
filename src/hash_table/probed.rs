//! Open addressing table with alternating quadratic probing and lazy deletion.

use std::fmt::{Debug, Formatter};

use debug_tree::{add_branch_to, add_leaf_to, AsTree, TreeBuilder};
use derivative::Derivative;

use super::probe::{home_slot, next_prime, ProbeSequence};
use super::{ByteMap, TableConfig, TableError};

#[allow(clippy::borrowed_box)]
fn key_fmt(key: &Box<[u8]>, f: &mut Formatter) -> std::fmt::Result {
    write!(f, "{:?}", String::from_utf8_lossy(key))
}

#[derive(Derivative, Clone)]
#[derivative(Debug)]
enum Slot<V> {
    Empty,
    Occupied {
        #[derivative(Debug(format_with = "key_fmt"))]
        key: Box<[u8]>,
        value: V,
    },
    /// Removed entry. Probes continue past it.
    Tombstone,
}

/// Where a probe for some key ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// Slot holding the key.
    Found(usize),
    /// Key is absent; this is where it would go (first tombstone on the way, or the empty slot).
    Vacant(usize),
}

fn empty_slots<V>(capacity: usize) -> Result<Vec<Slot<V>>, TableError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity)?;
    slots.resize_with(capacity, || Slot::Empty);
    Ok(slots)
}

/// Smallest prime capacity `>= requested` that is at most `limit`.
fn prime_capacity(requested: usize, limit: usize) -> Result<usize, TableError> {
    next_prime(requested)
        .filter(|&p| p <= limit)
        .ok_or(TableError::CapacityOverflow { requested, limit })
}

/// Hash table keyed by byte strings. Capacity is always prime and at most half of the
/// slots are in use (occupied or tombstone), so every probe meets an empty slot.
#[derive(Clone)]
pub struct ProbedHashTable<V = i32> {
    slots: Vec<Slot<V>>,
    len: usize,
    tombstones: usize,
    resizable: bool,
    max_capacity: usize,
}

impl<V: Debug> Debug for ProbedHashTable<V> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        self.slots_dbg(&builder);
        writeln!(f, "{}", builder.string())
    }
}

impl<V> Default for ProbedHashTable<V> {
    /// Growable table with `DEFAULT_CAPACITY` slots. Panics only if those few slots can't
    /// be allocated, like `Vec::with_capacity` would.
    fn default() -> Self {
        Self::with_config(TableConfig::default()).expect("default table allocation failed")
    }
}

impl<V> ProbedHashTable<V> {
    /// Fails with `CapacityOverflow` if no prime capacity fits `config.max_capacity`, or
    /// `Allocation` if the slots can't be reserved.
    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        let capacity = prime_capacity(config.initial_capacity.max(3), config.max_capacity)?;
        Ok(Self {
            slots: empty_slots(capacity)?,
            len: 0,
            tombstones: 0,
            resizable: config.resizable,
            max_capacity: config.max_capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Live entries over capacity.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Slots that stop being empty: live entries plus tombstones.
    fn used(&self) -> usize {
        self.len + self.tombstones
    }

    fn find_pos(&self, key: &[u8]) -> Probe {
        let capacity = self.capacity();
        let mut first_tombstone = None;
        for (k, pos) in ProbeSequence::new(home_slot(key, capacity), capacity)
            .enumerate()
            .take(capacity)
        {
            match &self.slots[pos] {
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(pos)),
                Slot::Occupied { key: k2, .. } if **k2 == *key => return Probe::Found(pos),
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(pos);
                }
                Slot::Occupied { .. } => {}
            }
            log::trace!("collision {k} at slot {pos}");
        }
        unreachable!(
            "no empty slot on the probe sequence (capacity {capacity}, used {})",
            self.used()
        )
    }

    /// Moves the entries into a fresh array of `new_capacity` slots, dropping tombstones.
    fn rehash(&mut self, new_capacity: usize) -> Result<(), TableError> {
        let old = std::mem::replace(&mut self.slots, empty_slots(new_capacity)?);
        log::debug!(
            "rehash {} -> {new_capacity} slots ({} live, {} tombstones dropped)",
            old.len(),
            self.len,
            self.tombstones
        );
        self.tombstones = 0;
        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                self.place(key, value);
            }
        }
        Ok(())
    }

    /// Stores an entry known to be absent, without bookkeeping.
    fn place(&mut self, key: Box<[u8]>, value: V) {
        match self.find_pos(&key) {
            Probe::Vacant(pos) => self.slots[pos] = Slot::Occupied { key, value },
            Probe::Found(_) => unreachable!("duplicate key while rehashing"),
        }
    }

    /// Makes space for one more used slot: grows to the next prime past twice the capacity
    /// if the live entries need it, otherwise rebuilds in place to drop tombstones.
    fn make_room(&mut self) -> Result<(), TableError> {
        let capacity = self.capacity();
        if 2 * (self.len + 1) <= capacity {
            return self.rehash(capacity);
        }
        if !self.resizable {
            log::debug!("fixed table refused insert at {} entries", self.len);
            return Err(TableError::Full { capacity });
        }
        let requested = capacity.checked_mul(2).unwrap_or(usize::MAX);
        let grown = prime_capacity(requested, self.max_capacity).inspect_err(|_| {
            log::debug!("table can't grow past {capacity} slots");
        })?;
        self.rehash(grown)
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.slots.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    fn slots_dbg<T: AsTree>(&self, tree: &T)
    where
        V: Debug,
    {
        add_branch_to!(
            *tree,
            "ProbedHashTable len={} tombstones={} capacity={}",
            self.len,
            self.tombstones,
            self.capacity()
        );
        for (i, slot) in self.slots.iter().enumerate() {
            if !matches!(slot, Slot::Empty) {
                add_leaf_to!(*tree, "[{i}] {slot:?}");
            }
        }
    }
}

impl<V> ByteMap<V> for ProbedHashTable<V> {
    fn new() -> Self {
        Self::default()
    }

    fn get(&self, key: impl AsRef<[u8]>) -> Option<&V> {
        match self.find_pos(key.as_ref()) {
            Probe::Found(pos) => match &self.slots[pos] {
                Slot::Occupied { value, .. } => Some(value),
                _ => None,
            },
            Probe::Vacant(_) => None,
        }
    }

    fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut V> {
        match self.find_pos(key.as_ref()) {
            Probe::Found(pos) => match &mut self.slots[pos] {
                Slot::Occupied { value, .. } => Some(value),
                _ => None,
            },
            Probe::Vacant(_) => None,
        }
    }

    fn insert(&mut self, key: impl AsRef<[u8]>, value: V) -> Result<(), TableError> {
        let key = key.as_ref();
        let mut pos = match self.find_pos(key) {
            Probe::Found(_) => return Err(TableError::KeyAlreadyExists),
            Probe::Vacant(pos) => pos,
        };
        if matches!(self.slots[pos], Slot::Tombstone) {
            self.tombstones -= 1;
        } else if 2 * (self.used() + 1) > self.capacity() {
            self.make_room()?;
            pos = match self.find_pos(key) {
                Probe::Vacant(pos) => pos,
                Probe::Found(_) => unreachable!("key appeared while rehashing"),
            };
        }
        self.slots[pos] = Slot::Occupied {
            key: key.into(),
            value,
        };
        self.len += 1;
        Ok(())
    }

    fn remove(&mut self, key: impl AsRef<[u8]>) -> Result<V, TableError> {
        let Probe::Found(pos) = self.find_pos(key.as_ref()) else {
            return Err(TableError::KeyNotFound);
        };
        match std::mem::replace(&mut self.slots[pos], Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.len -= 1;
                self.tombstones += 1;
                Ok(value)
            }
            _ => unreachable!("probe found a slot that is not occupied"),
        }
    }

    fn clear(&mut self) {
        self.slots.fill_with(|| Slot::Empty);
        self.len = 0;
        self.tombstones = 0;
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Entries in slot order.
pub struct Iter<'a, V> {
    it: std::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a [u8], &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.it.by_ref().find_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((&**key, value)),
            _ => None,
        })
    }
}

impl<'a, V> IntoIterator for &'a ProbedHashTable<V> {
    type Item = (&'a [u8], &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
