use std::collections::BTreeMap;
use std::fmt::Debug;

use classic_structures::hash_table::{ByteMap, TableError};

/// Reference implementation on top of a BTreeMap.
#[derive(Clone, Default)]
pub struct SlowMap<V> {
    map: BTreeMap<Vec<u8>, V>,
}

impl<V: Debug> Debug for SlowMap<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlowMap:")?;
        for (k, v) in &self.map {
            write!(f, " {:?}={v:?}", String::from_utf8_lossy(k))?;
        }
        Ok(())
    }
}

impl<V> SlowMap<V> {
    #[allow(dead_code)]
    pub fn entries(&self) -> impl Iterator<Item = (&[u8], &V)> + '_ {
        self.map.iter().map(|(k, v)| (k.as_slice(), v))
    }
}

impl<V> ByteMap<V> for SlowMap<V> {
    fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    fn get(&self, key: impl AsRef<[u8]>) -> Option<&V> {
        self.map.get(key.as_ref())
    }

    fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut V> {
        self.map.get_mut(key.as_ref())
    }

    fn insert(&mut self, key: impl AsRef<[u8]>, value: V) -> Result<(), TableError> {
        let key = key.as_ref();
        if self.map.contains_key(key) {
            return Err(TableError::KeyAlreadyExists);
        }
        self.map.insert(key.to_vec(), value);
        Ok(())
    }

    fn remove(&mut self, key: impl AsRef<[u8]>) -> Result<V, TableError> {
        self.map.remove(key.as_ref()).ok_or(TableError::KeyNotFound)
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}
