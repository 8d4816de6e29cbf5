//! Hashing, probe sequence and prime capacities for the open addressing table.

/// Rolling hash over the key bytes: `h = (h << 5) + byte`, wrapping. Unseeded.
pub fn hash_bytes(key: &[u8]) -> u32 {
    key.iter()
        .fold(0u32, |h, &b| h.wrapping_shl(5).wrapping_add(b as u32))
}

/// Slot where probing for `key` starts.
pub fn home_slot(key: &[u8], capacity: usize) -> usize {
    hash_bytes(key) as usize % capacity
}

/// Quadratic probing with alternating sign.
///
/// Yields `home` first, then for the k-th collision `home + ((k + 1) / 2)^2` when k is odd
/// and `home - (k / 2)^2` when k is even, all modulo the capacity. For a prime capacity
/// the first `capacity` positions cover at least `(capacity + 1) / 2` distinct slots.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    home: usize,
    capacity: usize,
    /// Collisions so far.
    k: usize,
}

impl ProbeSequence {
    pub fn new(home: usize, capacity: usize) -> Self {
        debug_assert!(home < capacity);
        Self {
            home,
            capacity,
            k: 0,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let k = self.k;
        self.k += 1;
        if k == 0 {
            return Some(self.home);
        }
        let step = (k + 1) / 2 % self.capacity;
        let offset = step * step % self.capacity;
        Some(if k % 2 == 1 {
            (self.home + offset) % self.capacity
        } else {
            (self.home + self.capacity - offset) % self.capacity
        })
    }
}

pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest prime `>= n`, None if it doesn't fit in a `usize`.
pub fn next_prime(n: usize) -> Option<usize> {
    let mut p = n.max(2);
    while !is_prime(p) {
        p = p.checked_add(1)?;
    }
    Some(p)
}
