//! Fixed-capacity FIFO ring buffer.
//!
//! Keeps an explicit length, so `head` alone never has to disambiguate empty from full.

use std::fmt::{Debug, Formatter};

use thiserror::Error;

use crate::check::check_capacity;

/// Capacity of the queue used by the classic traversals.
pub const CLASSIC_QUEUE_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("queue is full (capacity {capacity})")]
    Full { capacity: usize },
}

#[derive(Clone)]
pub struct RingQueue<T> {
    buf: Vec<Option<T>>,
    /// Index of the front element.
    head: usize,
    len: usize,
}

impl<T: Debug> Debug for RingQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RingQueue({}/{}) ", self.len, self.capacity())?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> RingQueue<T> {
    /// Empty queue holding at most `capacity` items. Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        check_capacity("queue", capacity);
        Self {
            buf: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            len: 0,
        }
    }

    pub fn classic() -> Self {
        Self::new(CLASSIC_QUEUE_CAPACITY)
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    /// Appends to the back. Fails instead of overwriting when full.
    pub fn push(&mut self, value: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full {
                capacity: self.capacity(),
            });
        }
        let tail = self.slot(self.len);
        self.buf[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes the front element.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.buf[self.head].take();
        self.head = self.slot(1);
        self.len -= 1;
        value
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.buf[self.head].as_ref()
        }
    }

    pub fn clear(&mut self) {
        while self.pop().is_some() {}
        self.head = 0;
    }

    /// Front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.buf[self.slot(i)].as_ref())
    }
}
