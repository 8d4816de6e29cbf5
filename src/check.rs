//! Fail-fast contracts shared by the containers.
//!
//! Violating one of these is a bug in the caller, so they panic instead of returning an error.

/// Panics unless `index < len`.
#[track_caller]
#[inline]
pub fn check_index(what: &str, index: usize, len: usize) {
    assert!(index < len, "{what} {index} out of range 0..{len}");
}

/// Panics if `capacity` is zero.
#[track_caller]
#[inline]
pub fn check_capacity(what: &str, capacity: usize) {
    assert!(capacity > 0, "{what} capacity must be positive");
}
