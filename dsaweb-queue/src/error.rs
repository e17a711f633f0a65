//! Error types for queue operations.
//!
//! Running out of elements is not an error: `dequeue` and `peek` return
//! `Option`. Only a rejected insert and a bad construction have types here.

use core::fmt;

/// Returned when a bounded queue has no free slot.
///
/// Holds the value that could not be enqueued so the caller keeps ownership.
///
/// # Example
///
/// ```
/// use dsaweb_queue::CircularQueue;
///
/// let mut queue = CircularQueue::with_size(2);
/// queue.enqueue("a").unwrap();
///
/// let err = queue.enqueue("b").unwrap_err();
/// assert_eq!(err.into_inner(), "b");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be enqueued.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue is full")
    }
}

impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Full").finish_non_exhaustive()
    }
}

impl<T> std::error::Error for Full<T> {}

/// Requested ring size cannot hold a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    /// The size that was requested.
    pub requested: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ring size must be > 0, got {}", self.requested)
    }
}

impl std::error::Error for CapacityError {}
