//! Operation reporting hooks.
//!
//! Every queue carries a [`Reporter`] that observes what each operation did:
//! which value went in or out, whether an insert started a fresh queue, and
//! when an operation found nothing to do. Queues never write to stdout
//! themselves.
//!
//! | Reporter | Behavior |
//! |----------|----------|
//! | [`Silent`] | Discards everything (the default) |
//! | [`Traced`] | Emits a `tracing` event per operation |
//! | `Fn(Kind, Event<'_, T>)` | Any closure, e.g. to record a transcript |
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//!
//! use dsaweb_queue::{Event, Kind, LinkedQueue};
//!
//! let log = RefCell::new(Vec::new());
//! let mut queue = LinkedQueue::with_reporter(|kind: Kind, event: Event<'_, u32>| {
//!     log.borrow_mut().push(format!("{kind}: {event}"));
//! });
//!
//! queue.enqueue(10);
//! queue.dequeue();
//! queue.dequeue();
//! drop(queue);
//!
//! assert_eq!(
//!     log.into_inner(),
//!     [
//!         "linked: enqueued 10 (first element)",
//!         "linked: dequeued 10",
//!         "linked: dequeue on empty queue",
//!     ]
//! );
//! ```

use core::fmt;

/// Which queue produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`LinkedQueue`](crate::LinkedQueue).
    Linked,
    /// [`CircularQueue`](crate::CircularQueue).
    Circular,
}

impl Kind {
    /// Short lowercase name, used as the `queue` field in traces.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linked => "linked",
            Self::Circular => "circular",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation that found the queue empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `dequeue`
    Dequeue,
    /// `peek`
    Peek,
}

/// What a queue operation did.
#[derive(Debug, PartialEq, Eq)]
pub enum Event<'a, T> {
    /// A value was appended at the rear.
    Enqueued {
        /// The stored value.
        value: &'a T,
        /// `true` if the queue was empty before this insert.
        first: bool,
    },
    /// A value was removed from the front.
    Dequeued {
        /// The removed value, just before it is handed to the caller.
        value: &'a T,
    },
    /// A bounded queue had no free slot; the value was handed back.
    Rejected {
        /// The value that did not fit.
        value: &'a T,
    },
    /// `dequeue` or `peek` ran on an empty queue.
    Empty {
        /// The operation that found nothing.
        op: Op,
    },
}

impl<T> Clone for Event<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Event<'_, T> {}

impl<T: fmt::Display> fmt::Display for Event<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enqueued { value, first: true } => {
                write!(f, "enqueued {value} (first element)")
            }
            Self::Enqueued { value, first: false } => write!(f, "enqueued {value}"),
            Self::Dequeued { value } => write!(f, "dequeued {value}"),
            Self::Rejected { value } => write!(f, "rejected {value}: queue is full"),
            Self::Empty { op: Op::Dequeue } => write!(f, "dequeue on empty queue"),
            Self::Empty { op: Op::Peek } => write!(f, "peek on empty queue"),
        }
    }
}

/// Observer of queue operations.
///
/// Takes `&self` so read-only operations like `peek` can report too.
/// Implementations needing to accumulate state use interior mutability.
pub trait Reporter<T> {
    /// Called once per reported operation.
    fn report(&self, kind: Kind, event: Event<'_, T>);
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silent;

impl<T> Reporter<T> for Silent {
    #[inline(always)]
    fn report(&self, _kind: Kind, _event: Event<'_, T>) {}
}

/// Reporter that emits `tracing` events.
///
/// Inserts and removals are logged at `DEBUG`, rejected inserts and
/// operations on an empty queue at `INFO`.
///
/// ```
/// use dsaweb_queue::{CircularQueue, Traced};
///
/// let mut queue = CircularQueue::with_reporter(4, Traced);
/// queue.enqueue(1).unwrap();
/// assert_eq!(queue.dequeue(), Some(1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Traced;

impl<T: fmt::Debug> Reporter<T> for Traced {
    fn report(&self, kind: Kind, event: Event<'_, T>) {
        let queue = kind.as_str();
        match event {
            Event::Enqueued { value, first } => {
                tracing::debug!(queue, ?value, first, "enqueued");
            }
            Event::Dequeued { value } => tracing::debug!(queue, ?value, "dequeued"),
            Event::Rejected { value } => tracing::info!(queue, ?value, "queue is full"),
            Event::Empty { op } => tracing::info!(queue, ?op, "queue is empty"),
        }
    }
}

impl<T, F> Reporter<T> for F
where
    F: Fn(Kind, Event<'_, T>),
{
    #[inline]
    fn report(&self, kind: Kind, event: Event<'_, T>) {
        self(kind, event);
    }
}
