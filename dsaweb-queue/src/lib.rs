//! # dsaweb-queue
//!
//! FIFO queues from the DSA lecture notes, written as a reusable library.
//!
//! ## Queues
//!
//! | Queue | Backing | Capacity | Enqueue |
//! |-------|---------|----------|---------|
//! | [`LinkedQueue`] | Singly linked nodes in a slab arena | Unbounded | Infallible |
//! | [`CircularQueue`] | Fixed ring of `size` slots | `size - 1` | `Result<(), Full<T>>` |
//!
//! Both return `None` from `dequeue` and `peek` when empty; running dry is a
//! routine condition, not an error.
//!
//! ## Reporting
//!
//! Each queue takes a [`Reporter`] that sees every operation. The default,
//! [`Silent`], compiles away. [`Traced`] forwards operations to `tracing`,
//! and any `Fn(Kind, Event<'_, T>)` closure works as a reporter too.
//!
//! ## Example
//!
//! ```
//! use dsaweb_queue::{CircularQueue, LinkedQueue};
//!
//! let mut lectures = LinkedQueue::new();
//! lectures.enqueue("intro");
//! lectures.enqueue("stacks");
//! lectures.enqueue("queues");
//! assert_eq!(lectures.dequeue(), Some("intro"));
//! assert_eq!(lectures.peek(), Some(&"stacks"));
//!
//! // Five slots, four usable
//! let mut ring = CircularQueue::with_size(5);
//! for id in 1..=4 {
//!     ring.enqueue(id).unwrap();
//! }
//! assert!(ring.is_full());
//! assert!(ring.enqueue(5).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod circular;
pub mod error;
pub mod index;
pub mod linked;
pub mod report;

pub use circular::CircularQueue;
pub use error::{CapacityError, Full};
pub use index::Index;
pub use linked::LinkedQueue;
pub use report::{Event, Kind, Op, Reporter, Silent, Traced};
