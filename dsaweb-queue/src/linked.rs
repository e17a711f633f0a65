//! Unbounded FIFO queue of singly linked nodes.
//!
//! Nodes live in a [`slab::Slab`] arena and link to their successor by key
//! rather than by pointer. The queue remembers the front key (next to leave)
//! and the rear key (last to arrive); a node whose `next` is
//! [`Index::NONE`](crate::Index::NONE) is the rear.
//!
//! ```text
//!  front                            rear
//!    │                                │
//!    ▼                                ▼
//! ┌──────┐ next ┌──────┐ next ┌──────┐ next
//! │  10  │─────►│  20  │─────►│  30  │─────► NONE
//! └──────┘      └──────┘      └──────┘
//! ```
//!
//! Dequeued slots are recycled by the arena, so a queue that cycles at a
//! steady depth stops allocating once it has warmed up.
//!
//! # Example
//!
//! ```
//! use dsaweb_queue::LinkedQueue;
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue(10);
//! queue.enqueue(20);
//! queue.enqueue(30);
//!
//! assert_eq!(queue.dequeue(), Some(10));
//! assert_eq!(queue.display().to_string(), "20 -> 30 -> None");
//! ```

use core::fmt;

use slab::Slab;

use crate::Index;
use crate::report::{Event, Kind, Op, Reporter, Silent};

/// One queued value and the key of the node behind it.
#[derive(Debug)]
struct Node<T> {
    data: T,
    next: usize,
}

/// A FIFO queue of linked nodes with no capacity bound.
///
/// Every operation is O(1). The `R` parameter selects how operations are
/// reported; see [`report`](crate::report).
pub struct LinkedQueue<T, R = Silent> {
    nodes: Slab<Node<T>>,
    front: usize,
    rear: usize,
    reporter: R,
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue that reports nothing.
    pub fn new() -> Self {
        Self::with_reporter(Silent)
    }

    /// Creates an empty queue with room for `capacity` nodes before the
    /// arena has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            front: usize::NONE,
            rear: usize::NONE,
            reporter: Silent,
        }
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Reporter<T>> LinkedQueue<T, R> {
    /// Creates an empty queue that sends every operation to `reporter`.
    pub fn with_reporter(reporter: R) -> Self {
        Self {
            nodes: Slab::new(),
            front: usize::NONE,
            rear: usize::NONE,
            reporter,
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Returns the reporter.
    #[inline]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Appends a value at the rear.
    pub fn enqueue(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            data: value,
            next: usize::NONE,
        });

        let first = self.rear.is_none();
        if first {
            self.front = key;
        } else {
            self.nodes[self.rear].next = key;
        }
        self.rear = key;

        self.reporter.report(
            Kind::Linked,
            Event::Enqueued {
                value: &self.nodes[key].data,
                first,
            },
        );
    }

    /// Removes and returns the front value.
    ///
    /// Returns `None` and leaves the queue untouched if it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.front.is_none() {
            self.reporter
                .report(Kind::Linked, Event::Empty { op: Op::Dequeue });
            return None;
        }

        let node = self.nodes.remove(self.front);
        self.front = node.next;
        if self.front.is_none() {
            self.rear = usize::NONE;
        }

        self.reporter
            .report(Kind::Linked, Event::Dequeued { value: &node.data });
        Some(node.data)
    }

    /// Returns the front value without removing it.
    pub fn peek(&self) -> Option<&T> {
        match self.nodes.get(self.front) {
            Some(node) => Some(&node.data),
            None => {
                self.reporter
                    .report(Kind::Linked, Event::Empty { op: Op::Peek });
                None
            }
        }
    }

    /// Returns the rear value.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.nodes.get(self.rear).map(|node| &node.data)
    }

    /// Drops every element. Nothing is reported.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front = usize::NONE;
        self.rear = usize::NONE;
    }

    /// Returns an iterator over the elements, front to rear.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.front,
            remaining: self.nodes.len(),
        }
    }

    /// Returns an adaptor that formats the queue as `a -> b -> None`, or
    /// `Queue is empty` when there is nothing in it.
    #[inline]
    pub fn display(&self) -> Contents<'_, T> {
        Contents { iter: self.iter() }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for LinkedQueue<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iter = Iter {
            nodes: &self.nodes,
            next: self.front,
            remaining: self.nodes.len(),
        };
        f.debug_list().entries(iter).finish()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, R: Reporter<T>> Extend<T> for LinkedQueue<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<'a, T, R: Reporter<T>> IntoIterator for &'a LinkedQueue<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`LinkedQueue`], front to rear.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    next: usize,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

/// Display adaptor returned by [`LinkedQueue::display`].
pub struct Contents<'a, T> {
    iter: Iter<'a, T>,
}

impl<T: fmt::Display> fmt::Display for Contents<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.iter.len() == 0 {
            return f.write_str("Queue is empty");
        }
        for value in self.iter.clone() {
            write!(f, "{value} -> ")?;
        }
        f.write_str("None")
    }
}
