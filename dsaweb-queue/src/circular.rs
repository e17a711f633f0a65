//! Bounded FIFO queue over a fixed ring of slots.
//!
//! The ring has `size` slots. `front` is the slot of the oldest element and
//! `rear` the slot of the newest; both wrap modulo `size`. An empty queue has
//! both indices at [`Index::NONE`], and that is the only state in which
//! either one is the sentinel.
//!
//! ```text
//! size = 5, holding [2, 3, 4]
//!
//!        front     rear
//!          │         │
//!          ▼         ▼
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  -  │  2  │  3  │  4  │  -  │
//! └─────┴─────┴─────┴─────┴─────┘
//! ```
//!
//! # Capacity
//!
//! No element count is stored. The length is derived from `front`, `rear`
//! and `size`, and one slot is always left free so that a full ring never
//! looks like a wrapped-around empty one. A ring of `size` slots therefore
//! holds at most `size - 1` elements.
//!
//! A ring of size 1 has no usable slot: it is empty and full at the same
//! time, and every enqueue is rejected. Size 0 is refused at construction.
//!
//! # Example
//!
//! ```
//! use dsaweb_queue::CircularQueue;
//!
//! let mut queue = CircularQueue::with_size(3);
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//!
//! assert!(queue.is_full());
//! assert_eq!(queue.enqueue(3).unwrap_err().into_inner(), 3);
//!
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.display().to_string(), "2");
//! ```

use core::fmt;

use crate::report::{Event, Kind, Op, Reporter, Silent};
use crate::{CapacityError, Full, Index};

/// A FIFO queue backed by a fixed ring of `size` slots.
///
/// The `R` parameter selects how operations are reported; see
/// [`report`](crate::report).
pub struct CircularQueue<T, R = Silent> {
    slots: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    reporter: R,
}

impl<T> CircularQueue<T> {
    /// Creates an empty ring of `size` slots that reports nothing.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn with_size(size: usize) -> Self {
        Self::with_reporter(size, Silent)
    }

    /// Creates an empty ring of `size` slots that reports nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `size` is 0.
    pub fn try_with_size(size: usize) -> Result<Self, CapacityError> {
        Self::try_with_reporter(size, Silent)
    }
}

impl<T, R: Reporter<T>> CircularQueue<T, R> {
    /// Creates an empty ring of `size` slots that sends every operation to
    /// `reporter`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn with_reporter(size: usize, reporter: R) -> Self {
        assert!(size > 0, "ring size must be > 0");
        Self::build(size, reporter)
    }

    /// Fallible version of [`with_reporter`](Self::with_reporter).
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `size` is 0.
    pub fn try_with_reporter(size: usize, reporter: R) -> Result<Self, CapacityError> {
        if size == 0 {
            return Err(CapacityError { requested: size });
        }
        Ok(Self::build(size, reporter))
    }

    fn build(size: usize, reporter: R) -> Self {
        Self {
            slots: (0..size).map(|_| None).collect(),
            front: usize::NONE,
            rear: usize::NONE,
            reporter,
        }
    }

    /// Returns the number of slots in the ring.
    #[inline]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Returns the maximum number of elements, one less than [`size`](Self::size).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        if self.front.is_none() {
            return 0;
        }
        let size = self.slots.len();
        (self.rear + size - self.front) % size + 1
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Returns `true` if another enqueue would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Returns the slot holding the front element, or `None` if empty.
    #[inline]
    pub fn front_slot(&self) -> Option<usize> {
        self.front.get()
    }

    /// Returns the slot holding the rear element, or `None` if empty.
    #[inline]
    pub fn rear_slot(&self) -> Option<usize> {
        self.rear.get()
    }

    /// Returns the reporter.
    #[inline]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Appends a value at the rear.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` without touching the queue if no slot is
    /// free.
    pub fn enqueue(&mut self, value: T) -> Result<(), Full<T>> {
        if self.is_full() {
            self.reporter
                .report(Kind::Circular, Event::Rejected { value: &value });
            return Err(Full(value));
        }

        let first = self.front.is_none();
        if first {
            self.front = 0;
            self.rear = 0;
        } else {
            self.rear = (self.rear + 1) % self.slots.len();
        }

        let slot = &mut self.slots[self.rear];
        debug_assert!(slot.is_none(), "rear advanced onto an occupied slot");
        let value = &*slot.insert(value);

        self.reporter
            .report(Kind::Circular, Event::Enqueued { value, first });
        Ok(())
    }

    /// Removes and returns the front value.
    ///
    /// Returns `None` and leaves the queue untouched if it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.front.is_none() {
            self.reporter
                .report(Kind::Circular, Event::Empty { op: Op::Dequeue });
            return None;
        }

        let taken = self.slots[self.front].take();
        debug_assert!(taken.is_some(), "front slot of a non-empty queue is vacant");
        let value = taken?;
        if self.front == self.rear {
            self.front = usize::NONE;
            self.rear = usize::NONE;
        } else {
            self.front = (self.front + 1) % self.slots.len();
        }

        self.reporter
            .report(Kind::Circular, Event::Dequeued { value: &value });
        Some(value)
    }

    /// Returns the front value without removing it.
    pub fn peek(&self) -> Option<&T> {
        let front = self.front.get().and_then(|slot| self.slots[slot].as_ref());
        if front.is_none() {
            self.reporter
                .report(Kind::Circular, Event::Empty { op: Op::Peek });
        }
        front
    }

    /// Drops every element. Nothing is reported.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| None);
        self.front = usize::NONE;
        self.rear = usize::NONE;
    }

    /// Returns an iterator over the elements, front to rear.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            pos: self.front,
            remaining: self.len(),
        }
    }

    /// Returns an adaptor that formats the elements separated by spaces, or
    /// `Circular Queue is empty` when there is nothing in it.
    #[inline]
    pub fn display(&self) -> Contents<'_, T> {
        Contents { iter: self.iter() }
    }
}

impl<T: fmt::Debug, R: Reporter<T>> fmt::Debug for CircularQueue<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, R: Reporter<T>> IntoIterator for &'a CircularQueue<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`CircularQueue`], front to rear.
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    pos: usize,
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
        if self.remaining == 0 {
            return None;
        }
        let value = self.slots[self.pos].as_ref()?;
        self.pos = (self.pos + 1) % self.slots.len();
        self.remaining -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

/// Display adaptor returned by [`CircularQueue::display`].
pub struct Contents<'a, T> {
    iter: Iter<'a, T>,
}

impl<T: fmt::Display> fmt::Display for Contents<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter.clone();
        let Some(first) = iter.next() else {
            return f.write_str("Circular Queue is empty");
        };
        write!(f, "{first}")?;
        for value in iter {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn contents<T: Copy, R: Reporter<T>>(queue: &CircularQueue<T, R>) -> Vec<T> {
        queue.iter().copied().collect()
    }

    #[test]
    fn new_is_empty() {
        let queue: CircularQueue<u64> = CircularQueue::with_size(5);
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.size(), 5);
        assert_eq!(queue.capacity(), 4);
        assert_eq!(queue.front_slot(), None);
        assert_eq!(queue.rear_slot(), None);
    }

    #[test]
    fn capacity_is_one_less_than_size() {
        for size in 1..=8 {
            let queue: CircularQueue<u8> = CircularQueue::with_size(size);
            assert_eq!(queue.size(), size);
            assert_eq!(queue.capacity(), size - 1);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "front slot of a non-empty queue is vacant")]
    fn vacant_front_slot_is_caught() {
        let mut queue = CircularQueue::with_size(4);
        queue.enqueue(1).unwrap();
        queue.slots[0] = None;
        let _ = queue.dequeue();
    }

    #[test]
    fn enqueue_display_dequeue() {
        let mut queue = CircularQueue::with_size(5);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();
        assert_eq!(contents(&queue), vec![1, 2, 3]);
        assert_eq!(queue.display().to_string(), "1 2 3");

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(contents(&queue), vec![2, 3]);
        assert_eq!(queue.front_slot(), Some(1));
        assert_eq!(queue.rear_slot(), Some(2));
    }

    #[test]
    fn full_after_size_minus_one() {
        let mut queue = CircularQueue::with_size(3);
        queue.enqueue(1).unwrap();
        assert!(!queue.is_full());
        queue.enqueue(2).unwrap();
        assert!(queue.is_full());

        let err = queue.enqueue(3).unwrap_err();
        assert_eq!(err.into_inner(), 3);
        assert_eq!(contents(&queue), vec![1, 2]);
        assert_eq!(queue.front_slot(), Some(0));
        assert_eq!(queue.rear_slot(), Some(1));
    }

    #[test]
    fn wraps_around() {
        let mut queue = CircularQueue::with_size(4);

        for i in 0..3 {
            queue.enqueue(i).unwrap();
        }
        assert_eq!(queue.dequeue(), Some(0));
        assert_eq!(queue.dequeue(), Some(1));

        queue.enqueue(3).unwrap();
        queue.enqueue(4).unwrap();
        // rear wrapped behind front
        assert_eq!(queue.front_slot(), Some(2));
        assert_eq!(queue.rear_slot(), Some(0));
        assert_eq!(queue.len(), 3);
        assert!(queue.is_full());
        assert_eq!(contents(&queue), vec![2, 3, 4]);
        assert_eq!(queue.display().to_string(), "2 3 4");

        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), Some(4));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn last_dequeue_resets_to_sentinel() {
        let mut queue = CircularQueue::with_size(4);
        for i in 0..10 {
            queue.enqueue(i).unwrap();
            assert_eq!(queue.dequeue(), Some(i));
            assert!(queue.front.is_none());
            assert!(queue.rear.is_none());
        }
    }

    #[test]
    fn peek_does_not_mutate() {
        let mut queue = CircularQueue::with_size(4);
        assert_eq!(queue.peek(), None);

        queue.enqueue('a').unwrap();
        queue.enqueue('b').unwrap();
        for _ in 0..5 {
            assert_eq!(queue.peek(), Some(&'a'));
        }
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some('a'));
    }

    #[test]
    fn size_one_is_always_full() {
        let mut queue = CircularQueue::with_size(1);
        assert_eq!(queue.capacity(), 0);
        assert!(queue.is_empty());
        assert!(queue.is_full());

        assert!(queue.enqueue(7).is_err());
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    #[should_panic(expected = "ring size must be > 0")]
    fn zero_size_panics() {
        let _ = CircularQueue::<u8>::with_size(0);
    }

    #[test]
    fn zero_size_rejected() {
        let err = CircularQueue::<u8>::try_with_size(0).unwrap_err();
        assert_eq!(err, CapacityError { requested: 0 });
        assert!(CircularQueue::<u8>::try_with_size(2).is_ok());
    }

    #[test]
    fn clear_resets() {
        let mut queue = CircularQueue::with_size(4);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.display().to_string(), "Circular Queue is empty");
        queue.enqueue(3).unwrap();
        assert_eq!(queue.front_slot(), Some(0));
    }

    #[test]
    fn debug_lists_elements() {
        let mut queue = CircularQueue::with_size(4);
        queue.enqueue("x").unwrap();
        queue.enqueue("y").unwrap();
        assert_eq!(format!("{queue:?}"), r#"["x", "y"]"#);
    }

    #[test]
    fn reports_rejections() {
        let log = RefCell::new(Vec::new());
        let mut queue = CircularQueue::with_reporter(2, |kind: Kind, event: Event<'_, u8>| {
            log.borrow_mut().push(format!("{kind}: {event}"));
        });

        queue.enqueue(1).unwrap();
        let _ = queue.enqueue(2);
        queue.dequeue();
        queue.dequeue();
        drop(queue);

        assert_eq!(
            log.into_inner(),
            vec![
                "circular: enqueued 1 (first element)",
                "circular: rejected 2: queue is full",
                "circular: dequeued 1",
                "circular: dequeue on empty queue",
            ]
        );
    }

    #[test]
    fn drop_releases_remaining_values() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let mut queue = CircularQueue::with_size(8);
            for _ in 0..5 {
                queue.enqueue(Rc::clone(&tracker)).unwrap();
            }
            queue.dequeue();
            assert_eq!(Rc::strong_count(&tracker), 5);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
