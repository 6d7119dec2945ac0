//! Circular buffer of integers with doubling growth.
//!
//! This module provides [`RingBuffer`], a fixed-slot circular buffer whose
//! logical sequence starts at `head` and wraps modulo the capacity.
//!
//! # Overview
//!
//! Logical position `i` lives in slot `(head + i) % capacity`:
//!
//! ```text
//! capacity 4, head 0, len 4, tail 0 (wrapped):
//!
//!   slot:    0   1   2   3
//!          [ a | b | c | d ]      logical order: a, b, c, d
//!            ^
//!        head, tail
//! ```
//!
//! - Insertion writes at `tail` and advances it modulo the capacity.
//! - A full buffer grows to twice its capacity and is unwrapped so that the
//!   logical sequence starts at slot 0.
//! - Deletion searches in logical order and shifts every later element one
//!   slot toward the gap, then retreats `tail` by one slot.
//!
//! `(head + len) % capacity == tail` holds after every operation.

use std::fmt;

use tracing::debug;

use super::growth::{GrowthPolicy, allocate};
use super::{Element, SequenceContainer, write_chain};
use crate::error::ContainerError;

const NAME: &str = "RingBuffer";

/// A circular integer buffer.
///
/// # Examples
///
/// ```rust
/// use seqbench::container::{RingBuffer, SequenceContainer};
///
/// let mut ring = RingBuffer::with_capacity(4).unwrap();
/// for value in 0..4 {
///     ring.insert(value).unwrap();
/// }
/// assert!(ring.delete(1));
/// ring.insert(4).unwrap();
///
/// assert_eq!(ring.iter().collect::<Vec<_>>(), vec![0, 2, 3, 4]);
/// assert_eq!(ring.capacity(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer {
    /// Every slot, live or not. `slots.len()` is the capacity.
    slots: Vec<Element>,
    /// Slot of the first logical element.
    head: usize,
    /// Next slot to write.
    tail: usize,
    /// Number of live elements.
    length: usize,
}

impl RingBuffer {
    /// Creates an empty ring with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfMemory`] if the slots cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        let mut slots = allocate(NAME, capacity)?;
        slots.resize(capacity, 0);
        Ok(Self {
            slots,
            head: 0,
            tail: 0,
            length: 0,
        })
    }

    /// Returns the slot index of the first logical element.
    #[inline]
    #[must_use]
    pub const fn head(&self) -> usize {
        self.head
    }

    /// Returns the slot index the next insertion writes to.
    #[inline]
    #[must_use]
    pub const fn tail(&self) -> usize {
        self.tail
    }

    /// Maps a logical position to its slot.
    #[inline]
    fn slot(&self, position: usize) -> usize {
        (self.head + position) % self.slots.len()
    }

    /// Returns an iterator over the elements in logical order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> RingBufferIterator<'_> {
        RingBufferIterator {
            slots: &self.slots,
            head: self.head,
            position: 0,
            length: self.length,
        }
    }

    /// Moves the logical sequence into a buffer twice as large, starting at
    /// slot 0.
    fn grow(&mut self) -> Result<(), ContainerError> {
        let capacity = self.slots.len();
        let new_capacity = GrowthPolicy::Doubling.next_capacity(capacity);
        let mut slots = allocate(NAME, new_capacity)?;
        slots.extend(self.iter());
        slots.resize(new_capacity, 0);
        debug!(
            container = NAME,
            from = capacity,
            to = new_capacity,
            "grew storage"
        );
        self.slots = slots;
        self.head = 0;
        self.tail = self.length;
        Ok(())
    }
}

impl SequenceContainer for RingBuffer {
    type Iter<'a> = RingBufferIterator<'a>;

    fn name(&self) -> &'static str {
        NAME
    }

    fn insert(&mut self, value: Element) -> Result<(), ContainerError> {
        if self.length == self.slots.len() {
            self.grow()?;
        }
        self.slots[self.tail] = value;
        self.tail = (self.tail + 1) % self.slots.len();
        self.length += 1;
        Ok(())
    }

    fn delete(&mut self, value: Element) -> bool {
        let Some(found) =
            (0..self.length).find(|&position| self.slots[self.slot(position)] == value)
        else {
            return false;
        };
        for position in found..self.length - 1 {
            let target = self.slot(position);
            let source = self.slot(position + 1);
            self.slots[target] = self.slots[source];
        }
        let capacity = self.slots.len();
        self.tail = (self.tail + capacity - 1) % capacity;
        self.length -= 1;
        true
    }

    fn clear(&mut self) {
        self.slots = Vec::new();
        self.head = 0;
        self.tail = 0;
        self.length = 0;
    }

    #[inline]
    fn len(&self) -> usize {
        self.length
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`RingBuffer`] in logical order.
#[derive(Debug, Clone)]
pub struct RingBufferIterator<'a> {
    slots: &'a [Element],
    head: usize,
    position: usize,
    length: usize,
}

impl Iterator for RingBufferIterator<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.length {
            return None;
        }
        let element = self.slots[(self.head + self.position) % self.slots.len()];
        self.position += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.length - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RingBufferIterator<'_> {}

impl<'a> IntoIterator for &'a RingBuffer {
    type Item = Element;
    type IntoIter = RingBufferIterator<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for RingBuffer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(formatter, self)
    }
}

// =============================================================================
// Tests
// =============================================================================
