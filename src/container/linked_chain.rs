//! Owned singly-linked chain of integers.
//!
//! This module provides [`LinkedChain`], a singly-linked list where every
//! node exclusively owns its successor.
//!
//! # Overview
//!
//! - O(1) insertion at the front (default, stack-like)
//! - O(n) insertion at the back ([`InsertPosition::Back`])
//! - O(n) delete-by-value
//! - Iterative release of all nodes, so very long chains never overflow the
//!   stack on `clear` or drop
//!
//! # Examples
//!
//! ```rust
//! use seqbench::container::{LinkedChain, SequenceContainer};
//!
//! let mut chain = LinkedChain::new();
//! chain.insert(1).unwrap();
//! chain.insert(2).unwrap();
//! chain.insert(3).unwrap();
//!
//! // Most recently inserted first
//! assert_eq!(chain.to_string(), "3 -> 2 -> 1 -> NULL");
//!
//! assert!(chain.delete(2));
//! assert_eq!(chain.iter().collect::<Vec<_>>(), vec![3, 1]);
//! ```

use std::fmt;

use super::{Element, SequenceContainer, write_chain};
use crate::error::ContainerError;

/// Which end of the chain receives inserted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InsertPosition {
    /// New values become the head. O(1).
    #[default]
    Front,
    /// New values are appended after the last node. O(n).
    Back,
}

/// Internal node of the chain.
#[derive(Debug)]
struct Node {
    /// The stored value.
    value: Element,
    /// Exclusively owned successor (if any).
    next: Option<Box<Self>>,
}

/// A singly-linked chain of integers.
///
/// # Invariants
///
/// - `head` is `None` if and only if `length == 0`
/// - Walking from `head` visits exactly `length` nodes
///
/// # Examples
///
/// ```rust
/// use seqbench::container::{InsertPosition, LinkedChain, SequenceContainer};
///
/// let mut chain = LinkedChain::with_position(InsertPosition::Back);
/// for value in 0..3 {
///     chain.insert(value).unwrap();
/// }
/// assert_eq!(chain.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Default)]
pub struct LinkedChain {
    /// The first node (if any).
    head: Option<Box<Node>>,
    /// Cached node count.
    length: usize,
    /// Insertion end.
    position: InsertPosition,
}

impl LinkedChain {
    /// Creates an empty chain that inserts at the front.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_position(InsertPosition::Front)
    }

    /// Creates an empty chain that inserts at the given end.
    #[inline]
    #[must_use]
    pub const fn with_position(position: InsertPosition) -> Self {
        Self {
            head: None,
            length: 0,
            position,
        }
    }

    /// Returns the insertion end of this chain.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> InsertPosition {
        self.position
    }

    /// Returns the first value, if any.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<Element> {
        self.head.as_ref().map(|node| node.value)
    }

    fn push_front(&mut self, value: Element) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    fn push_back(&mut self, value: Element) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
    }

    /// Returns an iterator over the values from head to tail.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> LinkedChainIterator<'_> {
        LinkedChainIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }
}

impl SequenceContainer for LinkedChain {
    type Iter<'a> = LinkedChainIterator<'a>;

    fn name(&self) -> &'static str {
        "LinkedChain"
    }

    /// Node allocation goes through the global allocator, which aborts the
    /// process on exhaustion; this never returns an error.
    fn insert(&mut self, value: Element) -> Result<(), ContainerError> {
        match self.position {
            InsertPosition::Front => self.push_front(value),
            InsertPosition::Back => self.push_back(value),
        }
        self.length += 1;
        Ok(())
    }

    fn delete(&mut self, value: Element) -> bool {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return false,
                Some(node) if node.value == value => {
                    *cursor = node.next.take();
                    self.length -= 1;
                    return true;
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }

    fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.length = 0;
    }

    #[inline]
    fn len(&self) -> usize {
        self.length
    }

    /// A chain reserves exactly one node per element.
    #[inline]
    fn capacity(&self) -> usize {
        self.length
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }
}

impl Drop for LinkedChain {
    fn drop(&mut self) {
        self.clear();
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the values of a [`LinkedChain`].
#[derive(Debug, Clone)]
pub struct LinkedChainIterator<'a> {
    current: Option<&'a Node>,
    remaining: usize,
}

impl Iterator for LinkedChainIterator<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LinkedChainIterator<'_> {}

impl<'a> IntoIterator for &'a LinkedChain {
    type Item = Element;
    type IntoIter = LinkedChainIterator<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LinkedChain {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(formatter, self)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn front_chain(values: &[Element]) -> LinkedChain {
        let mut chain = LinkedChain::new();
        for &value in values {
            chain.insert(value).unwrap();
        }
        chain
    }

    #[rstest]
    fn test_new_is_empty() {
        let chain = LinkedChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.front(), None);
        assert_eq!(chain.position(), InsertPosition::Front);
    }

    #[rstest]
    fn test_insert_front_is_stack_like() {
        let chain = front_chain(&[1, 2, 3]);
        assert_eq!(chain.front(), Some(3));
        assert_eq!(chain.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[rstest]
    fn test_insert_back_keeps_insertion_order() {
        let mut chain = LinkedChain::with_position(InsertPosition::Back);
        for value in [1, 2, 3] {
            chain.insert(value).unwrap();
        }
        assert_eq!(chain.front(), Some(1));
        assert_eq!(chain.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(3, vec![2, 1])]
    #[case(2, vec![3, 1])]
    #[case(1, vec![3, 2])]
    fn test_delete_relinks(#[case] target: Element, #[case] expected: Vec<Element>) {
        let mut chain = front_chain(&[1, 2, 3]);
        assert!(chain.delete(target));
        assert_eq!(chain.iter().collect::<Vec<_>>(), expected);
        assert_eq!(chain.len(), 2);
    }

    #[rstest]
    fn test_delete_removes_first_match_only() {
        let mut chain = front_chain(&[7, 7]);
        assert!(chain.delete(7));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.front(), Some(7));
    }

    #[rstest]
    fn test_delete_absent_is_noop() {
        let mut chain = front_chain(&[1, 2]);
        assert!(!chain.delete(5));
        assert_eq!(chain.iter().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[rstest]
    fn test_clear_releases_long_chain() {
        let mut chain = front_chain(&(0..200_000).collect::<Vec<_>>());
        chain.clear();
        assert!(chain.is_empty());
        assert_eq!(chain.capacity(), 0);
        assert_eq!(chain.iter().next(), None);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(LinkedChain::new().to_string(), "NULL");
        assert_eq!(front_chain(&[1, 2]).to_string(), "2 -> 1 -> NULL");
    }

    #[rstest]
    fn test_iterator_is_exact_size() {
        let chain = front_chain(&[1, 2, 3]);
        let mut iterator = chain.iter();
        assert_eq!(iterator.len(), 3);
        iterator.next();
        assert_eq!(iterator.len(), 2);
    }
}
