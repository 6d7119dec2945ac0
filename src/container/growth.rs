//! Growth policies and the contiguous storage shared by the array variants.
//!
//! The array containers keep their own capacity bookkeeping instead of
//! relying on `Vec::capacity`, so the points at which they grow are exact
//! and independent of the allocator's rounding.

use tracing::debug;

use super::Element;
use crate::error::ContainerError;

/// How a full container computes its next capacity.
///
/// Every policy yields at least one new slot, so a container initialized with
/// capacity 0 (or a block size of 0) still makes progress.
///
/// # Examples
///
/// ```rust
/// use seqbench::container::GrowthPolicy;
///
/// assert_eq!(GrowthPolicy::Doubling.next_capacity(4), 8);
/// assert_eq!(GrowthPolicy::Additive(100).next_capacity(4), 104);
/// assert_eq!(GrowthPolicy::Doubling.next_capacity(0), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthPolicy {
    /// `capacity * 2`
    Doubling,
    /// `capacity + block_size`
    Additive(usize),
}

impl GrowthPolicy {
    /// Returns the capacity to grow to from `capacity`.
    #[must_use]
    pub const fn next_capacity(self, capacity: usize) -> usize {
        let grown = match self {
            Self::Doubling => capacity.saturating_mul(2),
            Self::Additive(block_size) => capacity.saturating_add(block_size),
        };
        if grown > capacity {
            grown
        } else {
            capacity.saturating_add(1)
        }
    }
}

/// Reserves room for exactly `capacity` elements in a fresh buffer.
pub(crate) fn allocate(
    container: &'static str,
    capacity: usize,
) -> Result<Vec<Element>, ContainerError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| ContainerError::out_of_memory(container, capacity))?;
    Ok(buffer)
}

// =============================================================================
// Contiguous Storage
// =============================================================================

/// Live elements at `[0, len)` of a buffer with a bookkept capacity.
///
/// # Invariants
///
/// - `buffer.len() <= capacity`
/// - `buffer.capacity() >= capacity`
#[derive(Debug, Clone)]
pub(crate) struct ContiguousStorage {
    buffer: Vec<Element>,
    capacity: usize,
    policy: GrowthPolicy,
    container: &'static str,
}

impl ContiguousStorage {
    pub(crate) fn new(
        container: &'static str,
        capacity: usize,
        policy: GrowthPolicy,
    ) -> Result<Self, ContainerError> {
        Ok(Self {
            buffer: allocate(container, capacity)?,
            capacity,
            policy,
            container,
        })
    }

    pub(crate) fn push(&mut self, value: Element) -> Result<(), ContainerError> {
        if self.buffer.len() == self.capacity {
            self.grow()?;
        }
        self.buffer.push(value);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), ContainerError> {
        let new_capacity = self.policy.next_capacity(self.capacity);
        self.buffer
            .try_reserve_exact(new_capacity - self.buffer.len())
            .map_err(|_| ContainerError::out_of_memory(self.container, new_capacity))?;
        debug!(
            container = self.container,
            from = self.capacity,
            to = new_capacity,
            "grew storage"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Removes the first occurrence and shifts the rest left by one.
    pub(crate) fn remove_first(&mut self, value: Element) -> bool {
        match self.buffer.iter().position(|&element| element == value) {
            Some(index) => {
                self.buffer.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn release(&mut self) {
        self.buffer = Vec::new();
        self.capacity = 0;
    }

    pub(crate) fn as_slice(&self) -> &[Element] {
        &self.buffer
    }

    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) const fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    pub(crate) const fn name(&self) -> &'static str {
        self.container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(GrowthPolicy::Doubling, 4, 8)]
    #[case(GrowthPolicy::Doubling, 1000, 2000)]
    #[case(GrowthPolicy::Doubling, 0, 1)]
    #[case(GrowthPolicy::Additive(4), 4, 8)]
    #[case(GrowthPolicy::Additive(1000), 1000, 2000)]
    #[case(GrowthPolicy::Additive(0), 5, 6)]
    #[case(GrowthPolicy::Additive(3), 0, 3)]
    fn test_next_capacity(
        #[case] policy: GrowthPolicy,
        #[case] capacity: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(policy.next_capacity(capacity), expected);
    }

    #[rstest]
    fn test_next_capacity_saturates() {
        assert_eq!(GrowthPolicy::Doubling.next_capacity(usize::MAX - 1), usize::MAX);
    }

    #[rstest]
    fn test_storage_grows_only_when_full() {
        let mut storage = ContiguousStorage::new("test", 2, GrowthPolicy::Doubling).unwrap();
        storage.push(1).unwrap();
        storage.push(2).unwrap();
        assert_eq!(storage.capacity(), 2);
        storage.push(3).unwrap();
        assert_eq!(storage.capacity(), 4);
        assert_eq!(storage.as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_allocate_reports_out_of_memory() {
        let result = allocate("test", usize::MAX);
        assert_eq!(
            result.unwrap_err(),
            ContainerError::out_of_memory("test", usize::MAX)
        );
    }

    #[rstest]
    fn test_release_resets_capacity() {
        let mut storage = ContiguousStorage::new("test", 8, GrowthPolicy::Additive(8)).unwrap();
        storage.push(1).unwrap();
        storage.release();
        assert_eq!(storage.len(), 0);
        assert_eq!(storage.capacity(), 0);
        assert_eq!(storage.policy(), GrowthPolicy::Additive(8));
        assert_eq!(storage.name(), "test");
    }
}
