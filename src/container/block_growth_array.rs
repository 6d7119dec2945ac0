//! Contiguous array that grows by a fixed block of slots when full.

use super::growth::{ContiguousStorage, GrowthPolicy};
use crate::error::ContainerError;

const NAME: &str = "BlockGrowthArray";

/// A contiguous integer array with additive growth.
///
/// Same layout and delete semantics as
/// [`GrowableArray`](super::GrowableArray), but a full array grows by
/// `block_size` slots instead of doubling. A `block_size` of 0 grows one
/// slot at a time. `clear` releases the buffer but keeps the block size.
///
/// # Examples
///
/// ```rust
/// use seqbench::container::{BlockGrowthArray, SequenceContainer};
///
/// let mut array = BlockGrowthArray::with_block_size(4, 4).unwrap();
/// for value in 0..5 {
///     array.insert(value).unwrap();
/// }
/// assert_eq!(array.capacity(), 8);
/// assert_eq!(array.block_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct BlockGrowthArray {
    storage: ContiguousStorage,
}

impl BlockGrowthArray {
    /// Creates an empty array with room for `capacity` elements that grows by
    /// `block_size` slots at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfMemory`] if the initial buffer cannot be
    /// reserved.
    pub fn with_block_size(capacity: usize, block_size: usize) -> Result<Self, ContainerError> {
        Ok(Self {
            storage: ContiguousStorage::new(NAME, capacity, GrowthPolicy::Additive(block_size))?,
        })
    }

    /// Returns the growth increment.
    #[inline]
    #[must_use]
    pub const fn block_size(&self) -> usize {
        match self.storage.policy() {
            GrowthPolicy::Additive(block_size) => block_size,
            GrowthPolicy::Doubling => 0,
        }
    }
}

contiguous_container!(BlockGrowthArray);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{Element, SequenceContainer};
    use rstest::rstest;

    #[rstest]
    #[case(4, 4, 5, 8)]
    #[case(4, 4, 9, 12)]
    #[case(1000, 1000, 1001, 2000)]
    #[case(2, 3, 6, 8)]
    #[case(2, 0, 4, 4)]
    fn test_capacity_after_inserts(
        #[case] capacity: usize,
        #[case] block_size: usize,
        #[case] inserts: Element,
        #[case] expected: usize,
    ) {
        let mut array = BlockGrowthArray::with_block_size(capacity, block_size).unwrap();
        for value in 0..inserts {
            array.insert(value).unwrap();
        }
        assert_eq!(array.capacity(), expected);
    }

    #[rstest]
    fn test_delete_preserves_order() {
        let mut array = BlockGrowthArray::with_block_size(2, 2).unwrap();
        for value in 0..5 {
            array.insert(value).unwrap();
        }
        assert!(array.delete(0));
        assert!(array.delete(3));
        assert_eq!(array.as_slice(), &[1, 2, 4]);
    }

    #[rstest]
    fn test_clear_keeps_block_size() {
        let mut array = BlockGrowthArray::with_block_size(4, 3).unwrap();
        array.insert(1).unwrap();
        array.clear();
        assert_eq!(array.capacity(), 0);
        array.insert(2).unwrap();
        assert_eq!(array.capacity(), 3);
        assert_eq!(array.block_size(), 3);
    }
}
