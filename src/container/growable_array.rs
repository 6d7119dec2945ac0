//! Contiguous array that doubles its capacity when full.

use super::growth::{ContiguousStorage, GrowthPolicy};
use crate::error::ContainerError;

const NAME: &str = "GrowableArray";

/// A contiguous integer array with doubling growth.
///
/// Elements live at indices `[0, len)` in insertion order. Inserting into a
/// full array doubles its capacity; deleting shifts every later element one
/// slot to the left, so surviving elements keep their relative order.
///
/// # Examples
///
/// ```rust
/// use seqbench::container::{GrowableArray, SequenceContainer};
///
/// let mut array = GrowableArray::with_capacity(2).unwrap();
/// for value in [10, 20, 30] {
///     array.insert(value).unwrap();
/// }
/// assert_eq!(array.capacity(), 4);
///
/// assert!(array.delete(20));
/// assert_eq!(array.as_slice(), &[10, 30]);
/// ```
#[derive(Debug, Clone)]
pub struct GrowableArray {
    storage: ContiguousStorage,
}

impl GrowableArray {
    /// Creates an empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfMemory`] if the initial buffer cannot be
    /// reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        Ok(Self {
            storage: ContiguousStorage::new(NAME, capacity, GrowthPolicy::Doubling)?,
        })
    }
}

contiguous_container!(GrowableArray);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::SequenceContainer;
    use rstest::rstest;

    #[rstest]
    fn test_growth_doubles_at_threshold() {
        let mut array = GrowableArray::with_capacity(4).unwrap();
        for value in 0..4 {
            array.insert(value).unwrap();
        }
        assert_eq!(array.capacity(), 4);
        array.insert(4).unwrap();
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.len(), 5);
    }

    #[rstest]
    fn test_zero_capacity_grows_to_one() {
        let mut array = GrowableArray::with_capacity(0).unwrap();
        array.insert(1).unwrap();
        assert_eq!(array.capacity(), 1);
        array.insert(2).unwrap();
        assert_eq!(array.capacity(), 2);
    }

    #[rstest]
    fn test_delete_shifts_left() {
        let mut array = GrowableArray::with_capacity(4).unwrap();
        for value in [1, 2, 3, 4] {
            array.insert(value).unwrap();
        }
        assert!(array.delete(2));
        assert_eq!(array.as_slice(), &[1, 3, 4]);
        assert_eq!(array.capacity(), 4);
    }

    #[rstest]
    fn test_clear_then_insert() {
        let mut array = GrowableArray::with_capacity(4).unwrap();
        array.insert(1).unwrap();
        array.clear();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 0);
        array.insert(9).unwrap();
        assert_eq!(array.as_slice(), &[9]);
    }

    #[rstest]
    fn test_display() {
        let mut array = GrowableArray::with_capacity(2).unwrap();
        array.insert(1).unwrap();
        array.insert(2).unwrap();
        assert_eq!(array.to_string(), "1 -> 2 -> NULL");
    }
}
