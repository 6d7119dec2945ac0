//! Sequence containers sharing one insert/delete/clear/iterate contract.
//!
//! This module provides four storage strategies for machine integers:
//!
//! - [`LinkedChain`]: Owned singly-linked chain of boxed nodes
//! - [`GrowableArray`]: Contiguous array that doubles when full
//! - [`RingBuffer`]: Circular buffer that doubles and unwraps when full
//! - [`BlockGrowthArray`]: Contiguous array that grows by a fixed block
//!
//! [`ContainerHandle`] wraps any of them so the benchmark driver can be
//! written once.
//!
//! # Lifecycle
//!
//! Containers are created by a fallible constructor that reserves the initial
//! backing storage, mutated only through [`SequenceContainer::insert`] and
//! [`SequenceContainer::delete`], and released by
//! [`SequenceContainer::clear`] (or by dropping them).
//!
//! # Examples
//!
//! ```rust
//! use seqbench::container::{GrowableArray, SequenceContainer};
//!
//! let mut array = GrowableArray::with_capacity(4).unwrap();
//! for value in 0..5 {
//!     array.insert(value).unwrap();
//! }
//! assert_eq!(array.capacity(), 8);
//!
//! // Deleting an absent value is a silent no-op.
//! assert!(!array.delete(42));
//! assert_eq!(array.len(), 5);
//! ```

use crate::error::ContainerError;

/// The element type stored by every container.
///
/// Elements carry no identity beyond their value; delete-by-value removes the
/// first equal element in logical order.
pub type Element = i64;

/// The contract shared by every container variant.
///
/// # Time Complexity
///
/// | Variant            | `insert`           | `delete` | `clear` |
/// |--------------------|--------------------|----------|---------|
/// | `LinkedChain`      | O(1) (front)       | O(n)     | O(n)    |
/// | `GrowableArray`    | O(1) amortized     | O(n)     | O(1)    |
/// | `RingBuffer`       | O(1) amortized     | O(n)     | O(1)    |
/// | `BlockGrowthArray` | O(n / block) amort.| O(n)     | O(1)    |
pub trait SequenceContainer {
    /// Iterator over the elements in logical order.
    type Iter<'a>: Iterator<Item = Element>
    where
        Self: 'a;

    /// Returns the variant name used in reports.
    fn name(&self) -> &'static str;

    /// Inserts a value.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfMemory`] if growing the backing storage
    /// fails. The container is left unchanged in that case.
    fn insert(&mut self, value: Element) -> Result<(), ContainerError>;

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` and leaves the container unchanged if no element matches.
    fn delete(&mut self, value: Element) -> bool;

    /// Releases all backing storage and resets the container to the empty state.
    ///
    /// Both `len` and `capacity` are zero afterwards.
    fn clear(&mut self);

    /// Returns the number of live elements.
    fn len(&self) -> usize;

    /// Returns the number of element slots currently reserved.
    fn capacity(&self) -> usize;

    /// Returns an iterator over the elements in logical order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if an element equal to `value` is present.
    fn contains(&self, value: Element) -> bool {
        self.iter().any(|element| element == value)
    }
}

/// Writes elements in the `a -> b -> NULL` form used by every container's
/// `Display` implementation.
pub(crate) fn write_chain<I>(formatter: &mut std::fmt::Formatter<'_>, elements: I) -> std::fmt::Result
where
    I: IntoIterator<Item = Element>,
{
    for element in elements {
        write!(formatter, "{element} -> ")?;
    }
    write!(formatter, "NULL")
}

/// Implements the shared surface of an array variant whose elements live in a
/// `storage: ContiguousStorage` field: `as_slice`, `iter`, the
/// [`SequenceContainer`] contract, `IntoIterator for &T` and `Display`.
macro_rules! contiguous_container {
    ($container:ident) => {
        impl $container {
            /// Returns the live elements as a slice.
            #[inline]
            #[must_use]
            pub fn as_slice(&self) -> &[$crate::container::Element] {
                self.storage.as_slice()
            }

            /// Returns an iterator over the elements in insertion order.
            #[inline]
            pub fn iter(
                &self,
            ) -> ::std::iter::Copied<::std::slice::Iter<'_, $crate::container::Element>> {
                self.as_slice().iter().copied()
            }
        }

        impl $crate::container::SequenceContainer for $container {
            type Iter<'a> = ::std::iter::Copied<::std::slice::Iter<'a, $crate::container::Element>>;

            fn name(&self) -> &'static str {
                self.storage.name()
            }

            fn insert(
                &mut self,
                value: $crate::container::Element,
            ) -> Result<(), $crate::error::ContainerError> {
                self.storage.push(value)
            }

            fn delete(&mut self, value: $crate::container::Element) -> bool {
                self.storage.remove_first(value)
            }

            fn clear(&mut self) {
                self.storage.release();
            }

            #[inline]
            fn len(&self) -> usize {
                self.storage.len()
            }

            #[inline]
            fn capacity(&self) -> usize {
                self.storage.capacity()
            }

            #[inline]
            fn iter(&self) -> Self::Iter<'_> {
                Self::iter(self)
            }
        }

        impl<'a> IntoIterator for &'a $container {
            type Item = $crate::container::Element;
            type IntoIter = ::std::iter::Copied<::std::slice::Iter<'a, $crate::container::Element>>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl ::std::fmt::Display for $container {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::container::write_chain(formatter, self)
            }
        }
    };
}

mod block_growth_array;
mod growable_array;
mod growth;
mod handle;
mod linked_chain;
mod ring_buffer;

pub use block_growth_array::BlockGrowthArray;
pub use growable_array::GrowableArray;
pub use growth::GrowthPolicy;
pub use handle::ContainerHandle;
pub use handle::ContainerHandleIterator;
pub use handle::VariantKind;
pub use handle::VariantSpec;
pub use linked_chain::InsertPosition;
pub use linked_chain::LinkedChain;
pub use linked_chain::LinkedChainIterator;
pub use ring_buffer::RingBuffer;
pub use ring_buffer::RingBufferIterator;

static_assertions::assert_impl_all!(LinkedChain: SequenceContainer, Send, Sync);
static_assertions::assert_impl_all!(GrowableArray: SequenceContainer, Send, Sync);
static_assertions::assert_impl_all!(RingBuffer: SequenceContainer, Send, Sync);
static_assertions::assert_impl_all!(BlockGrowthArray: SequenceContainer, Send, Sync);
static_assertions::assert_impl_all!(ContainerHandle: SequenceContainer, Send, Sync);
