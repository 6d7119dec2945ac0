//! Uniform handle over the closed set of container variants.
//!
//! [`ContainerHandle`] forwards every [`SequenceContainer`] operation to the
//! variant it wraps, so the benchmark driver can be written once against
//! "any sequence container". [`VariantSpec`] describes how to build one.

use std::fmt;
use std::iter::Copied;
use std::slice;
use std::str::FromStr;

use super::{
    BlockGrowthArray, Element, GrowableArray, InsertPosition, LinkedChain, LinkedChainIterator,
    RingBuffer, RingBufferIterator, SequenceContainer,
};
use crate::error::ContainerError;

// =============================================================================
// Variant Kind
// =============================================================================

/// The storage strategy of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VariantKind {
    /// [`LinkedChain`]
    #[cfg_attr(feature = "serde", serde(alias = "linked_list"))]
    LinkedChain,
    /// [`GrowableArray`]
    #[cfg_attr(feature = "serde", serde(alias = "array_list"))]
    GrowableArray,
    /// [`RingBuffer`]
    #[cfg_attr(feature = "serde", serde(alias = "array_ring"))]
    RingBuffer,
    /// [`BlockGrowthArray`]
    #[cfg_attr(feature = "serde", serde(alias = "array_block"))]
    BlockGrowthArray,
}

impl VariantKind {
    /// All variants in report order.
    pub const ALL: [Self; 4] = [
        Self::LinkedChain,
        Self::GrowableArray,
        Self::RingBuffer,
        Self::BlockGrowthArray,
    ];

    /// Returns the variant name used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LinkedChain => "LinkedChain",
            Self::GrowableArray => "GrowableArray",
            Self::RingBuffer => "RingBuffer",
            Self::BlockGrowthArray => "BlockGrowthArray",
        }
    }
}

impl FromStr for VariantKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().replace('-', "_").as_str() {
            "linked_chain" | "linkedchain" | "linked_list" | "list" => Ok(Self::LinkedChain),
            "growable_array" | "growablearray" | "array_list" | "array" => Ok(Self::GrowableArray),
            "ring_buffer" | "ringbuffer" | "array_ring" | "ring" => Ok(Self::RingBuffer),
            "block_growth_array" | "blockgrowtharray" | "array_block" | "block" => {
                Ok(Self::BlockGrowthArray)
            }
            _ => Err(value.to_string()),
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

// =============================================================================
// Variant Spec
// =============================================================================

/// Construction parameters for one container.
///
/// # Examples
///
/// ```rust
/// use seqbench::container::{SequenceContainer, VariantKind, VariantSpec};
///
/// let handle = VariantSpec::new(VariantKind::BlockGrowthArray)
///     .initial_capacity(4)
///     .block_size(2)
///     .build()
///     .unwrap();
/// assert_eq!(handle.capacity(), 4);
/// assert_eq!(handle.name(), "BlockGrowthArray");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantSpec {
    /// Storage strategy.
    pub kind: VariantKind,
    /// Initial slots for the array variants. Ignored by `LinkedChain`.
    pub initial_capacity: usize,
    /// Growth increment for `BlockGrowthArray`. Ignored by the others.
    pub block_size: usize,
    /// Insertion end for `LinkedChain`. Ignored by the others.
    pub insert_position: InsertPosition,
}

impl VariantSpec {
    /// Default initial capacity of the array variants.
    pub const DEFAULT_CAPACITY: usize = 1000;
    /// Default growth increment of `BlockGrowthArray`.
    pub const DEFAULT_BLOCK_SIZE: usize = 1000;

    /// Creates a spec with the default capacity and block size.
    #[must_use]
    pub const fn new(kind: VariantKind) -> Self {
        Self {
            kind,
            initial_capacity: Self::DEFAULT_CAPACITY,
            block_size: Self::DEFAULT_BLOCK_SIZE,
            insert_position: InsertPosition::Front,
        }
    }

    /// Sets the initial capacity.
    #[must_use]
    pub const fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the block size.
    #[must_use]
    pub const fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Sets the linked chain insertion end.
    #[must_use]
    pub const fn insert_position(mut self, insert_position: InsertPosition) -> Self {
        self.insert_position = insert_position;
        self
    }

    /// Builds a freshly initialized container.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfMemory`] if the initial storage cannot be
    /// reserved.
    pub fn build(&self) -> Result<ContainerHandle, ContainerError> {
        Ok(match self.kind {
            VariantKind::LinkedChain => {
                ContainerHandle::LinkedChain(LinkedChain::with_position(self.insert_position))
            }
            VariantKind::GrowableArray => {
                ContainerHandle::GrowableArray(GrowableArray::with_capacity(self.initial_capacity)?)
            }
            VariantKind::RingBuffer => {
                ContainerHandle::RingBuffer(RingBuffer::with_capacity(self.initial_capacity)?)
            }
            VariantKind::BlockGrowthArray => ContainerHandle::BlockGrowthArray(
                BlockGrowthArray::with_block_size(self.initial_capacity, self.block_size)?,
            ),
        })
    }
}

// =============================================================================
// Container Handle
// =============================================================================

/// A container of any variant.
#[derive(Debug)]
pub enum ContainerHandle {
    /// Wraps a [`LinkedChain`].
    LinkedChain(LinkedChain),
    /// Wraps a [`GrowableArray`].
    GrowableArray(GrowableArray),
    /// Wraps a [`RingBuffer`].
    RingBuffer(RingBuffer),
    /// Wraps a [`BlockGrowthArray`].
    BlockGrowthArray(BlockGrowthArray),
}

macro_rules! dispatch {
    ($handle:expr, $container:ident => $body:expr) => {
        match $handle {
            ContainerHandle::LinkedChain($container) => $body,
            ContainerHandle::GrowableArray($container) => $body,
            ContainerHandle::RingBuffer($container) => $body,
            ContainerHandle::BlockGrowthArray($container) => $body,
        }
    };
}

impl ContainerHandle {
    /// Returns the storage strategy of the wrapped container.
    #[must_use]
    pub const fn kind(&self) -> VariantKind {
        match self {
            Self::LinkedChain(_) => VariantKind::LinkedChain,
            Self::GrowableArray(_) => VariantKind::GrowableArray,
            Self::RingBuffer(_) => VariantKind::RingBuffer,
            Self::BlockGrowthArray(_) => VariantKind::BlockGrowthArray,
        }
    }
}

impl SequenceContainer for ContainerHandle {
    type Iter<'a> = ContainerHandleIterator<'a>;

    fn name(&self) -> &'static str {
        dispatch!(self, container => container.name())
    }

    fn insert(&mut self, value: Element) -> Result<(), ContainerError> {
        dispatch!(self, container => container.insert(value))
    }

    fn delete(&mut self, value: Element) -> bool {
        dispatch!(self, container => container.delete(value))
    }

    fn clear(&mut self) {
        dispatch!(self, container => container.clear());
    }

    fn len(&self) -> usize {
        dispatch!(self, container => container.len())
    }

    fn capacity(&self) -> usize {
        dispatch!(self, container => container.capacity())
    }

    fn iter(&self) -> Self::Iter<'_> {
        match self {
            Self::LinkedChain(chain) => ContainerHandleIterator::Chain(chain.iter()),
            Self::GrowableArray(array) => ContainerHandleIterator::Contiguous(array.iter()),
            Self::RingBuffer(ring) => ContainerHandleIterator::Ring(ring.iter()),
            Self::BlockGrowthArray(array) => ContainerHandleIterator::Contiguous(array.iter()),
        }
    }
}

impl From<LinkedChain> for ContainerHandle {
    fn from(chain: LinkedChain) -> Self {
        Self::LinkedChain(chain)
    }
}

impl From<GrowableArray> for ContainerHandle {
    fn from(array: GrowableArray) -> Self {
        Self::GrowableArray(array)
    }
}

impl From<RingBuffer> for ContainerHandle {
    fn from(ring: RingBuffer) -> Self {
        Self::RingBuffer(ring)
    }
}

impl From<BlockGrowthArray> for ContainerHandle {
    fn from(array: BlockGrowthArray) -> Self {
        Self::BlockGrowthArray(array)
    }
}

impl fmt::Display for ContainerHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, container => fmt::Display::fmt(container, formatter))
    }
}

/// An iterator over the elements of a [`ContainerHandle`] in logical order.
#[derive(Debug, Clone)]
pub enum ContainerHandleIterator<'a> {
    /// Iterates a linked chain.
    Chain(LinkedChainIterator<'a>),
    /// Iterates an array variant.
    Contiguous(Copied<slice::Iter<'a, Element>>),
    /// Iterates a ring buffer.
    Ring(RingBufferIterator<'a>),
}

impl Iterator for ContainerHandleIterator<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Chain(iterator) => iterator.next(),
            Self::Contiguous(iterator) => iterator.next(),
            Self::Ring(iterator) => iterator.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Chain(iterator) => iterator.size_hint(),
            Self::Contiguous(iterator) => iterator.size_hint(),
            Self::Ring(iterator) => iterator.size_hint(),
        }
    }
}

impl ExactSizeIterator for ContainerHandleIterator<'_> {}
