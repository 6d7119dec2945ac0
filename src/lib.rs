//! # seqbench
//!
//! Insertion/deletion throughput benchmarks for elementary sequence
//! container layouts.
//!
//! ## Overview
//!
//! The crate is split in two layers:
//!
//! - **Containers**: four storage strategies sharing one contract
//!   ([`SequenceContainer`](container::SequenceContainer)): a singly linked
//!   chain, a doubling array, a ring buffer and an additive block-growth array.
//! - **Benchmarks**: a driver that runs an access pattern over any container
//!   and a suite that times every configured variant under every pattern.
//!
//! ## Access Patterns
//!
//! - `Forward` ("Stroustrup"): insert `0..n`, then delete `0..n` ascending.
//! - `Reverse` ("fairbench"): insert `0..n`, then delete `n-1..=0` descending.
//!
//! Delete-by-value cost is not symmetric across layouts, which is what the
//! two patterns expose.
//!
//! ## Feature Flags
//!
//! - `serde`: YAML suite configuration ([`config`])
//! - `cli`: the `seqbench` binary (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use seqbench::prelude::*;
//!
//! let mut ring = RingBuffer::with_capacity(4).unwrap();
//! for value in 0..4 {
//!     ring.insert(value).unwrap();
//! }
//! assert!(ring.delete(1));
//! ring.insert(4).unwrap();
//! assert_eq!(ring.iter().collect::<Vec<_>>(), vec![0, 2, 3, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types, the benchmark driver and the error types.
///
/// # Usage
///
/// ```rust
/// use seqbench::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bench::*;
    pub use crate::container::*;
    pub use crate::error::*;

    #[cfg(feature = "serde")]
    pub use crate::config::*;
}

pub mod bench;
pub mod container;
pub mod error;

#[cfg(feature = "serde")]
pub mod config;
