//! Error types for containers and benchmark runs.
//!
//! Only one failure exists at the container level: running out of memory
//! while reserving backing storage. Deleting an absent value is not an
//! error; [`SequenceContainer::delete`](crate::container::SequenceContainer::delete)
//! reports it as `false` and leaves the container untouched.

use thiserror::Error;

use crate::bench::AccessPattern;

// =============================================================================
// Container Error
// =============================================================================

/// Error raised by container operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Reserving backing storage failed.
    #[error("out of memory: {container} could not reserve storage for {requested} elements")]
    OutOfMemory {
        /// Name of the container variant that attempted the allocation.
        container: &'static str,
        /// Number of element slots requested.
        requested: usize,
    },
}

impl ContainerError {
    /// Creates an out-of-memory error for the given container and request size.
    #[must_use]
    pub const fn out_of_memory(container: &'static str, requested: usize) -> Self {
        Self::OutOfMemory {
            container,
            requested,
        }
    }
}

// =============================================================================
// Benchmark Error
// =============================================================================

/// Error raised while running a benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchmarkError {
    /// A container operation failed mid-run.
    #[error("{label} failed during the {pattern} pattern")]
    Container {
        /// Label of the suite entry that failed.
        label: String,
        /// Pattern that was running.
        pattern: AccessPattern,
        /// The underlying container failure.
        #[source]
        source: ContainerError,
    },

    /// The driver was asked to run zero operations.
    #[error("operation count must be greater than zero")]
    EmptyOperationCount,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    fn test_out_of_memory_display() {
        let error = ContainerError::out_of_memory("GrowableArray", 2048);
        assert_eq!(
            error.to_string(),
            "out of memory: GrowableArray could not reserve storage for 2048 elements"
        );
    }

    #[rstest]
    fn test_benchmark_error_exposes_source() {
        let error = BenchmarkError::Container {
            label: "ArrayRing".to_string(),
            pattern: AccessPattern::Reverse,
            source: ContainerError::out_of_memory("RingBuffer", 16),
        };
        assert_eq!(error.to_string(), "ArrayRing failed during the reverse pattern");
        assert!(error.source().is_some());
    }
}
