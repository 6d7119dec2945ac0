//! Benchmark driver: runs an access pattern over a container and times it.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::Clock;
use crate::container::{Element, SequenceContainer};
use crate::error::{BenchmarkError, ContainerError};

// =============================================================================
// Access Pattern
// =============================================================================

/// Order in which inserted values are deleted.
///
/// Both patterns insert `0..n` ascending first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessPattern {
    /// Delete `0..n` ascending ("Stroustrup" pattern).
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "stroustrup"))]
    Forward,
    /// Delete `n-1..=0` descending ("fairbench" pattern).
    #[cfg_attr(feature = "serde", serde(alias = "fairbench"))]
    Reverse,
}

impl AccessPattern {
    /// Both patterns in report order.
    pub const ALL: [Self; 2] = [Self::Forward, Self::Reverse];

    /// Returns the heading printed above this pattern's results.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Forward => "Bjarne Stroustrup's Benchmark",
            Self::Reverse => "Fairbench",
        }
    }
}

impl FromStr for AccessPattern {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "forward" | "stroustrup" | "ascending" => Ok(Self::Forward),
            "reverse" | "fairbench" | "descending" => Ok(Self::Reverse),
            _ => Err(value.to_string()),
        }
    }
}

impl fmt::Display for AccessPattern {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(formatter, "forward"),
            Self::Reverse => write!(formatter, "reverse"),
        }
    }
}

// =============================================================================
// Run Report
// =============================================================================

/// Timings of one pattern run over one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Pattern that ran.
    pub pattern: AccessPattern,
    /// Values inserted (and deleted).
    pub operation_count: u32,
    /// Time from start to the end of the insert phase.
    pub insert_elapsed: Duration,
    /// Time from the end of the insert phase to the end of the run.
    pub delete_elapsed: Duration,
    /// Time from start to end.
    pub elapsed: Duration,
    /// Elements left in the container after the run.
    pub final_len: usize,
}

impl RunReport {
    /// Returns the total elapsed time in fractional seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

// =============================================================================
// Benchmark Driver
// =============================================================================

/// Runs access patterns for a fixed number of operations.
///
/// # Examples
///
/// ```rust
/// use seqbench::bench::{AccessPattern, BenchmarkDriver, ManualClock};
/// use seqbench::container::GrowableArray;
/// use std::time::Duration;
///
/// let driver = BenchmarkDriver::new(ManualClock::with_step(Duration::from_secs(1)), 100).unwrap();
/// let mut array = GrowableArray::with_capacity(10).unwrap();
///
/// let report = driver.run(&mut array, AccessPattern::Reverse).unwrap();
/// assert_eq!(report.final_len, 0);
/// assert_eq!(report.elapsed, Duration::from_secs(2));
/// ```
#[derive(Debug)]
pub struct BenchmarkDriver<C> {
    clock: C,
    operation_count: u32,
}

impl<C: Clock> BenchmarkDriver<C> {
    /// Creates a driver that inserts and deletes `operation_count` values per run.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::EmptyOperationCount`] if `operation_count` is 0.
    pub fn new(clock: C, operation_count: u32) -> Result<Self, BenchmarkError> {
        if operation_count == 0 {
            return Err(BenchmarkError::EmptyOperationCount);
        }
        Ok(Self {
            clock,
            operation_count,
        })
    }

    /// Returns the number of values inserted per run.
    #[must_use]
    pub const fn operation_count(&self) -> u32 {
        self.operation_count
    }

    /// Runs `pattern` over `container` and reports the elapsed time.
    ///
    /// The container is not cleared; callers own its lifecycle.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContainerError`] raised by an insertion. The run
    /// stops at that point.
    pub fn run<S: SequenceContainer>(
        &self,
        container: &mut S,
        pattern: AccessPattern,
    ) -> Result<RunReport, ContainerError> {
        let count = Element::from(self.operation_count);

        let start = self.clock.now();
        for value in 0..count {
            container.insert(value)?;
        }
        let inserted = self.clock.now();
        match pattern {
            AccessPattern::Forward => {
                for value in 0..count {
                    container.delete(value);
                }
            }
            AccessPattern::Reverse => {
                for value in (0..count).rev() {
                    container.delete(value);
                }
            }
        }
        let end = self.clock.now();

        Ok(RunReport {
            pattern,
            operation_count: self.operation_count,
            insert_elapsed: inserted.saturating_sub(start),
            delete_elapsed: end.saturating_sub(inserted),
            elapsed: end.saturating_sub(start),
            final_len: container.len(),
        })
    }
}
