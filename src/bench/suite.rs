//! Benchmark suite: times every configured container under every pattern.
//!
//! Each (pattern, entry) pair gets a freshly built container, which is
//! cleared by [`ClearGuard`] when the run ends, whether or not it succeeded.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use tracing::{info, warn};

use super::{AccessPattern, BenchmarkDriver, Clock, RunReport};
use crate::container::{SequenceContainer, VariantKind, VariantSpec};
use crate::error::BenchmarkError;

// =============================================================================
// Report Style
// =============================================================================

/// Layout of the printed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReportStyle {
    /// One `"<label>: <seconds> seconds"` line per entry, grouped by pattern.
    #[default]
    Combined,
    /// Insert timings and delete timings listed separately.
    Split,
}

impl FromStr for ReportStyle {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "combined" | "total" => Ok(Self::Combined),
            "split" | "phases" => Ok(Self::Split),
            _ => Err(value.to_string()),
        }
    }
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combined => write!(formatter, "combined"),
            Self::Split => write!(formatter, "split"),
        }
    }
}

// =============================================================================
// Clear Guard
// =============================================================================

/// Clears the borrowed container when dropped.
///
/// # Examples
///
/// ```rust
/// use seqbench::bench::ClearGuard;
/// use seqbench::container::{GrowableArray, SequenceContainer};
///
/// let mut array = GrowableArray::with_capacity(4).unwrap();
/// {
///     let mut guard = ClearGuard::new(&mut array);
///     guard.insert(1).unwrap();
///     assert_eq!(guard.len(), 1);
/// }
/// assert_eq!(array.capacity(), 0);
/// ```
#[derive(Debug)]
pub struct ClearGuard<'a, S: SequenceContainer> {
    container: &'a mut S,
}

impl<'a, S: SequenceContainer> ClearGuard<'a, S> {
    /// Wraps `container`.
    pub const fn new(container: &'a mut S) -> Self {
        Self { container }
    }
}

impl<S: SequenceContainer> Deref for ClearGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        self.container
    }
}

impl<S: SequenceContainer> DerefMut for ClearGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.container
    }
}

impl<S: SequenceContainer> Drop for ClearGuard<'_, S> {
    fn drop(&mut self) {
        self.container.clear();
    }
}

// =============================================================================
// Suite Entry and Records
// =============================================================================

/// A labelled container configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteEntry {
    /// Name printed in the report.
    pub label: String,
    /// How to build the container.
    pub spec: VariantSpec,
}

impl SuiteEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(label: impl Into<String>, spec: VariantSpec) -> Self {
        Self {
            label: label.into(),
            spec,
        }
    }
}

/// Result of one entry under one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    /// Entry label.
    pub label: String,
    /// Storage strategy of the entry.
    pub kind: VariantKind,
    /// Timings.
    pub report: RunReport,
}

impl fmt::Display for RunRecord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {:.6} seconds", self.label, self.report.seconds())
    }
}

/// All records of a suite run, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    /// Layout used by `Display`.
    pub style: ReportStyle,
    /// One record per (pattern, entry) pair.
    pub records: Vec<RunRecord>,
}

impl SuiteReport {
    /// Returns the records produced under `pattern`.
    pub fn for_pattern(&self, pattern: AccessPattern) -> impl Iterator<Item = &RunRecord> {
        self.records
            .iter()
            .filter(move |record| record.report.pattern == pattern)
    }

    /// Returns `true` if every run left its container empty.
    #[must_use]
    pub fn all_drained(&self) -> bool {
        self.records.iter().all(|record| record.report.final_len == 0)
    }

    fn patterns(&self) -> Vec<AccessPattern> {
        let mut patterns: Vec<AccessPattern> = Vec::new();
        for record in &self.records {
            if !patterns.contains(&record.report.pattern) {
                patterns.push(record.report.pattern);
            }
        }
        patterns
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, pattern) in self.patterns().into_iter().enumerate() {
            if index > 0 {
                writeln!(formatter)?;
            }
            writeln!(formatter, "Running {}:", pattern.title())?;
            match self.style {
                ReportStyle::Combined => {
                    for record in self.for_pattern(pattern) {
                        writeln!(formatter, "{record}")?;
                    }
                }
                ReportStyle::Split => {
                    for record in self.for_pattern(pattern) {
                        writeln!(
                            formatter,
                            "Time for {} insert: {:.6} seconds",
                            record.label,
                            record.report.insert_elapsed.as_secs_f64()
                        )?;
                    }
                    for record in self.for_pattern(pattern) {
                        writeln!(
                            formatter,
                            "Time for {} delete: {:.6} seconds",
                            record.label,
                            record.report.delete_elapsed.as_secs_f64()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Benchmark Suite
// =============================================================================

/// A set of labelled containers, patterns and an operation count.
///
/// # Examples
///
/// ```rust
/// use seqbench::bench::{BenchmarkSuite, ManualClock};
///
/// let suite = BenchmarkSuite::standard(1_000);
/// let report = suite.run(ManualClock::default()).unwrap();
///
/// assert_eq!(report.records.len(), 8);
/// assert!(report.all_drained());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkSuite {
    operation_count: u32,
    patterns: Vec<AccessPattern>,
    style: ReportStyle,
    entries: Vec<SuiteEntry>,
}

impl BenchmarkSuite {
    /// Operation count used by the reference harness.
    pub const DEFAULT_OPERATION_COUNT: u32 = 1_000_000;

    /// Creates an empty suite with both patterns and the combined style.
    #[must_use]
    pub fn new(operation_count: u32) -> Self {
        Self {
            operation_count,
            patterns: AccessPattern::ALL.to_vec(),
            style: ReportStyle::Combined,
            entries: Vec::new(),
        }
    }

    /// Creates a suite over the four variants with default parameters,
    /// labelled by variant name.
    #[must_use]
    pub fn standard(operation_count: u32) -> Self {
        VariantKind::ALL
            .into_iter()
            .fold(Self::new(operation_count), |suite, kind| {
                suite.entry(kind.name(), VariantSpec::new(kind))
            })
    }

    /// Appends a labelled entry.
    #[must_use]
    pub fn entry(mut self, label: impl Into<String>, spec: VariantSpec) -> Self {
        self.entries.push(SuiteEntry::new(label, spec));
        self
    }

    /// Replaces the patterns to run.
    #[must_use]
    pub fn patterns(mut self, patterns: impl IntoIterator<Item = AccessPattern>) -> Self {
        self.patterns = patterns.into_iter().collect();
        self
    }

    /// Sets the report style.
    #[must_use]
    pub const fn style(mut self, style: ReportStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the configured entries.
    #[must_use]
    pub fn entries(&self) -> &[SuiteEntry] {
        &self.entries
    }

    /// Returns the operation count.
    #[must_use]
    pub const fn operation_count(&self) -> u32 {
        self.operation_count
    }

    /// Runs every entry under every pattern, pattern-major.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::EmptyOperationCount`] for a zero operation
    /// count, or [`BenchmarkError::Container`] on the first container failure.
    /// The failing container is cleared before the error is returned.
    pub fn run<C: Clock>(&self, clock: C) -> Result<SuiteReport, BenchmarkError> {
        let driver = BenchmarkDriver::new(clock, self.operation_count)?;
        let mut records = Vec::with_capacity(self.patterns.len() * self.entries.len());

        for &pattern in &self.patterns {
            for entry in &self.entries {
                let container_error = |source| BenchmarkError::Container {
                    label: entry.label.clone(),
                    pattern,
                    source,
                };
                let mut handle = entry.spec.build().map_err(container_error)?;
                let report = {
                    let mut guard = ClearGuard::new(&mut handle);
                    driver.run(&mut *guard, pattern).map_err(container_error)?
                };

                info!(
                    label = %entry.label,
                    %pattern,
                    seconds = report.seconds(),
                    "run complete"
                );
                if report.final_len != 0 {
                    warn!(
                        label = %entry.label,
                        %pattern,
                        remaining = report.final_len,
                        "container not empty after run"
                    );
                }

                records.push(RunRecord {
                    label: entry.label.clone(),
                    kind: entry.spec.kind,
                    report,
                });
            }
        }

        Ok(SuiteReport {
            style: self.style,
            records,
        })
    }
}
