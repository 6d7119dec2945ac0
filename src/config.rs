//! YAML suite configuration.
//!
//! A configuration file lists the operation count, the patterns to run, the
//! report style and the labelled containers. Omitted fields take the
//! defaults of the reference harness.
//!
//! # Example
//!
//! ```yaml
//! operation_count: 1000000
//! patterns: [forward, reverse]
//! report_style: combined
//! entries:
//!   - label: NoCacheList
//!     variant: linked_chain
//!   - label: ArrayList
//!     variant: growable_array
//!     initial_capacity: 1000
//!   - label: ArrayRing
//!     variant: ring_buffer
//!   - label: ArrayBlock
//!     variant: block_growth_array
//!     block_size: 1000
//! ```

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bench::{AccessPattern, BenchmarkSuite, ReportStyle};
use crate::container::{InsertPosition, VariantKind, VariantSpec};

// =============================================================================
// Configuration Error
// =============================================================================

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid access pattern name.
    #[error("Invalid access pattern: '{0}'. Expected 'forward' or 'reverse'")]
    InvalidPattern(String),

    /// Invalid container variant name.
    #[error(
        "Invalid variant: '{0}'. Expected 'linked_chain', 'growable_array', 'ring_buffer', or 'block_growth_array'"
    )]
    InvalidVariant(String),

    /// Invalid report style name.
    #[error("Invalid report style: '{0}'. Expected 'combined' or 'split'")]
    InvalidReportStyle(String),

    /// Invalid built-in scenario name.
    #[error("Invalid scenario: '{0}'. Expected 'combined', 'split', or 'standard'")]
    InvalidScenario(String),

    /// File read error.
    #[error("Failed to read config file: {0}")]
    FileRead(String),

    /// YAML parse error.
    #[error("Failed to parse config YAML: {0}")]
    YamlParse(String),

    /// YAML serialize error.
    #[error("Failed to serialize config to YAML: {0}")]
    YamlSerialize(String),

    /// The configuration failed validation.
    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Parses an access pattern name.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPattern`] if the name is not recognized.
pub fn parse_pattern(value: &str) -> Result<AccessPattern, ConfigError> {
    value.parse().map_err(ConfigError::InvalidPattern)
}

/// Parses a container variant name.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidVariant`] if the name is not recognized.
pub fn parse_variant(value: &str) -> Result<VariantKind, ConfigError> {
    value.parse().map_err(ConfigError::InvalidVariant)
}

/// Parses a report style name.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidReportStyle`] if the name is not recognized.
pub fn parse_report_style(value: &str) -> Result<ReportStyle, ConfigError> {
    value.parse().map_err(ConfigError::InvalidReportStyle)
}

/// Parses a built-in scenario name.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidScenario`] if the name is not recognized.
pub fn parse_scenario(value: &str) -> Result<Scenario, ConfigError> {
    value.parse().map_err(ConfigError::InvalidScenario)
}

// =============================================================================
// Built-in Scenarios
// =============================================================================

/// A suite layout that needs no configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scenario {
    /// Six labelled containers under both patterns, one total per run.
    ///
    /// See [`SuiteConfig::combined`].
    #[default]
    Combined,
    /// Three containers under the forward pattern, insert and delete timed
    /// separately.
    ///
    /// See [`SuiteConfig::split`].
    Split,
    /// The four variants labelled by name, under both patterns.
    ///
    /// See [`SuiteConfig::default`].
    Standard,
}

impl Scenario {
    /// Returns the configuration this scenario runs.
    #[must_use]
    pub fn config(self) -> SuiteConfig {
        match self {
            Self::Combined => SuiteConfig::combined(),
            Self::Split => SuiteConfig::split(),
            Self::Standard => SuiteConfig::default(),
        }
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "combined" => Ok(Self::Combined),
            "split" => Ok(Self::Split),
            "standard" => Ok(Self::Standard),
            _ => Err(value.to_string()),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combined => write!(formatter, "combined"),
            Self::Split => write!(formatter, "split"),
            Self::Standard => write!(formatter, "standard"),
        }
    }
}

// =============================================================================
// Entry Configuration
// =============================================================================

const fn default_capacity() -> usize {
    VariantSpec::DEFAULT_CAPACITY
}

const fn default_block_size() -> usize {
    VariantSpec::DEFAULT_BLOCK_SIZE
}

/// One labelled container in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    /// Name printed in the report.
    pub label: String,
    /// Storage strategy.
    pub variant: VariantKind,
    /// Initial slots for the array variants.
    #[serde(default = "default_capacity")]
    pub initial_capacity: usize,
    /// Growth increment for the block growth array.
    #[serde(default = "default_block_size")]
    pub block_size: usize,
    /// Insertion end for the linked chain.
    #[serde(default)]
    pub insert_position: InsertPosition,
}

impl EntryConfig {
    /// Creates an entry with default parameters for `variant`.
    #[must_use]
    pub fn new(label: impl Into<String>, variant: VariantKind) -> Self {
        Self {
            label: label.into(),
            variant,
            initial_capacity: default_capacity(),
            block_size: default_block_size(),
            insert_position: InsertPosition::default(),
        }
    }

    /// Returns the construction parameters of this entry.
    #[must_use]
    pub const fn spec(&self) -> VariantSpec {
        VariantSpec::new(self.variant)
            .initial_capacity(self.initial_capacity)
            .block_size(self.block_size)
            .insert_position(self.insert_position)
    }
}

// =============================================================================
// Suite Configuration
// =============================================================================

/// A complete benchmark configuration.
///
/// # Examples
///
/// ```rust
/// use seqbench::bench::AccessPattern;
/// use seqbench::config::SuiteConfig;
///
/// let config = SuiteConfig::from_yaml(
///     "operation_count: 2000\npatterns: [reverse]\nentries:\n  - label: Ring\n    variant: ring_buffer\n",
/// )
/// .unwrap();
///
/// assert_eq!(config.operation_count, 2000);
/// assert_eq!(config.patterns, vec![AccessPattern::Reverse]);
/// assert_eq!(config.entries[0].initial_capacity, 1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Values inserted and deleted per run.
    pub operation_count: u32,
    /// Patterns to run, in order.
    pub patterns: Vec<AccessPattern>,
    /// Report layout.
    pub report_style: ReportStyle,
    /// Labelled containers, in report order.
    pub entries: Vec<EntryConfig>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            operation_count: BenchmarkSuite::DEFAULT_OPERATION_COUNT,
            patterns: AccessPattern::ALL.to_vec(),
            report_style: ReportStyle::default(),
            entries: VariantKind::ALL
                .into_iter()
                .map(|kind| EntryConfig::new(kind.name(), kind))
                .collect(),
        }
    }
}

impl SuiteConfig {
    /// Six entries under both patterns with 1,000,000 operations: three
    /// front-inserting chains (`NoCacheList`, `LinkedList`, `SingleList`),
    /// then `ArrayList`, `ArrayRing` and `ArrayBlock`, all sized 1000.
    #[must_use]
    pub fn combined() -> Self {
        let chain = |label: &str| EntryConfig::new(label, VariantKind::LinkedChain);
        Self {
            entries: vec![
                chain("NoCacheList"),
                chain("LinkedList"),
                chain("SingleList"),
                EntryConfig::new("ArrayList", VariantKind::GrowableArray),
                EntryConfig::new("ArrayRing", VariantKind::RingBuffer),
                EntryConfig::new("ArrayBlock", VariantKind::BlockGrowthArray),
            ],
            ..Self::default()
        }
    }

    /// Three entries under the forward pattern with 10,000 operations and
    /// split timings: `linked list`, `array list` (capacity 10) and
    /// `array block` (capacity and block size 100).
    #[must_use]
    pub fn split() -> Self {
        Self {
            operation_count: 10_000,
            patterns: vec![AccessPattern::Forward],
            report_style: ReportStyle::Split,
            entries: vec![
                EntryConfig::new("linked list", VariantKind::LinkedChain),
                EntryConfig {
                    initial_capacity: 10,
                    ..EntryConfig::new("array list", VariantKind::GrowableArray)
                },
                EntryConfig {
                    initial_capacity: 100,
                    block_size: 100,
                    ..EntryConfig::new("array block", VariantKind::BlockGrowthArray)
                },
            ],
        }
    }

    /// Loads a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|error| ConfigError::FileRead(error.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Parses a configuration from YAML content.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::YamlParse` if the YAML is invalid.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|error| ConfigError::YamlParse(error.to_string()))
    }

    /// Serializes the configuration to YAML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::YamlSerialize` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|error| ConfigError::YamlSerialize(error.to_string()))
    }

    /// Checks the configuration for values the suite cannot run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` listing every problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.operation_count == 0 {
            errors.push("operation_count must be greater than zero".to_string());
        }
        if self.patterns.is_empty() {
            errors.push("at least one pattern is required".to_string());
        }
        if self.entries.is_empty() {
            errors.push("at least one entry is required".to_string());
        }

        let mut labels = HashSet::new();
        for entry in &self.entries {
            if entry.label.trim().is_empty() {
                errors.push("entry labels must not be empty".to_string());
            } else if !labels.insert(entry.label.as_str()) {
                errors.push(format!("duplicate entry label '{}'", entry.label));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Builds the suite described by this configuration.
    #[must_use]
    pub fn to_suite(&self) -> BenchmarkSuite {
        self.entries.iter().fold(
            BenchmarkSuite::new(self.operation_count)
                .patterns(self.patterns.iter().copied())
                .style(self.report_style),
            |suite, entry| suite.entry(entry.label.clone(), entry.spec()),
        )
    }
}
