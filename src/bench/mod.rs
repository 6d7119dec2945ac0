//! Benchmark driver and suite.
//!
//! - [`BenchmarkDriver`]: runs one [`AccessPattern`] over one container and
//!   records start, mid (end of inserts) and end readings of a [`Clock`]
//! - [`BenchmarkSuite`]: builds every configured container, runs the driver
//!   under every pattern and collects a [`SuiteReport`]
//!
//! # Examples
//!
//! ```rust
//! use seqbench::bench::{AccessPattern, BenchmarkSuite, MonotonicClock, ReportStyle};
//!
//! let report = BenchmarkSuite::standard(500)
//!     .patterns([AccessPattern::Forward])
//!     .style(ReportStyle::Combined)
//!     .run(MonotonicClock::new())
//!     .unwrap();
//!
//! assert_eq!(report.records.len(), 4);
//! assert!(report.to_string().starts_with("Running Bjarne Stroustrup's Benchmark:"));
//! ```

mod clock;
mod driver;
mod suite;

pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::MonotonicClock;
pub use driver::AccessPattern;
pub use driver::BenchmarkDriver;
pub use driver::RunReport;
pub use suite::BenchmarkSuite;
pub use suite::ClearGuard;
pub use suite::ReportStyle;
pub use suite::RunRecord;
pub use suite::SuiteEntry;
pub use suite::SuiteReport;
