//! # Jobtrack Common
//!
//! Shared types, error taxonomy and logging setup for jobtrack.
//!
//! This crate provides the [`AnalysisRecord`] exchanged between the analysis
//! step and the projection core, plus the error type every other crate in the
//! workspace reports through.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod record;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{JobTrackError, Result};
pub use logging::{init_logging, validate_filter, LogFormat, LoggingConfig};
pub use record::{AnalysisRecord, CountMap, RawCount};
