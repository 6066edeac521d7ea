//! # Jobtrack CLI
//!
//! Command-line front end: analyzes a job application spreadsheet into an
//! aggregate record and projects records into chart-ready data.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::*;
pub use error::*;
