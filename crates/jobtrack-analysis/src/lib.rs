//! # Jobtrack Analysis
//!
//! Turns a job application spreadsheet, an Excel or OpenDocument workbook
//! or a CSV export, into an [`AnalysisRecord`](jobtrack_common::AnalysisRecord).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod analyzer;
pub mod dates;
pub mod row;
pub mod workbook;

pub use analyzer::ApplicationAnalyzer;
pub use dates::parse_application_date;
pub use row::ApplicationRow;
