//! # Jobtrack Config
//!
//! Type-safe configuration management for jobtrack.
//!
//! This crate provides the YAML schema, its defaults (including the fixed
//! chart palettes), loading with environment overrides, and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
