//! core
//!
//! Core domain types, path handling, and configuration for gitbind.
//!
//! # Modules
//!
//! - [`types`] - Binary identifier codec (`Oid`)
//! - [`paths`] - Repository path normalization
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Identifiers are validated at construction and never partially decoded

pub mod config;
pub mod paths;
pub mod types;
