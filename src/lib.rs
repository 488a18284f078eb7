//! gitbind - Host-scripting bindings for Git repositories and blobs
//!
//! gitbind surfaces native libgit2 objects (repositories and blobs) as
//! first-class values of a host scripting runtime, and converts binary
//! object identifiers between raw bytes and hexadecimal strings.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (drives the host builtins)
//! - [`builtins`] - Entry points callable from host code
//! - [`host`] - Host values, call contexts, and the builtin registry
//! - [`bindings`] - Bound object types and the foreign object protocol
//! - [`core`] - Identifier codec, path normalization, configuration
//! - [`git`] - Single interface for all native Git operations
//! - [`ui`] - Terminal output
//!
//! # Correctness Invariants
//!
//! 1. Identifiers are decoded atomically and only from exact-length input
//! 2. A bound object is never visible to the host half-constructed
//! 3. Releasing a bound object twice never frees a native handle twice
//! 4. Native error messages reach the host verbatim

pub mod bindings;
pub mod builtins;
pub mod cli;
pub mod core;
pub mod git;
pub mod host;
pub mod ui;
