//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Initializes the native library through `git_init`
//! 2. Calls host builtins with host values
//! 3. Formats and displays output
//!
//! Handlers never touch `git2` or the bindings directly.

mod blob;
mod completion;
mod oid;
mod open;

pub use blob::blob;
pub use completion::completion;
pub use oid::{oid_fromstr, oid_tostr};
pub use open::open;

use anyhow::Result;

use crate::cli::args::Command;
use crate::host::Host;
use crate::ui::output::Verbosity;

/// Execution context shared by all command handlers.
#[derive(Debug)]
pub struct Context {
    /// Host with the git builtins registered
    pub host: Host,
    /// Output verbosity
    pub verbosity: Verbosity,
}

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Open { path } => open(ctx, &path),
        Command::Blob {
            repo,
            id,
            tolerant,
            field,
            json,
        } => blob(ctx, &repo, &id, tolerant, field, json),
        Command::OidFromStr { hex, raw } => oid_fromstr(ctx, &hex, raw),
        Command::OidToStr { file } => oid_tostr(ctx, file.as_deref()),
        Command::Completion { shell } => completion(shell),
    }
}
