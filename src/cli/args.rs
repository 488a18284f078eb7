//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Read configuration from this file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitbind - Inspect Git repositories and blobs through the host bindings
#[derive(Parser, Debug)]
#[command(name = "gitbind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a repository and print its description
    #[command(
        name = "open",
        after_help = "\
EXAMPLES:
    gitbind open /tmp/demo.git
    gitbind open ~/src/project"
    )]
    Open {
        /// Repository directory (bare or with a .git directory)
        path: String,
    },

    /// Look up a blob by identifier
    #[command(
        name = "blob",
        long_about = "Look up a blob by identifier.\n\n\
            The identifier is a 40-character hexadecimal SHA-1. Without --field the \
            blob's description (size and hash) is printed. With --tolerant a missing \
            or malformed identifier prints nothing and exits successfully.",
        after_help = "\
EXAMPLES:
    gitbind blob /tmp/demo.git e69de29bb2d1d6434b8b29ae775ad8c2e48c5391
    gitbind blob /tmp/demo.git <hash> --field content > out.bin
    gitbind blob /tmp/demo.git <hash> --tolerant --json"
    )]
    Blob {
        /// Repository directory
        repo: String,

        /// 40-character hexadecimal blob identifier
        id: String,

        /// Print nothing instead of failing when the blob cannot be resolved
        #[arg(long)]
        tolerant: bool,

        /// Print a single field
        #[arg(long, value_enum, conflicts_with = "json")]
        field: Option<BlobField>,

        /// Print a JSON summary
        #[arg(long)]
        json: bool,
    },

    /// Decode a 40-character hex identifier into 20 bytes
    #[command(name = "oid-fromstr")]
    OidFromStr {
        /// Hexadecimal identifier
        hex: String,

        /// Write the 20 raw bytes to stdout
        #[arg(long)]
        raw: bool,
    },

    /// Encode 20 raw bytes (from a file or stdin) as a hex identifier
    #[command(name = "oid-tostr")]
    OidToStr {
        /// File holding the raw identifier; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Blob members selectable with `--field`.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobField {
    Content,
    Size,
    Hash,
    Oid,
}

impl BlobField {
    /// Member name on the bound blob object.
    pub fn name(self) -> &'static str {
        match self {
            BlobField::Content => "content",
            BlobField::Size => "size",
            BlobField::Hash => "hash",
            BlobField::Oid => "oid",
        }
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_blob_flags() {
        let cli = Cli::try_parse_from([
            "gitbind",
            "blob",
            "/tmp/demo.git",
            "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391",
            "--tolerant",
            "--field",
            "size",
        ])
        .unwrap();
        match cli.command {
            Command::Blob {
                tolerant, field, ..
            } => {
                assert!(tolerant);
                assert_eq!(field, Some(BlobField::Size));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn field_conflicts_with_json() {
        let result = Cli::try_parse_from([
            "gitbind", "blob", "repo", "id", "--field", "hash", "--json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gitbind", "open", "repo", "--debug", "-q"]).unwrap();
        assert!(cli.debug);
        assert!(cli.quiet);
    }
}
