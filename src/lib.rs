//! # codemint
//!
//! CLI for installing and managing AI coding rules and skills from the
//! CodeMint catalog. The interesting part lives in [`cli`]: a small
//! subcommand dispatch engine that resolves nested commands over an owned
//! tree, parses flags and positionals in any interleaving, and honors the
//! `--` escape. Everything else is local-filesystem glue: the install
//! manifest, repository stack detection, and tool selection.
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use codemint::cli::CommandBuilder;
//!
//! let mut root = CommandBuilder::new("mint", "Example CLI")
//!     .subcommand(
//!         CommandBuilder::new("greet <name>", "Say hello")
//!             .run(|_: &(), _, args| {
//!                 println!("hello {}", args.join(" "));
//!                 Ok(())
//!             })
//!             .build(),
//!     )
//!     .build();
//! root.execute(&(), &["greet".into(), "world".into()]).unwrap();
//! ```

/// Subcommand dispatch engine: flag sets, token parsing, the command tree,
/// and help rendering.
pub mod cli;

/// Catalog item references (`@rule/<slug>`, `@skill/<slug>`).
pub mod catalog;

/// Command tree assembly and handlers for the `codemint` binary.
pub mod commands;

/// Layered configuration: defaults, config file, `CODEMINT_*` environment.
pub mod config;

/// Technology stack detection by marker-file existence.
pub mod detect;

/// Atomic writes and checksum helpers.
pub mod fs_utils;

/// The `.codemint/` manifest and settings store.
pub mod manifest;

/// Levenshtein-based "did you mean" suggestions.
pub mod similarity;

/// Supported AI coding tool registry.
pub mod tooling;

pub use cli::{CliError, Command, CommandBuilder, FlagKind, FlagSet, FlagValue, Handler};
