//! Subcommand dispatch engine.
//!
//! Turns a flat argument vector into a walk over an owned command tree:
//! nested subcommands are resolved level by level, persistent flags are
//! parsed out of the tokens that precede each subcommand name, flags and
//! positionals interleave freely, and exactly one terminal handler runs.
//!
//! # Architecture
//!
//! ```text
//! argv ──▶ dispatch ──▶ parser (per FlagSet) ──▶ handler
//!             │
//!             └──▶ help renderer (help token, or routing node fallback)
//! ```
//!
//! - [`flags`] - flag declarations and typed value storage
//! - [`parser`] - order-invariant token scanning with `--` escape
//! - [`command`] - the tree, its builder, and the handler contract
//! - `dispatch` - the recursive walk, entered through [`Command::execute`]
//! - [`help`] - usage text rendering
//!
//! The tree is built once via [`CommandBuilder`], executed once per process
//! invocation, and never mutated structurally afterwards. Errors surface as
//! [`CliError`]; the caller owns exit-code mapping.

pub mod command;
mod dispatch;
pub mod error;
pub mod flags;
pub mod help;
pub mod parser;

pub use command::{Command, CommandBuilder, Handler, PreRunHook};
pub use error::CliError;
pub use flags::{FlagKind, FlagSet, FlagValue};
pub use help::render as render_help;
pub use parser::{parse, wants_help};
