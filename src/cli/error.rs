//! Error surface of the command engine.

use thiserror::Error;

/// Everything the dispatch walk can report back to the caller.
///
/// `Parse` and `MissingRequiredFlags` are usage errors: the process should
/// print them and exit with a usage exit code. `HelpRequested` is a sentinel,
/// not a failure; [`Command::execute`](crate::cli::Command::execute) converts
/// it into help output and a successful return, so it only escapes when the
/// parser is driven standalone. `App` carries handler and pre-run hook
/// failures through unchanged.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed flag syntax, unknown flag name, or missing flag value.
    #[error("{0}")]
    Parse(String),

    /// Required flags left unset at the leaf, aggregated into one error.
    #[error("missing required flags: {}", .0.join(", "))]
    MissingRequiredFlags(Vec<String>),

    /// A help token was seen; usage text should be emitted instead of running.
    #[error("help requested")]
    HelpRequested,

    /// A childless command without a handler was selected for execution.
    #[error("no command handler")]
    NoHandler,

    /// Failure raised by a handler or pre-run hook.
    #[error(transparent)]
    App(#[from] anyhow::Error),
}

impl CliError {
    /// True for errors caused by what the user typed rather than by the
    /// invoked operation. Callers map these to a usage exit code.
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::Parse(_) | CliError::MissingRequiredFlags(_))
    }
}
