//! The codemint command tree.
//!
//! Builds the root [`Command`] with its persistent flags and wires every
//! subcommand handler. The root pre-run hook loads configuration once into
//! the shared [`App`] context, applies the color mode, and rejects stray
//! tokens that match no subcommand.

mod doctor;
mod list;
mod remove;
mod scan;
mod tool;
mod version;

use std::cell::{Cell, OnceCell};
use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::cli::{Command, CommandBuilder};
use crate::config::{self, Config, LoadOptions};
use crate::similarity::closest;

/// Shared application state, threaded through dispatch to every handler.
///
/// Populated once by the root pre-run hook; single-threaded interior
/// mutability is all the engine's one-walk-per-process model needs.
#[derive(Default)]
pub struct App {
    config: OnceCell<Config>,
    debug: Cell<bool>,
}

impl App {
    pub fn config(&self) -> Config {
        self.config.get().cloned().unwrap_or_default()
    }

    pub fn debug(&self) -> bool {
        self.debug.get()
    }

    fn init(&self, config: Config, debug: bool) {
        let _ = self.config.set(config);
        self.debug.set(debug);
    }
}

/// Assemble the full command tree.
pub fn build_root() -> Command<App> {
    CommandBuilder::new("codemint", "CodeMint CLI")
        .persistent_flags(|fs| {
            fs.add_str("config", "", "config file path");
            fs.add_bool("debug", false, "enable debug diagnostics");
            fs.add_str("color", "auto", "colorize output: auto, always, or never");
        })
        .pre_run(|app: &App, cmd, consumed| {
            let flags = cmd.persistent_flags();
            apply_color_mode(flags.get_str("color").unwrap_or("auto"))?;

            let config_path = flags
                .get_str("config")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from);
            let config = config::load(&LoadOptions { config_path })?;
            app.init(config, flags.get_bool("debug").unwrap_or(false));

            reject_unknown_command(cmd, consumed)
        })
        .subcommand(version::command())
        .subcommand(scan::command())
        .subcommand(list::command())
        .subcommand(remove::command())
        .subcommand(tool::command())
        .subcommand(doctor::command())
        .build()
}

fn apply_color_mode(mode: &str) -> Result<()> {
    match mode.to_lowercase().as_str() {
        "auto" => colored::control::unset_override(),
        "always" | "yes" | "true" => colored::control::set_override(true),
        "never" | "no" | "false" => colored::control::set_override(false),
        other => bail!("invalid color mode {other:?}. Use: auto, always, or never."),
    }
    Ok(())
}

/// A positional token that reaches the root without matching a subcommand is
/// a typo, not an argument; fail with a suggestion instead of showing help.
fn reject_unknown_command(root: &Command<App>, consumed: &[String]) -> Result<()> {
    let Some(unknown) = consumed.first() else {
        return Ok(());
    };
    let names = root.children().iter().map(|c| c.name());
    match closest(unknown, names) {
        Some(suggestion) => bail!(
            "unknown command {unknown:?}. Did you mean {suggestion:?}? Run 'codemint --help' for available commands."
        ),
        None => bail!("unknown command {unknown:?}. Run 'codemint --help' for available commands."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_tree_shape() {
        let root = build_root();
        let names: Vec<&str> = root.children().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["version", "scan", "list", "remove", "tool", "doctor"]
        );
        let tool = root.child("tool").unwrap();
        let sub: Vec<&str> = tool.children().iter().map(|c| c.name()).collect();
        assert_eq!(sub, vec!["set", "current", "list"]);
    }

    #[test]
    fn test_unknown_command_is_rejected_with_suggestion() {
        let app = App::default();
        let mut root = build_root();
        let err = root.execute(&app, &argv(&["lst"])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown command \"lst\""));
        assert!(message.contains("Did you mean \"list\"?"));
    }

    #[test]
    fn test_bare_invocation_prints_help_and_succeeds() {
        let app = App::default();
        let mut root = build_root();
        root.execute(&app, &argv(&[])).unwrap();
    }

    #[test]
    fn test_invalid_color_mode_fails_fast() {
        let app = App::default();
        let mut root = build_root();
        let err = root
            .execute(&app, &argv(&["--color", "sometimes", "version"]))
            .unwrap_err();
        assert!(err.to_string().contains("invalid color mode"));
    }
}
