//! `codemint tool` - manage the repository's default AI coding tool.

use anyhow::bail;

use crate::cli::{Command, CommandBuilder};
use crate::manifest::Store;
use crate::tooling;

use super::App;

pub(super) fn command() -> Command<App> {
    CommandBuilder::new("tool", "Manage default AI coding tool for this repository")
        .subcommand(set_command())
        .subcommand(current_command())
        .subcommand(list_command())
        .build()
}

fn set_command() -> Command<App> {
    CommandBuilder::new("set <tool>", "Set default AI coding tool")
        .run(|_: &App, _, args| {
            if args.len() != 1 {
                bail!("tool set expects exactly one tool name");
            }
            let tool = &args[0];
            tooling::validate(tool)?;

            let store = Store::new(std::env::current_dir()?);
            let mut settings = store.load_settings()?;
            settings.ai_tool = tool.clone();
            store.save_settings(&settings)?;
            println!("Default AI tool set to {tool}");
            Ok(())
        })
        .build()
}

fn current_command() -> Command<App> {
    CommandBuilder::new("current", "Show default AI coding tool")
        .run(|_: &App, _, _| {
            let store = Store::new(std::env::current_dir()?);
            let settings = store.load_settings()?;
            if settings.ai_tool.is_empty() {
                println!("No default tool set");
            } else {
                println!("{}", settings.ai_tool);
            }
            Ok(())
        })
        .build()
}

fn list_command() -> Command<App> {
    CommandBuilder::new("list", "List supported AI coding tools")
        .run_unit(|_: &App, _, _| {
            for tool in tooling::SUPPORTED {
                println!("{tool}");
            }
        })
        .build()
}
