//! `codemint list` - show what the local manifest says is installed.

use anyhow::Result;

use crate::cli::{Command, CommandBuilder};
use crate::manifest::Store;

use super::App;

pub(super) fn command() -> Command<App> {
    CommandBuilder::new("list", "List local codemint installs")
        .run(|_: &App, _, _| run())
        .build()
}

fn run() -> Result<()> {
    let wd = std::env::current_dir()?;
    let manifest = Store::new(wd).load()?;
    if manifest.installed.is_empty() {
        println!("No installed items");
        return Ok(());
    }

    let ref_width = column_width(manifest.installed.iter().map(|i| i.item_ref.len()));
    let tool_width = column_width(manifest.installed.iter().map(|i| i.tool.len()));
    for item in &manifest.installed {
        println!(
            "{:<ref_width$}  {:<tool_width$}  {:<8}  {}",
            item.item_ref, item.tool, item.version, item.path
        );
    }
    Ok(())
}

fn column_width(lengths: impl Iterator<Item = usize>) -> usize {
    lengths.max().unwrap_or(0)
}
