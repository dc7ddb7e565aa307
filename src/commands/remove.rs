//! `codemint remove <ref>` - delete an installed item and its manifest entry.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::catalog;
use crate::cli::{Command, CommandBuilder};
use crate::manifest::{Store, find_by_ref};

use super::App;

pub(super) fn command() -> Command<App> {
    CommandBuilder::new(
        "remove @rule/<slug>|@skill/<slug>",
        "Remove installed rule or skill",
    )
    .flags(|fs| fs.add_bool("dry-run", false, "preview removal without touching files"))
    .run(|_: &App, cmd, args| {
        let dry_run = cmd.flags().get_bool("dry-run").unwrap_or(false);
        run(args, dry_run)
    })
    .build()
}

fn run(args: &[String], dry_run: bool) -> Result<()> {
    if args.len() != 1 {
        bail!("remove expects exactly one identifier");
    }
    let item_ref = catalog::parse_ref(&args[0])?;

    let wd = std::env::current_dir()?;
    let store = Store::new(wd);
    let mut manifest = store.load()?;
    let Some(idx) = find_by_ref(&manifest.installed, &item_ref.raw) else {
        bail!("not installed: {}", item_ref.raw);
    };

    let path = manifest.installed[idx].path.clone();
    if dry_run {
        if path.is_empty() {
            println!("Dry run: remove {} (manifest entry only)", item_ref.raw);
        } else {
            println!("Dry run: remove {} ({path})", item_ref.raw);
        }
        return Ok(());
    }

    if !path.is_empty() {
        remove_installed_path(Path::new(&path))
            .with_context(|| format!("remove {path}"))?;
    }
    manifest.installed.remove(idx);
    store.save(&manifest)?;
    println!("Removed {}", item_ref.raw);
    Ok(())
}

/// Items install as a single file or a directory; a path already gone is not
/// an error, the manifest entry still has to go.
fn remove_installed_path(path: &Path) -> std::io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_remove_installed_path_handles_file_dir_and_missing() {
        let temp = TempDir::new().expect("temp dir");

        let file = temp.path().join("rule.mdc");
        fs::write(&file, "rule").unwrap();
        remove_installed_path(&file).expect("file");
        assert!(!file.exists());

        let dir = temp.path().join("skill");
        fs::create_dir_all(dir.join("nested")).unwrap();
        remove_installed_path(&dir).expect("dir");
        assert!(!dir.exists());

        remove_installed_path(&temp.path().join("ghost")).expect("missing is fine");
    }
}
