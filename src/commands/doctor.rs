//! `codemint doctor` - local diagnostics for manifest, tool, and paths.

use std::fmt::Write as _;

use anyhow::{Result, bail};
use colored::Colorize;

use crate::cli::{Command, CommandBuilder};
use crate::manifest::Store;
use crate::tooling;

use super::App;

struct Check {
    name: &'static str,
    ok: bool,
    detail: String,
}

pub(super) fn command() -> Command<App> {
    CommandBuilder::new("doctor", "Validate manifest, tool selection, and managed paths")
        .run(|app: &App, _, _| run(app))
        .build()
}

fn run(app: &App) -> Result<()> {
    let wd = std::env::current_dir()?;
    let store = Store::new(&wd);
    let mut checks = Vec::with_capacity(5);

    let config = app.config();
    checks.push(Check {
        name: "config",
        ok: true,
        detail: format!("profile {}", config.profile),
    });

    match store.load() {
        Ok(manifest) => checks.push(Check {
            name: "manifest",
            ok: true,
            detail: format!("{} installed item(s)", manifest.installed.len()),
        }),
        Err(err) => checks.push(Check {
            name: "manifest",
            ok: false,
            detail: format!("{err:#}"),
        }),
    }

    match store.load_settings() {
        Ok(settings) if settings.ai_tool.is_empty() => checks.push(Check {
            name: "ai tool",
            ok: false,
            detail: "not selected yet; run `codemint tool set <name>`".to_string(),
        }),
        Ok(settings) => checks.push(Check {
            name: "ai tool",
            ok: tooling::is_supported(&settings.ai_tool),
            detail: settings.ai_tool,
        }),
        Err(err) => checks.push(Check {
            name: "ai tool",
            ok: false,
            detail: format!("{err:#}"),
        }),
    }

    for dir in [store.base_dir(), wd.clone()] {
        let (ok, detail) = match std::fs::metadata(&dir) {
            Ok(meta) => (meta.is_dir(), dir.display().to_string()),
            Err(err) => (false, format!("{}: {err}", dir.display())),
        };
        checks.push(Check {
            name: "path",
            ok,
            detail,
        });
    }

    let mut report = String::new();
    let mut failed = 0usize;
    for check in &checks {
        let status = if check.ok {
            "OK".green()
        } else {
            failed += 1;
            "FAIL".red()
        };
        let _ = writeln!(report, "{:<6} {:<10} {}", status, check.name, check.detail);
    }
    print!("{report}");

    if failed > 0 {
        bail!("{failed} of {} checks failed", checks.len());
    }
    Ok(())
}
