//! `codemint scan [path]` - detect the technology stack of a repository.

use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::cli::{Command, CommandBuilder};
use crate::detect;

use super::App;

pub(super) fn command() -> Command<App> {
    CommandBuilder::new("scan [path]", "Scan repository and detect technologies")
        .run(|app: &App, _, args| run(app, args))
        .build()
}

fn run(app: &App, args: &[String]) -> Result<()> {
    if args.len() > 1 {
        bail!("scan accepts at most one path argument");
    }
    let target = args.first().map(String::as_str).unwrap_or(".");
    let detection =
        detect::detect(Path::new(target)).with_context(|| format!("scan {target:?}"))?;

    if app.debug() {
        eprintln!(
            "[codemint][debug] evidence: {}",
            detection.evidence.join(", ")
        );
    }

    if detection.confidence.is_empty() {
        println!(
            "No known technologies detected in {}",
            detection.path.display()
        );
        return Ok(());
    }

    println!(
        "{} {}",
        "Detected stack in".bold(),
        detection.path.display()
    );
    for (tech, score) in &detection.confidence {
        println!("  {tech:<12} {score:.2}");
    }
    if !detection.tags.is_empty() {
        println!();
        println!("Tags: {}", detection.tags.join(" "));
    }
    Ok(())
}
