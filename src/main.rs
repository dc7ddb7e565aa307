use std::process;

use codemint::CliError;
use codemint::commands::{App, build_root};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let app = App::default();
    let mut root = build_root();

    match root.execute(&app, &args) {
        Ok(()) => {}
        Err(err) => {
            match &err {
                // Show the full context chain for handler failures.
                CliError::App(inner) => eprintln!("{inner:#}"),
                other => eprintln!("{other}"),
            }
            process::exit(if err.is_usage() { 2 } else { 1 });
        }
    }
}
