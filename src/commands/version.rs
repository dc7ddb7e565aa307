use crate::cli::{Command, CommandBuilder};

use super::App;

pub(super) fn command() -> Command<App> {
    CommandBuilder::new("version", "Print build version")
        .run_unit(|_: &App, _, _| {
            println!("codemint {}", env!("CARGO_PKG_VERSION"));
        })
        .build()
}
