//! Usage text rendering.
//!
//! A leaf renders its usage line verbatim. A routing node renders its usage
//! line plus a column-aligned list of direct children; grandchildren never
//! appear.

use super::command::Command;

pub fn render<C>(cmd: &Command<C>) -> String {
    if cmd.children().is_empty() {
        return cmd.usage().to_string();
    }
    let mut lines = vec![
        "Usage:".to_string(),
        format!("  {}", cmd.usage()),
        String::new(),
        "Available Commands:".to_string(),
    ];
    for child in cmd.children() {
        lines.push(format!("  {:<12} {}", child.name(), child.short()));
    }
    lines.join("\n")
}
