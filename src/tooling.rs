//! Registry of AI coding tools the CLI can install items for.

use anyhow::{Result, bail};

use crate::similarity::closest;

/// Supported tools, in the order they are presented to users.
pub const SUPPORTED: &[&str] = &[
    "cursor", "cline", "windsurf", "continue", "copilot", "claude", "codex",
];

pub fn is_supported(tool: &str) -> bool {
    SUPPORTED.contains(&tool)
}

/// Reject empty or unknown tool names. Near misses get a suggestion.
pub fn validate(tool: &str) -> Result<()> {
    if tool.is_empty() {
        bail!("tool is required");
    }
    if is_supported(tool) {
        return Ok(());
    }
    match closest(tool, SUPPORTED.iter().copied()) {
        Some(suggestion) => bail!(
            "unsupported tool {tool:?}. Did you mean {suggestion:?}? (supported: {})",
            SUPPORTED.join(", ")
        ),
        None => bail!(
            "unsupported tool {tool:?} (supported: {})",
            SUPPORTED.join(", ")
        ),
    }
}
