//! Token scanning against a [`FlagSet`].
//!
//! The scan is order-invariant: flags and positionals may interleave freely
//! and the result is the same for every ordering. A literal `--` stops flag
//! interpretation for the rest of the token vector.

use super::error::CliError;
use super::flags::{FlagKind, FlagSet};

/// Tokens that request help regardless of position.
const HELP_TOKENS: &[&str] = &["-h", "--help", "-help", "help"];

/// True if any token in the vector is a bare help request.
///
/// Help takes precedence over all parsing and over required-flag validation,
/// so this runs on the full, unparsed token list.
pub fn wants_help(tokens: &[String]) -> bool {
    tokens.iter().any(|t| HELP_TOKENS.contains(&t.as_str()))
}

/// Scan `tokens` against `flags`, binding flag values and returning the
/// remaining positionals in input order.
///
/// Rules:
/// - `--` ends flag parsing; everything after it is positional, verbatim.
/// - `-name` and `--name` are equivalent; `--name=value` binds inline.
/// - Non-boolean flags consume the next token as their value.
/// - Boolean flags consume the next token only when it is literally
///   `true` or `false`; otherwise they bind `true`.
/// - Any other token becomes a positional without stopping the scan.
pub fn parse(flags: &mut FlagSet, tokens: &[String]) -> Result<Vec<String>, CliError> {
    if wants_help(tokens) {
        return Err(CliError::HelpRequested);
    }

    let mut positionals = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        i += 1;

        if token == "--" {
            positionals.extend(tokens[i..].iter().cloned());
            break;
        }
        if !token.starts_with('-') || token == "-" {
            positionals.push(token.clone());
            continue;
        }

        let body = token
            .strip_prefix("--")
            .unwrap_or_else(|| token.strip_prefix('-').unwrap_or(token));
        if body.is_empty() || body.starts_with('-') {
            return Err(CliError::Parse(format!("bad flag syntax: {token}")));
        }
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        let kind = flags
            .kind_of(name)
            .ok_or_else(|| CliError::Parse(format!("unknown flag: --{name}")))?;

        let raw = match inline {
            Some(value) => value.to_string(),
            None if kind == FlagKind::Bool => match tokens.get(i).map(String::as_str) {
                Some(next @ ("true" | "false")) => {
                    i += 1;
                    next.to_string()
                }
                _ => "true".to_string(),
            },
            None => {
                let value = tokens
                    .get(i)
                    .ok_or_else(|| CliError::Parse(format!("flag needs an argument: --{name}")))?;
                i += 1;
                value.clone()
            }
        };
        flags.set(name, &raw)?;
    }

    Ok(positionals)
}
