//! Catalog item references.
//!
//! Items are addressed as `@rule/<slug>` or `@skill/<slug>`; everything the
//! CLI installs or removes is named this way.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// The two catalog item categories. Ordering follows the textual form, which
/// keeps manifest sorting stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Rule,
    Skill,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Rule => f.write_str("rule"),
            ItemType::Skill => f.write_str("skill"),
        }
    }
}

impl FromStr for ItemType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rule" => Ok(ItemType::Rule),
            "skill" => Ok(ItemType::Skill),
            other => bail!("unsupported type {other:?}: use rule or skill"),
        }
    }
}

/// A parsed item reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ref {
    /// The reference as the user wrote it, trimmed.
    pub raw: String,
    pub item_type: ItemType,
    pub slug: String,
}

/// Parse `@rule/<slug>` / `@skill/<slug>`.
pub fn parse_ref(raw: &str) -> Result<Ref> {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix('@') else {
        bail!("invalid identifier {trimmed:?}: expected @rule/<slug> or @skill/<slug>");
    };
    let Some((item_type, slug)) = body.split_once('/') else {
        bail!("invalid identifier {trimmed:?}: expected @rule/<slug> or @skill/<slug>");
    };
    if item_type.is_empty() || slug.is_empty() {
        bail!("invalid identifier {trimmed:?}: expected @rule/<slug> or @skill/<slug>");
    }
    Ok(Ref {
        raw: trimmed.to_string(),
        item_type: item_type.parse()?,
        slug: slug.to_string(),
    })
}

/// Canonical textual form of a reference.
pub fn normalize_ref(item_type: ItemType, slug: &str) -> String {
    format!("@{item_type}/{slug}")
}
