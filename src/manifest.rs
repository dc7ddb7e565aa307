//! Local install state under `<root>/.codemint/`.
//!
//! `manifest.json` records every installed catalog item; `settings.json`
//! holds per-repository preferences (currently the default AI tool). Both
//! files are pretty-printed JSON with a trailing newline, written atomically.
//! A missing file loads as its empty default so a fresh repository needs no
//! setup step.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ItemType;
use crate::fs_utils::atomic_write;

pub const MANIFEST_VERSION: &str = "1";

/// One installed catalog item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledItem {
    pub catalog_id: String,
    #[serde(rename = "ref")]
    pub item_ref: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub slug: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tool: String,
    pub version: String,
    pub checksum: String,
    pub installed_at: DateTime<Utc>,
    pub path: String,
}

/// The persisted manifest document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub installed: Vec<InstalledItem>,
}

impl Default for Manifest {
    fn default() -> Self {
        Manifest {
            version: MANIFEST_VERSION.to_string(),
            installed: Vec::new(),
        }
    }
}

/// Per-repository preferences.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ai_tool: String,
}

/// Reads and writes the `.codemint/` state of one repository root.
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Store { root: root.into() }
    }

    pub fn base_dir(&self) -> PathBuf {
        self.root.join(".codemint")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.base_dir().join("manifest.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.base_dir().join("settings.json")
    }

    pub fn load(&self) -> Result<Manifest> {
        let path = self.manifest_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Manifest::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("read manifest {}", path.display()));
            }
        };
        let mut manifest: Manifest = serde_json::from_str(&raw)
            .with_context(|| format!("parse manifest {}", path.display()))?;
        if manifest.version.is_empty() {
            manifest.version = MANIFEST_VERSION.to_string();
        }
        Ok(manifest)
    }

    /// Persist the manifest, sorted by (type, slug) for stable diffs.
    pub fn save(&self, manifest: &Manifest) -> Result<()> {
        let mut manifest = manifest.clone();
        if manifest.version.is_empty() {
            manifest.version = MANIFEST_VERSION.to_string();
        }
        manifest
            .installed
            .sort_by(|a, b| (a.item_type, &a.slug).cmp(&(b.item_type, &b.slug)));
        let mut data = serde_json::to_vec_pretty(&manifest)?;
        data.push(b'\n');
        let path = self.manifest_path();
        atomic_write(&path, &data).with_context(|| format!("write manifest {}", path.display()))
    }

    pub fn load_settings(&self) -> Result<Settings> {
        let path = self.settings_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("read settings {}", path.display()));
            }
        };
        serde_json::from_str(&raw).with_context(|| format!("parse settings {}", path.display()))
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let mut data = serde_json::to_vec_pretty(settings)?;
        data.push(b'\n');
        let path = self.settings_path();
        atomic_write(&path, &data).with_context(|| format!("write settings {}", path.display()))
    }
}

pub fn find_by_catalog_id(items: &[InstalledItem], catalog_id: &str) -> Option<usize> {
    items.iter().position(|item| item.catalog_id == catalog_id)
}

pub fn find_by_ref(items: &[InstalledItem], item_ref: &str) -> Option<usize> {
    items.iter().position(|item| item.item_ref == item_ref)
}
