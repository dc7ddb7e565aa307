//! Technology stack detection by marker-file existence.
//!
//! Checks a repository root for well-known configuration files:
//! - package.json / lockfiles → Node.js
//! - tsconfig.json → TypeScript
//! - next.config.* → Next.js (+ React)
//! - schema.prisma → Prisma
//! - Dockerfile → Docker
//!
//! Each hit contributes a confidence score per technology (multiple hits
//! keep the maximum), and scores at or above [`TAG_THRESHOLD`] become
//! namespaced tags used for catalog matching.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Minimum confidence for a technology to surface as a tag.
pub const TAG_THRESHOLD: f64 = 0.50;

/// Marker files at the repository root and the scores they imply.
const ROOT_MARKERS: &[(&str, &[(&str, f64)])] = &[
    ("package.json", &[("node-js", 0.95)]),
    ("pnpm-lock.yaml", &[("node-js", 0.90)]),
    ("package-lock.json", &[("node-js", 0.90)]),
    ("yarn.lock", &[("node-js", 0.90)]),
    ("tsconfig.json", &[("typescript", 0.96)]),
    ("next.config.js", &[("nextjs", 0.95), ("react", 0.90)]),
    ("next.config.mjs", &[("nextjs", 0.95), ("react", 0.90)]),
    (
        "next.config.ts",
        &[("nextjs", 0.95), ("react", 0.90), ("typescript", 0.95)],
    ),
    ("schema.prisma", &[("prisma", 0.92)]),
    ("Dockerfile", &[("docker", 0.90)]),
];

/// Result of scanning one repository root.
#[derive(Clone, Debug, Default)]
pub struct Detection {
    /// Canonicalized root that was scanned.
    pub path: PathBuf,
    /// Technology → confidence score in [0, 1].
    pub confidence: BTreeMap<String, f64>,
    /// Namespaced tags (`lang:`/`tech:`/`tool:`) derived from confidence.
    pub tags: Vec<String>,
    /// Marker paths that matched, sorted.
    pub evidence: Vec<String>,
}

/// Scan `root` for known technologies. Fails if the root does not exist.
pub fn detect(root: &Path) -> std::io::Result<Detection> {
    let abs = root.canonicalize()?;
    let mut detection = Detection {
        path: abs.clone(),
        ..Detection::default()
    };

    for (marker, scores) in ROOT_MARKERS {
        if abs.join(marker).exists() {
            detection.evidence.push(marker.to_string());
            for (tech, score) in *scores {
                bump(&mut detection.confidence, tech, *score);
            }
        }
    }

    // Layout-based signals below the root.
    if abs.join("src/App.tsx").exists() || abs.join("src/App.jsx").exists() {
        detection.evidence.push("src/App.tsx|jsx".to_string());
        bump(&mut detection.confidence, "react", 0.88);
    }
    if abs.join("app/layout.tsx").exists() || abs.join("app/page.tsx").exists() {
        detection.evidence.push("app/layout.tsx|page.tsx".to_string());
        bump(&mut detection.confidence, "nextjs", 0.93);
        bump(&mut detection.confidence, "react", 0.90);
    }

    detection.tags = derive_tags(&detection.confidence);
    detection.evidence.sort();
    Ok(detection)
}

/// Keep the strongest signal seen for a technology.
fn bump(confidence: &mut BTreeMap<String, f64>, tech: &str, score: f64) {
    let entry = confidence.entry(tech.to_string()).or_insert(score);
    if score > *entry {
        *entry = score;
    }
}

fn derive_tags(confidence: &BTreeMap<String, f64>) -> Vec<String> {
    let mut tags: Vec<String> = confidence
        .iter()
        .filter(|(_, score)| **score >= TAG_THRESHOLD)
        .map(|(tech, _)| {
            let namespace = match tech.as_str() {
                "react" | "nextjs" => "tech",
                "prisma" | "docker" => "tool",
                "typescript" | "node-js" => "lang",
                _ => "tech",
            };
            format!("{namespace}:{tech}")
        })
        .collect();
    tags.sort();
    tags
}
