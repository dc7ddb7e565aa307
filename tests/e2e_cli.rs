//! End-to-end CLI tests for codemint.
//!
//! Every test runs the real binary in an isolated temp directory, so the
//! manifest/settings state never leaks between tests.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command pointing at the codemint binary, with env noise removed.
fn codemint() -> Command {
    let mut cmd = cargo_bin_cmd!("codemint");
    cmd.env_remove("CODEMINT_BASE_URL");
    cmd.env_remove("CODEMINT_PROFILE");
    cmd.env_remove("NO_COLOR");
    cmd
}

/// Seed a `.codemint/manifest.json` with one installed rule plus the
/// installed file itself. Returns the installed file path.
fn seed_installed_rule(root: &Path) -> std::path::PathBuf {
    let installed = root.join(".cursor/rules/safe-api.mdc");
    fs::create_dir_all(installed.parent().unwrap()).unwrap();
    fs::write(&installed, "# safe api rule\n").unwrap();

    let manifest = format!(
        r#"{{
  "version": "1",
  "installed": [
    {{
      "catalogId": "cat-123",
      "ref": "@rule/safe-api",
      "type": "rule",
      "slug": "safe-api",
      "tool": "cursor",
      "version": "1.2.0",
      "checksum": "deadbeef",
      "installedAt": "2025-11-04T12:00:00Z",
      "path": "{}"
    }}
  ]
}}
"#,
        installed.display()
    );
    fs::create_dir_all(root.join(".codemint")).unwrap();
    fs::write(root.join(".codemint/manifest.json"), manifest).unwrap();
    installed
}

// ============================================
// Basics: help, version, unknown commands
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        codemint()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("Available Commands:"))
            .stdout(predicate::str::contains("scan"))
            .stdout(predicate::str::contains("doctor"));
    }

    #[test]
    fn bare_invocation_prints_help() {
        codemint()
            .assert()
            .success()
            .stdout(predicate::str::contains("Available Commands:"));
    }

    #[test]
    fn shows_version() {
        codemint()
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn unknown_command_suggests_a_fix() {
        codemint()
            .arg("lst")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("unknown command \"lst\""))
            .stderr(predicate::str::contains("Did you mean \"list\"?"));
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let temp = TempDir::new().unwrap();
        codemint()
            .current_dir(temp.path())
            .args(["scan", "--bogus"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("unknown flag: --bogus"));
    }

    #[test]
    fn help_anywhere_beats_execution_and_errors() {
        // remove would fail on an empty manifest, but help wins first.
        let temp = TempDir::new().unwrap();
        codemint()
            .current_dir(temp.path())
            .args(["remove", "@rule/safe-api", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Available Commands:"))
            .stderr(predicate::str::is_empty());
    }
}

// ============================================
// Scan
// ============================================

mod scan {
    use super::*;

    fn nextjs_fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        for file in ["package.json", "tsconfig.json", "next.config.ts"] {
            fs::write(temp.path().join(file), "{}").unwrap();
        }
        temp
    }

    #[test]
    fn detects_stack_in_current_dir() {
        let temp = nextjs_fixture();
        codemint()
            .current_dir(temp.path())
            .arg("scan")
            .assert()
            .success()
            .stdout(predicate::str::contains("Detected stack in"))
            .stdout(predicate::str::contains("typescript"))
            .stdout(predicate::str::contains("nextjs"))
            .stdout(predicate::str::contains("Tags:"));
    }

    #[test]
    fn accepts_an_explicit_path() {
        let temp = nextjs_fixture();
        codemint()
            .arg("scan")
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("lang:typescript"));
    }

    #[test]
    fn rejects_extra_positionals() {
        codemint()
            .args(["scan", "a", "b"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("at most one path argument"));
    }

    #[test]
    fn empty_dir_reports_nothing_detected() {
        let temp = TempDir::new().unwrap();
        codemint()
            .current_dir(temp.path())
            .arg("scan")
            .assert()
            .success()
            .stdout(predicate::str::contains("No known technologies detected"));
    }

    #[test]
    fn debug_flag_prints_evidence_to_stderr() {
        let temp = nextjs_fixture();
        codemint()
            .current_dir(temp.path())
            .args(["--debug", "scan"])
            .assert()
            .success()
            .stderr(predicate::str::contains("[codemint][debug] evidence:"))
            .stderr(predicate::str::contains("tsconfig.json"));
    }
}

// ============================================
// Manifest: list / remove
// ============================================

mod manifest_state {
    use super::*;

    #[test]
    fn list_reports_empty_state() {
        let temp = TempDir::new().unwrap();
        codemint()
            .current_dir(temp.path())
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("No installed items"));
    }

    #[test]
    fn list_shows_installed_items() {
        let temp = TempDir::new().unwrap();
        seed_installed_rule(temp.path());
        codemint()
            .current_dir(temp.path())
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("@rule/safe-api"))
            .stdout(predicate::str::contains("cursor"))
            .stdout(predicate::str::contains("1.2.0"));
    }

    #[test]
    fn remove_deletes_file_and_manifest_entry() {
        let temp = TempDir::new().unwrap();
        let installed = seed_installed_rule(temp.path());

        codemint()
            .current_dir(temp.path())
            .args(["remove", "@rule/safe-api"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed @rule/safe-api"));

        assert!(!installed.exists());
        codemint()
            .current_dir(temp.path())
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("No installed items"));
    }

    #[test]
    fn remove_dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let installed = seed_installed_rule(temp.path());

        codemint()
            .current_dir(temp.path())
            .args(["remove", "--dry-run", "@rule/safe-api"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Dry run: remove @rule/safe-api"));

        assert!(installed.exists());
    }

    #[test]
    fn flags_parse_after_positional_args() {
        // Same invocation as above with the flag on the other side.
        let temp = TempDir::new().unwrap();
        let installed = seed_installed_rule(temp.path());

        codemint()
            .current_dir(temp.path())
            .args(["remove", "@rule/safe-api", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Dry run: remove @rule/safe-api"));

        assert!(installed.exists());
    }

    #[test]
    fn double_dash_passes_refs_verbatim() {
        let temp = TempDir::new().unwrap();
        seed_installed_rule(temp.path());

        codemint()
            .current_dir(temp.path())
            .args(["remove", "--", "@rule/safe-api"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed @rule/safe-api"));
    }

    #[test]
    fn remove_unknown_ref_fails() {
        let temp = TempDir::new().unwrap();
        codemint()
            .current_dir(temp.path())
            .args(["remove", "@rule/ghost"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("not installed: @rule/ghost"));
    }

    #[test]
    fn remove_rejects_malformed_refs() {
        let temp = TempDir::new().unwrap();
        codemint()
            .current_dir(temp.path())
            .args(["remove", "rule/safe-api"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid identifier"));
    }
}

// ============================================
// Tool selection
// ============================================

mod tool_selection {
    use super::*;

    #[test]
    fn tool_without_subcommand_prints_its_help() {
        codemint()
            .arg("tool")
            .assert()
            .success()
            .stdout(predicate::str::contains("Available Commands:"))
            .stdout(predicate::str::contains("set"))
            .stdout(predicate::str::contains("current"));
    }

    #[test]
    fn tool_list_names_the_registry() {
        codemint()
            .args(["tool", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cursor"))
            .stdout(predicate::str::contains("codex"));
    }

    #[test]
    fn tool_set_then_current_round_trips() {
        let temp = TempDir::new().unwrap();
        codemint()
            .current_dir(temp.path())
            .args(["tool", "set", "claude"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Default AI tool set to claude"));

        assert!(temp.path().join(".codemint/settings.json").exists());

        codemint()
            .current_dir(temp.path())
            .args(["tool", "current"])
            .assert()
            .success()
            .stdout(predicate::str::contains("claude"));
    }

    #[test]
    fn tool_current_reports_unset_state() {
        let temp = TempDir::new().unwrap();
        codemint()
            .current_dir(temp.path())
            .args(["tool", "current"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No default tool set"));
    }

    #[test]
    fn tool_set_rejects_unsupported_tools() {
        let temp = TempDir::new().unwrap();
        codemint()
            .current_dir(temp.path())
            .args(["tool", "set", "emacs"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("unsupported tool"));
    }

    #[test]
    fn tool_set_suggests_near_misses() {
        let temp = TempDir::new().unwrap();
        codemint()
            .current_dir(temp.path())
            .args(["tool", "set", "curso"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Did you mean \"cursor\"?"));
    }
}

// ============================================
// Doctor
// ============================================

mod doctor {
    use super::*;

    #[test]
    fn doctor_passes_on_a_configured_repo() {
        let temp = TempDir::new().unwrap();
        seed_installed_rule(temp.path());
        codemint()
            .current_dir(temp.path())
            .args(["tool", "set", "cursor"])
            .assert()
            .success();

        codemint()
            .current_dir(temp.path())
            .arg("doctor")
            .assert()
            .success()
            .stdout(predicate::str::contains("manifest"))
            .stdout(predicate::str::contains("1 installed item(s)"))
            .stdout(predicate::str::contains("OK"));
    }

    #[test]
    fn doctor_fails_on_a_fresh_repo() {
        let temp = TempDir::new().unwrap();
        codemint()
            .current_dir(temp.path())
            .arg("doctor")
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("FAIL"))
            .stdout(predicate::str::contains("not selected yet"))
            .stderr(predicate::str::contains("checks failed"));
    }
}
