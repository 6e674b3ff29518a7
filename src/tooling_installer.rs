use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tauri::{path::BaseDirectory, AppHandle, Manager, Runtime};

use crate::{TOOLING_DIR_ENV, TOOLING_MANIFEST_FILE};

/// Describes an inspection-tooling bundle shipped next to the shell.
#[derive(Debug, Deserialize)]
pub(crate) struct ToolingManifest {
    pub(crate) id: Option<String>,
    pub(crate) entrypoint: Option<String>,
}

/// Installs the developer inspection tooling under `<root>/tooling/<id>`.
/// Succeeds or fails independently of window creation; the caller treats a
/// failure as non-fatal.
pub(crate) fn install_dev_tooling<R: Runtime>(
    app_handle: &AppHandle<R>,
    root_dir: &Path,
) -> Result<String, String> {
    let bundle_dir = resolve_bundle_dir(app_handle)
        .ok_or_else(|| "no inspection tooling bundle is available".to_string())?;
    install_bundle(&bundle_dir, root_dir)
}

fn resolve_bundle_dir<R: Runtime>(app_handle: &AppHandle<R>) -> Option<PathBuf> {
    if let Ok(raw) = env::var(TOOLING_DIR_ENV) {
        let candidate = PathBuf::from(raw.trim());
        if !candidate.as_os_str().is_empty() && candidate.is_dir() {
            return Some(candidate);
        }
    }

    app_handle
        .path()
        .resolve("tooling", BaseDirectory::Resource)
        .ok()
        .filter(|dir| dir.is_dir())
}

pub(crate) fn install_bundle(bundle_dir: &Path, root_dir: &Path) -> Result<String, String> {
    let manifest = read_tooling_manifest(bundle_dir)?;
    let (id, _entrypoint) = validate_manifest(&manifest, bundle_dir)?;

    let target_dir = root_dir.join("tooling").join(&id);
    if target_dir.exists() {
        // Refresh in place so a stale bundle never lingers.
        fs::remove_dir_all(&target_dir).map_err(|error| {
            format!(
                "Failed to clear previous tooling install {}: {}",
                target_dir.display(),
                error
            )
        })?;
    }
    copy_dir_recursive(bundle_dir, &target_dir)?;
    Ok(id)
}

pub(crate) fn read_tooling_manifest(bundle_dir: &Path) -> Result<ToolingManifest, String> {
    let manifest_path = bundle_dir.join(TOOLING_MANIFEST_FILE);
    let manifest_text = fs::read_to_string(&manifest_path).map_err(|error| {
        format!(
            "Failed to read tooling manifest {}: {}",
            manifest_path.display(),
            error
        )
    })?;
    serde_json::from_str(&manifest_text).map_err(|error| {
        format!(
            "Failed to parse tooling manifest {}: {}",
            manifest_path.display(),
            error
        )
    })
}

pub(crate) fn validate_manifest(
    manifest: &ToolingManifest,
    bundle_dir: &Path,
) -> Result<(String, PathBuf), String> {
    let id = manifest
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| "tooling manifest is missing an id".to_string())?;

    let entrypoint_relative = manifest
        .entrypoint
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("index.js"));
    let entrypoint_path = bundle_dir.join(&entrypoint_relative);
    if !entrypoint_path.is_file() {
        return Err(format!(
            "tooling entrypoint is missing: {}",
            entrypoint_path.display()
        ));
    }

    Ok((id.to_string(), entrypoint_path))
}

fn copy_dir_recursive(source_dir: &Path, target_dir: &Path) -> Result<(), String> {
    fs::create_dir_all(target_dir).map_err(|error| {
        format!(
            "Failed to create tooling directory {}: {}",
            target_dir.display(),
            error
        )
    })?;

    let entries = fs::read_dir(source_dir).map_err(|error| {
        format!(
            "Failed to list tooling bundle {}: {}",
            source_dir.display(),
            error
        )
    })?;
    for entry in entries {
        let entry = entry.map_err(|error| {
            format!(
                "Failed to list tooling bundle {}: {}",
                source_dir.display(),
                error
            )
        })?;
        let source_path = entry.path();
        let target_path = target_dir.join(entry.file_name());
        if source_path.is_dir() {
            copy_dir_recursive(&source_path, &target_path)?;
        } else {
            fs::copy(&source_path, &target_path).map_err(|error| {
                format!(
                    "Failed to copy tooling file {}: {}",
                    source_path.display(),
                    error
                )
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_bundle(dir: &Path, manifest: &str) {
        fs::write(dir.join(TOOLING_MANIFEST_FILE), manifest).expect("seed manifest");
    }

    #[test]
    fn install_bundle_copies_the_bundle_under_its_id() {
        let bundle = tempfile::tempdir().expect("bundle dir");
        let root = tempfile::tempdir().expect("root dir");
        seed_bundle(
            bundle.path(),
            r#"{"id":"inspector","entrypoint":"main.js"}"#,
        );
        fs::write(bundle.path().join("main.js"), "boot();").expect("seed entrypoint");
        fs::create_dir(bundle.path().join("assets")).expect("seed assets dir");
        fs::write(bundle.path().join("assets").join("panel.css"), "body{}").expect("seed asset");

        let id = install_bundle(bundle.path(), root.path()).expect("install");
        assert_eq!(id, "inspector");

        let installed = root.path().join("tooling").join("inspector");
        assert!(installed.join("main.js").is_file());
        assert!(installed.join("assets").join("panel.css").is_file());
    }

    #[test]
    fn install_bundle_refreshes_a_previous_install() {
        let bundle = tempfile::tempdir().expect("bundle dir");
        let root = tempfile::tempdir().expect("root dir");
        seed_bundle(bundle.path(), r#"{"id":"inspector"}"#);
        fs::write(bundle.path().join("index.js"), "boot();").expect("seed entrypoint");

        let stale = root.path().join("tooling").join("inspector");
        fs::create_dir_all(&stale).expect("stale dir");
        fs::write(stale.join("stale.js"), "old();").expect("stale file");

        install_bundle(bundle.path(), root.path()).expect("install");
        assert!(stale.join("index.js").is_file());
        assert!(!stale.join("stale.js").exists());
    }

    #[test]
    fn validate_manifest_requires_an_id() {
        let bundle = tempfile::tempdir().expect("bundle dir");
        fs::write(bundle.path().join("index.js"), "boot();").expect("seed entrypoint");

        let manifest = ToolingManifest {
            id: None,
            entrypoint: None,
        };
        let error = validate_manifest(&manifest, bundle.path()).expect_err("missing id");
        assert!(error.contains("missing an id"));
    }

    #[test]
    fn validate_manifest_requires_the_entrypoint_file() {
        let bundle = tempfile::tempdir().expect("bundle dir");
        let manifest = ToolingManifest {
            id: Some("inspector".to_string()),
            entrypoint: Some("main.js".to_string()),
        };
        let error = validate_manifest(&manifest, bundle.path()).expect_err("missing entrypoint");
        assert!(error.contains("entrypoint is missing"));
    }

    #[test]
    fn read_tooling_manifest_reports_parse_failures_with_context() {
        let bundle = tempfile::tempdir().expect("bundle dir");
        seed_bundle(bundle.path(), "not json");
        let error = read_tooling_manifest(bundle.path()).expect_err("parse failure");
        assert!(error.contains("Failed to parse tooling manifest"));
    }
}
