use std::{
    env,
    path::{Path, PathBuf},
};

use tauri::{path::BaseDirectory, AppHandle, Manager, Runtime};

use crate::{APP_INDEX_FILE, WEBUI_DIR_ENV};

/// Resolution order: env override, packaged resource dir, local build output.
pub(crate) fn resolve_webui_dir<R: Runtime>(app_handle: &AppHandle<R>) -> Option<PathBuf> {
    if let Some(dir) = webui_dir_from_override(env::var(WEBUI_DIR_ENV).ok().as_deref()) {
        return Some(dir);
    }

    if let Some(dir) = resolve_resource_path(app_handle, "webui") {
        if webui_index_exists(&dir) {
            return Some(dir);
        }
    }

    let fallback = dev_dist_dir();
    if webui_index_exists(&fallback) {
        return Some(fallback);
    }
    None
}

pub(crate) fn webui_dir_from_override(value: Option<&str>) -> Option<PathBuf> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

pub(crate) fn webui_index_exists(dir: &Path) -> bool {
    dir.join(APP_INDEX_FILE).is_file()
}

fn resolve_resource_path<R: Runtime>(app_handle: &AppHandle<R>, relative_path: &str) -> Option<PathBuf> {
    app_handle
        .path()
        .resolve(relative_path, BaseDirectory::Resource)
        .ok()
}

fn dev_dist_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("dist")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webui_dir_from_override_requires_a_non_blank_value() {
        assert_eq!(
            webui_dir_from_override(Some("/srv/webui")),
            Some(PathBuf::from("/srv/webui"))
        );
        assert_eq!(webui_dir_from_override(Some("   ")), None);
        assert_eq!(webui_dir_from_override(None), None);
    }

    #[test]
    fn webui_index_exists_checks_for_the_index_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(!webui_index_exists(dir.path()));

        std::fs::write(dir.path().join("index.html"), "<html></html>").expect("seed index");
        assert!(webui_index_exists(dir.path()));
    }
}
