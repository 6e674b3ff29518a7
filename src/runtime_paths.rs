use std::{env, path::PathBuf};

use crate::ROOT_DIR_ENV;

pub(crate) fn default_shell_root_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".lumen"))
}

pub(crate) fn shell_root_from_override(
    override_value: Option<&str>,
    default_root: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(raw) = override_value {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    default_root
}

pub(crate) fn resolve_shell_root_dir() -> Option<PathBuf> {
    shell_root_from_override(env::var(ROOT_DIR_ENV).ok().as_deref(), default_shell_root_dir())
}
