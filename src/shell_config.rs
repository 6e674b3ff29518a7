use std::env;

use url::Url;

use crate::{
    runtime_paths, window_prefs, DEV_MODE_ENV, DEV_SERVER_URL_ENV, IS_TEST_ENV, WINDOW_FRAME_ENV,
};

/// Immutable snapshot of the environment-driven shell configuration, taken
/// once at process entry and passed down instead of re-read ad hoc.
#[derive(Debug, Clone)]
pub(crate) struct ShellConfig {
    pub(crate) dev_mode: bool,
    pub(crate) test_mode: bool,
    pub(crate) dev_server_url: Option<Url>,
    pub(crate) frame_visible: bool,
}

impl ShellConfig {
    pub(crate) fn from_env() -> Self {
        let root_dir = runtime_paths::resolve_shell_root_dir();
        let dev_mode = env::var(DEV_MODE_ENV)
            .ok()
            .as_deref()
            .and_then(parse_flag)
            .unwrap_or(cfg!(debug_assertions));
        let test_mode = env::var(IS_TEST_ENV)
            .ok()
            .as_deref()
            .and_then(parse_flag)
            .unwrap_or(false);
        let dev_server_url = env::var(DEV_SERVER_URL_ENV)
            .ok()
            .and_then(|raw| normalize_dev_server_url(&raw));
        let frame_visible = resolve_frame_visible(
            env::var(WINDOW_FRAME_ENV).ok().as_deref(),
            window_prefs::read_cached_frame_visible(root_dir.as_deref()),
        );

        Self {
            dev_mode,
            test_mode,
            dev_server_url,
            frame_visible,
        }
    }
}

pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// An unset or unparseable endpoint means "no live endpoint", never a guess.
pub(crate) fn normalize_dev_server_url(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(mut parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                return None;
            }
            if parsed.path().is_empty() {
                parsed.set_path("/");
            }
            Some(parsed)
        }
        Err(_) => None,
    }
}

/// Precedence: env override, then the persisted preference, then visible.
pub(crate) fn resolve_frame_visible(env_value: Option<&str>, cached: Option<bool>) -> bool {
    env_value.and_then(parse_flag).or(cached).unwrap_or(true)
}
