pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Lumen";

pub(crate) const MAIN_WINDOW_WIDTH: f64 = 800.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 600.0;

pub(crate) const APP_SCHEME: &str = "app";
pub(crate) const APP_INDEX_FILE: &str = "index.html";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DESKTOP_STATE_FILE: &str = "desktop_state.json";
pub(crate) const TOOLING_MANIFEST_FILE: &str = "tooling-manifest.json";

/// Control message a parent process sends on stdin to request a clean exit.
pub(crate) const GRACEFUL_EXIT_MESSAGE: &str = "graceful-exit";

pub(crate) const DEV_SERVER_URL_ENV: &str = "LUMEN_DEV_SERVER_URL";
pub(crate) const DEV_MODE_ENV: &str = "LUMEN_DEV_MODE";
pub(crate) const IS_TEST_ENV: &str = "LUMEN_IS_TEST";
pub(crate) const WINDOW_FRAME_ENV: &str = "LUMEN_WINDOW_FRAME";
pub(crate) const ROOT_DIR_ENV: &str = "LUMEN_ROOT";
pub(crate) const WEBUI_DIR_ENV: &str = "LUMEN_WEBUI_DIR";
pub(crate) const TOOLING_DIR_ENV: &str = "LUMEN_TOOLING_DIR";
