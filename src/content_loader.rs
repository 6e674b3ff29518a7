use tauri::{Manager, Runtime, WebviewWindow};

use crate::{
    append_desktop_log, content_source, main_window, shell_config::ShellConfig, webui_paths,
};

/// Loads the front end into the window. Load failures are logged, never
/// re-raised, and the window receives input focus either way.
pub(crate) fn load_front_app<R: Runtime>(window: WebviewWindow<R>, config: ShellConfig) {
    let source = content_source::select_content_source(&config);
    if let Err(error) = load_source(&window, &source, &config) {
        append_desktop_log(&format!("the app failed to load properly: {error}"));
    }
    main_window::focus_main_window(&window);
}

fn load_source<R: Runtime>(
    window: &WebviewWindow<R>,
    source: &content_source::ContentSource,
    config: &ShellConfig,
) -> Result<(), String> {
    match source {
        content_source::ContentSource::DevServer(url) => {
            append_desktop_log(&format!("loading front end from dev server {url}"));
        }
        content_source::ContentSource::PackagedApp => {
            // The privileged scheme itself is registered before the host is
            // ready; only the backing directory can be missing at this point.
            if webui_paths::resolve_webui_dir(window.app_handle()).is_none() {
                append_desktop_log("packaged front-end dir is unresolved, load will 404");
            }
            append_desktop_log("loading packaged front end via app scheme");
        }
    }

    let url = content_source::startup_url(source);
    let mut window_handle = window.clone();
    window_handle
        .navigate(url)
        .map_err(|error| format!("navigation failed: {error}"))?;

    if content_source::should_auto_open_devtools(config, source) {
        window.open_devtools();
    }
    Ok(())
}
