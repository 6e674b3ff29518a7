use tauri::{AppHandle, Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{
    append_desktop_log, content_loader, shell_config::ShellConfig, MAIN_WINDOW_HEIGHT,
    MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WindowParams {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) fullscreen: bool,
    pub(crate) decorations: bool,
}

pub(crate) fn window_build_params(config: &ShellConfig) -> WindowParams {
    WindowParams {
        width: MAIN_WINDOW_WIDTH,
        height: MAIN_WINDOW_HEIGHT,
        fullscreen: true,
        decorations: config.frame_visible,
    }
}

/// A freshly created window plus the content load still running for it.
/// The handle is usable immediately; callers that need the front end loaded
/// must await the task.
pub(crate) struct WindowCreation<R: Runtime> {
    pub(crate) window: WebviewWindow<R>,
    pub(crate) content_load: tauri::async_runtime::JoinHandle<()>,
}

/// Builds the single primary window and schedules the content load without
/// awaiting it.
pub(crate) fn create_main_window<R: Runtime>(
    app_handle: &AppHandle<R>,
    config: &ShellConfig,
) -> Result<WindowCreation<R>, String> {
    let params = window_build_params(config);
    let window = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App("index.html".into()),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(params.width, params.height)
    .fullscreen(params.fullscreen)
    .decorations(params.decorations)
    .build()
    .map_err(|error| format!("Failed to create main window: {error}"))?;

    let load_window = window.clone();
    let load_config = config.clone();
    let content_load = tauri::async_runtime::spawn(async move {
        content_loader::load_front_app(load_window, load_config);
    });

    Ok(WindowCreation {
        window,
        content_load,
    })
}

pub(crate) fn main_window<R: Runtime>(app_handle: &AppHandle<R>) -> Option<WebviewWindow<R>> {
    app_handle.get_webview_window(MAIN_WINDOW_LABEL)
}

pub(crate) fn focus_main_window<R: Runtime>(window: &WebviewWindow<R>) {
    if let Err(error) = window.set_focus() {
        append_desktop_log(&format!("failed to focus main window: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(frame_visible: bool) -> ShellConfig {
        ShellConfig {
            dev_mode: false,
            test_mode: true,
            dev_server_url: None,
            frame_visible,
        }
    }

    #[test]
    fn window_build_params_use_the_fixed_size_and_fullscreen_launch() {
        let params = window_build_params(&config(true));
        assert_eq!(params.width, 800.0);
        assert_eq!(params.height, 600.0);
        assert!(params.fullscreen);
        assert!(params.decorations);
    }

    #[test]
    fn window_build_params_honor_the_frame_preference() {
        assert!(!window_build_params(&config(false)).decorations);
    }
}
