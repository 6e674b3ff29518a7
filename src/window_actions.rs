use tauri::{AppHandle, Manager, Runtime};

use crate::{content_loader, main_window, ShellState};

/// Every operation here requires a live primary window and degrades to a
/// logged no-op when the handle is absent.
pub(crate) fn reload_main_window<R: Runtime, F>(app_handle: &AppHandle<R>, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window::main_window(app_handle) else {
        log("reload skipped: main window not found");
        return;
    };

    log("reloading main window content");
    let state = app_handle.state::<ShellState>();
    let config = state.config.clone();
    tauri::async_runtime::spawn(async move {
        content_loader::load_front_app(window, config);
    });
}

pub(crate) fn toggle_devtools<R: Runtime, F>(app_handle: &AppHandle<R>, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window::main_window(app_handle) else {
        log("devtools toggle skipped: main window not found");
        return;
    };

    if window.is_devtools_open() {
        window.close_devtools();
    } else {
        window.open_devtools();
    }
}

pub(crate) fn fullscreen_after_toggle(current: bool) -> bool {
    !current
}

pub(crate) fn toggle_fullscreen<R: Runtime, F>(app_handle: &AppHandle<R>, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window::main_window(app_handle) else {
        log("fullscreen toggle skipped: main window not found");
        return;
    };

    match window.is_fullscreen() {
        Ok(current) => {
            if let Err(error) = window.set_fullscreen(fullscreen_after_toggle(current)) {
                log(&format!("failed to toggle fullscreen: {error}"));
            }
        }
        Err(error) => log(&format!("failed to read fullscreen state: {error}")),
    }
}

/// Quit terminates the whole process, not just the window. The exit state
/// machine keeps repeated requests from racing the first one.
pub(crate) fn quit_app<R: Runtime, F>(app_handle: &AppHandle<R>, log: F)
where
    F: Fn(&str),
{
    let state = app_handle.state::<ShellState>();
    if !state.mark_quitting() {
        log("quit already in progress, ignoring repeated request");
        return;
    }

    log("quit requested, exiting desktop process");
    app_handle.exit(0);
}
