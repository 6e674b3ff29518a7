use tauri::{AppHandle, Manager, Runtime};

use crate::{append_desktop_log, append_shutdown_log, window_actions, ShellState};

/// The platform convention here quits outright once the last window goes
/// away; the exit state machine keeps this from double-firing when the host
/// also requests exit on its own.
pub(crate) fn handle_window_destroyed<R: Runtime>(app_handle: &AppHandle<R>) {
    if !app_handle.webview_windows().is_empty() {
        return;
    }

    append_desktop_log("all windows closed");
    window_actions::quit_app(app_handle, append_shutdown_log);
}

pub(crate) fn handle_exit_requested<R: Runtime>(app_handle: &AppHandle<R>) {
    let state = app_handle.state::<ShellState>();
    if state.mark_quitting() {
        append_shutdown_log("exit requested by host runtime");
    }
}

pub(crate) fn handle_exit<R: Runtime>(app_handle: &AppHandle<R>) {
    let state = app_handle.state::<ShellState>();
    if state.mark_exited() {
        append_shutdown_log("desktop process exited");
    }
}
