use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, runtime_paths, window_actions, window_prefs, ShellBridgeResult,
    MAIN_WINDOW_LABEL,
};

// The loaded front end is first-party and gets direct access to the
// lifecycle operations instead of a sandboxed subset.

#[tauri::command]
pub(crate) fn shell_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn shell_bridge_reload(app_handle: AppHandle) -> ShellBridgeResult {
    window_actions::reload_main_window(&app_handle, append_desktop_log);
    ShellBridgeResult::ok()
}

#[tauri::command]
pub(crate) fn shell_bridge_toggle_devtools(app_handle: AppHandle) -> ShellBridgeResult {
    window_actions::toggle_devtools(&app_handle, append_desktop_log);
    ShellBridgeResult::ok()
}

#[tauri::command]
pub(crate) fn shell_bridge_set_window_frame(
    app_handle: AppHandle,
    frame: Option<bool>,
) -> ShellBridgeResult {
    let root_dir = runtime_paths::resolve_shell_root_dir();
    if let Err(reason) = window_prefs::write_cached_frame_visible(frame, root_dir.as_deref()) {
        return ShellBridgeResult::failed(reason);
    }

    if let (Some(window), Some(frame)) = (app_handle.get_webview_window(MAIN_WINDOW_LABEL), frame) {
        if let Err(error) = window.set_decorations(frame) {
            return ShellBridgeResult::failed(format!("Failed to apply window frame: {error}"));
        }
    }
    ShellBridgeResult::ok()
}

#[tauri::command]
pub(crate) fn shell_bridge_quit(app_handle: AppHandle) -> ShellBridgeResult {
    window_actions::quit_app(&app_handle, append_desktop_log);
    ShellBridgeResult::ok()
}
