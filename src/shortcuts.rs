use tauri::{AppHandle, Runtime};
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Shortcut, ShortcutState};

use crate::{append_desktop_log, main_window, window_actions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShortcutAction {
    Quit,
    ReloadWindow,
    ToggleDevtools,
    ToggleFullscreen,
}

pub(crate) const SHORTCUT_CODES: [Code; 4] = [Code::KeyQ, Code::KeyR, Code::KeyD, Code::KeyF];

pub(crate) fn action_for_code(code: Code) -> Option<ShortcutAction> {
    match code {
        Code::KeyQ => Some(ShortcutAction::Quit),
        Code::KeyR => Some(ShortcutAction::ReloadWindow),
        Code::KeyD => Some(ShortcutAction::ToggleDevtools),
        Code::KeyF => Some(ShortcutAction::ToggleFullscreen),
        _ => None,
    }
}

/// Binds the four single-letter lifecycle shortcuts. The handler installed
/// with the plugin dispatches them only while the primary window is focused,
/// so the bindings stay window-scoped rather than OS-wide in effect.
pub(crate) fn register_shortcuts<R: Runtime>(app_handle: &AppHandle<R>) -> Result<(), String> {
    for code in SHORTCUT_CODES {
        app_handle
            .global_shortcut()
            .register(Shortcut::new(None, code))
            .map_err(|error| format!("Failed to register shortcut {code:?}: {error}"))?;
    }
    Ok(())
}

pub(crate) fn handle_shortcut_event<R: Runtime>(
    app_handle: &AppHandle<R>,
    shortcut: &Shortcut,
    state: ShortcutState,
) {
    if state != ShortcutState::Pressed {
        return;
    }
    if !shortcut.mods.is_empty() {
        return;
    }
    let Some(action) = action_for_code(shortcut.key) else {
        return;
    };
    if !main_window_is_focused(app_handle) {
        return;
    }

    match action {
        ShortcutAction::Quit => window_actions::quit_app(app_handle, append_desktop_log),
        ShortcutAction::ReloadWindow => {
            window_actions::reload_main_window(app_handle, append_desktop_log)
        }
        ShortcutAction::ToggleDevtools => {
            window_actions::toggle_devtools(app_handle, append_desktop_log)
        }
        ShortcutAction::ToggleFullscreen => {
            window_actions::toggle_fullscreen(app_handle, append_desktop_log)
        }
    }
}

fn main_window_is_focused<R: Runtime>(app_handle: &AppHandle<R>) -> bool {
    main_window::main_window(app_handle)
        .and_then(|window| window.is_focused().ok())
        .unwrap_or(false)
}
