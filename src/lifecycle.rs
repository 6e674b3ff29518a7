use tauri::{AppHandle, Manager, Runtime};

use crate::{
    append_desktop_log, append_startup_log, main_window, startup_task, ShellState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActivateDecision {
    CreateWindow,
    KeepExisting,
}

/// Platform convention: re-show the UI only when no windows remain.
pub(crate) fn decide_activate(open_windows: usize) -> ActivateDecision {
    if open_windows == 0 {
        ActivateDecision::CreateWindow
    } else {
        ActivateDecision::KeepExisting
    }
}

/// The host runtime is ready; run the ordered startup sequence.
pub(crate) fn on_ready<R: Runtime>(app_handle: &AppHandle<R>) {
    append_startup_log("host runtime ready, starting startup sequence");
    startup_task::spawn_startup_task(app_handle.clone(), append_startup_log);
}

/// Activation (dock click, second launch) recreates the window if it is
/// gone; repeated calls with a live window do nothing.
pub(crate) fn on_active<R: Runtime>(app_handle: &AppHandle<R>) {
    match decide_activate(app_handle.webview_windows().len()) {
        ActivateDecision::CreateWindow => {
            append_desktop_log("activate with no open windows, recreating main window");
            let state = app_handle.state::<ShellState>();
            if let Err(error) = main_window::create_main_window(app_handle, &state.config) {
                append_desktop_log(&format!("failed to recreate main window: {error}"));
            }
        }
        ActivateDecision::KeepExisting => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_with_zero_windows_creates_exactly_one() {
        assert_eq!(decide_activate(0), ActivateDecision::CreateWindow);
    }

    #[test]
    fn activate_with_open_windows_keeps_the_existing_one() {
        assert_eq!(decide_activate(1), ActivateDecision::KeepExisting);
        assert_eq!(decide_activate(3), ActivateDecision::KeepExisting);
    }
}
