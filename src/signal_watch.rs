use tauri::{AppHandle, Runtime};

use crate::{append_shutdown_log, shell_config::ShellConfig, window_actions, GRACEFUL_EXIT_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlAction {
    Quit,
}

pub(crate) fn control_action_for_message(raw: &str) -> Option<ControlAction> {
    if raw.trim() == GRACEFUL_EXIT_MESSAGE {
        Some(ControlAction::Quit)
    } else {
        None
    }
}

/// Shutdown signals are honored only in a development configuration; outside
/// it the watcher never starts and delivery has no effect.
pub(crate) fn should_watch_signals(config: &ShellConfig) -> bool {
    config.dev_mode
}

pub(crate) fn spawn_signal_watch<R: Runtime>(app_handle: &AppHandle<R>) {
    #[cfg(windows)]
    spawn_control_message_watch(app_handle.clone());
    #[cfg(unix)]
    spawn_terminate_signal_watch(app_handle.clone());
}

/// Windows: the parent process requests a clean exit through a structured
/// message on stdin.
#[cfg(windows)]
fn spawn_control_message_watch<R: Runtime>(app_handle: AppHandle<R>) {
    use tokio::io::AsyncBufReadExt;

    tauri::async_runtime::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if control_action_for_message(&line) == Some(ControlAction::Quit) {
                append_shutdown_log("graceful-exit message received, quitting");
                window_actions::quit_app(&app_handle, append_shutdown_log);
                return;
            }
        }
    });
}

#[cfg(unix)]
fn spawn_terminate_signal_watch<R: Runtime>(app_handle: AppHandle<R>) {
    use tokio::signal::unix::{signal, SignalKind};

    tauri::async_runtime::spawn(async move {
        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(error) => {
                append_shutdown_log(&format!("failed to install SIGTERM handler: {error}"));
                return;
            }
        };
        if terminate.recv().await.is_some() {
            append_shutdown_log("SIGTERM received, quitting");
            window_actions::quit_app(&app_handle, append_shutdown_log);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dev_mode: bool) -> ShellConfig {
        ShellConfig {
            dev_mode,
            test_mode: false,
            dev_server_url: None,
            frame_visible: true,
        }
    }

    #[test]
    fn graceful_exit_message_maps_to_quit() {
        assert_eq!(
            control_action_for_message("graceful-exit"),
            Some(ControlAction::Quit)
        );
        assert_eq!(
            control_action_for_message("  graceful-exit \n"),
            Some(ControlAction::Quit)
        );
    }

    #[test]
    fn other_messages_are_ignored() {
        assert_eq!(control_action_for_message("exit"), None);
        assert_eq!(control_action_for_message(""), None);
        assert_eq!(control_action_for_message("graceful-exit-now"), None);
    }

    #[test]
    fn signals_are_watched_only_in_development_configuration() {
        assert!(should_watch_signals(&config(true)));
        assert!(!should_watch_signals(&config(false)));
    }
}
