use tauri::{Manager, RunEvent, WindowEvent};

use crate::{
    app_scheme, append_desktop_log, append_startup_log, bridge_commands, exit_events, lifecycle,
    logging, runtime_paths, shell_config::ShellConfig, shortcuts, signal_watch, webui_paths,
    ShellState, APP_SCHEME, DESKTOP_LOG_FILE, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    let config = ShellConfig::from_env();

    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(
            runtime_paths::resolve_shell_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));
    if config.dev_mode {
        append_startup_log("development mode enabled");
    }

    let setup_config = config.clone();
    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _argv, _cwd| {
            append_desktop_log("second instance launch detected, activating primary window");
            lifecycle::on_active(app_handle);
        }))
        .plugin(
            tauri_plugin_global_shortcut::Builder::new()
                .with_handler(|app_handle, shortcut, event| {
                    shortcuts::handle_shortcut_event(app_handle, shortcut, event.state());
                })
                .build(),
        )
        .manage(ShellState::new(config))
        .invoke_handler(tauri::generate_handler![
            bridge_commands::shell_bridge_is_desktop_runtime,
            bridge_commands::shell_bridge_reload,
            bridge_commands::shell_bridge_toggle_devtools,
            bridge_commands::shell_bridge_set_window_frame,
            bridge_commands::shell_bridge_quit,
        ])
        // The privileged scheme must be registered before the host signals
        // ready; the host rejects late registration.
        .register_uri_scheme_protocol(APP_SCHEME, |ctx, request| {
            let webui_dir = webui_paths::resolve_webui_dir(ctx.app_handle());
            app_scheme::handle_app_request(webui_dir.as_deref(), request.uri().path())
        })
        .setup(move |app| {
            if signal_watch::should_watch_signals(&setup_config) {
                signal_watch::spawn_signal_watch(app.handle());
            }
            Ok(())
        })
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }
            if let WindowEvent::Destroyed = event {
                exit_events::handle_window_destroyed(window.app_handle());
            }
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::Ready => lifecycle::on_ready(app_handle),
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => lifecycle::on_active(app_handle),
            RunEvent::ExitRequested { .. } => exit_events::handle_exit_requested(app_handle),
            RunEvent::Exit => exit_events::handle_exit(app_handle),
            _ => {}
        });
}
