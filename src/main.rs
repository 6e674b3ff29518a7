#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_scheme;
mod app_types;
mod bridge_commands;
mod content_loader;
mod content_source;
mod exit_events;
mod exit_state;
mod lifecycle;
mod logging;
mod main_window;
mod runtime_paths;
mod shell_config;
mod shortcuts;
mod signal_watch;
mod startup_task;
mod tooling_installer;
mod webui_paths;
mod window_actions;
mod window_prefs;

pub(crate) use app_constants::*;
pub(crate) use app_types::{AtomicFlagGuard, ShellBridgeResult, ShellState};
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
