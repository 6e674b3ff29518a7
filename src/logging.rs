use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{runtime_paths, DESKTOP_LOG_FILE};

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, log_file: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(log_file),
        None => PathBuf::from(log_file),
    }
}

pub(crate) fn formatted_log_line(timestamp: &str, channel: &str, message: &str) -> String {
    format!("[{timestamp}] [{channel}] {message}")
}

pub(crate) fn append_log_line(path: &Path, line: &str) -> Result<(), String> {
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log file {}: {}", path.display(), error))?;
    writeln!(file, "{line}")
        .map_err(|error| format!("Failed to write log file {}: {}", path.display(), error))
}

fn append_channel_log(channel: &str, message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
    let line = formatted_log_line(&timestamp, channel, message);
    let path = resolve_desktop_log_path(runtime_paths::resolve_shell_root_dir(), DESKTOP_LOG_FILE);
    if append_log_line(&path, &line).is_err() {
        eprintln!("{line}");
    }
}

pub(crate) fn append_startup_log(message: &str) {
    append_channel_log("startup", message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_channel_log("desktop", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_channel_log("shutdown", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_desktop_log_path_places_log_under_logs_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/tmp/shell-root")), "desktop.log");
        assert_eq!(path, PathBuf::from("/tmp/shell-root/logs/desktop.log"));
    }

    #[test]
    fn resolve_desktop_log_path_falls_back_to_bare_file_name() {
        let path = resolve_desktop_log_path(None, "desktop.log");
        assert_eq!(path, PathBuf::from("desktop.log"));
    }

    #[test]
    fn formatted_log_line_carries_channel_and_message() {
        let line = formatted_log_line("2026-01-01 00:00:00.000", "startup", "process starting");
        assert_eq!(line, "[2026-01-01 00:00:00.000] [startup] process starting");
    }

    #[test]
    fn append_log_line_creates_directories_and_appends() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logs").join("desktop.log");

        append_log_line(&path, "first").expect("first append");
        append_log_line(&path, "second").expect("second append");

        let contents = fs::read_to_string(&path).expect("read log");
        assert_eq!(contents, "first\nsecond\n");
    }
}
