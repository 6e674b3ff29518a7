use tauri::{AppHandle, Manager, Runtime};
use thiserror::Error;

use crate::{
    main_window, runtime_paths, shell_config::ShellConfig, shortcuts, tooling_installer,
    AtomicFlagGuard, ShellState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StartupStep {
    ToolingInstall,
    WindowCreation,
    ShortcutRegistration,
}

#[derive(Debug, Error)]
pub(crate) enum StartupStepError {
    #[error("developer tooling install failed: {0}")]
    Tooling(String),
    #[error("window creation failed: {0}")]
    Window(String),
    #[error("shortcut registration failed: {0}")]
    Shortcuts(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailurePolicy {
    ContinueSequence,
    AbortSequence,
}

/// Tooling and shortcuts fail on their own; without a window there is
/// nothing left worth doing.
pub(crate) fn failure_policy(step: StartupStep) -> FailurePolicy {
    match step {
        StartupStep::ToolingInstall => FailurePolicy::ContinueSequence,
        StartupStep::WindowCreation => FailurePolicy::AbortSequence,
        StartupStep::ShortcutRegistration => FailurePolicy::ContinueSequence,
    }
}

#[derive(Debug, Default)]
pub(crate) struct StartupReport {
    pub(crate) tooling_installed: Option<String>,
    pub(crate) tooling_skipped: bool,
    pub(crate) window_created: bool,
    pub(crate) shortcuts_registered: bool,
    pub(crate) errors: Vec<StartupStepError>,
    pub(crate) aborted_at: Option<StartupStep>,
}

impl StartupReport {
    pub(crate) fn sequence_failed(&self) -> bool {
        self.aborted_at.is_some()
    }
}

/// The three startup steps behind a seam so the sequencing logic can run
/// against fakes.
pub(crate) trait StartupSteps {
    fn install_tooling(&mut self) -> Result<String, String>;
    fn create_window(&mut self) -> Result<(), String>;
    fn register_shortcuts(&mut self) -> Result<(), String>;
}

/// Runs the startup pipeline strictly in order: tooling, then window, then
/// shortcuts. A step starts only after the previous one resolved; each
/// failure is recorded and weighed by its policy instead of unwinding.
pub(crate) fn run_startup_sequence(
    steps: &mut impl StartupSteps,
    install_tooling_enabled: bool,
) -> StartupReport {
    let mut report = StartupReport::default();

    if install_tooling_enabled {
        match steps.install_tooling() {
            Ok(id) => report.tooling_installed = Some(id),
            Err(error) => {
                report.errors.push(StartupStepError::Tooling(error));
                if failure_policy(StartupStep::ToolingInstall) == FailurePolicy::AbortSequence {
                    report.aborted_at = Some(StartupStep::ToolingInstall);
                    return report;
                }
            }
        }
    } else {
        report.tooling_skipped = true;
    }

    match steps.create_window() {
        Ok(()) => report.window_created = true,
        Err(error) => {
            report.errors.push(StartupStepError::Window(error));
            if failure_policy(StartupStep::WindowCreation) == FailurePolicy::AbortSequence {
                report.aborted_at = Some(StartupStep::WindowCreation);
                return report;
            }
        }
    }

    match steps.register_shortcuts() {
        Ok(()) => report.shortcuts_registered = true,
        Err(error) => {
            report.errors.push(StartupStepError::Shortcuts(error));
            if failure_policy(StartupStep::ShortcutRegistration) == FailurePolicy::AbortSequence {
                report.aborted_at = Some(StartupStep::ShortcutRegistration);
                return report;
            }
        }
    }

    report
}

pub(crate) fn tooling_install_enabled(config: &ShellConfig) -> bool {
    config.dev_mode && !config.test_mode
}

struct ShellStartupSteps<'a, R: Runtime> {
    app_handle: &'a AppHandle<R>,
    config: ShellConfig,
    log: fn(&str),
}

impl<R: Runtime> StartupSteps for ShellStartupSteps<'_, R> {
    fn install_tooling(&mut self) -> Result<String, String> {
        let root_dir = runtime_paths::resolve_shell_root_dir()
            .ok_or_else(|| "shell root directory is unavailable".to_string())?;
        tooling_installer::install_dev_tooling(self.app_handle, &root_dir)
    }

    fn create_window(&mut self) -> Result<(), String> {
        let creation = main_window::create_main_window(self.app_handle, &self.config)?;
        // The load keeps running in the background; the sequence only waits
        // for the synchronous portion of window creation.
        let _content_load = creation.content_load;
        (self.log)("main window created, content load scheduled");
        Ok(())
    }

    fn register_shortcuts(&mut self) -> Result<(), String> {
        shortcuts::register_shortcuts(self.app_handle)
    }
}

pub(crate) fn spawn_startup_task<R: Runtime>(app_handle: AppHandle<R>, log: fn(&str)) {
    tauri::async_runtime::spawn(async move {
        let state = app_handle.state::<ShellState>();
        let Some(_guard) = AtomicFlagGuard::try_set(&state.is_starting) else {
            log("startup sequence already in flight, skipping");
            return;
        };

        let install_tooling_enabled = tooling_install_enabled(&state.config);
        let mut steps = ShellStartupSteps {
            app_handle: &app_handle,
            config: state.config.clone(),
            log,
        };
        let report = run_startup_sequence(&mut steps, install_tooling_enabled);
        log_report(&report, log);
    });
}

fn log_report(report: &StartupReport, log: fn(&str)) {
    if let Some(id) = &report.tooling_installed {
        log(&format!("developer tooling '{id}' installed"));
    }
    for error in &report.errors {
        log(&format!("startup step failed: {error}"));
    }
    if report.sequence_failed() {
        log("the desktop shell failed to initialize properly");
    } else {
        log("desktop shell initialized successfully");
    }
}
