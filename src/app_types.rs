use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use crate::{exit_state::ExitStateMachine, shell_config::ShellConfig};

/// Lifecycle context shared through the host runtime's managed state.
/// Constructed once at process entry; there is no global singleton.
#[derive(Debug)]
pub(crate) struct ShellState {
    pub(crate) config: ShellConfig,
    pub(crate) exit_state: Mutex<ExitStateMachine>,
    pub(crate) is_starting: AtomicBool,
}

impl ShellState {
    pub(crate) fn new(config: ShellConfig) -> Self {
        Self {
            config,
            exit_state: Mutex::new(ExitStateMachine::default()),
            is_starting: AtomicBool::new(false),
        }
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.exit_state
            .lock()
            .map(|guard| guard.is_quitting())
            .unwrap_or(true)
    }

    /// True only for the first quit request.
    pub(crate) fn mark_quitting(&self) -> bool {
        match self.exit_state.lock() {
            Ok(mut guard) => guard.request_quit(),
            Err(_) => false,
        }
    }

    /// True only for the first transition into the exited phase.
    pub(crate) fn mark_exited(&self) -> bool {
        match self.exit_state.lock() {
            Ok(mut guard) => guard.mark_exited(),
            Err(_) => false,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct ShellBridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl ShellBridgeResult {
    pub(crate) fn ok() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub(crate) fn failed(reason: String) -> Self {
        Self {
            ok: false,
            reason: Some(reason),
        }
    }
}

/// RAII flag guard serializing the startup sequence against event-triggered
/// window creation; the flag clears when the holder drops.
pub(crate) struct AtomicFlagGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> AtomicFlagGuard<'a> {
    pub(crate) fn try_set(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(Self { flag })
    }
}

impl Drop for AtomicFlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::{AtomicFlagGuard, ShellState};
    use crate::shell_config::ShellConfig;

    fn test_config() -> ShellConfig {
        ShellConfig {
            dev_mode: false,
            test_mode: true,
            dev_server_url: None,
            frame_visible: true,
        }
    }

    #[test]
    fn atomic_flag_guard_rejects_second_holder_until_drop() {
        let flag = AtomicBool::new(false);

        let guard = AtomicFlagGuard::try_set(&flag).expect("first set should succeed");
        assert!(flag.load(Ordering::Relaxed));
        assert!(AtomicFlagGuard::try_set(&flag).is_none());

        drop(guard);
        assert!(!flag.load(Ordering::Relaxed));
        assert!(AtomicFlagGuard::try_set(&flag).is_some());
    }

    #[test]
    fn shell_state_quit_is_invoked_exactly_once() {
        let state = ShellState::new(test_config());
        assert!(!state.is_quitting());
        assert!(state.mark_quitting());
        assert!(!state.mark_quitting());
        assert!(state.is_quitting());
        assert!(state.mark_exited());
        assert!(!state.mark_exited());
    }
}
