//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::RadioMode;
use crate::core::config::ResolvedConfig;
use crate::core::controller::{Dialog, NavigationController, Screen};
use crate::core::ports::{DialogPresenter, ScreenLauncher, SectionRenderer};
use crate::core::session::{Role, Session, SessionProvider};
use crate::core::state::Section;

/// A session provider with a fixed answer.
pub struct FixedSessions(pub Option<Session>);

impl SessionProvider for FixedSessions {
    fn current_session(&self) -> Option<Session> {
        self.0.clone()
    }
}

pub fn clerk() -> Session {
    Session::new("clerk", Role::Standard)
}

pub fn admin() -> Session {
    Session::new("root", Role::Admin)
}

/// A controller freshly started for `session`.
pub fn started(session: Session, has_short_range_radio: bool) -> NavigationController {
    let mut controller = NavigationController::new();
    controller.initialize(Some(session), has_short_range_radio, None);
    controller
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Render(Section),
    Launch(Screen),
    Show(Dialog),
}

/// Records every call made to it, in order.
#[derive(Default)]
pub struct RecordingHost {
    pub calls: Vec<Call>,
}

impl SectionRenderer for RecordingHost {
    fn render(&mut self, section: Section) {
        self.calls.push(Call::Render(section));
    }
}

impl ScreenLauncher for RecordingHost {
    fn launch(&mut self, screen: Screen) {
        self.calls.push(Call::Launch(screen));
    }
}

impl DialogPresenter for RecordingHost {
    fn show(&mut self, dialog: Dialog) {
        self.calls.push(Call::Show(dialog));
    }
}

/// A unique path under the system temp dir. Nothing is created.
pub fn scratch_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("waresys-test-{}-{}-{}", std::process::id(), n, name))
}

/// A resolved config pointing at scratch paths.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        log_level: log::LevelFilter::Off,
        restore_last_section: true,
        radio: RadioMode::Auto,
        nfc_sysfs_path: scratch_path("nfc"),
        account_path: scratch_path("account.json"),
        state_path: scratch_path("state.json"),
    }
}
