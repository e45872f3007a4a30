//! # TUI Adapter
//!
//! The ratatui-specific layer. Hosts the navigation controller, renders the
//! screen, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! `TuiState` implements the core's renderer, launcher and dialog ports, so
//! every `Effect` from `update()` lands here through `ports::dispatch`.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize).

mod component;
pub mod components;
pub mod event;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use log::{debug, info, warn};

use crate::core::about::AboutInfo;
use crate::core::action::{Action, Effect, update};
use crate::core::capability;
use crate::core::config::ResolvedConfig;
use crate::core::controller::{Dialog, NavigationController, Screen, Startup};
use crate::core::ports::{self, DialogPresenter, Flow, ScreenLauncher, SectionRenderer};
use crate::core::session::FileSessionProvider;
use crate::core::state::{self, NavigationState, Section};
use crate::tui::component::EventHandler;
use crate::tui::components::{DrawerEvent, DrawerState, Overlay};
use crate::tui::event::{TuiEvent, hotkey_entry, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core navigation logic)
pub struct TuiState {
    /// Section last handed to the renderer.
    pub displayed: Option<Section>,
    /// Dialog or launched screen on top of the navigation screen.
    pub overlay: Option<Overlay>,
    pub drawer: DrawerState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            displayed: None,
            overlay: None,
            drawer: DrawerState::new(),
        }
    }
}

impl SectionRenderer for TuiState {
    fn render(&mut self, section: Section) {
        if self.displayed == Some(section) {
            debug!("{:?} already displayed", section);
            return;
        }
        info!("Rendering section {:?}", section);
        self.displayed = Some(section);
    }
}

impl ScreenLauncher for TuiState {
    fn launch(&mut self, screen: Screen) {
        info!("Launching {:?} screen", screen);
        self.overlay = Some(match screen {
            Screen::Account => Overlay::Account,
            Screen::TagReader => Overlay::TagReader,
        });
    }
}

impl DialogPresenter for TuiState {
    fn show(&mut self, dialog: Dialog) {
        match dialog {
            Dialog::About => self.overlay = Some(Overlay::About(AboutInfo::current())),
        }
    }
}

/// Turn a terminal event into a core action, given the current screen.
///
/// Returns `None` for events the TUI handles itself (drawer cursor,
/// overlay dismissal) or that mean nothing here.
pub fn route_event(
    event: &TuiEvent,
    controller: &NavigationController,
    tui: &mut TuiState,
) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // Overlays swallow everything; Esc or Enter dismisses them.
    if tui.overlay.is_some() {
        if matches!(event, TuiEvent::Back | TuiEvent::Submit) {
            tui.overlay = None;
        }
        return None;
    }

    match event {
        TuiEvent::Back => Some(Action::Back),
        TuiEvent::ToggleDrawer => {
            if !controller.drawer_open() {
                tui.drawer.focus_selected(controller.menu());
            }
            Some(Action::ToggleDrawer)
        }
        TuiEvent::InputChar(c) => match hotkey_entry(*c) {
            Some(id) => Some(Action::Select(id)),
            None => {
                debug!("Unrecognized selection key {:?}, ignoring", c);
                None
            }
        },
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit
            if controller.drawer_open() =>
        {
            tui.drawer.sync(controller.menu());
            tui.drawer
                .handle_event(event)
                .map(|DrawerEvent::Select(id)| Action::Select(id))
        }
        _ => None,
    }
}

/// Load the state saved at the last exit, unless restoring is turned off.
fn saved_state(config: &ResolvedConfig) -> Option<NavigationState> {
    if !config.restore_last_section {
        return None;
    }
    match state::load_saved_state(&config.state_path) {
        Ok(saved) => saved,
        Err(e) => {
            warn!("Ignoring saved state: {}", e);
            None
        }
    }
}

/// Printed when no usable account is stored. Covers a missing file as well as
/// a malformed one or an empty identity.
fn sign_in_hint(account_path: &Path) -> String {
    format!(
        "No valid account at {}. Run `waresys login <name>` first.",
        account_path.display()
    )
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let sessions = FileSessionProvider::new(config.account_path.clone());
    let probe = capability::probe_from_config(&config);

    let mut controller = NavigationController::new();
    let mut tui = TuiState::new();

    match controller.start(&sessions, probe.as_ref(), saved_state(&config)) {
        Startup::RequireAuthentication => {
            println!("{}", sign_in_hint(sessions.path()));
            return Ok(());
        }
        Startup::Fresh(selection) => {
            ports::dispatch(&Effect::from(selection), &mut tui);
        }
        Startup::Restored(section) => tui.render(section),
    }

    let mut terminal = ratatui::init();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &controller, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            let Some(action) = route_event(&event, &controller, &mut tui) else {
                continue;
            };
            let effect = update(&mut controller, action);
            if ports::dispatch(&effect, &mut tui) == Flow::Exit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();

    if let Err(e) = state::save_state(&config.state_path, &controller.state()) {
        warn!("Failed to save navigation state: {}", e);
    }
    info!("Leaving on section {:?}", controller.current_section());
    result
}
