//! # Navigation Controller
//!
//! Owns the menu and the navigation state and turns UI events into
//! intents. It never renders: every call returns what the host should do.
//!
//! ```text
//! initialize(session, radio, saved) → Startup
//! select_item(id)                   → Selection
//! on_back_pressed()                 → Back
//! ```
//!
//! Back navigation has exactly two levels. From any section other than the
//! default one, back returns to the default section; from the default
//! section, back is handed to the host, which exits. There is no history
//! stack.

use log::{debug, info, warn};

use crate::core::capability::{Capability, CapabilityProbe};
use crate::core::menu::{EntryId, MenuModel};
use crate::core::session::{Session, SessionProvider};
use crate::core::state::{NavigationState, Section};

/// Screens outside the navigation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Account,
    TagReader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    About,
}

/// Outcome of selecting a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Ignored,
    RenderSection(Section),
    LaunchScreen(Screen),
    ShowDialog(Dialog),
}

/// Outcome of a back press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Back {
    CloseDrawer,
    SelectDefault(Selection),
    DelegateToPlatform,
}

/// Outcome of initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Startup {
    /// Nobody is signed in. The controller stays unconfigured and the host
    /// must send the user to authentication and close this screen.
    RequireAuthentication,
    /// Fresh start: the default section was selected.
    Fresh(Selection),
    /// The saved state was adopted as is.
    Restored(Section),
}

#[derive(Debug, Default)]
pub struct NavigationController {
    menu: MenuModel,
    state: NavigationState,
    session: Option<Session>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the providers once and initialize from their answers.
    pub fn start(
        &mut self,
        sessions: &dyn SessionProvider,
        probe: &dyn CapabilityProbe,
        saved: Option<NavigationState>,
    ) -> Startup {
        let Some(session) = sessions.current_session() else {
            return self.initialize(None, false, saved);
        };
        let radio = probe.has_capability(Capability::ShortRangeRadio);
        self.initialize(Some(session), radio, saved)
    }

    pub fn initialize(
        &mut self,
        session: Option<Session>,
        has_short_range_radio: bool,
        saved: Option<NavigationState>,
    ) -> Startup {
        let Some(session) = session else {
            info!("No session, authentication required");
            return Startup::RequireAuthentication;
        };

        info!(
            "Initializing navigation for {} ({}), short-range radio: {}",
            session.identity,
            session.role.label(),
            has_short_range_radio
        );
        let mut menu = MenuModel::configure(&session, has_short_range_radio);
        menu.set_label(EntryId::Account, session.identity.clone());
        self.menu = menu;
        self.session = Some(session);

        if let Some(saved) = saved {
            let section = saved.current_section;
            if self.menu.is_visible(EntryId::from(section)) {
                self.menu.check(section);
                self.state = saved;
                info!("Restored section {:?}", section);
                return Startup::Restored(section);
            }
            warn!(
                "Saved section {:?} is not available to this account, starting fresh",
                section
            );
        }

        self.state = NavigationState::default();
        Startup::Fresh(self.select_item(EntryId::from(Section::DEFAULT)))
    }

    pub fn select_item(&mut self, id: EntryId) -> Selection {
        self.close_drawer();

        if self.menu.is_selected(id) {
            debug!("{:?} already selected, ignoring", id);
            return Selection::Ignored;
        }
        if !self.menu.is_visible(id) {
            debug!("{:?} is hidden, ignoring", id);
            return Selection::Ignored;
        }

        let selection = match id {
            EntryId::Items => self.show(Section::Items),
            EntryId::Tags => self.show(Section::Tags),
            EntryId::Devices => self.show(Section::Devices),
            EntryId::Users => self.show(Section::Users),
            EntryId::Account => Selection::LaunchScreen(Screen::Account),
            EntryId::TagReader => Selection::LaunchScreen(Screen::TagReader),
            EntryId::About => Selection::ShowDialog(Dialog::About),
        };
        info!("Selected {:?}: {:?}", id, selection);
        selection
    }

    fn show(&mut self, section: Section) -> Selection {
        self.menu.check(section);
        self.state.current_section = section;
        Selection::RenderSection(section)
    }

    pub fn on_back_pressed(&mut self) -> Back {
        if self.state.drawer_open {
            self.close_drawer();
            return Back::CloseDrawer;
        }
        if self.state.current_section != Section::DEFAULT {
            return Back::SelectDefault(self.select_item(EntryId::from(Section::DEFAULT)));
        }
        Back::DelegateToPlatform
    }

    pub fn open_drawer(&mut self) {
        self.state.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.state.drawer_open = false;
    }

    /// Flip the drawer and return whether it is now open.
    pub fn toggle_drawer(&mut self) -> bool {
        self.state.drawer_open = !self.state.drawer_open;
        self.state.drawer_open
    }

    pub fn menu(&self) -> &MenuModel {
        &self.menu
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_section(&self) -> Section {
        self.state.current_section
    }

    pub fn drawer_open(&self) -> bool {
        self.state.drawer_open
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}
