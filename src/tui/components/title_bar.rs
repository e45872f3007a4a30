//! # TitleBar Component
//!
//! Top status bar showing the app name, the current section and the
//! signed-in account.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(Section::Tags, "jnovak".to_string(), Role::Admin);
//! title_bar.render(frame, area);
//! ```
//!
//! The title reads `"Waresys | Tags | jnovak (admin)"`. Standard accounts
//! show the identity without a role suffix.

use crate::core::about::APP_NAME;
use crate::core::session::Role;
use crate::core::state::Section;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    pub section: Section,
    pub identity: String,
    pub role: Role,
}

impl TitleBar {
    pub fn new(section: Section, identity: String, role: Role) -> Self {
        Self {
            section,
            identity,
            role,
        }
    }

    fn text(&self) -> String {
        let text = format!("{} | {} | {}", APP_NAME, self.section.title(), self.identity);
        match self.role {
            Role::Admin => format!("{text} (admin)"),
            Role::Standard => text,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
