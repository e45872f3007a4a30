//! # Overlay Component
//!
//! Full-screen overlays drawn over the navigation screen: the about dialog
//! and the screens the menu launches (account details, tag reader).
//! Dismissed with Esc or Enter. Dismissal never touches navigation state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::about::AboutInfo;
use crate::core::session::Session;
use crate::tui::component::Component;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    About(AboutInfo),
    Account,
    TagReader,
}

/// Transient render wrapper for an overlay.
pub struct OverlayView<'a> {
    overlay: &'a Overlay,
    session: Option<&'a Session>,
}

impl<'a> OverlayView<'a> {
    pub fn new(overlay: &'a Overlay, session: Option<&'a Session>) -> Self {
        Self { overlay, session }
    }

    fn title_and_lines(&self) -> (String, Vec<String>) {
        match self.overlay {
            Overlay::About(about) => (about.title.clone(), about.lines.clone()),
            Overlay::Account => {
                let lines = match self.session {
                    Some(session) => vec![
                        format!("Signed in as {}", session.identity),
                        format!("Role: {}", session.role.label()),
                        String::new(),
                        "Run `waresys logout` to sign out.".to_string(),
                    ],
                    None => vec!["Not signed in.".to_string()],
                };
                ("Account".to_string(), lines)
            }
            Overlay::TagReader => (
                "Tag reader".to_string(),
                vec!["Hold a tag against the reader.".to_string()],
            ),
        }
    }
}

impl Component for OverlayView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let (title, lines) = self.title_and_lines();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {title} "))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter OK  Esc Back ").centered())
            .padding(Padding::uniform(1));

        let paragraph = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Role;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(overlay: &Overlay, session: Option<&Session>) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| OverlayView::new(overlay, session).render(f, f.area()))
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_about_overlay_shows_version() {
        let text = draw(&Overlay::About(AboutInfo::for_version("9.9.9")), None);
        assert!(text.contains("Waresys"));
        assert!(text.contains("Version 9.9.9"));
    }

    #[test]
    fn test_account_overlay_shows_identity_and_role() {
        let session = Session::new("jnovak", Role::Admin);
        let text = draw(&Overlay::Account, Some(&session));
        assert!(text.contains("Signed in as jnovak"));
        assert!(text.contains("Role: admin"));
    }

    #[test]
    fn test_tag_reader_overlay() {
        let text = draw(&Overlay::TagReader, None);
        assert!(text.contains("Tag reader"));
        assert!(text.contains("Hold a tag"));
    }

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 10);
    }
}
