//! # Section View Component
//!
//! The content area. Shows whichever section the renderer was last asked
//! for. Section content itself comes from the server screens, so this view
//! only frames the section and tells the user how to move around.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::Section;
use crate::tui::component::Component;

pub struct SectionView {
    /// Section to show; `None` until the first render request.
    pub section: Option<Section>,
}

impl SectionView {
    pub fn new(section: Option<Section>) -> Self {
        Self { section }
    }
}

fn blurb(section: Section) -> &'static str {
    match section {
        Section::Items => "Inventory items and where they are stored.",
        Section::Tags => "Tags attached to items.",
        Section::Devices => "Registered reader devices.",
        Section::Users => "User accounts and their roles.",
    }
}

impl Component for SectionView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(section) = self.section else {
            frame.render_widget(Block::bordered(), area);
            return;
        };

        let lines = vec![
            Line::from(Span::styled(
                section.title(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::raw(blurb(section))),
        ];

        let paragraph = Paragraph::new(lines)
            .block(Block::bordered().title(format!(" {} ", section.title())))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_section_title_and_blurb() {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut view = SectionView::new(Some(Section::Devices));

        terminal.draw(|f| view.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Devices"));
        assert!(text.contains("Registered reader devices."));
    }

    #[test]
    fn test_renders_empty_frame_before_first_section() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut view = SectionView::new(None);

        terminal.draw(|f| view.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(!text.contains("Items"));
    }
}
