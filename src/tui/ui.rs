use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::about::APP_NAME;
use crate::core::controller::NavigationController;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Drawer, OverlayView, SectionView, TitleBar};

pub const DRAWER_WIDTH: u16 = 26;

const FOOTER_HINT: &str = " Tab menu  1-7 jump  Esc back  Ctrl+C quit ";

pub fn draw_ui(frame: &mut Frame, controller: &NavigationController, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    // Title bar
    match controller.session() {
        Some(session) => TitleBar::new(
            controller.current_section(),
            session.identity.clone(),
            session.role,
        )
        .render(frame, title_area),
        None => frame.render_widget(Span::raw(APP_NAME), title_area),
    }

    // Drawer + content
    let content_area = if controller.drawer_open() {
        let [drawer_area, content_area] =
            Layout::horizontal([Length(DRAWER_WIDTH), Min(0)]).areas(main_area);
        tui.drawer.sync(controller.menu());
        Drawer::new(&mut tui.drawer, controller.menu()).render(frame, drawer_area);
        content_area
    } else {
        main_area
    };
    SectionView::new(tui.displayed).render(frame, content_area);

    // Footer
    frame.render_widget(
        Span::styled(FOOTER_HINT, Style::default().fg(Color::DarkGray)),
        footer_area,
    );

    // Overlay goes on top of everything
    if let Some(overlay) = &tui.overlay {
        OverlayView::new(overlay, controller.session()).render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::Dialog;
    use crate::core::menu::EntryId;
    use crate::core::ports::{DialogPresenter, SectionRenderer};
    use crate::core::state::Section;
    use crate::test_support::{admin, clerk, started};
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(controller: &NavigationController, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(90, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, controller, tui)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_draw_ui_closed_drawer() {
        let controller = started(clerk(), false);
        let mut tui = TuiState::new();
        tui.render(Section::Items);

        let text = draw(&controller, &mut tui);
        assert!(text.contains("Waresys | Items | clerk"));
        assert!(text.contains("Inventory items"));
        assert!(!text.contains("Menu"));
    }

    #[test]
    fn test_draw_ui_open_drawer_hides_admin_entries_for_clerk() {
        let mut controller = started(clerk(), false);
        controller.open_drawer();
        let mut tui = TuiState::new();
        tui.render(Section::Items);

        let text = draw(&controller, &mut tui);
        assert!(text.contains("Menu"));
        assert!(text.contains("Tags"));
        assert!(!text.contains("Users"));
        assert!(!text.contains("Devices"));
    }

    #[test]
    fn test_draw_ui_open_drawer_for_admin() {
        let mut controller = started(admin(), true);
        controller.select_item(EntryId::Users);
        controller.open_drawer();
        let mut tui = TuiState::new();
        tui.render(Section::Users);

        let text = draw(&controller, &mut tui);
        assert!(text.contains("● Users"));
        assert!(text.contains("Devices"));
        assert!(text.contains("Tag reader"));
        assert!(text.contains("(admin)"));
    }

    #[test]
    fn test_draw_ui_about_overlay() {
        let controller = started(clerk(), false);
        let mut tui = TuiState::new();
        tui.render(Section::Items);
        tui.show(Dialog::About);

        let text = draw(&controller, &mut tui);
        assert!(text.contains(&format!("Version {}", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn test_draw_ui_before_initialization() {
        let controller = NavigationController::new();
        let mut tui = TuiState::new();
        let text = draw(&controller, &mut tui);
        assert!(text.contains("Waresys"));
    }
}
