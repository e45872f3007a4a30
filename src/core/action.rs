//! # Actions
//!
//! Everything the user can do on the navigation screen becomes an `Action`.
//! Picks an entry in the drawer? That's `Action::Select(id)`.
//! Presses back? That's `Action::Back`.
//!
//! The `update()` function feeds an action to the controller and returns the
//! `Effect` the host has to carry out. No side effects here. Rendering and
//! launching happen elsewhere.
//!
//! ```text
//! Controller + Action  →  update()  →  Effect
//! ```

use log::debug;

use crate::core::controller::{Back, Dialog, NavigationController, Screen, Selection};
use crate::core::menu::EntryId;
use crate::core::state::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select(EntryId),
    Back,
    ToggleDrawer,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Render(Section),
    Launch(Screen),
    ShowDialog(Dialog),
    Exit,
}

impl From<Selection> for Effect {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Ignored => Effect::None,
            Selection::RenderSection(section) => Effect::Render(section),
            Selection::LaunchScreen(screen) => Effect::Launch(screen),
            Selection::ShowDialog(dialog) => Effect::ShowDialog(dialog),
        }
    }
}

impl From<Back> for Effect {
    fn from(back: Back) -> Self {
        match back {
            // The drawer is part of the navigation state; a redraw shows it closed.
            Back::CloseDrawer => Effect::None,
            Back::SelectDefault(selection) => selection.into(),
            Back::DelegateToPlatform => Effect::Exit,
        }
    }
}

pub fn update(controller: &mut NavigationController, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Select(id) => controller.select_item(id).into(),
        Action::Back => controller.on_back_pressed().into(),
        Action::ToggleDrawer => {
            controller.toggle_drawer();
            Effect::None
        }
        Action::Quit => Effect::Exit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{admin, clerk, started};

    #[test]
    fn test_select_maps_to_render() {
        let mut controller = started(clerk(), false);
        assert_eq!(
            update(&mut controller, Action::Select(EntryId::Tags)),
            Effect::Render(Section::Tags)
        );
        assert_eq!(update(&mut controller, Action::Select(EntryId::Tags)), Effect::None);
    }

    #[test]
    fn test_select_about_shows_dialog() {
        let mut controller = started(clerk(), false);
        assert_eq!(
            update(&mut controller, Action::Select(EntryId::About)),
            Effect::ShowDialog(Dialog::About)
        );
    }

    #[test]
    fn test_back_sequence() {
        let mut controller = started(admin(), true);
        update(&mut controller, Action::Select(EntryId::Users));
        update(&mut controller, Action::ToggleDrawer);
        assert!(controller.drawer_open());

        assert_eq!(update(&mut controller, Action::Back), Effect::None);
        assert!(!controller.drawer_open());
        assert_eq!(
            update(&mut controller, Action::Back),
            Effect::Render(Section::Items)
        );
        assert_eq!(update(&mut controller, Action::Back), Effect::Exit);
    }

    #[test]
    fn test_quit_exits_from_anywhere() {
        let mut controller = started(admin(), false);
        update(&mut controller, Action::Select(EntryId::Devices));
        assert_eq!(update(&mut controller, Action::Quit), Effect::Exit);
        assert_eq!(controller.current_section(), Section::Devices);
    }
}
