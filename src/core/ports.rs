//! Collaborators that carry out the controller's intents.
//!
//! The controller only says what should happen. A host (the TUI, or a
//! recording fake in tests) implements these traits and [`dispatch`] routes
//! each `Effect` to the right one.

use crate::core::action::Effect;
use crate::core::controller::{Dialog, Screen};
use crate::core::state::Section;

/// Replaces the displayed content. Must tolerate being asked for the
/// section it already shows.
pub trait SectionRenderer {
    fn render(&mut self, section: Section);
}

/// Opens a screen outside the navigation screen. Fire and forget.
pub trait ScreenLauncher {
    fn launch(&mut self, screen: Screen);
}

pub trait DialogPresenter {
    fn show(&mut self, dialog: Dialog);
}

/// Whether the host should keep running after an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn dispatch<H>(effect: &Effect, host: &mut H) -> Flow
where
    H: SectionRenderer + ScreenLauncher + DialogPresenter,
{
    match *effect {
        Effect::None => Flow::Continue,
        Effect::Render(section) => {
            host.render(section);
            Flow::Continue
        }
        Effect::Launch(screen) => {
            host.launch(screen);
            Flow::Continue
        }
        Effect::ShowDialog(dialog) => {
            host.show(dialog);
            Flow::Continue
        }
        Effect::Exit => Flow::Exit,
    }
}
