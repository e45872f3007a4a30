//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: App name, current section and account
//! - `SectionView`: The content area for the displayed section
//! - `OverlayView`: About dialog and launched screens
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `DrawerState` / `Drawer`: Navigation drawer with its own cursor
//!
//! Components receive external data as props, never by reaching into the
//! controller. The navigation decisions stay in `core`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── drawer.rs        (Navigation drawer)
//! ├── section_view.rs  (Content area)
//! └── overlay.rs       (About dialog, account and tag reader screens)
//! ```

pub mod drawer;
pub mod overlay;
pub mod section_view;
mod title_bar;

pub use drawer::{Drawer, DrawerEvent, DrawerState};
pub use overlay::{Overlay, OverlayView};
pub use section_view::SectionView;
pub use title_bar::TitleBar;

/// Flatten a test terminal's buffer into one string.
#[cfg(test)]
pub(crate) fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
