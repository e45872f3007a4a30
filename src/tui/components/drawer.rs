//! # Navigation Drawer Component
//!
//! Side panel listing the visible menu entries. Toggled with Tab (or `m`),
//! navigated with the arrow keys, Enter picks the entry under the cursor.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DrawerState` lives in `TuiState` and owns the cursor
//! - `Drawer` is created each frame with borrowed state and the menu
//!
//! The cursor is presentation state only. Which entry is *selected* is owned
//! by the core `MenuModel` and drawn with a marker.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::core::menu::{EntryId, MenuModel};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::{TuiEvent, hotkey_for};

/// Persistent state for the drawer.
#[derive(Debug, Default)]
pub struct DrawerState {
    pub entries: Vec<EntryId>,
    pub cursor: usize,
    pub list_state: ListState,
}

/// Events emitted by the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    Select(EntryId),
}

impl DrawerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the entry list from the menu's visible entries.
    pub fn sync(&mut self, menu: &MenuModel) {
        self.entries = menu.visible_entries().map(|entry| entry.id).collect();
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
        self.list_state.select(Some(self.cursor));
    }

    /// Put the cursor on the selected entry, or the top when none is.
    pub fn focus_selected(&mut self, menu: &MenuModel) {
        self.sync(menu);
        self.cursor = self
            .entries
            .iter()
            .position(|id| menu.is_selected(*id))
            .unwrap_or(0);
        self.list_state.select(Some(self.cursor));
    }

    pub fn cursor_entry(&self) -> Option<EntryId> {
        self.entries.get(self.cursor).copied()
    }
}

impl EventHandler for DrawerState {
    type Event = DrawerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DrawerEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                self.list_state.select(Some(self.cursor));
                None
            }
            TuiEvent::CursorDown => {
                if !self.entries.is_empty() {
                    self.cursor = (self.cursor + 1).min(self.entries.len() - 1);
                    self.list_state.select(Some(self.cursor));
                }
                None
            }
            TuiEvent::Submit => self.cursor_entry().map(DrawerEvent::Select),
            _ => None,
        }
    }
}

/// Transient render wrapper for the drawer.
pub struct Drawer<'a> {
    state: &'a mut DrawerState,
    menu: &'a MenuModel,
}

impl<'a> Drawer<'a> {
    pub fn new(state: &'a mut DrawerState, menu: &'a MenuModel) -> Self {
        Self { state, menu }
    }
}

impl Component for Drawer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Menu ");

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .map(|id| {
                let entry = self.menu.entry(*id);
                let marker = if entry.selected { "● " } else { "  " };
                let style = if entry.selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else if id.section().is_some() {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", hotkey_for(*id)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(marker, style),
                    Span::styled(entry.label.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
