use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::warn;

use crate::core::menu::EntryId;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    ForceQuit,
    Back,
    ToggleDrawer,

    // TUI-local events (handled directly in TUI)
    CursorUp,
    CursorDown,
    Submit,
    InputChar(char),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Map a raw terminal event to a `TuiEvent`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Tab) | (_, KeyCode::Char('m')) => Some(TuiEvent::ToggleDrawer),
                (_, KeyCode::Esc) | (_, KeyCode::Backspace) => Some(TuiEvent::Back),
                (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Digit hotkey for an entry: `1` for the first menu entry, and so on.
pub fn hotkey_for(id: EntryId) -> char {
    let position = EntryId::ALL.iter().position(|e| *e == id).unwrap_or(0);
    char::from(b'1' + position as u8)
}

/// The entry bound to digit hotkey `c`, if any.
pub fn hotkey_entry(c: char) -> Option<EntryId> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(|i| EntryId::ALL.get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_translate_navigation_keys() {
        assert_eq!(translate(key(KeyCode::Esc)), Some(TuiEvent::Back));
        assert_eq!(translate(key(KeyCode::Backspace)), Some(TuiEvent::Back));
        assert_eq!(translate(key(KeyCode::Tab)), Some(TuiEvent::ToggleDrawer));
        assert_eq!(translate(key(KeyCode::Char('m'))), Some(TuiEvent::ToggleDrawer));
        assert_eq!(translate(key(KeyCode::Down)), Some(TuiEvent::CursorDown));
        assert_eq!(translate(key(KeyCode::Enter)), Some(TuiEvent::Submit));
        assert_eq!(translate(key(KeyCode::Char('3'))), Some(TuiEvent::InputChar('3')));
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(event), Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_hotkeys_follow_menu_order() {
        assert_eq!(hotkey_entry('1'), Some(EntryId::Items));
        assert_eq!(hotkey_entry('6'), Some(EntryId::TagReader));
        assert_eq!(hotkey_entry('7'), Some(EntryId::About));
        assert_eq!(hotkey_entry('0'), None);
        assert_eq!(hotkey_entry('8'), None);
        assert_eq!(hotkey_entry('x'), None);
        for id in EntryId::ALL {
            assert_eq!(hotkey_entry(hotkey_for(id)), Some(id));
        }
    }
}
