//! # Menu Model
//!
//! The registry of navigation drawer entries.
//!
//! Entries are kept in a fixed order (items, tags, devices, users, account,
//! tag reader, about) and every `EntryId` has exactly one entry. The first
//! four are sections that occupy the content area and can be `selected`;
//! the rest launch something else and are never `selected`.

use crate::core::gate::{capability_gate, role_gate};
use crate::core::session::Session;
use crate::core::state::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryId {
    Items,
    Tags,
    Devices,
    Users,
    Account,
    TagReader,
    About,
}

impl EntryId {
    /// Every entry, in menu order.
    pub const ALL: [EntryId; 7] = [
        EntryId::Items,
        EntryId::Tags,
        EntryId::Devices,
        EntryId::Users,
        EntryId::Account,
        EntryId::TagReader,
        EntryId::About,
    ];

    /// The section this entry shows in place, if it is a section entry.
    pub fn section(self) -> Option<Section> {
        match self {
            EntryId::Items => Some(Section::Items),
            EntryId::Tags => Some(Section::Tags),
            EntryId::Devices => Some(Section::Devices),
            EntryId::Users => Some(Section::Users),
            EntryId::Account | EntryId::TagReader | EntryId::About => None,
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            EntryId::Items => "Items",
            EntryId::Tags => "Tags",
            EntryId::Devices => "Devices",
            EntryId::Users => "Users",
            EntryId::Account => "Account",
            EntryId::TagReader => "Tag reader",
            EntryId::About => "About",
        }
    }

    /// Position in `ALL`, which is also the position in the menu.
    fn index(self) -> usize {
        self as usize
    }
}

impl From<Section> for EntryId {
    fn from(section: Section) -> Self {
        match section {
            Section::Items => EntryId::Items,
            Section::Tags => EntryId::Tags,
            Section::Devices => EntryId::Devices,
            Section::Users => EntryId::Users,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    pub id: EntryId,
    pub label: String,
    pub visible: bool,
    pub selected: bool,
}

impl NavigationEntry {
    fn new(id: EntryId) -> Self {
        Self {
            id,
            label: id.default_label().to_string(),
            visible: true,
            selected: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    entries: Vec<NavigationEntry>,
}

impl Default for MenuModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuModel {
    /// Every entry visible, nothing selected, default labels.
    pub fn new() -> Self {
        Self {
            entries: EntryId::ALL.into_iter().map(NavigationEntry::new).collect(),
        }
    }

    /// Build the menu for `session`, applying the role and capability gates.
    pub fn configure(session: &Session, has_short_range_radio: bool) -> Self {
        let mut menu = Self::new();
        for (id, visible) in role_gate(session.role) {
            menu.set_visible(id, visible);
        }
        for (id, visible) in capability_gate(has_short_range_radio) {
            menu.set_visible(id, visible);
        }
        menu
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.entries.iter().filter(|entry| entry.visible)
    }

    pub fn entry(&self, id: EntryId) -> &NavigationEntry {
        &self.entries[id.index()]
    }

    fn entry_mut(&mut self, id: EntryId) -> &mut NavigationEntry {
        &mut self.entries[id.index()]
    }

    pub fn set_visible(&mut self, id: EntryId, visible: bool) {
        self.entry_mut(id).visible = visible;
    }

    pub fn set_label(&mut self, id: EntryId, label: impl Into<String>) {
        self.entry_mut(id).label = label.into();
    }

    pub fn is_visible(&self, id: EntryId) -> bool {
        self.entry(id).visible
    }

    pub fn is_selected(&self, id: EntryId) -> bool {
        self.entry(id).selected
    }

    /// Mark `section` as the selected entry and clear its siblings.
    pub fn check(&mut self, section: Section) {
        for entry in &mut self.entries {
            entry.selected = entry.id.section() == Some(section);
        }
    }

    pub fn selected_section(&self) -> Option<Section> {
        self.entries
            .iter()
            .find(|entry| entry.selected)
            .and_then(|entry| entry.id.section())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Role;

    #[test]
    fn test_entries_follow_menu_order() {
        let menu = MenuModel::new();
        let ids: Vec<EntryId> = menu.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, EntryId::ALL.to_vec());
        for id in EntryId::ALL {
            assert_eq!(menu.entry(id).id, id);
        }
    }

    #[test]
    fn test_configure_standard_without_radio() {
        let menu = MenuModel::configure(&Session::new("clerk", Role::Standard), false);
        let visible: Vec<EntryId> = menu.visible_entries().map(|e| e.id).collect();
        assert_eq!(
            visible,
            vec![EntryId::Items, EntryId::Tags, EntryId::Account, EntryId::About]
        );
    }

    #[test]
    fn test_configure_admin_with_radio_shows_everything() {
        let menu = MenuModel::configure(&Session::new("root", Role::Admin), true);
        assert!(menu.entries().iter().all(|e| e.visible));
        assert!(menu.selected_section().is_none());
    }

    #[test]
    fn test_check_clears_siblings() {
        let mut menu = MenuModel::new();
        menu.check(Section::Tags);
        menu.check(Section::Users);
        assert!(menu.is_selected(EntryId::Users));
        assert!(!menu.is_selected(EntryId::Tags));
        assert_eq!(menu.entries().iter().filter(|e| e.selected).count(), 1);
        assert_eq!(menu.selected_section(), Some(Section::Users));
    }

    #[test]
    fn test_only_sections_map_to_sections() {
        for section in Section::ALL {
            assert_eq!(EntryId::from(section).section(), Some(section));
        }
        assert!(EntryId::Account.section().is_none());
        assert!(EntryId::TagReader.section().is_none());
        assert!(EntryId::About.section().is_none());
    }
}
