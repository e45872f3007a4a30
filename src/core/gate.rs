//! Visibility rules for menu entries.
//!
//! Both gates are pure functions: they return the entries they govern
//! paired with the visibility those entries should have. The menu applies
//! them in [`MenuModel::configure`](crate::core::menu::MenuModel::configure).

use crate::core::menu::EntryId;
use crate::core::session::Role;

/// Entries that only administrators can see.
pub const ADMIN_GROUP: [EntryId; 2] = [EntryId::Devices, EntryId::Users];

/// Visibility of the administrative group for `role`.
pub fn role_gate(role: Role) -> [(EntryId, bool); 2] {
    let visible = role.is_admin();
    ADMIN_GROUP.map(|id| (id, visible))
}

/// Visibility of entries that need a short-range radio.
pub fn capability_gate(has_short_range_radio: bool) -> [(EntryId, bool); 1] {
    [(EntryId::TagReader, has_short_range_radio)]
}
