//! # Core Navigation Logic
//!
//! This module decides which section of the client is active and whether
//! navigation should proceed. It knows nothing about any specific UI
//! technology and never renders anything itself.
//!
//! ```text
//!                    ┌───────────────────────────┐
//!                    │           CORE            │
//!                    │      (this module)        │
//!                    │                           │
//!                    │  • gate (role, radio)     │
//!                    │  • menu (entries)         │
//!                    │  • controller (state)     │
//!                    │  • action (update())      │
//!                    └─────────────┬─────────────┘
//!                                  │ Effect
//!            ┌─────────────────────┼─────────────────────┐
//!            ▼                     ▼                     ▼
//!     ┌─────────────┐       ┌─────────────┐       ┌─────────────┐
//!     │  Section    │       │   Screen    │       │   Dialog    │
//!     │  Renderer   │       │  Launcher   │       │  Presenter  │
//!     └─────────────┘       └─────────────┘       └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`gate`]: Role and capability visibility rules
//! - [`menu`]: `EntryId`, `NavigationEntry` and the `MenuModel` registry
//! - [`state`]: `Section` and `NavigationState`, plus saved-state files
//! - [`controller`]: The `NavigationController` state machine
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`ports`]: Traits for the renderer, launcher and dialog presenter
//! - [`session`]: The signed-in account and where it comes from
//! - [`capability`]: Platform capability probes
//! - [`about`]: Text for the about dialog
//! - [`config`]: `~/.waresys/config.toml` loading and resolution

pub mod about;
pub mod action;
pub mod capability;
pub mod config;
pub mod controller;
pub mod gate;
pub mod menu;
pub mod ports;
pub mod session;
pub mod state;
