//! Waresys library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the short-range radio (NFC) capability is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RadioMode {
    /// Probe the device at startup.
    #[default]
    Auto,
    /// Always report the radio as present.
    On,
    /// Always report the radio as absent.
    Off,
}
