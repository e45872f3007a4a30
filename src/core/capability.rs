//! Platform capability probes.
//!
//! The only capability the navigation screen cares about is a short-range
//! radio (NFC), which decides whether the tag reader entry is offered.
//! Probes are asked once, at startup.

use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use crate::RadioMode;
use crate::core::config::ResolvedConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ShortRangeRadio,
}

impl Capability {
    pub fn name(self) -> &'static str {
        match self {
            Capability::ShortRangeRadio => "short-range-radio",
        }
    }
}

pub trait CapabilityProbe {
    fn has_capability(&self, capability: Capability) -> bool;
}

/// Looks for NFC adapters registered with the kernel's `nfc` device class.
pub struct SysfsProbe {
    nfc_class_dir: PathBuf,
}

impl SysfsProbe {
    pub fn new(nfc_class_dir: PathBuf) -> Self {
        Self { nfc_class_dir }
    }
}

impl CapabilityProbe for SysfsProbe {
    fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::ShortRangeRadio => {
                let found = fs::read_dir(&self.nfc_class_dir)
                    .map(|mut entries| entries.next().is_some())
                    .unwrap_or(false);
                debug!(
                    "Probed {} for {}: {}",
                    self.nfc_class_dir.display(),
                    capability.name(),
                    found
                );
                found
            }
        }
    }
}

/// Answers with a fixed value, used when the radio is forced on or off.
pub struct FixedProbe {
    short_range_radio: bool,
}

impl FixedProbe {
    pub fn new(short_range_radio: bool) -> Self {
        Self { short_range_radio }
    }
}

impl CapabilityProbe for FixedProbe {
    fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::ShortRangeRadio => self.short_range_radio,
        }
    }
}

/// Build a probe from the resolved radio mode.
pub fn probe_from_config(config: &ResolvedConfig) -> Box<dyn CapabilityProbe> {
    match config.radio {
        RadioMode::Auto => Box::new(SysfsProbe::new(config.nfc_sysfs_path.clone())),
        RadioMode::On => {
            info!("Short-range radio forced on");
            Box::new(FixedProbe::new(true))
        }
        RadioMode::Off => {
            info!("Short-range radio forced off");
            Box::new(FixedProbe::new(false))
        }
    }
}
