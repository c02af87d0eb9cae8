//! Power mode for light control.

use serde::{Deserialize, Serialize};

/// Power state for a light.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PowerMode {
    /// Turn the light on
    On,
    /// Turn the light off
    Off,
}

impl PowerMode {
    /// The wire value carried in a `turn` command (1 for on, 0 for off).
    pub fn value(&self) -> u8 {
        match self {
            PowerMode::On => 1,
            PowerMode::Off => 0,
        }
    }
}
