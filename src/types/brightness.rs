//! Brightness control for Govee lights.

use serde::{Deserialize, Serialize};

/// Brightness level from 0 to 100 percent.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    const MIN: u8 = 0;
    const MAX: u8 = 100;

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (0-100).
    pub fn create(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Clamp any input into the valid range.
    ///
    /// Out-of-range values are silently constrained rather than rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use govee_lan_rs::Brightness;
    ///
    /// assert_eq!(Brightness::clamped(-10).value(), 0);
    /// assert_eq!(Brightness::clamped(50).value(), 50);
    /// assert_eq!(Brightness::clamped(200).value(), 100);
    /// ```
    pub fn clamped(value: i64) -> Self {
        Brightness {
            value: value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8,
        }
    }
}
