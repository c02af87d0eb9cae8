//! RGB color representation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An RGB color with red, green, and blue components (0-255 each).
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Color {
    #[serde(rename = "r")]
    pub(crate) red: u8,
    #[serde(rename = "g")]
    pub(crate) green: u8,
    #[serde(rename = "b")]
    pub(crate) blue: u8,
}

impl Color {
    /// Create a color with the given RGB values.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a default color (black: 0,0,0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp each channel independently into 0-255.
    ///
    /// # Examples
    ///
    /// ```
    /// use govee_lan_rs::Color;
    ///
    /// let c = Color::clamped(-5, 300, 128);
    /// assert_eq!((c.red(), c.green(), c.blue()), (0, 255, 128));
    /// ```
    pub fn clamped(red: i64, green: i64, blue: i64) -> Self {
        let channel = |v: i64| v.clamp(0, 255) as u8;
        Self {
            red: channel(red),
            green: channel(green),
            blue: channel(blue),
        }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parse from comma-separated string (e.g., "255,128,0").
    fn from_str(s: &str) -> Result<Self, String> {
        let parts: Vec<u8> = s.split(',').map(|c| c.parse().unwrap_or(0)).collect();
        if parts.len() == 3 {
            Ok(Self::rgb(parts[0], parts[1], parts[2]))
        } else {
            Err("Expected format: r,g,b".into())
        }
    }
}
