//! # govee_lan_rs
//!
//! An async Rust library for controlling Govee smart lights over UDP.
//!
//! This crate talks the Govee LAN command protocol: single JSON datagrams of
//! the shape `{"msg":{"cmd":...,"data":...}}` sent to a device's UDP port.
//! It supports power, brightness, RGB color, color temperature, status
//! queries, raw passthrough commands, and a brute-force network scan for
//! finding responsive devices.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::net::Ipv4Addr;
//! use govee_lan_rs::{Device, DeviceConfig};
//!
//! async fn control_light() {
//!     // Create a device with the light's IP address
//!     let config = DeviceConfig::new(Ipv4Addr::new(192, 168, 1, 100));
//!     let device = Device::new(config, Some("Living Room"));
//!
//!     // Turn it on and make it orange
//!     let result = device.turn_on().await;
//!     assert!(result.succeeded);
//!     device.set_color(255, 128, 0).await;
//! }
//! ```
//!
//! ## Features
//!
//! - **Power Control**: Turn lights on/off with [`PowerMode`]
//! - **Brightness**: Control brightness from 0-100% using [`Brightness`]
//! - **RGB Colors**: Set any RGB color using the [`Color`] type
//! - **Color Temperature**: Set warm to cool white (2000K-9000K) using [`Kelvin`]
//! - **Status**: Query device state, optionally parsed into [`DeviceStatus`]
//! - **Raw Commands**: Forward-compatible passthrough via [`Command::raw`]
//! - **Discovery**: Sweep the local /24 network with [`scan_network`]
//! - **Diagnostics**: Per-device command history via [`MessageHistory`]
//!
//! ## Communication
//!
//! All communication occurs over UDP on port 4003 by default. Commands are
//! fire-and-forget: devices may or may not acknowledge, so a missing reply
//! is reported as a successful send with an empty response rather than an
//! error. Every operation returns a [`CommandResult`]; transport failures
//! are captured in it instead of being raised.
//!
//! The devices must be on the same local network and ideally have static
//! IP addresses assigned.

mod command;
mod config;
mod device;
mod errors;
mod history;
mod result;
mod scanner;
mod status;
mod transport;
mod types;

// Re-export public API
pub use command::Command;
pub use config::{DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, DeviceConfig};
pub use device::Device;
pub use errors::Error;
pub use history::{HistoryEntry, HistorySummary, MessageHistory, MessageType};
pub use result::CommandResult;
pub use scanner::{DiscoveredDevice, ScanResult, scan_network, scan_prefix};
pub use status::DeviceStatus;
pub use types::{Brightness, Color, Kelvin, PowerMode};
