//! Device connection settings.

use std::net::{Ipv4Addr, SocketAddrV4};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// UDP port Govee devices listen on for LAN commands.
pub const DEFAULT_PORT: u16 = 4003;

/// Default send/receive timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

const DEFAULT_DEVICE_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 100);

/// Connection settings for a single device.
///
/// A config is read-only for the duration of an operation. Embedders that
/// persist settings elsewhere can deserialize straight into this struct
/// (camelCase field names) and hand it to [`Device`](crate::Device).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceConfig {
    /// IPv4 address of the device.
    pub device_ip: Ipv4Addr,
    /// UDP port the device listens on.
    pub device_port: u16,
    /// Send and receive timeout applied to each exchange.
    pub timeout_secs: u64,
    /// Emit an extra full-payload log line per command.
    pub debug: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            device_ip: DEFAULT_DEVICE_IP,
            device_port: DEFAULT_PORT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            debug: false,
        }
    }
}

impl DeviceConfig {
    /// Settings for a device at `ip` with default port and timeout.
    pub fn new(ip: Ipv4Addr) -> Self {
        DeviceConfig {
            device_ip: ip,
            ..Self::default()
        }
    }

    /// The endpoint commands are sent to.
    pub fn endpoint(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.device_ip, self.device_port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = DeviceConfig::default();
        assert_eq!(config.device_ip, Ipv4Addr::new(192, 168, 1, 100));
        assert_eq!(config.device_port, 4003);
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.debug);
    }

    #[test]
    fn test_deserialize_partial_settings() {
        let config: DeviceConfig =
            serde_json::from_value(json!({"deviceIp": "10.0.0.9", "debug": true})).unwrap();
        assert_eq!(config.device_ip, Ipv4Addr::new(10, 0, 0, 9));
        assert_eq!(config.device_port, DEFAULT_PORT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.debug);
    }

    #[test]
    fn test_endpoint() {
        let config = DeviceConfig::new(Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(config.endpoint().to_string(), "192.168.1.42:4003");
    }
}
