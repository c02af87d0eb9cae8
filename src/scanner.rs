//! Network discovery via brute-force UDP probing.

use std::net::{Ipv4Addr, SocketAddrV4};
use std::time::Duration;

use futures::StreamExt;
use futures::stream;
use log::debug;
use pnet::datalink;
use pnet::ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::config::DeviceConfig;
use crate::device::Device;
use crate::errors::Error;
use crate::transport;

/// Fixed per-host probe timeout.
const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// How many hosts are probed at once. Probes are independent and each owns
/// its socket, so they can overlap freely.
const PROBE_CONCURRENCY: usize = 32;

/// A device that answered a scan probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredDevice {
    /// Address the reply came from
    pub ip: Ipv4Addr,
    /// UDP port the device listens on
    pub port: u16,
    /// Raw reply payload, forwarded verbatim
    pub response: String,
}

impl DiscoveredDevice {
    /// Convert this discovered device into a controllable [`Device`].
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let result = scan_network(DEFAULT_PORT).await;
    /// for found in result.devices {
    ///     let device = found.into_device(Some("My Light"));
    /// }
    /// ```
    pub fn into_device(self, name: Option<&str>) -> Device {
        let config = DeviceConfig {
            device_ip: self.ip,
            device_port: self.port,
            ..DeviceConfig::default()
        };
        Device::new(config, name)
    }
}

/// The outcome of one scan pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub succeeded: bool,
    /// Responsive hosts in address order.
    pub devices: Vec<DiscoveredDevice>,
    pub error: Option<String>,
}

impl ScanResult {
    fn completed(devices: Vec<DiscoveredDevice>) -> Self {
        ScanResult {
            succeeded: true,
            devices,
            error: None,
        }
    }

    fn failed(error: &Error) -> Self {
        ScanResult {
            succeeded: false,
            devices: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

/// Sweep the local /24 network for devices listening on `port`.
///
/// Host suffixes 1 through 254 are each probed once with a 1 second
/// timeout; hosts that answer anything at all are reported. When the local
/// network prefix cannot be determined, the scan fails without probing.
///
/// # Examples
///
/// ```ignore
/// use govee_lan_rs::{DEFAULT_PORT, scan_network};
///
/// let result = scan_network(DEFAULT_PORT).await;
/// println!("Found {} device(s)", result.devices.len());
/// ```
pub async fn scan_network(port: u16) -> ScanResult {
    let Some(base) = local_network_base() else {
        return ScanResult::failed(&Error::NetworkRange);
    };
    scan_prefix(base, port).await
}

/// Sweep the /24 containing `network` (any address inside it) for devices
/// listening on `port`.
pub async fn scan_prefix(network: Ipv4Addr, port: u16) -> ScanResult {
    let [a, b, c, _] = network.octets();
    debug!("scanning {}.{}.{}.1-254 on port {}", a, b, c, port);

    let targets = (1..=254u8).map(move |suffix| SocketAddrV4::new(Ipv4Addr::new(a, b, c, suffix), port));
    let devices = scan_hosts(targets).await;

    debug!("network scan completed, found {} device(s)", devices.len());
    ScanResult::completed(devices)
}

/// Probe an explicit target list, collecting responsive hosts in address
/// order. Probes run through a bounded concurrent fan-out.
async fn scan_hosts(targets: impl Iterator<Item = SocketAddrV4>) -> Vec<DiscoveredDevice> {
    let mut devices: Vec<DiscoveredDevice> = stream::iter(targets)
        .map(probe)
        .buffer_unordered(PROBE_CONCURRENCY)
        .filter_map(|found| async move { found })
        .collect()
        .await;

    devices.sort_by_key(|device| device.ip);
    devices
}

/// Best-effort probe: any reply within the timeout classifies the host as
/// a device.
async fn probe(target: SocketAddrV4) -> Option<DiscoveredDevice> {
    let result = transport::send(target, &Command::scan_probe(), PROBE_TIMEOUT).await;
    let response = result.response?;

    debug!("found potential device at {}", target.ip());
    Some(DiscoveredDevice {
        ip: *target.ip(),
        port: target.port(),
        response,
    })
}

/// The first private IPv4 address on an active interface, used as the scan
/// base. None when no suitable interface exists.
fn local_network_base() -> Option<Ipv4Addr> {
    datalink::interfaces()
        .iter()
        .filter(|iface| iface.is_up() && !iface.is_loopback())
        .flat_map(|iface| iface.ips.iter())
        .find_map(|net| match net {
            IpNetwork::V4(v4) if v4.ip().is_private() => Some(v4.ip()),
            _ => None,
        })
}
