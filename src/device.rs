//! Individual device control.

use std::net::Ipv4Addr;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::command::Command;
use crate::config::DeviceConfig;
use crate::errors::Error;
use crate::history::{MessageHistory, MessageType};
use crate::result::CommandResult;
use crate::status::DeviceStatus;
use crate::transport;
use crate::types::{Brightness, Color, Kelvin, PowerMode};

/// Represents a single Govee device on the local network.
///
/// A `Device` communicates with the physical light over UDP. Each device is
/// addressed by its [`DeviceConfig`] and can optionally have a
/// user-friendly name. Every operation returns a [`CommandResult`] rather
/// than an error, so transport failures stay inspectable at the call site.
///
/// # Example
///
/// ```
/// use std::net::Ipv4Addr;
/// use govee_lan_rs::{Device, DeviceConfig};
///
/// let config = DeviceConfig::new(Ipv4Addr::new(192, 168, 1, 100));
/// let device = Device::new(config, Some("Porch"));
/// assert_eq!(device.name(), Some("Porch"));
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize)]
pub struct Device {
    config: DeviceConfig,
    name: Option<String>,
    #[serde(skip)]
    history: Arc<Mutex<MessageHistory>>,
}

impl Clone for Device {
    fn clone(&self) -> Self {
        // For cloning, we create a new history mutex with a clone of the
        // history data. If the history is locked, start fresh.
        let history_clone = match self.history.try_lock() {
            Ok(guard) => guard.clone(),
            Err(_) => MessageHistory::new(),
        };
        Device {
            config: self.config.clone(),
            name: self.name.clone(),
            history: Arc::new(Mutex::new(history_clone)),
        }
    }
}

impl Device {
    pub fn new(config: DeviceConfig, name: Option<&str>) -> Self {
        Device {
            config,
            name: name.map(String::from),
            history: Arc::new(Mutex::new(MessageHistory::new())),
        }
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.config.device_ip
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub async fn history(&self) -> MessageHistory {
        self.history.lock().await.clone()
    }

    pub async fn clear_history(&self) {
        self.history.lock().await.clear();
    }

    /// Turn the device on.
    pub async fn turn_on(&self) -> CommandResult {
        self.set_power(PowerMode::On).await
    }

    /// Turn the device off.
    pub async fn turn_off(&self) -> CommandResult {
        self.set_power(PowerMode::Off).await
    }

    pub async fn set_power(&self, mode: PowerMode) -> CommandResult {
        self.dispatch(Command::power(mode)).await
    }

    /// Set brightness. Out-of-range levels are clamped into 0-100.
    pub async fn set_brightness(&self, level: i64) -> CommandResult {
        self.dispatch(Command::brightness(&Brightness::clamped(level)))
            .await
    }

    /// Set a solid RGB color. Each channel is clamped into 0-255
    /// independently.
    pub async fn set_color(&self, red: i64, green: i64, blue: i64) -> CommandResult {
        self.dispatch(Command::color(&Color::clamped(red, green, blue)))
            .await
    }

    /// Set a white color temperature. Values are clamped into 2000-9000K.
    pub async fn set_color_temp(&self, kelvin: i64) -> CommandResult {
        self.dispatch(Command::color_temperature(&Kelvin::clamped(kelvin)))
            .await
    }

    /// Query the device state. The reply, when one arrives, is forwarded
    /// verbatim in the result.
    pub async fn status(&self) -> CommandResult {
        self.dispatch(Command::device_status()).await
    }

    /// Check that the device answers at all (alias for a status query).
    pub async fn test_connection(&self) -> CommandResult {
        self.status().await
    }

    /// Send a caller-built command envelope without validation.
    ///
    /// Fails when `body` is JSON null, since there is nothing to send.
    pub async fn send_raw(&self, body: Value) -> CommandResult {
        if body.is_null() {
            return CommandResult::failed(&Error::MissingPayload);
        }
        self.dispatch(Command::raw(body)).await
    }

    /// Queries the device and parses the reply into a typed status.
    pub async fn device_state(&self) -> Result<DeviceStatus, Error> {
        let reply = self
            .status()
            .await
            .response
            .ok_or(Error::StatusUnavailable)?;
        DeviceStatus::parse(&reply)
    }

    /// Toggle power based on the reported state. Fails when the device does
    /// not answer the status query, since the current state is unknown.
    pub async fn toggle(&self) -> CommandResult {
        match self.device_state().await {
            Ok(state) if state.is_on() => self.turn_off().await,
            Ok(_) => self.turn_on().await,
            Err(e) => CommandResult::failed(&e),
        }
    }

    /// Returns diagnostics including configuration, history, and (when the
    /// device answers) its reported state.
    pub async fn diagnostics(&self) -> Value {
        let mut diag = json!({
            "ip": self.config.device_ip.to_string(),
            "port": self.config.device_port,
            "name": self.name,
        });

        // Add history summary
        let history = self.history.lock().await;
        diag["history"] = serde_json::to_value(history.summary()).unwrap_or(Value::Null);
        drop(history); // Release lock before network operations

        // Try to add current state (may fail if device is unreachable)
        if let Ok(state) = self.device_state().await {
            diag["state"] = json!({
                "on": state.is_on(),
                "brightness": state.brightness,
                "color": state.color.as_ref().map(|c| format!("{},{},{}", c.red(), c.green(), c.blue())),
                "temp": state.color_tem_in_kelvin,
            });
        }

        diag
    }

    async fn dispatch(&self, command: Command) -> CommandResult {
        self.history
            .lock()
            .await
            .record(MessageType::Send, command.name(), command.as_json());

        if self.config.debug {
            debug!(
                "full payload for {}: {}",
                self.config.endpoint(),
                command.as_json()
            );
        }

        let result = transport::send(self.config.endpoint(), &command, self.config.timeout()).await;

        let mut history = self.history.lock().await;
        match (&result.response, &result.error) {
            (Some(reply), _) => {
                let value = serde_json::from_str(reply)
                    .unwrap_or_else(|_| Value::String(reply.clone()));
                history.record(MessageType::Receive, command.name(), &value);
            }
            (None, Some(detail)) => history.record_error(detail),
            (None, None) => {}
        }

        result
    }
}
