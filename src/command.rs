//! Wire command construction for the Govee LAN protocol.

use serde_json::{Value, json};

use crate::errors::Error;
use crate::types::{Brightness, Color, Kelvin, PowerMode};

/// A single command to send to a Govee device.
///
/// Devices accept JSON envelopes of the shape
/// `{"msg":{"cmd":<name>,"data":<parameters>}}`. The constructors build the
/// envelope for each supported action; [`Command::raw`] wraps a
/// caller-supplied envelope unmodified, so commands this library does not
/// model can still be sent.
///
/// # Examples
///
/// ```
/// use govee_lan_rs::{Command, PowerMode};
/// use serde_json::json;
///
/// let cmd = Command::power(PowerMode::On);
/// assert_eq!(cmd.as_json(), &json!({"msg": {"cmd": "turn", "data": {"value": 1}}}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    body: Value,
}

impl Command {
    fn envelope(cmd: &str, data: Value) -> Self {
        Command {
            body: json!({"msg": {"cmd": cmd, "data": data}}),
        }
    }

    /// Power the device on or off (`turn` command).
    pub fn power(mode: PowerMode) -> Self {
        Self::envelope("turn", json!({"value": mode.value()}))
    }

    /// Set the brightness level (`brightness` command).
    pub fn brightness(level: &Brightness) -> Self {
        Self::envelope("brightness", json!({"value": level.value()}))
    }

    /// Set a solid RGB color (`colorwc` command).
    ///
    /// The temperature field is zeroed, which tells the device to follow
    /// the RGB channels.
    pub fn color(color: &Color) -> Self {
        Self::envelope(
            "colorwc",
            json!({
                "color": {"r": color.red(), "g": color.green(), "b": color.blue()},
                "colorTemInKelvin": 0,
            }),
        )
    }

    /// Set a white color temperature (`colorwc` command).
    ///
    /// The RGB channels are zeroed so the device follows the temperature.
    pub fn color_temperature(kelvin: &Kelvin) -> Self {
        Self::envelope(
            "colorwc",
            json!({
                "color": {"r": 0, "g": 0, "b": 0},
                "colorTemInKelvin": kelvin.kelvin(),
            }),
        )
    }

    /// Query the device state (`devStatus` command).
    pub fn device_status() -> Self {
        Self::envelope("devStatus", json!({}))
    }

    /// Probe used during network scans (`scan` command).
    pub fn scan_probe() -> Self {
        Self::envelope("scan", json!({}))
    }

    /// Wrap a caller-built envelope without validation.
    pub fn raw(body: Value) -> Self {
        Command { body }
    }

    /// The command name carried in the envelope ("raw" when the body does
    /// not follow the standard shape).
    pub fn name(&self) -> &str {
        self.body
            .get("msg")
            .and_then(|m| m.get("cmd"))
            .and_then(|c| c.as_str())
            .unwrap_or("raw")
    }

    /// The full JSON body as it will appear on the wire.
    pub fn as_json(&self) -> &Value {
        &self.body
    }

    /// Serialize to the UTF-8 JSON text sent as the datagram payload.
    pub fn to_text(&self) -> Result<String, Error> {
        serde_json::to_string(&self.body).map_err(Error::JsonDump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_shapes() {
        assert_eq!(
            Command::power(PowerMode::On).as_json(),
            &json!({"msg": {"cmd": "turn", "data": {"value": 1}}})
        );
        assert_eq!(
            Command::power(PowerMode::Off).as_json(),
            &json!({"msg": {"cmd": "turn", "data": {"value": 0}}})
        );
    }

    #[test]
    fn test_brightness_shape() {
        let cmd = Command::brightness(&Brightness::clamped(80));
        assert_eq!(
            cmd.as_json(),
            &json!({"msg": {"cmd": "brightness", "data": {"value": 80}}})
        );
    }

    #[test]
    fn test_color_zeroes_temperature() {
        let cmd = Command::color(&Color::rgb(255, 128, 0));
        assert_eq!(
            cmd.as_json(),
            &json!({"msg": {"cmd": "colorwc", "data": {
                "color": {"r": 255, "g": 128, "b": 0},
                "colorTemInKelvin": 0,
            }}})
        );
    }

    #[test]
    fn test_temperature_zeroes_color() {
        let cmd = Command::color_temperature(&Kelvin::clamped(4000));
        assert_eq!(
            cmd.as_json(),
            &json!({"msg": {"cmd": "colorwc", "data": {
                "color": {"r": 0, "g": 0, "b": 0},
                "colorTemInKelvin": 4000,
            }}})
        );
    }

    #[test]
    fn test_query_shapes() {
        assert_eq!(
            Command::device_status().as_json(),
            &json!({"msg": {"cmd": "devStatus", "data": {}}})
        );
        assert_eq!(
            Command::scan_probe().as_json(),
            &json!({"msg": {"cmd": "scan", "data": {}}})
        );
    }

    #[test]
    fn test_raw_passthrough() {
        let body = json!({"msg": {"cmd": "ptReal", "data": {"command": ["qgkAFAAAAAAAAAAAAAAAAAAAAL4="]}}});
        let cmd = Command::raw(body.clone());
        assert_eq!(cmd.as_json(), &body);
        assert_eq!(cmd.name(), "ptReal");
    }

    #[test]
    fn test_raw_serialization_is_idempotent() {
        let body = json!({"anything": {"goes": [1, 2, 3]}});
        let first = Command::raw(body.clone()).to_text().unwrap();
        let second = Command::raw(body).to_text().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clamped_inputs_encode_clamped_values() {
        for (input, expected) in [(-10, 0), (0, 0), (50, 50), (100, 100), (200, 100)] {
            let cmd = Command::brightness(&Brightness::clamped(input));
            assert_eq!(cmd.as_json()["msg"]["data"]["value"], json!(expected));
        }

        let cmd = Command::color(&Color::clamped(-5, 300, 128));
        assert_eq!(
            cmd.as_json()["msg"]["data"]["color"],
            json!({"r": 0, "g": 255, "b": 128})
        );
    }
}
