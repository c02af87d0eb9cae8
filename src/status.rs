//! Typed view of `devStatus` replies.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::Color;

/// Device state reported by a `devStatus` query.
///
/// The transport forwards reply bytes verbatim; this is a best-effort typed
/// view over the reply shape Govee devices use:
///
/// ```json
/// {"msg":{"cmd":"devStatus","data":{"onOff":1,"brightness":100,
///   "color":{"r":255,"g":0,"b":0},"colorTemInKelvin":0}}}
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    pub on_off: u8,
    #[serde(default)]
    pub brightness: Option<u8>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub color_tem_in_kelvin: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    msg: StatusMsg,
}

#[derive(Debug, Deserialize)]
struct StatusMsg {
    data: DeviceStatus,
}

impl DeviceStatus {
    /// Parse the raw reply text of a status query.
    pub fn parse(reply: &str) -> Result<Self, Error> {
        let envelope: StatusEnvelope = serde_json::from_str(reply).map_err(Error::JsonLoad)?;
        Ok(envelope.msg.data)
    }

    /// Whether the device reports itself powered on.
    pub fn is_on(&self) -> bool {
        self.on_off == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_reply() {
        let reply = r#"{"msg":{"cmd":"devStatus","data":{"onOff":1,"brightness":80,"color":{"r":255,"g":0,"b":64},"colorTemInKelvin":0}}}"#;
        let status = DeviceStatus::parse(reply).unwrap();

        assert!(status.is_on());
        assert_eq!(status.brightness, Some(80));
        assert_eq!(status.color, Some(Color::rgb(255, 0, 64)));
        assert_eq!(status.color_tem_in_kelvin, Some(0));
    }

    #[test]
    fn test_parse_minimal_reply() {
        let status = DeviceStatus::parse(r#"{"msg":{"data":{"onOff":0}}}"#).unwrap();
        assert!(!status.is_on());
        assert_eq!(status.brightness, None);
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(matches!(
            DeviceStatus::parse("not json"),
            Err(Error::JsonLoad(_))
        ));
    }
}
