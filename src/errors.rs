/// All error types that can occur when talking to Govee devices.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize a command to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// A network socket operation failed while communicating with a device.
    #[error("socket {action} error: {err:?}")]
    Socket { action: String, err: std::io::Error },

    /// The local IPv4 network prefix could not be determined.
    #[error("network range undeterminable")]
    NetworkRange,

    /// A raw command was sent without a payload.
    #[error("raw command payload required")]
    MissingPayload,

    /// A status reply arrived but did not contain a parseable device state.
    #[error("device status unavailable")]
    StatusUnavailable,
}

impl Error {
    /// Create a new socket error
    pub fn socket(action: &str, err: std::io::Error) -> Self {
        Error::Socket {
            action: action.to_string(),
            err,
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
