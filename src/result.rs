//! Structured outcomes for command sends.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// The outcome of a single command send.
///
/// Operations report failures through this struct instead of returning
/// errors, so callers always get an inspectable result. A missing
/// `response` is the normal case: many devices execute commands without
/// acknowledging them.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// Whether the datagram left the socket.
    pub succeeded: bool,
    /// Number of payload bytes transmitted.
    pub bytes_sent: usize,
    /// Raw reply payload, forwarded verbatim when a device acknowledged.
    pub response: Option<String>,
    /// Human-readable failure detail when `succeeded` is false.
    pub error: Option<String>,
}

impl CommandResult {
    pub(crate) fn sent(bytes_sent: usize, response: Option<String>) -> Self {
        CommandResult {
            succeeded: true,
            bytes_sent,
            response,
            error: None,
        }
    }

    pub(crate) fn failed(error: &Error) -> Self {
        CommandResult {
            succeeded: false,
            bytes_sent: 0,
            response: None,
            error: Some(error.to_string()),
        }
    }
}
