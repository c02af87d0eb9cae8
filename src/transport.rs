//! UDP datagram exchange with Govee devices.

use std::net::SocketAddrV4;
use std::time::Duration;

use log::{debug, error};
use tokio::net::UdpSocket;
use tokio::time::timeout;

use crate::command::Command;
use crate::errors::Error;
use crate::result::CommandResult;

/// Govee replies fit in a single datagram.
const RECV_BUFFER_SIZE: usize = 1024;

/// Send a command datagram to `target` and wait for at most one reply.
///
/// Both the send and the single receive are bounded by `wait`. A missing
/// reply is not a failure: the result is `succeeded` with an empty
/// response. Only socket creation and transmit problems fail the exchange.
pub(crate) async fn send(target: SocketAddrV4, command: &Command, wait: Duration) -> CommandResult {
    debug!("sending {} command to {}", command.name(), target);

    match exchange(target, command, wait).await {
        Ok((bytes_sent, response)) => {
            match &response {
                Some(reply) => debug!("{} answered {} with: {}", target, command.name(), reply),
                None => debug!("{} gave no reply to {}", target, command.name()),
            }
            CommandResult::sent(bytes_sent, response)
        }
        Err(e) => {
            error!("failed to send {} command to {}: {}", command.name(), target, e);
            CommandResult::failed(&e)
        }
    }
}

/// One open-send-receive cycle. The socket is dropped on every exit path,
/// which releases it exactly once.
async fn exchange(
    target: SocketAddrV4,
    command: &Command,
    wait: Duration,
) -> Result<(usize, Option<String>), Error> {
    let text = command.to_text()?;

    let socket = UdpSocket::bind("0.0.0.0:0")
        .await
        .map_err(|e| Error::socket("bind", e))?;

    let bytes_sent = timeout(wait, socket.send_to(text.as_bytes(), target))
        .await
        .map_err(|_| {
            Error::socket(
                "send",
                std::io::Error::new(std::io::ErrorKind::TimedOut, "send timeout"),
            )
        })?
        .map_err(|e| Error::socket("send", e))?;

    // Best-effort acknowledgement read. Timeouts and receive errors both
    // mean "no reply", never a failed exchange.
    let mut buffer = [0u8; RECV_BUFFER_SIZE];
    let response = match timeout(wait, socket.recv_from(&mut buffer)).await {
        Ok(Ok((received, _))) if received > 0 => {
            Some(String::from_utf8_lossy(&buffer[..received]).into_owned())
        }
        _ => None,
    };

    Ok((bytes_sent, response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PowerMode;
    use std::net::{Ipv4Addr, SocketAddr};

    async fn fake_device(reply: &'static [u8]) -> SocketAddrV4 {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = match socket.local_addr().unwrap() {
            SocketAddr::V4(v4) => v4,
            SocketAddr::V6(_) => unreachable!(),
        };

        tokio::spawn(async move {
            let mut buffer = [0u8; 1024];
            if let Ok((_, from)) = socket.recv_from(&mut buffer).await {
                let _ = socket.send_to(reply, from).await;
            }
        });

        addr
    }

    #[tokio::test]
    async fn test_reply_is_captured() {
        let target = fake_device(br#"{"msg":{"cmd":"turn","data":{}}}"#).await;
        let command = Command::power(PowerMode::On);

        let result = send(target, &command, Duration::from_secs(1)).await;

        assert!(result.succeeded);
        assert!(result.bytes_sent > 0);
        assert_eq!(
            result.response.as_deref(),
            Some(r#"{"msg":{"cmd":"turn","data":{}}}"#)
        );
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_no_reply_is_success() {
        // Bind a socket that never answers so the receive must time out.
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let target = match silent.local_addr().unwrap() {
            SocketAddr::V4(v4) => v4,
            SocketAddr::V6(_) => unreachable!(),
        };
        let command = Command::device_status();

        let result = send(target, &command, Duration::from_millis(200)).await;

        assert!(result.succeeded);
        assert!(result.bytes_sent > 0);
        assert!(result.response.is_none());
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_transmit_failure_is_reported() {
        // Port 0 is not a valid destination, so the transmit itself fails.
        let target = SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0);
        let command = Command::device_status();

        let result = send(target, &command, Duration::from_millis(200)).await;

        assert!(!result.succeeded);
        assert_eq!(result.bytes_sent, 0);
        assert!(result.response.is_none());
        assert!(result.error.unwrap().contains("send"));
    }
}
