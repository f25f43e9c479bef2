use crate::decoder::DecodeError;
use thiserror::Error;

/// Failures seen on the signaling connection. Server-side failures are carried
/// inside [`DisconnectionSource::ServerInitiated`](crate::types::state::DisconnectionSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("protocol error: {0}")]
    Protocol(String),
    /// Never fatal; the event is skipped.
    #[error("unsupported event type")]
    UnsupportedEvent,
    /// The server closed the socket before accepting the auth payload.
    #[error("authentication rejected: {0}")]
    Auth(String),
    /// No health check answered a ping in time.
    #[error("no pong received in time")]
    Timeout,
}

impl From<DecodeError> for SignalError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Unsupported => SignalError::UnsupportedEvent,
            DecodeError::Malformed(e) => SignalError::Protocol(e.to_string()),
        }
    }
}
