use crate::error::SignalError;
use sfu_proto::sfu::HealthCheckResponse;
use std::fmt;

/// Why a connection went (or is going) down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisconnectionSource {
    /// The local user asked for it.
    UserInitiated,
    /// The server closed the socket or sent something we could not handle.
    ServerInitiated { error: Option<SignalError> },
    /// The server stopped answering health-check pings.
    NoPongReceived,
    /// The host environment tore the connection down (app backgrounded, network change).
    SystemInitiated,
}

impl DisconnectionSource {
    pub fn server_error(&self) -> Option<&SignalError> {
        match self {
            DisconnectionSource::ServerInitiated { error } => error.as_ref(),
            _ => None,
        }
    }

    /// The failure behind this disconnect, if it was one. A missing pong is a
    /// [`SignalError::Timeout`].
    pub fn error(&self) -> Option<SignalError> {
        match self {
            DisconnectionSource::ServerInitiated { error } => error.clone(),
            DisconnectionSource::NoPongReceived => Some(SignalError::Timeout),
            DisconnectionSource::UserInitiated | DisconnectionSource::SystemInitiated => None,
        }
    }
}

impl fmt::Display for DisconnectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisconnectionSource::UserInitiated => write!(f, "user initiated"),
            DisconnectionSource::ServerInitiated { error: Some(e) } => {
                write!(f, "server initiated ({e})")
            }
            DisconnectionSource::ServerInitiated { error: None } => write!(f, "server initiated"),
            DisconnectionSource::NoPongReceived => write!(f, "no pong received"),
            DisconnectionSource::SystemInitiated => write!(f, "system initiated"),
        }
    }
}

/// State of the signaling socket. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    /// Nothing has been attempted yet.
    Initialized,
    /// The transport is being dialed.
    Connecting,
    /// The transport is open and the auth payload has been sent.
    Authenticating,
    /// The SFU answered with a health check; carries the latest one.
    Connected { health_check: HealthCheckResponse },
    Disconnecting { source: DisconnectionSource },
    Disconnected { source: DisconnectionSource },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    /// True while a connection attempt is in flight or established, which is
    /// when a new `connect` must be ignored.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ConnectionState::Connecting
                | ConnectionState::Authenticating
                | ConnectionState::Connected { .. }
        )
    }

    pub fn disconnection_source(&self) -> Option<&DisconnectionSource> {
        match self {
            ConnectionState::Disconnecting { source } | ConnectionState::Disconnected { source } => {
                Some(source)
            }
            _ => None,
        }
    }
}
