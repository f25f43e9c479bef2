// Re-export core modules so callers only need this crate
pub use sfu_core::{decoder, error, proto, requests};

pub mod types {
    pub use sfu_core::types::*;
}

pub mod batcher;
pub mod client;
pub mod config;
pub mod credentials;
pub mod http;
pub mod keepalive;
pub mod latency;
pub mod notification;
pub mod rpc;
pub mod transport;

#[cfg(test)]
pub mod test_utils;

pub use client::{ConnectionStateDelegate, WebSocketClient};
pub use config::ClientConfig;
pub use credentials::{Credentials, TokenProvider};
pub use notification::{EventFilter, EventHandler, EventNotificationCenter};
pub use rpc::{RpcError, SignalServer};
