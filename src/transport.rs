pub use sfu_core::net::{Transport, TransportEvent, TransportFactory};
pub use sfu_tokio_transport::TokioWebSocketTransportFactory;
