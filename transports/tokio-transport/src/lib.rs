//! Tokio-based WebSocket transport for the SFU signaling socket.
//!
//! This crate provides a concrete implementation of the Transport trait
//! using tokio-tungstenite.

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info, trace, warn};
use sfu_core::net::{Transport, TransportEvent, TransportFactory};
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

type RawWs = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<RawWs, Message>;
type WsStream = SplitStream<RawWs>;

/// Tokio-based WebSocket transport
pub struct TokioWebSocketTransport {
    ws_sink: Mutex<Option<WsSink>>,
    // The read half only finishes once the peer answers our close frame.
    read_pump: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl TokioWebSocketTransport {
    fn new(sink: WsSink, read_pump: JoinHandle<()>) -> Self {
        Self {
            ws_sink: Mutex::new(Some(sink)),
            read_pump: std::sync::Mutex::new(Some(read_pump)),
        }
    }

    fn stop_read_pump(&self) {
        if let Some(pump) = self
            .read_pump
            .lock()
            .expect("Mutex should not be poisoned")
            .take()
        {
            pump.abort();
        }
    }
}

impl Drop for TokioWebSocketTransport {
    fn drop(&mut self) {
        self.stop_read_pump();
    }
}

#[async_trait]
impl Transport for TokioWebSocketTransport {
    async fn send(&self, data: &[u8]) -> Result<(), anyhow::Error> {
        let mut sink_guard = self.ws_sink.lock().await;
        let sink = sink_guard
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("Socket is closed"))?;

        debug!(target: "Client/Socket", "--> Sending message: {} bytes", data.len());
        sink.send(Message::binary(data.to_vec()))
            .await
            .map_err(|e| anyhow::anyhow!("WebSocket send error: {}", e))?;
        Ok(())
    }

    async fn disconnect(&self) {
        if let Some(mut sink) = self.ws_sink.lock().await.take() {
            if let Err(e) = sink.send(Message::Close(None)).await {
                debug!(target: "Client/Socket", "Close frame not delivered: {e}");
            }
            let _ = sink.close().await;
        }
        self.stop_read_pump();
    }
}

/// Factory for creating Tokio WebSocket transports
#[derive(Debug, Default)]
pub struct TokioWebSocketTransportFactory;

impl TokioWebSocketTransportFactory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TransportFactory for TokioWebSocketTransportFactory {
    async fn create_transport(
        &self,
        url: &str,
    ) -> Result<(Arc<dyn Transport>, mpsc::Receiver<TransportEvent>), anyhow::Error> {
        info!(target: "Client/Socket", "Dialing {url}");
        let (client, _response) = tokio_tungstenite::connect_async(url)
            .await
            .map_err(|e| anyhow::anyhow!("WebSocket connect failed: {}", e))?;

        let (sink, stream) = client.split();
        let (event_tx, event_rx) = mpsc::channel(100);

        // Queue Connected before the pump can produce anything.
        let _ = event_tx.send(TransportEvent::Connected).await;
        let pump = tokio::spawn(read_pump(stream, event_tx));
        let transport = Arc::new(TokioWebSocketTransport::new(sink, pump));

        Ok((transport, event_rx))
    }
}

#[derive(Debug, PartialEq)]
enum Inbound {
    Data(Bytes),
    Closed(Option<String>),
    Ignore,
}

fn classify(msg: Message) -> Inbound {
    match msg {
        Message::Binary(data) => Inbound::Data(data),
        Message::Text(text) => Inbound::Data(Bytes::copy_from_slice(text.as_bytes())),
        Message::Close(Some(frame)) if frame.code != CloseCode::Normal => Inbound::Closed(Some(
            format!("closed with code {}: {}", u16::from(frame.code), frame.reason.as_str()),
        )),
        Message::Close(_) => Inbound::Closed(None),
        Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => Inbound::Ignore,
    }
}

async fn read_pump(mut stream: WsStream, event_tx: mpsc::Sender<TransportEvent>) {
    let reason = loop {
        match stream.next().await {
            Some(Ok(msg)) => match classify(msg) {
                Inbound::Data(data) => {
                    trace!(target: "Client/Socket", "<-- Received message: {} bytes", data.len());
                    if event_tx
                        .send(TransportEvent::DataReceived(data))
                        .await
                        .is_err()
                    {
                        warn!(target: "Client/Socket", "Event receiver dropped, closing read pump");
                        return;
                    }
                }
                Inbound::Closed(reason) => {
                    trace!(target: "Client/Socket", "Received close frame");
                    break reason;
                }
                Inbound::Ignore => {}
            },
            Some(Err(e)) => {
                error!(target: "Client/Socket", "Error reading from websocket: {e}");
                break Some(e.to_string());
            }
            None => {
                trace!(target: "Client/Socket", "Websocket stream ended");
                break None;
            }
        }
    };

    let _ = event_tx.send(TransportEvent::Disconnected(reason)).await;
}
