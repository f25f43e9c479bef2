use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use prost::Message;
use tokio::sync::{mpsc, watch};

use crate::client::ConnectionStateDelegate;
use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::notification::EventHandler;
use crate::proto::sfu;
use crate::types::events::ProtocolEvent;
use crate::types::state::ConnectionState;

/// Answers every request with a fixed response and remembers what it was asked.
#[derive(Debug, Default)]
pub struct MockHttpClient {
    status_code: u16,
    body: Vec<u8>,
    delay: Option<Duration>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpClient {
    pub fn with_response(status_code: u16, body: Vec<u8>) -> Self {
        Self {
            status_code,
            body,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl HttpClient for MockHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, anyhow::Error> {
        self.requests.lock().unwrap().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(HttpResponse {
            status_code: self.status_code,
            body: self.body.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FailingMockHttpClient;

#[async_trait::async_trait]
impl HttpClient for FailingMockHttpClient {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, anyhow::Error> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

#[derive(Default)]
pub struct RecordingHandler {
    events: Mutex<Vec<ProtocolEvent>>,
}

impl RecordingHandler {
    pub fn events(&self) -> Vec<ProtocolEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventHandler for RecordingHandler {
    fn handle_event(&self, event: &ProtocolEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

pub struct RecordingDelegate {
    tx: mpsc::UnboundedSender<ConnectionState>,
    rx: tokio::sync::Mutex<mpsc::UnboundedReceiver<ConnectionState>>,
}

impl Default for RecordingDelegate {
    fn default() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: tokio::sync::Mutex::new(rx),
        }
    }
}

impl RecordingDelegate {
    /// Waits for the next `count` state changes.
    pub async fn wait_for(&self, count: usize) -> Vec<ConnectionState> {
        let mut rx = self.rx.lock().await;
        let mut states = Vec::with_capacity(count);
        for _ in 0..count {
            let state = tokio::time::timeout(Duration::from_secs(5), rx.recv())
                .await
                .expect("timed out waiting for a state change")
                .expect("delegate channel closed");
            states.push(state);
        }
        states
    }
}

impl ConnectionStateDelegate for RecordingDelegate {
    fn connection_state_did_change(&self, state: &ConnectionState) {
        let _ = self.tx.send(state.clone());
    }
}

pub async fn wait_for_state(
    states: &mut watch::Receiver<ConnectionState>,
    predicate: impl FnMut(&ConnectionState) -> bool,
) -> ConnectionState {
    tokio::time::timeout(Duration::from_secs(60), states.wait_for(predicate))
        .await
        .expect("timed out waiting for connection state")
        .expect("client dropped")
        .clone()
}

pub fn encode_event(event: ProtocolEvent) -> Bytes {
    Bytes::from(event.to_sfu_event().encode_to_vec())
}

pub fn health_check(session_id: &str, participant_count: u32) -> Bytes {
    encode_event(ProtocolEvent::HealthCheck(sfu::HealthCheckResponse {
        session_id: session_id.to_string(),
        participant_count,
    }))
}
