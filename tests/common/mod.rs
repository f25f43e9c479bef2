#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use prost::Message;
use sfu_signal::http::{HttpClient, HttpRequest, HttpResponse};
use sfu_signal::proto::sfu;
use sfu_signal::transport::{Transport, TransportEvent, TransportFactory};
use sfu_signal::types::events::ProtocolEvent;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A socket whose inbound side is driven by the test.
pub struct ScriptedSocket {
    sent: Mutex<Vec<Vec<u8>>>,
    events: mpsc::Sender<TransportEvent>,
}

impl ScriptedSocket {
    pub fn sent_requests(&self) -> Vec<sfu::SfuRequest> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|frame| sfu::SfuRequest::decode(frame.as_slice()).unwrap())
            .collect()
    }

    pub async fn push(&self, data: Bytes) {
        self.events
            .send(TransportEvent::DataReceived(data))
            .await
            .unwrap();
    }

    pub async fn close(&self, reason: Option<&str>) {
        let _ = self
            .events
            .send(TransportEvent::Disconnected(reason.map(str::to_string)))
            .await;
    }
}

#[async_trait]
impl Transport for ScriptedSocket {
    async fn send(&self, data: &[u8]) -> Result<(), anyhow::Error> {
        self.sent.lock().unwrap().push(data.to_vec());
        Ok(())
    }

    async fn disconnect(&self) {}
}

#[derive(Default)]
pub struct ScriptedFactory {
    sockets: Mutex<Vec<Arc<ScriptedSocket>>>,
}

impl ScriptedFactory {
    pub fn socket(&self, index: usize) -> Arc<ScriptedSocket> {
        self.sockets.lock().unwrap()[index].clone()
    }

    pub fn dialed(&self) -> usize {
        self.sockets.lock().unwrap().len()
    }
}

#[async_trait]
impl TransportFactory for ScriptedFactory {
    async fn create_transport(
        &self,
        _url: &str,
    ) -> Result<(Arc<dyn Transport>, mpsc::Receiver<TransportEvent>), anyhow::Error> {
        let (tx, rx) = mpsc::channel(64);
        tx.send(TransportEvent::Connected).await?;
        let socket = Arc::new(ScriptedSocket {
            sent: Mutex::new(Vec::new()),
            events: tx,
        });
        self.sockets.lock().unwrap().push(socket.clone());
        Ok((socket, rx))
    }
}

/// Serves canned protobuf bodies keyed by RPC method name.
#[derive(Default)]
pub struct FixtureHttpClient {
    fixtures: Mutex<Vec<(String, u16, Vec<u8>)>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FixtureHttpClient {
    pub fn serve(&self, method: &str, status: u16, body: Vec<u8>) {
        self.fixtures
            .lock()
            .unwrap()
            .push((format!("/{method}?"), status, body));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for FixtureHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, anyhow::Error> {
        let fixture = self
            .fixtures
            .lock()
            .unwrap()
            .iter()
            .find(|(path, _, _)| request.url.contains(path.as_str()))
            .map(|(_, status, body)| (*status, body.clone()));
        self.requests.lock().unwrap().push(request);
        let (status_code, body) =
            fixture.ok_or_else(|| anyhow::anyhow!("no fixture for request"))?;
        Ok(HttpResponse { status_code, body })
    }
}

pub fn frame(event: ProtocolEvent) -> Bytes {
    Bytes::from(event.to_sfu_event().encode_to_vec())
}

pub fn health_check(session_id: &str) -> Bytes {
    frame(ProtocolEvent::HealthCheck(sfu::HealthCheckResponse {
        session_id: session_id.to_string(),
        participant_count: 1,
    }))
}

pub fn participant(user_id: &str, session_id: &str) -> sfu::Participant {
    sfu::Participant {
        user_id: user_id.to_string(),
        session_id: session_id.to_string(),
        ..Default::default()
    }
}
