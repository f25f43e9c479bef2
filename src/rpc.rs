use crate::credentials::Credentials;
use crate::http::{HttpClient, HttpRequest};
use crate::proto::sfu;
use log::{debug, warn};
use prost::Message;
use std::sync::Arc;
use thiserror::Error;

const PATH_PREFIX: &str = "/stream.video.sfu.SignalServer/";

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("transport error: {0}")]
    Transport(anyhow::Error),
    #[error("not authorized (status {status})")]
    Auth { status: u16 },
    #[error("unexpected status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] prost::DecodeError),
}

impl RpcError {
    /// The request reached the server but the exchange itself was invalid.
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            RpcError::Status { .. } | RpcError::Decode(_) | RpcError::Auth { .. }
        )
    }
}

/// Unary protobuf client for the SFU's `SignalServer` service.
pub struct SignalServer {
    http_client: Arc<dyn HttpClient>,
    hostname: String,
    credentials: Arc<Credentials>,
}

impl SignalServer {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        hostname: impl Into<String>,
        credentials: Arc<Credentials>,
    ) -> Self {
        let hostname = hostname.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            hostname,
            credentials,
        }
    }

    /// Rotates the user token. Calls already in flight keep the old one.
    pub fn update(&self, user_token: impl Into<String>) {
        self.credentials.update_token(user_token);
    }

    pub async fn join(&self, request: sfu::JoinRequest) -> Result<sfu::JoinResponse, RpcError> {
        self.call("Join", &request).await
    }

    pub async fn set_publisher(
        &self,
        request: sfu::SetPublisherRequest,
    ) -> Result<sfu::SetPublisherResponse, RpcError> {
        self.call("SetPublisher", &request).await
    }

    pub async fn send_answer(
        &self,
        request: sfu::SendAnswerRequest,
    ) -> Result<sfu::SendAnswerResponse, RpcError> {
        self.call("SendAnswer", &request).await
    }

    pub async fn send_ice_candidate(
        &self,
        request: sfu::IceCandidateRequest,
    ) -> Result<sfu::IceCandidateResponse, RpcError> {
        self.call("SendIceCandidate", &request).await
    }

    pub async fn update_subscriptions(
        &self,
        request: sfu::UpdateSubscriptionsRequest,
    ) -> Result<sfu::UpdateSubscriptionsResponse, RpcError> {
        self.call("UpdateSubscriptions", &request).await
    }

    pub async fn update_mute_state(
        &self,
        request: sfu::UpdateMuteStateRequest,
    ) -> Result<sfu::UpdateMuteStateResponse, RpcError> {
        self.call("UpdateMuteState", &request).await
    }

    pub async fn request_video_quality(
        &self,
        request: sfu::UpdateVideoQualityRequest,
    ) -> Result<sfu::UpdateVideoQualityResponse, RpcError> {
        self.call("RequestVideoQuality", &request).await
    }

    fn url(&self, method: &str) -> String {
        format!(
            "{}{}{}?api_key={}",
            self.hostname,
            PATH_PREFIX,
            method,
            urlencoding::encode(self.credentials.api_key())
        )
    }

    async fn call<Req, Resp>(&self, method: &str, request: &Req) -> Result<Resp, RpcError>
    where
        Req: Message,
        Resp: Message + Default,
    {
        let token = self.credentials.token();
        let http_request = HttpRequest::post(self.url(method))
            .with_header("Content-Type", "application/protobuf")
            .with_header("authorization", format!("Bearer {token}"))
            .with_body(request.encode_to_vec());

        debug!(target: "Client/Rpc", "--> {method}");
        let response = self
            .http_client
            .execute(http_request)
            .await
            .map_err(RpcError::Transport)?;
        debug!(target: "Client/Rpc", "<-- {method} {}", response.status_code);

        match response.status_code {
            401 | 403 => {
                warn!(target: "Client/Rpc", "{method} rejected the user token");
                Err(RpcError::Auth {
                    status: response.status_code,
                })
            }
            code if !response.is_success() => Err(RpcError::Status {
                code,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }),
            _ => Ok(Resp::decode(response.body.as_slice())?),
        }
    }
}
