//! Encoders for the messages the client writes to the signaling socket.

use crate::types::user::UserInfo;
use prost::Message;
use sfu_proto::sfu::{
    AuthPayload, CreateUserRequest, HealthCheckRequest, SfuRequest, sfu_request::RequestPayload,
};
use std::collections::HashMap;

/// First message on a freshly opened socket.
pub fn auth_request(token: &str, user: &UserInfo) -> Vec<u8> {
    let payload = AuthPayload {
        token: token.to_string(),
        user: Some(CreateUserRequest {
            id: user.id.clone(),
            name: user.display_name().to_string(),
        }),
    };
    wrap(RequestPayload::AuthPayload(payload))
}

pub fn health_check_request(session_id: &str, call_info: &HashMap<String, String>) -> Vec<u8> {
    wrap(RequestPayload::HealthCheckRequest(HealthCheckRequest {
        session_id: session_id.to_string(),
        call_info: call_info.clone(),
    }))
}

fn wrap(payload: RequestPayload) -> Vec<u8> {
    SfuRequest {
        request_payload: Some(payload),
    }
    .encode_to_vec()
}
