use crate::types::events::ProtocolEvent;
use prost::Message;
use sfu_proto::sfu::SfuEvent;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// Well-formed message whose payload is not in the event catalogue.
    #[error("unsupported event type")]
    Unsupported,
    #[error("malformed event: {0}")]
    Malformed(#[from] prost::DecodeError),
}

/// Turns raw socket messages into protocol events.
pub trait EventDecoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<ProtocolEvent, DecodeError>;
}

/// Decoder for the protobuf `SfuEvent` envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct SfuEventDecoder;

impl EventDecoder for SfuEventDecoder {
    fn decode(&self, data: &[u8]) -> Result<ProtocolEvent, DecodeError> {
        let envelope = SfuEvent::decode(data)?;
        envelope
            .event_payload
            .map(ProtocolEvent::from)
            .ok_or(DecodeError::Unsupported)
    }
}
