use serde::Serialize;
use sfu_proto::sfu::{self, sfu_event::EventPayload};

/// An event pushed by the SFU over the signaling socket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ProtocolEvent {
    HealthCheck(sfu::HealthCheckResponse),
    SubscriberOffer(sfu::SubscriberOffer),
    PublisherCandidate(sfu::IceTrickle),
    SubscriberCandidate(sfu::IceTrickle),
    MuteStateChanged(sfu::MuteStateChanged),
    ChangePublishQuality(sfu::ChangePublishQuality),
    VideoQualityChanged(sfu::VideoQualityChanged),
    ParticipantJoined(sfu::ParticipantJoined),
    ParticipantLeft(sfu::ParticipantLeft),
    DominantSpeakerChanged(sfu::DominantSpeakerChanged),
    ConnectionQualityChanged(sfu::ConnectionQualityChanged),
    AudioLevelChanged(sfu::AudioLevelChanged),
    LocalDeviceChange(sfu::LocalDeviceChange),
}

/// Discriminant of [`ProtocolEvent`], used as a subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    HealthCheck,
    SubscriberOffer,
    PublisherCandidate,
    SubscriberCandidate,
    MuteStateChanged,
    ChangePublishQuality,
    VideoQualityChanged,
    ParticipantJoined,
    ParticipantLeft,
    DominantSpeakerChanged,
    ConnectionQualityChanged,
    AudioLevelChanged,
    LocalDeviceChange,
}

impl ProtocolEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ProtocolEvent::HealthCheck(_) => EventKind::HealthCheck,
            ProtocolEvent::SubscriberOffer(_) => EventKind::SubscriberOffer,
            ProtocolEvent::PublisherCandidate(_) => EventKind::PublisherCandidate,
            ProtocolEvent::SubscriberCandidate(_) => EventKind::SubscriberCandidate,
            ProtocolEvent::MuteStateChanged(_) => EventKind::MuteStateChanged,
            ProtocolEvent::ChangePublishQuality(_) => EventKind::ChangePublishQuality,
            ProtocolEvent::VideoQualityChanged(_) => EventKind::VideoQualityChanged,
            ProtocolEvent::ParticipantJoined(_) => EventKind::ParticipantJoined,
            ProtocolEvent::ParticipantLeft(_) => EventKind::ParticipantLeft,
            ProtocolEvent::DominantSpeakerChanged(_) => EventKind::DominantSpeakerChanged,
            ProtocolEvent::ConnectionQualityChanged(_) => EventKind::ConnectionQualityChanged,
            ProtocolEvent::AudioLevelChanged(_) => EventKind::AudioLevelChanged,
            ProtocolEvent::LocalDeviceChange(_) => EventKind::LocalDeviceChange,
        }
    }

    /// The session id the SFU stamped on the event, when the event carries one.
    pub fn session_id(&self) -> Option<&str> {
        let id = match self {
            ProtocolEvent::HealthCheck(e) => &e.session_id,
            ProtocolEvent::SubscriberOffer(e) => &e.session_id,
            ProtocolEvent::PublisherCandidate(e) | ProtocolEvent::SubscriberCandidate(e) => {
                &e.session_id
            }
            ProtocolEvent::MuteStateChanged(e) => &e.session_id,
            ProtocolEvent::VideoQualityChanged(e) => &e.session_id,
            ProtocolEvent::ParticipantJoined(e) => &e.participant.as_ref()?.session_id,
            ProtocolEvent::ParticipantLeft(e) => &e.participant.as_ref()?.session_id,
            ProtocolEvent::DominantSpeakerChanged(e) => &e.session_id,
            ProtocolEvent::ChangePublishQuality(_)
            | ProtocolEvent::ConnectionQualityChanged(_)
            | ProtocolEvent::AudioLevelChanged(_)
            | ProtocolEvent::LocalDeviceChange(_) => return None,
        };
        (!id.is_empty()).then_some(id.as_str())
    }

    pub fn is_health_check(&self) -> bool {
        matches!(self, ProtocolEvent::HealthCheck(_))
    }
}

impl From<EventPayload> for ProtocolEvent {
    fn from(payload: EventPayload) -> Self {
        match payload {
            EventPayload::SubscriberOffer(e) => ProtocolEvent::SubscriberOffer(e),
            EventPayload::ConnectionQualityChanged(e) => ProtocolEvent::ConnectionQualityChanged(e),
            EventPayload::AudioLevelChanged(e) => ProtocolEvent::AudioLevelChanged(e),
            EventPayload::SubscriberCandidate(e) => ProtocolEvent::SubscriberCandidate(e),
            EventPayload::PublisherCandidate(e) => ProtocolEvent::PublisherCandidate(e),
            EventPayload::ChangePublishQuality(e) => ProtocolEvent::ChangePublishQuality(e),
            EventPayload::LocalDeviceChange(e) => ProtocolEvent::LocalDeviceChange(e),
            EventPayload::MuteStateChanged(e) => ProtocolEvent::MuteStateChanged(e),
            EventPayload::VideoQualityChanged(e) => ProtocolEvent::VideoQualityChanged(e),
            EventPayload::ParticipantJoined(e) => ProtocolEvent::ParticipantJoined(e),
            EventPayload::ParticipantLeft(e) => ProtocolEvent::ParticipantLeft(e),
            EventPayload::DominantSpeakerChanged(e) => ProtocolEvent::DominantSpeakerChanged(e),
            EventPayload::HealthCheckResponse(e) => ProtocolEvent::HealthCheck(e),
        }
    }
}

impl From<ProtocolEvent> for EventPayload {
    fn from(event: ProtocolEvent) -> Self {
        match event {
            ProtocolEvent::HealthCheck(e) => EventPayload::HealthCheckResponse(e),
            ProtocolEvent::SubscriberOffer(e) => EventPayload::SubscriberOffer(e),
            ProtocolEvent::PublisherCandidate(e) => EventPayload::PublisherCandidate(e),
            ProtocolEvent::SubscriberCandidate(e) => EventPayload::SubscriberCandidate(e),
            ProtocolEvent::MuteStateChanged(e) => EventPayload::MuteStateChanged(e),
            ProtocolEvent::ChangePublishQuality(e) => EventPayload::ChangePublishQuality(e),
            ProtocolEvent::VideoQualityChanged(e) => EventPayload::VideoQualityChanged(e),
            ProtocolEvent::ParticipantJoined(e) => EventPayload::ParticipantJoined(e),
            ProtocolEvent::ParticipantLeft(e) => EventPayload::ParticipantLeft(e),
            ProtocolEvent::DominantSpeakerChanged(e) => EventPayload::DominantSpeakerChanged(e),
            ProtocolEvent::ConnectionQualityChanged(e) => EventPayload::ConnectionQualityChanged(e),
            ProtocolEvent::AudioLevelChanged(e) => EventPayload::AudioLevelChanged(e),
            ProtocolEvent::LocalDeviceChange(e) => EventPayload::LocalDeviceChange(e),
        }
    }
}

impl ProtocolEvent {
    /// Wire form of the event, as the SFU would send it.
    pub fn to_sfu_event(&self) -> sfu::SfuEvent {
        sfu::SfuEvent {
            event_payload: Some(self.clone().into()),
        }
    }
}
