use std::time::Duration;

pub const DEFAULT_PING_INTERVAL: Duration = Duration::from_secs(25);
pub const DEFAULT_PONG_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_BATCH_PERIOD: Duration = Duration::from_millis(250);

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// WebSocket URL of the SFU signaling endpoint.
    pub connect_url: String,
    pub ping_interval: Duration,
    /// Measured from the most recent ping.
    pub pong_timeout: Duration,
    /// How long decoded events are held before being dispatched together.
    pub batch_period: Duration,
}

impl ClientConfig {
    pub fn new(connect_url: impl Into<String>) -> Self {
        Self {
            connect_url: connect_url.into(),
            ..Default::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_url: String::new(),
            ping_interval: DEFAULT_PING_INTERVAL,
            pong_timeout: DEFAULT_PONG_TIMEOUT,
            batch_period: DEFAULT_BATCH_PERIOD,
        }
    }
}
