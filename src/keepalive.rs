use crate::types::state::ConnectionState;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Requests the ping controller makes of its owner. The controller itself
/// never touches the socket.
#[derive(Debug, Clone, PartialEq)]
pub enum LivenessSignal {
    SendPing { call_info: HashMap<String, String> },
    NoPongReceived,
}

#[derive(Default)]
struct PingState {
    call_info: HashMap<String, String>,
    last_ping_sent: Option<Instant>,
    awaiting_pong: bool,
    /// Present while pinging is enabled for the current `Connected` period.
    cancel: Option<CancellationToken>,
}

impl PingState {
    fn pong_deadline(&self, pong_timeout: Duration) -> Option<Instant> {
        match (self.awaiting_pong, self.last_ping_sent) {
            (true, Some(sent)) => Some(sent + pong_timeout),
            _ => None,
        }
    }
}

/// Sends a health-check ping every `ping_interval` while connected and
/// reports when one goes unanswered for `pong_timeout`.
pub struct PingController {
    ping_interval: Duration,
    pong_timeout: Duration,
    signals: mpsc::UnboundedSender<LivenessSignal>,
    state: Arc<Mutex<PingState>>,
}

impl PingController {
    pub fn new(
        ping_interval: Duration,
        pong_timeout: Duration,
        signals: mpsc::UnboundedSender<LivenessSignal>,
    ) -> Self {
        Self {
            ping_interval,
            pong_timeout,
            signals,
            state: Arc::new(Mutex::new(PingState::default())),
        }
    }

    /// Starts pinging on entering `Connected` and stops on any other state.
    /// Must be called from within a Tokio runtime.
    pub fn connection_state_did_change(&self, connection_state: &ConnectionState) {
        let mut state = self.state.lock().expect("Mutex should not be poisoned");

        if !connection_state.is_connected() {
            if let Some(cancel) = state.cancel.take() {
                debug!(target: "Client/Ping", "Stopping ping loop");
                cancel.cancel();
            }
            state.awaiting_pong = false;
            return;
        }

        if state.cancel.is_some() {
            return;
        }
        debug!(target: "Client/Ping", "Starting ping loop every {:?}", self.ping_interval);
        let cancel = CancellationToken::new();
        state.cancel = Some(cancel.clone());
        state.awaiting_pong = false;
        tokio::spawn(ping_loop(
            self.state.clone(),
            cancel,
            self.signals.clone(),
            self.ping_interval,
            self.pong_timeout,
        ));
    }

    pub fn pong_received(&self) {
        let mut state = self.state.lock().expect("Mutex should not be poisoned");
        if state.awaiting_pong {
            debug!(target: "Client/Ping", "Pong received");
        }
        state.awaiting_pong = false;
    }

    pub fn set_call_info(&self, call_info: HashMap<String, String>) {
        self.state
            .lock()
            .expect("Mutex should not be poisoned")
            .call_info = call_info;
    }

    pub fn last_ping_sent(&self) -> Option<Instant> {
        self.state
            .lock()
            .expect("Mutex should not be poisoned")
            .last_ping_sent
    }
}

impl Drop for PingController {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            if let Some(cancel) = state.cancel.take() {
                cancel.cancel();
            }
        }
    }
}

async fn ping_loop(
    state: Arc<Mutex<PingState>>,
    cancel: CancellationToken,
    signals: mpsc::UnboundedSender<LivenessSignal>,
    ping_interval: Duration,
    pong_timeout: Duration,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + ping_interval, ping_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let deadline = state
            .lock()
            .expect("Mutex should not be poisoned")
            .pong_deadline(pong_timeout);

        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = ticker.tick() => {
                let call_info = {
                    let mut state = state.lock().expect("Mutex should not be poisoned");
                    if state.awaiting_pong {
                        debug!(target: "Client/Ping", "Previous ping still unanswered, skipping");
                        continue;
                    }
                    state.awaiting_pong = true;
                    state.last_ping_sent = Some(Instant::now());
                    state.call_info.clone()
                };
                debug!(target: "Client/Ping", "Sending ping");
                if signals.send(LivenessSignal::SendPing { call_info }).is_err() {
                    return;
                }
            }
            _ = sleep_until_deadline(deadline) => {
                let timed_out = state
                    .lock()
                    .expect("Mutex should not be poisoned")
                    .pong_deadline(pong_timeout)
                    .is_some_and(|d| d <= Instant::now());
                if timed_out {
                    warn!(target: "Client/Ping", "No pong received within {pong_timeout:?}");
                    let _ = signals.send(LivenessSignal::NoPongReceived);
                    // Stays disabled until the next `Connected` transition.
                    return;
                }
            }
        }
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::sfu::HealthCheckResponse;
    use crate::types::state::DisconnectionSource;

    fn connected() -> ConnectionState {
        ConnectionState::Connected {
            health_check: HealthCheckResponse::default(),
        }
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<LivenessSignal>) -> Vec<LivenessSignal> {
        let mut out = Vec::new();
        while let Ok(signal) = rx.try_recv() {
            out.push(signal);
        }
        out
    }

    fn is_ping(signal: &LivenessSignal) -> bool {
        matches!(signal, LivenessSignal::SendPing { .. })
    }

    #[tokio::test(start_paused = true)]
    async fn unanswered_ping_reports_no_pong_exactly_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let controller = PingController::new(Duration::from_secs(25), Duration::from_secs(3), tx);
        controller.connection_state_did_change(&connected());

        tokio::time::sleep(Duration::from_secs(24)).await;
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_secs(5)).await;
        let signals = drain(&mut rx);
        assert_eq!(signals.len(), 2);
        assert!(is_ping(&signals[0]));
        assert_eq!(signals[1], LivenessSignal::NoPongReceived);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn answered_pings_keep_going() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let controller = PingController::new(Duration::from_secs(25), Duration::from_secs(3), tx);
        controller.connection_state_did_change(&connected());

        for _ in 0..3 {
            let signal = rx.recv().await.unwrap();
            assert!(is_ping(&signal));
            tokio::time::sleep(Duration::from_secs(1)).await;
            controller.pong_received();
        }

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(drain(&mut rx).iter().all(is_ping));
    }

    #[tokio::test(start_paused = true)]
    async fn no_new_ping_while_pong_is_outstanding() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let controller = PingController::new(Duration::from_secs(1), Duration::from_secs(5), tx);
        controller.connection_state_did_change(&connected());

        tokio::time::sleep(Duration::from_millis(5500)).await;
        let signals = drain(&mut rx);
        assert_eq!(signals.len(), 1);
        assert!(is_ping(&signals[0]));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(drain(&mut rx), vec![LivenessSignal::NoPongReceived]);
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_connected_cancels_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let controller = PingController::new(Duration::from_secs(25), Duration::from_secs(3), tx);
        controller.connection_state_did_change(&connected());

        let ping = rx.recv().await.unwrap();
        assert!(is_ping(&ping));
        controller.connection_state_did_change(&ConnectionState::Disconnecting {
            source: DisconnectionSource::UserInitiated,
        });

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn pings_carry_call_info() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let controller = PingController::new(Duration::from_secs(25), Duration::from_secs(3), tx);
        let info = HashMap::from([("call_cid".to_string(), "default:1".to_string())]);
        controller.set_call_info(info.clone());
        controller.connection_state_did_change(&connected());

        let ping = rx.recv().await.unwrap();
        assert_eq!(ping, LivenessSignal::SendPing { call_info: info });
        assert!(controller.last_ping_sent().is_some());
    }
}
