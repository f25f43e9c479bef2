use crate::batcher::EventBatcher;
use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::decoder::{EventDecoder, SfuEventDecoder};
use crate::error::SignalError;
use crate::keepalive::{LivenessSignal, PingController};
use crate::notification::EventNotificationCenter;
use crate::requests;
use crate::transport::{Transport, TransportEvent, TransportFactory};
use crate::types::events::ProtocolEvent;
use crate::types::state::{ConnectionState, DisconnectionSource};
use bytes::Bytes;
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Told about every connection state change, in the order they happen.
pub trait ConnectionStateDelegate: Send + Sync {
    fn connection_state_did_change(&self, state: &ConnectionState);
}

enum EngineCommand {
    Connect { url: String },
    Disconnect { done: oneshot::Sender<()> },
}

type DialResult = Result<(Arc<dyn Transport>, mpsc::Receiver<TransportEvent>), anyhow::Error>;

struct DialOutcome {
    generation: u64,
    url: String,
    result: DialResult,
}

struct PendingDial {
    generation: u64,
    task: JoinHandle<()>,
}

struct Socket {
    transport: Arc<dyn Transport>,
    events: mpsc::Receiver<TransportEvent>,
}

/// The socket and the dial in flight. Only the engine task touches it.
struct Engine {
    socket: Option<Socket>,
    dial: Option<PendingDial>,
    next_generation: u64,
    dial_results: mpsc::UnboundedSender<DialOutcome>,
}

impl Engine {
    fn new(dial_results: mpsc::UnboundedSender<DialOutcome>) -> Self {
        Self {
            socket: None,
            dial: None,
            next_generation: 0,
            dial_results,
        }
    }

    /// Dials on its own task so commands keep flowing while the handshake is pending.
    fn dial(&mut self, factory: Arc<dyn TransportFactory>, url: String) {
        let generation = self.next_generation;
        self.next_generation += 1;
        let results = self.dial_results.clone();
        let task = tokio::spawn(async move {
            let result = factory.create_transport(&url).await;
            let _ = results.send(DialOutcome {
                generation,
                url,
                result,
            });
        });
        self.dial = Some(PendingDial { generation, task });
    }

    fn is_current(&self, generation: u64) -> bool {
        self.dial
            .as_ref()
            .is_some_and(|dial| dial.generation == generation)
    }

    /// Abandons any dial in flight and closes the open socket, if any.
    async fn close(&mut self) {
        if let Some(dial) = self.dial.take() {
            debug!(target: "Client/Socket", "Abandoning dial in flight");
            dial.task.abort();
        }
        if let Some(socket) = self.socket.take() {
            socket.transport.disconnect().await;
        }
    }
}

/// Owns the signaling socket and drives it through
/// `Initialized -> Connecting -> Authenticating -> Connected -> Disconnecting -> Disconnected`.
///
/// All socket work is serialized on one engine task. State changes may be
/// requested from any task and are applied atomically.
pub struct WebSocketClient {
    config: ClientConfig,
    credentials: Arc<Credentials>,
    transport_factory: Arc<dyn TransportFactory>,
    decoder: Arc<dyn EventDecoder>,
    notification_center: Arc<EventNotificationCenter>,
    batcher: EventBatcher,
    ping_controller: PingController,

    state: watch::Sender<ConnectionState>,
    delegate: Arc<RwLock<Option<Arc<dyn ConnectionStateDelegate>>>>,
    delegate_tx: mpsc::UnboundedSender<ConnectionState>,
    commands: mpsc::UnboundedSender<EngineCommand>,
    shutdown: CancellationToken,
}

impl WebSocketClient {
    /// Must be called from within a Tokio runtime; the engine task is spawned here.
    pub fn new(
        config: ClientConfig,
        credentials: Arc<Credentials>,
        transport_factory: Arc<dyn TransportFactory>,
        notification_center: Arc<EventNotificationCenter>,
    ) -> Arc<Self> {
        Self::with_decoder(
            config,
            credentials,
            transport_factory,
            notification_center,
            Arc::new(SfuEventDecoder),
        )
    }

    pub fn with_decoder(
        config: ClientConfig,
        credentials: Arc<Credentials>,
        transport_factory: Arc<dyn TransportFactory>,
        notification_center: Arc<EventNotificationCenter>,
        decoder: Arc<dyn EventDecoder>,
    ) -> Arc<Self> {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (liveness_tx, liveness_rx) = mpsc::unbounded_channel();
        let (delegate_tx, delegate_rx) = mpsc::unbounded_channel();
        let (state_tx, _) = watch::channel(ConnectionState::Initialized);
        let delegate = Arc::new(RwLock::new(None));
        let shutdown = CancellationToken::new();

        let client = Arc::new(Self {
            batcher: EventBatcher::new(config.batch_period, notification_center.clone()),
            ping_controller: PingController::new(
                config.ping_interval,
                config.pong_timeout,
                liveness_tx,
            ),
            config,
            credentials,
            transport_factory,
            decoder,
            notification_center,
            state: state_tx,
            delegate: delegate.clone(),
            delegate_tx,
            commands: commands_tx,
            shutdown: shutdown.clone(),
        });

        tokio::spawn(run_engine(
            Arc::downgrade(&client),
            commands_rx,
            liveness_rx,
            shutdown,
        ));
        tokio::spawn(notify_delegate(delegate, delegate_rx));

        client
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    pub fn set_delegate(&self, delegate: Option<Arc<dyn ConnectionStateDelegate>>) {
        *self.delegate.write().expect("RwLock should not be poisoned") = delegate;
    }

    pub fn notification_center(&self) -> &Arc<EventNotificationCenter> {
        &self.notification_center
    }

    pub fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    /// Call metadata attached to every subsequent health-check ping.
    pub fn set_call_info(&self, call_info: HashMap<String, String>) {
        self.ping_controller.set_call_info(call_info);
    }

    /// Opens the socket. Has no effect while connecting, authenticating or connected.
    pub fn connect(&self) {
        let started = self.transition(|state| {
            (!state.is_active()).then_some(ConnectionState::Connecting)
        });
        if !started {
            debug!(target: "Client/Socket", "Connect ignored, already {:?}", self.connection_state());
            return;
        }

        let url = self.config.connect_url.clone();
        let _ = self.commands.send(EngineCommand::Connect { url });
    }

    /// Closes the socket and flushes pending events. The returned receiver
    /// resolves once the flushed events have been delivered.
    ///
    /// Has no effect when there is no connection to close.
    pub fn disconnect(&self, source: DisconnectionSource) -> oneshot::Receiver<()> {
        let (done_tx, done_rx) = oneshot::channel();

        let accepted = self.transition(|state| match state {
            ConnectionState::Initialized | ConnectionState::Disconnected { .. } => None,
            _ => Some(ConnectionState::Disconnecting {
                source: source.clone(),
            }),
        });
        if !accepted {
            warn!(target: "Client/Socket", "Disconnect ignored while {:?}", self.connection_state());
            let _ = done_tx.send(());
            return done_rx;
        }

        if let Err(mpsc::error::SendError(EngineCommand::Disconnect { done })) =
            self.commands.send(EngineCommand::Disconnect { done: done_tx })
        {
            let _ = done.send(());
        }
        done_rx
    }

    /// Applies `next` to the current state atomically. Returns false when
    /// `next` declined the transition.
    fn transition<F>(&self, next: F) -> bool
    where
        F: FnOnce(&ConnectionState) -> Option<ConnectionState>,
    {
        let mut applied = false;
        self.state.send_if_modified(|state| {
            let Some(new_state) = next(state) else {
                return false;
            };
            applied = true;
            self.ping_controller.connection_state_did_change(&new_state);

            if *state == new_state {
                return false;
            }
            info!(target: "Client/Socket", "Connection state changed: {state:?} -> {new_state:?}");
            let _ = self.delegate_tx.send(new_state.clone());
            *state = new_state;
            true
        });
        applied
    }

    async fn handle_command(&self, command: EngineCommand, engine: &mut Engine) {
        match command {
            EngineCommand::Connect { url } => {
                engine.close().await;
                engine.dial(self.transport_factory.clone(), url);
            }
            EngineCommand::Disconnect { done } => {
                engine.close().await;
                self.transition(|state| match state {
                    ConnectionState::Disconnecting { source } => {
                        Some(ConnectionState::Disconnected {
                            source: source.clone(),
                        })
                    }
                    _ => None,
                });
                self.batcher.process_immediately().await;
                let _ = done.send(());
            }
        }
    }

    async fn handle_dial(&self, outcome: DialOutcome, engine: &mut Engine) {
        let DialOutcome {
            generation,
            url,
            result,
        } = outcome;

        if !engine.is_current(generation) {
            if let Ok((transport, _)) = result {
                debug!(target: "Client/Socket", "Closing socket from an abandoned dial");
                transport.disconnect().await;
            }
            return;
        }
        engine.dial = None;

        match result {
            Ok((transport, events)) => engine.socket = Some(Socket { transport, events }),
            Err(e) => {
                error!(target: "Client/Socket", "Failed to open socket to {url}: {e}");
                self.handle_socket_closed(Some(SignalError::Transport(e.to_string())));
            }
        }
    }

    async fn handle_transport_event(&self, event: TransportEvent, engine: &mut Engine) {
        match event {
            TransportEvent::Connected => {
                let authenticating = self.transition(|state| {
                    matches!(state, ConnectionState::Connecting)
                        .then_some(ConnectionState::Authenticating)
                });
                if !authenticating {
                    warn!(target: "Client/Socket", "Socket opened while {:?}", self.connection_state());
                    return;
                }

                let payload = requests::auth_request(&self.credentials.token(), self.credentials.user());
                let Some(socket) = &engine.socket else {
                    return;
                };
                let sent = socket.transport.send(&payload).await;
                if let Err(e) = sent {
                    error!(target: "Client/Socket", "Failed to send auth payload: {e}");
                    engine.close().await;
                    self.handle_socket_closed(Some(SignalError::Transport(e.to_string())));
                }
            }
            TransportEvent::DataReceived(data) => self.handle_message(data),
            TransportEvent::Disconnected(reason) => {
                engine.socket = None;
                // Closed before the first health check: the server refused the credentials.
                let refused = matches!(*self.state.borrow(), ConnectionState::Authenticating);
                let error = reason.map(|reason| {
                    if refused {
                        SignalError::Auth(reason)
                    } else {
                        SignalError::Transport(reason)
                    }
                });
                self.handle_socket_closed(error);
            }
        }
    }

    fn handle_message(&self, data: Bytes) {
        let event = match self.decoder.decode(&data).map_err(SignalError::from) {
            Ok(event) => event,
            Err(SignalError::UnsupportedEvent) => {
                info!(target: "Client/Socket", "Skipping unsupported event type");
                return;
            }
            Err(error) => {
                error!(target: "Client/Socket", "Failed to decode event: {error}");
                let _ = self.disconnect(DisconnectionSource::ServerInitiated {
                    error: Some(error),
                });
                return;
            }
        };

        let health_check = match event {
            ProtocolEvent::HealthCheck(health_check) => health_check,
            other => {
                self.batcher.append(other);
                return;
            }
        };

        self.transition(|state| {
            matches!(state, ConnectionState::Authenticating).then(|| ConnectionState::Connected {
                health_check: health_check.clone(),
            })
        });
        self.notification_center
            .process(vec![ProtocolEvent::HealthCheck(health_check.clone())], false);
        self.ping_controller.pong_received();
        self.transition(|state| {
            state
                .is_connected()
                .then_some(ConnectionState::Connected { health_check })
        });
    }

    fn handle_socket_closed(&self, error: Option<SignalError>) {
        let handled = self.transition(|state| match state {
            ConnectionState::Connecting
            | ConnectionState::Authenticating
            | ConnectionState::Connected { .. } => Some(ConnectionState::Disconnected {
                source: DisconnectionSource::ServerInitiated { error },
            }),
            ConnectionState::Disconnecting { source } => Some(ConnectionState::Disconnected {
                source: source.clone(),
            }),
            ConnectionState::Initialized | ConnectionState::Disconnected { .. } => None,
        });
        if !handled {
            error!(target: "Client/Socket", "Socket can not be disconnected while {:?}", self.connection_state());
        }
    }

    async fn handle_liveness(&self, signal: LivenessSignal, engine: &mut Engine) {
        match signal {
            LivenessSignal::SendPing { call_info } => {
                let session_id = match &*self.state.borrow() {
                    ConnectionState::Connected { health_check } => health_check.session_id.clone(),
                    _ => return,
                };
                let Some(socket) = &engine.socket else {
                    return;
                };
                let ping = requests::health_check_request(&session_id, &call_info);
                if let Err(e) = socket.transport.send_ping(&ping).await {
                    warn!(target: "Client/Ping", "Failed to send ping: {e}");
                }
            }
            LivenessSignal::NoPongReceived => {
                let _ = self.disconnect(DisconnectionSource::NoPongReceived);
            }
        }
    }
}

impl Drop for WebSocketClient {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn run_engine(
    client: Weak<WebSocketClient>,
    mut commands: mpsc::UnboundedReceiver<EngineCommand>,
    mut liveness: mpsc::UnboundedReceiver<LivenessSignal>,
    shutdown: CancellationToken,
) {
    let (dial_tx, mut dial_results) = mpsc::unbounded_channel();
    let mut engine = Engine::new(dial_tx);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            Some(command) = commands.recv() => {
                let Some(client) = client.upgrade() else { break };
                client.handle_command(command, &mut engine).await;
            }
            Some(signal) = liveness.recv() => {
                let Some(client) = client.upgrade() else { break };
                client.handle_liveness(signal, &mut engine).await;
            }
            Some(outcome) = dial_results.recv() => {
                let Some(client) = client.upgrade() else { break };
                client.handle_dial(outcome, &mut engine).await;
            }
            event = next_transport_event(&mut engine.socket) => {
                let Some(client) = client.upgrade() else { break };
                // A closed channel without a goodbye still means the socket is gone.
                let event = event.unwrap_or(TransportEvent::Disconnected(None));
                client.handle_transport_event(event, &mut engine).await;
            }
        }
    }

    engine.close().await;
    debug!(target: "Client/Socket", "Engine task stopped");
}

async fn next_transport_event(socket: &mut Option<Socket>) -> Option<TransportEvent> {
    match socket {
        Some(socket) => socket.events.recv().await,
        None => std::future::pending().await,
    }
}

async fn notify_delegate(
    delegate: Arc<RwLock<Option<Arc<dyn ConnectionStateDelegate>>>>,
    mut states: mpsc::UnboundedReceiver<ConnectionState>,
) {
    while let Some(state) = states.recv().await {
        let current = delegate
            .read()
            .expect("RwLock should not be poisoned")
            .clone();
        if let Some(delegate) = current {
            delegate.connection_state_did_change(&state);
        }
    }
}
