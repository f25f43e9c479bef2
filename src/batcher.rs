use crate::notification::EventNotificationCenter;
use crate::types::events::ProtocolEvent;
use log::trace;
use std::mem;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Default)]
struct BatchState {
    events: Vec<ProtocolEvent>,
    /// Flush timer for the current batch, tagged with its generation.
    timer: Option<(u64, JoinHandle<()>)>,
    next_generation: u64,
}

/// Coalesces bursts of events and hands them to the notification center in
/// groups. The flush timer starts at the first event of a batch.
pub struct EventBatcher {
    period: Duration,
    center: Arc<EventNotificationCenter>,
    state: Arc<Mutex<BatchState>>,
    // Held from taking a batch until it is delivered, so batches never overtake each other.
    dispatch_lock: Arc<tokio::sync::Mutex<()>>,
}

impl EventBatcher {
    pub fn new(period: Duration, center: Arc<EventNotificationCenter>) -> Self {
        Self {
            period,
            center,
            state: Arc::new(Mutex::new(BatchState::default())),
            dispatch_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Must be called from within a Tokio runtime.
    pub fn append(&self, event: ProtocolEvent) {
        let mut state = self.state.lock().expect("Mutex should not be poisoned");
        state.events.push(event);

        if state.timer.is_none() {
            let generation = state.next_generation;
            state.next_generation += 1;
            let handle = tokio::spawn(flush_after(
                self.period,
                generation,
                self.state.clone(),
                self.center.clone(),
                self.dispatch_lock.clone(),
            ));
            state.timer = Some((generation, handle));
        }
    }

    /// Flushes whatever is pending and returns once it (and any batch already
    /// being delivered) has reached every subscriber.
    pub async fn process_immediately(&self) {
        let _dispatch = self.dispatch_lock.lock().await;
        let batch = {
            let mut state = self.state.lock().expect("Mutex should not be poisoned");
            if let Some((_, timer)) = state.timer.take() {
                timer.abort();
            }
            mem::take(&mut state.events)
        };
        deliver(&self.center, batch);
    }

    pub fn pending(&self) -> usize {
        self.state
            .lock()
            .expect("Mutex should not be poisoned")
            .events
            .len()
    }
}

impl Drop for EventBatcher {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            if let Some((_, timer)) = state.timer.take() {
                timer.abort();
            }
        }
    }
}

async fn flush_after(
    period: Duration,
    generation: u64,
    state: Arc<Mutex<BatchState>>,
    center: Arc<EventNotificationCenter>,
    dispatch_lock: Arc<tokio::sync::Mutex<()>>,
) {
    tokio::time::sleep(period).await;
    let _dispatch = dispatch_lock.lock().await;

    let batch = {
        let mut state = state.lock().expect("Mutex should not be poisoned");
        match state.timer {
            Some((current, _)) if current == generation => {
                state.timer = None;
                mem::take(&mut state.events)
            }
            // Superseded by an immediate flush.
            _ => return,
        }
    };
    deliver(&center, batch);
}

fn deliver(center: &EventNotificationCenter, batch: Vec<ProtocolEvent>) {
    if batch.is_empty() {
        return;
    }
    trace!(target: "Client/Batcher", "Dispatching batch of {} event(s)", batch.len());
    center.process(batch, true);
}
