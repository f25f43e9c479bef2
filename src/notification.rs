use crate::types::events::{EventKind, ProtocolEvent};
use dashmap::DashMap;
use log::trace;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Receives events posted by the [`EventNotificationCenter`].
pub trait EventHandler: Send + Sync {
    fn handle_event(&self, event: &ProtocolEvent);
}

impl<F> EventHandler for F
where
    F: Fn(&ProtocolEvent) + Send + Sync,
{
    fn handle_event(&self, event: &ProtocolEvent) {
        self(event)
    }
}

/// Runs over every processed event before it is posted. Returning `None`
/// swallows the event.
pub trait EventMiddleware: Send + Sync {
    fn handle(&self, event: ProtocolEvent) -> Option<ProtocolEvent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFilter {
    All,
    Kind(EventKind),
}

impl EventFilter {
    fn matches(&self, event: &ProtocolEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Kind(kind) => event.kind() == *kind,
        }
    }
}

impl From<EventKind> for EventFilter {
    fn from(kind: EventKind) -> Self {
        EventFilter::Kind(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Subscriber {
    filter: EventFilter,
    handler: Arc<dyn EventHandler>,
}

/// Fans decoded protocol events out to subscribers.
#[derive(Default)]
pub struct EventNotificationCenter {
    subscribers: DashMap<SubscriptionId, Subscriber>,
    middlewares: RwLock<Vec<Arc<dyn EventMiddleware>>>,
    next_id: AtomicU64,
}

impl EventNotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        filter: impl Into<EventFilter>,
        handler: Arc<dyn EventHandler>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.insert(
            id,
            Subscriber {
                filter: filter.into(),
                handler,
            },
        );
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    pub fn add_middleware(&self, middleware: Arc<dyn EventMiddleware>) {
        self.middlewares
            .write()
            .expect("RwLock should not be poisoned")
            .push(middleware);
    }

    /// Runs the middlewares over `events` and, when `post_notification` is set,
    /// delivers the survivors to matching subscribers in order. Returns after
    /// every handler has run.
    pub fn process(&self, events: Vec<ProtocolEvent>, post_notification: bool) {
        let middlewares = self
            .middlewares
            .read()
            .expect("RwLock should not be poisoned")
            .clone();

        for event in events {
            let Some(event) = middlewares
                .iter()
                .try_fold(event, |event, middleware| middleware.handle(event))
            else {
                continue;
            };

            if !post_notification {
                continue;
            }

            // Snapshot so handlers can (un)subscribe without deadlocking the map.
            let mut matching: Vec<(SubscriptionId, Arc<dyn EventHandler>)> = self
                .subscribers
                .iter()
                .filter(|entry| entry.filter.matches(&event))
                .map(|entry| (*entry.key(), entry.handler.clone()))
                .collect();
            matching.sort_by_key(|(id, _)| *id);

            trace!(target: "Client/Events", "Posting {:?} to {} subscriber(s)", event.kind(), matching.len());
            for (_, handler) in matching {
                handler.handle_event(&event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::sfu;
    use std::sync::Mutex;

    fn speaker(user_id: &str) -> ProtocolEvent {
        ProtocolEvent::DominantSpeakerChanged(sfu::DominantSpeakerChanged {
            user_id: user_id.into(),
            session_id: "s1".into(),
        })
    }

    fn offer() -> ProtocolEvent {
        ProtocolEvent::SubscriberOffer(sfu::SubscriberOffer {
            session_id: "s1".into(),
            ice_restart: false,
            sdp: "v=0".into(),
        })
    }

    #[derive(Default)]
    struct MockHandler {
        seen: Mutex<Vec<ProtocolEvent>>,
    }

    impl EventHandler for MockHandler {
        fn handle_event(&self, event: &ProtocolEvent) {
            self.seen.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn kind_subscribers_only_see_their_kind() {
        let center = EventNotificationCenter::new();
        let speakers = Arc::new(MockHandler::default());
        let everything = Arc::new(MockHandler::default());
        center.subscribe(EventKind::DominantSpeakerChanged, speakers.clone());
        center.subscribe(EventFilter::All, everything.clone());

        center.process(vec![speaker("a"), offer(), speaker("b")], true);

        assert_eq!(*speakers.seen.lock().unwrap(), vec![speaker("a"), speaker("b")]);
        assert_eq!(
            *everything.seen.lock().unwrap(),
            vec![speaker("a"), offer(), speaker("b")]
        );
    }

    #[test]
    fn without_post_notification_nothing_is_delivered() {
        let center = EventNotificationCenter::new();
        let handler = Arc::new(MockHandler::default());
        center.subscribe(EventFilter::All, handler.clone());

        center.process(vec![speaker("a")], false);

        assert!(handler.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let center = EventNotificationCenter::new();
        let handler = Arc::new(MockHandler::default());
        let id = center.subscribe(EventFilter::All, handler.clone());

        assert!(center.unsubscribe(id));
        assert!(!center.unsubscribe(id));
        center.process(vec![speaker("a")], true);

        assert!(handler.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn middleware_can_drop_events() {
        struct DropOffers;
        impl EventMiddleware for DropOffers {
            fn handle(&self, event: ProtocolEvent) -> Option<ProtocolEvent> {
                (event.kind() != EventKind::SubscriberOffer).then_some(event)
            }
        }

        let center = EventNotificationCenter::new();
        center.add_middleware(Arc::new(DropOffers));
        let handler = Arc::new(MockHandler::default());
        center.subscribe(EventFilter::All, handler.clone());

        center.process(vec![offer(), speaker("a")], true);

        assert_eq!(*handler.seen.lock().unwrap(), vec![speaker("a")]);
    }

    #[test]
    fn closures_are_handlers() {
        let center = EventNotificationCenter::new();
        let count = Arc::new(AtomicU64::new(0));
        let c = count.clone();
        center.subscribe(
            EventKind::SubscriberOffer,
            Arc::new(move |_: &ProtocolEvent| {
                c.fetch_add(1, Ordering::SeqCst);
            }),
        );

        center.process(vec![offer(), speaker("a"), offer()], true);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
