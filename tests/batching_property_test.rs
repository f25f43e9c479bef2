use proptest::prelude::*;
use sfu_signal::batcher::EventBatcher;
use sfu_signal::proto::sfu;
use sfu_signal::types::events::ProtocolEvent;
use sfu_signal::{EventFilter, EventNotificationCenter};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn speaker(n: usize) -> ProtocolEvent {
    ProtocolEvent::DominantSpeakerChanged(sfu::DominantSpeakerChanged {
        user_id: format!("user-{n}"),
        session_id: format!("session-{n}"),
    })
}

/// Appends bursts separated by gaps and returns (appended, delivered).
fn run_schedule(schedule: &[(usize, u64)]) -> (Vec<ProtocolEvent>, Vec<ProtocolEvent>) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .start_paused(true)
        .build()
        .unwrap();

    rt.block_on(async {
        let center = Arc::new(EventNotificationCenter::new());
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let sink = delivered.clone();
        center.subscribe(
            EventFilter::All,
            Arc::new(move |e: &ProtocolEvent| sink.lock().unwrap().push(e.clone())),
        );

        let batcher = EventBatcher::new(Duration::from_millis(250), center);
        let mut appended = Vec::new();
        for (burst, gap_ms) in schedule {
            for _ in 0..*burst {
                let event = speaker(appended.len());
                appended.push(event.clone());
                batcher.append(event);
            }
            tokio::time::sleep(Duration::from_millis(*gap_ms)).await;
        }
        batcher.process_immediately().await;
        assert_eq!(batcher.pending(), 0);

        let delivered = delivered.lock().unwrap().clone();
        (appended, delivered)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_event_is_delivered_once_in_order(
        schedule in proptest::collection::vec((1usize..6, 0u64..600), 1..12)
    ) {
        let (appended, delivered) = run_schedule(&schedule);
        prop_assert_eq!(delivered, appended);
    }
}

#[test]
fn quiet_period_flushes_without_explicit_drain() {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .start_paused(true)
        .build()
        .unwrap();

    rt.block_on(async {
        let center = Arc::new(EventNotificationCenter::new());
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let sink = delivered.clone();
        center.subscribe(
            EventFilter::All,
            Arc::new(move |e: &ProtocolEvent| sink.lock().unwrap().push(e.clone())),
        );
        let batcher = EventBatcher::new(Duration::from_millis(250), center);

        batcher.append(speaker(0));
        batcher.append(speaker(1));
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(delivered.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*delivered.lock().unwrap(), vec![speaker(0), speaker(1)]);
        assert_eq!(batcher.pending(), 0);
    });
}
