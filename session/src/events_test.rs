use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn recorder(events: &SessionEvents) -> Arc<Mutex<Vec<SessionEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    events.subscribe(move |event| sink.lock().unwrap().push(event));
    seen
}

#[test]
fn emit_reaches_every_subscriber() {
    let events = SessionEvents::new();
    let a = recorder(&events);
    let b = recorder(&events);

    events.emit(SessionEvent::Expired);

    assert_eq!(*a.lock().unwrap(), vec![SessionEvent::Expired]);
    assert_eq!(*b.lock().unwrap(), vec![SessionEvent::Expired]);
}

#[test]
fn emit_without_subscribers_is_a_no_op() {
    let events = SessionEvents::new();
    events.emit(SessionEvent::SignedOut);
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn unsubscribe_stops_delivery() {
    let events = SessionEvents::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let sub = events.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    events.emit(SessionEvent::SignedIn);
    assert!(events.unsubscribe(sub));
    events.emit(SessionEvent::SignedIn);

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(!events.unsubscribe(sub));
}

#[test]
fn clones_share_subscribers() {
    let events = SessionEvents::new();
    let seen = recorder(&events);
    let clone = events.clone();

    clone.emit(SessionEvent::SignedOut);

    assert_eq!(*seen.lock().unwrap(), vec![SessionEvent::SignedOut]);
    assert_eq!(clone.listener_count(), 1);
}

#[test]
fn listener_may_unsubscribe_itself_during_emit() {
    let events = SessionEvents::new();
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let hits = Arc::new(AtomicUsize::new(0));

    let inner_events = events.clone();
    let inner_slot = Arc::clone(&slot);
    let counter = Arc::clone(&hits);
    let sub = events.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        if let Some(sub) = inner_slot.lock().unwrap().take() {
            inner_events.unsubscribe(sub);
        }
    });
    *slot.lock().unwrap() = Some(sub);

    events.emit(SessionEvent::Expired);
    events.emit(SessionEvent::Expired);

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(events.listener_count(), 0);
}
