#![allow(dead_code)]

use herald::{Callback, EventDispatcher, ListenerMap, Parameters, Priority, ResolvingInvoker};

// ============================================================================
// Test Event Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct TestEvent {
    pub content: String,
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn dispatcher() -> EventDispatcher<ResolvingInvoker> {
    EventDispatcher::new(ResolvingInvoker::new())
}

/// A listener that does nothing. Every call yields a distinct identity.
pub fn noop() -> Callback {
    Callback::new(|_: &Parameters| ())
}

/// Build a `ListenerMap` from `(event, priority, listeners)` rows.
pub fn listener_map(rows: Vec<(&str, u64, Vec<Callback>)>) -> ListenerMap<Callback> {
    let mut map = ListenerMap::new();
    for (event, priority, listeners) in rows {
        map.entry(event.to_string())
            .or_default()
            .entry(Priority::new(priority))
            .or_default()
            .extend(listeners);
    }
    map
}
