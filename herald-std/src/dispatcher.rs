//! The event dispatcher.
//!
//! [`EventDispatcher`] maps event names to priority-ordered listener buckets
//! and runs them through an [`Invoker`].
//!
//! # Locking
//!
//! The whole registry sits behind one mutex. It is held only while the
//! registry is mutated or copied, never while a listener runs, so listeners
//! may re-enter the dispatcher. Dispatch works on a snapshot of the listener
//! order taken before the first invocation; changes made by a running
//! listener apply to later dispatches only.

use herald_core::{IntoPriority, InvalidPriority, InvokeError, Invoker, Parameters, Priority};
use std::{
    collections::BTreeMap,
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Listeners of one event, bucketed by priority in insertion order.
pub type PriorityTable<L> = BTreeMap<Priority, Vec<L>>;

/// Every event's [`PriorityTable`], keyed by event name.
pub type ListenerMap<L> = BTreeMap<String, PriorityTable<L>>;

/// Reserved parameter carrying the dispatched payload.
pub const EVENT_PARAMETER: &str = "event";

/// Reserved parameter carrying the dispatched event name.
pub const EVENT_NAME_PARAMETER: &str = "eventName";

/// Outcome of a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    event_name: String,
    invoked: usize,
    stopped_at: Option<Priority>,
}

impl EventContext {
    /// The dispatched event name.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Whether a listener stopped propagation.
    pub fn is_stopped(&self) -> bool {
        self.stopped_at.is_some()
    }

    /// Number of listeners invoked, including the one that stopped propagation.
    pub fn invoked(&self) -> usize {
        self.invoked
    }

    /// Priority of the listener that stopped propagation.
    pub fn stopped_at(&self) -> Option<Priority> {
        self.stopped_at
    }
}

/// Registry of named events and their priority-ordered listeners.
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = EventDispatcher::new(ResolvingInvoker::new());
///
/// dispatcher.add_listener("user.created", Callback::new(|_: &Parameters| ()));
/// dispatcher.add_listener_with_priority("user.created", audit, 10)?;
///
/// let ctx = dispatcher.dispatch_payload("user.created", user)?;
/// assert!(!ctx.is_stopped());
/// ```
pub struct EventDispatcher<I: Invoker> {
    invoker: I,
    listeners: Mutex<ListenerMap<I::Listener>>,
}

impl<I: Invoker> EventDispatcher<I> {
    /// Create an empty dispatcher that invokes listeners through `invoker`.
    pub fn new(invoker: I) -> Self {
        Self {
            invoker,
            listeners: Mutex::new(BTreeMap::new()),
        }
    }

    /// The invoker used for dispatch.
    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    fn registry(&self) -> MutexGuard<'_, ListenerMap<I::Listener>> {
        // The registry is never left half-updated, so a poisoned lock is still usable.
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener at the default priority `0`.
    pub fn add_listener(&self, event_name: impl Into<String>, listener: I::Listener) {
        self.insert(event_name.into(), listener, Priority::DEFAULT);
    }

    /// Register a listener at `priority`.
    ///
    /// Fails with [`InvalidPriority`] if `priority` is not a non-negative
    /// integer; the registry is left unchanged.
    pub fn add_listener_with_priority(
        &self,
        event_name: impl Into<String>,
        listener: I::Listener,
        priority: impl IntoPriority,
    ) -> Result<(), InvalidPriority> {
        let priority = priority.into_priority()?;
        self.insert(event_name.into(), listener, priority);
        Ok(())
    }

    fn insert(&self, event_name: String, listener: I::Listener, priority: Priority) {
        #[cfg(feature = "tracing")]
        tracing::trace!(event = %event_name, %priority, "Adding listener");

        self.registry()
            .entry(event_name)
            .or_default()
            .entry(priority)
            .or_default()
            .push(listener);
    }

    /// Register listeners in bulk.
    ///
    /// `listeners` maps event names to priority keys to listener sequences;
    /// a [`ListenerMap`] returned by [`get_all_listeners`] qualifies. Every
    /// listener is appended as if by [`add_listener_with_priority`], in input
    /// order.
    ///
    /// The first invalid priority key fails the call. Listeners added
    /// before that point stay registered.
    ///
    /// [`get_all_listeners`]: Self::get_all_listeners
    /// [`add_listener_with_priority`]: Self::add_listener_with_priority
    pub fn add_listeners<M, N, T, P, B>(&self, listeners: M) -> Result<(), InvalidPriority>
    where
        M: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: IntoIterator<Item = (P, B)>,
        P: IntoPriority,
        B: IntoIterator<Item = I::Listener>,
    {
        for (event_name, by_priority) in listeners {
            let event_name = event_name.into();
            for (priority, bucket) in by_priority {
                let priority = priority.into_priority()?;
                for listener in bucket {
                    self.insert(event_name.clone(), listener, priority);
                }
            }
        }
        Ok(())
    }

    /// Remove every occurrence of `listener` from `event_name`.
    ///
    /// Unknown events and listeners are ignored. Buckets and events left
    /// empty are pruned. Returns the number of listeners removed.
    pub fn remove_listener(&self, event_name: &str, listener: &I::Listener) -> usize {
        let mut registry = self.registry();
        let Some(table) = registry.get_mut(event_name) else {
            return 0;
        };

        let mut removed = 0;
        table.retain(|_, bucket| {
            let before = bucket.len();
            bucket.retain(|l| l != listener);
            removed += before - bucket.len();
            !bucket.is_empty()
        });
        if table.is_empty() {
            registry.remove(event_name);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(event = %event_name, removed, "Removed listener");

        removed
    }

    /// Remove all listeners of `event_name`, returning how many were dropped.
    pub fn clear_listeners(&self, event_name: &str) -> usize {
        self.registry()
            .remove(event_name)
            .map_or(0, |table| table.values().map(Vec::len).sum())
    }

    /// Whether any event has at least one listener.
    pub fn has_listeners(&self) -> bool {
        !self.registry().is_empty()
    }

    /// Whether `event_name` has at least one listener.
    pub fn has_listeners_for(&self, event_name: &str) -> bool {
        self.registry().contains_key(event_name)
    }

    /// Number of listeners registered for `event_name`.
    pub fn listener_count(&self, event_name: &str) -> usize {
        self.registry()
            .get(event_name)
            .map_or(0, |table| table.values().map(Vec::len).sum())
    }

    /// Names of all events with listeners, sorted.
    pub fn event_names(&self) -> Vec<String> {
        self.registry().keys().cloned().collect()
    }

    /// Listeners of `event_name` in dispatch order, with their priorities.
    ///
    /// Ascending priority, then insertion order. Empty for unknown events.
    pub fn get_listeners(&self, event_name: &str) -> Vec<(I::Listener, Priority)> {
        let registry = self.registry();
        let Some(table) = registry.get(event_name) else {
            return Vec::new();
        };
        table
            .iter()
            .flat_map(|(priority, bucket)| bucket.iter().map(|l| (l.clone(), *priority)))
            .collect()
    }

    /// A snapshot of the whole registry.
    pub fn get_all_listeners(&self) -> ListenerMap<I::Listener> {
        self.registry().clone()
    }

    /// Dispatch `event_name` without a payload; `event` is bound to `()`.
    pub fn dispatch(&self, event_name: &str) -> Result<EventContext, InvokeError> {
        self.dispatch_with::<()>(event_name, None, Parameters::new())
    }

    /// Dispatch `event_name` with `payload` bound to the `event` parameter.
    pub fn dispatch_payload<T>(
        &self,
        event_name: &str,
        payload: T,
    ) -> Result<EventContext, InvokeError>
    where
        T: Send + Sync + 'static,
    {
        self.dispatch_with(event_name, Some(payload), Parameters::new())
    }

    /// Dispatch `event_name`, offering `payload` and `extra` for resolution.
    ///
    /// Listeners run sequentially in [`get_listeners`] order. The reserved
    /// `event` and `eventName` parameters override entries of the same name
    /// in `extra`; without a payload, `event` holds `()`. A listener returning [`Propagation::Stop`] halts dispatch.
    /// The first invocation error is returned as is and skips the remaining
    /// listeners.
    ///
    /// [`get_listeners`]: Self::get_listeners
    /// [`Propagation::Stop`]: herald_core::Propagation::Stop
    pub fn dispatch_with<T>(
        &self,
        event_name: &str,
        payload: Option<T>,
        extra: Parameters,
    ) -> Result<EventContext, InvokeError>
    where
        T: Send + Sync + 'static,
    {
        let listeners = self.get_listeners(event_name);

        let mut parameters = extra;
        parameters.insert(EVENT_NAME_PARAMETER, event_name.to_string());
        match payload {
            Some(payload) => parameters.insert(EVENT_PARAMETER, payload),
            // No payload still binds `event`, to the unit value.
            None => parameters.insert(EVENT_PARAMETER, ()),
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(event = %event_name, listeners = listeners.len(), "Dispatching event");

        let mut context = EventContext {
            event_name: event_name.to_string(),
            invoked: 0,
            stopped_at: None,
        };
        for (listener, priority) in &listeners {
            let propagation = self.invoker.invoke(listener, &parameters)?;
            context.invoked += 1;
            if propagation.is_stop() {
                #[cfg(feature = "tracing")]
                tracing::debug!(event = %event_name, %priority, "Propagation stopped");

                context.stopped_at = Some(*priority);
                break;
            }
        }
        Ok(context)
    }
}

impl<I: Invoker + Default> Default for EventDispatcher<I> {
    fn default() -> Self {
        Self::new(I::default())
    }
}

impl<I: Invoker> fmt::Debug for EventDispatcher<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry();
        let listener_count: usize = registry
            .values()
            .flat_map(|table| table.values())
            .map(Vec::len)
            .sum();
        f.debug_struct("EventDispatcher")
            .field("events", &registry.len())
            .field("listeners", &listener_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::Propagation;
    use std::sync::Arc;

    /// Listeners are labels; `"stop"` stops propagation, `"needs:x"` requires parameter `x`.
    #[derive(Default)]
    struct LabelInvoker {
        calls: Mutex<Vec<&'static str>>,
    }

    impl LabelInvoker {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Invoker for LabelInvoker {
        type Listener = &'static str;

        fn invoke(
            &self,
            listener: &&'static str,
            parameters: &Parameters,
        ) -> Result<Propagation, InvokeError> {
            if let Some(name) = listener.strip_prefix("needs:") {
                if !parameters.contains(name) {
                    return Err(InvokeError::unresolved(name));
                }
            }
            self.calls.lock().unwrap().push(*listener);
            Ok(if *listener == "stop" {
                Propagation::Stop
            } else {
                Propagation::Continue
            })
        }
    }

    fn dispatcher() -> EventDispatcher<LabelInvoker> {
        EventDispatcher::default()
    }

    #[test]
    fn test_add_and_flatten_order() {
        let d = dispatcher();
        d.add_listener_with_priority("e", "b", 1).unwrap();
        d.add_listener("e", "a1");
        d.add_listener_with_priority("e", "c", 5u8).unwrap();
        d.add_listener("e", "a2");

        let listeners = d.get_listeners("e");
        assert_eq!(
            listeners,
            vec![
                ("a1", Priority::new(0)),
                ("a2", Priority::new(0)),
                ("b", Priority::new(1)),
                ("c", Priority::new(5)),
            ]
        );
    }

    #[test]
    fn test_invalid_priority_leaves_registry_unchanged() {
        let d = dispatcher();
        assert!(d.add_listener_with_priority("e", "a", -1).is_err());
        assert!(d.add_listener_with_priority("e", "a", "priority").is_err());
        assert!(d.add_listener_with_priority("e", "a", 1.5).is_err());
        assert!(!d.has_listeners());
    }

    #[test]
    fn test_remove_prunes_and_keeps_order() {
        let d = dispatcher();
        d.add_listener("e", "a");
        d.add_listener("e", "x");
        d.add_listener("e", "b");
        d.add_listener_with_priority("e", "x", 2).unwrap();

        assert_eq!(d.remove_listener("e", &"x"), 2);
        assert_eq!(
            d.get_listeners("e"),
            vec![("a", Priority::new(0)), ("b", Priority::new(0))]
        );
        assert!(!d.get_all_listeners()["e"].contains_key(&Priority::new(2)));

        d.remove_listener("e", &"a");
        d.remove_listener("e", &"b");
        assert!(!d.has_listeners_for("e"));
        assert!(d.get_all_listeners().is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let d = dispatcher();
        assert_eq!(d.remove_listener("missing", &"a"), 0);
        d.add_listener("e", "a");
        assert_eq!(d.remove_listener("e", &"b"), 0);
        assert_eq!(d.listener_count("e"), 1);
    }

    #[test]
    fn test_bulk_partial_failure_keeps_earlier_additions() {
        let d = dispatcher();
        let result = d.add_listeners(vec![
            ("first", vec![(0i64, vec!["a"])]),
            ("second", vec![(1, vec!["b"]), (-1, vec!["c"]), (2, vec!["d"])]),
        ]);

        assert!(result.is_err());
        assert_eq!(d.event_names(), vec!["first".to_string(), "second".to_string()]);
        assert_eq!(d.get_listeners("second"), vec![("b", Priority::new(1))]);
    }

    #[test]
    fn test_dispatch_runs_in_order_and_stops() {
        let d = dispatcher();
        d.add_listener_with_priority("e", "late", 9).unwrap();
        d.add_listener("e", "first");
        d.add_listener_with_priority("e", "stop", 3).unwrap();

        let ctx = d.dispatch("e").unwrap();
        assert!(ctx.is_stopped());
        assert_eq!(ctx.invoked(), 2);
        assert_eq!(ctx.stopped_at(), Some(Priority::new(3)));
        assert_eq!(ctx.event_name(), "e");
        assert_eq!(d.invoker().calls(), vec!["first", "stop"]);
    }

    #[test]
    fn test_dispatch_unknown_event_is_noop() {
        let d = dispatcher();
        let ctx = d.dispatch("nothing").unwrap();
        assert!(!ctx.is_stopped());
        assert_eq!(ctx.invoked(), 0);
    }

    #[test]
    fn test_dispatch_error_aborts_remaining() {
        let d = dispatcher();
        d.add_listener("e", "a");
        d.add_listener("e", "needs:count");
        d.add_listener("e", "b");

        let err = d.dispatch("e").unwrap_err();
        assert!(err.is_unresolved());
        assert_eq!(d.invoker().calls(), vec!["a"]);

        let ctx = d
            .dispatch_with::<()>("e", None, Parameters::new().with("count", 1u32))
            .unwrap();
        assert_eq!(ctx.invoked(), 3);
    }

    #[test]
    fn test_event_is_bound_without_payload() {
        let d = dispatcher();
        d.add_listener("e", "needs:event");
        let ctx = d.dispatch("e").unwrap();
        assert_eq!(ctx.invoked(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let d = dispatcher();
        d.add_listener("e", "a");
        let snapshot = d.get_all_listeners();
        d.add_listener("e", "b");
        d.remove_listener("e", &"a");

        assert_eq!(snapshot["e"][&Priority::DEFAULT], vec!["a"]);
    }

    #[test]
    fn test_clear_and_debug() {
        let d = dispatcher();
        d.add_listener("e", "a");
        d.add_listener_with_priority("e", "b", 1).unwrap();
        d.add_listener("f", "c");

        let debug = format!("{d:?}");
        assert!(debug.contains("events: 2"));
        assert!(debug.contains("listeners: 3"));

        assert_eq!(d.clear_listeners("e"), 2);
        assert_eq!(d.clear_listeners("e"), 0);
        assert_eq!(d.event_names(), vec!["f".to_string()]);
    }

    #[test]
    fn test_shared_invoker() {
        let invoker = Arc::new(LabelInvoker::default());
        let d = EventDispatcher::new(Arc::clone(&invoker));
        d.add_listener("e", "a");
        d.dispatch("e").unwrap();
        assert_eq!(invoker.calls(), vec!["a"]);
    }
}
