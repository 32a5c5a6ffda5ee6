//! Log output with the `tracing` feature enabled.
//!
//! Run with `cargo test -p herald --features tracing`.

#![cfg(feature = "tracing")]

use herald::{
    Callback, EventDispatcher, Parameters, ResolvingInvoker,
    invokers::{LoggingInvoker, TracingInvoker},
    testing::CallLog,
};
use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing_subscriber::fmt::MakeWriter;

mod common;
use common::dispatcher;

// ============================================================================
// Capture
// ============================================================================

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn output(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn captured(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(capture.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.output()
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_registry_mutations_are_traced() {
    let output = captured(|| {
        let d = dispatcher();
        let listener = CallLog::new().listener("a");
        d.add_listener_with_priority("user.created", listener.clone(), 3)
            .unwrap();
        d.remove_listener("user.created", &listener);
    });

    assert!(output.contains("Adding listener"), "{output}");
    assert!(output.contains("priority=3"), "{output}");
    assert!(output.contains("Removed listener"), "{output}");
    assert!(output.contains("removed=1"), "{output}");
}

#[test]
fn test_dispatch_and_stop_are_logged() {
    let output = captured(|| {
        let d = dispatcher();
        let log = CallLog::new();
        d.add_listener("e", log.listener("a"));
        d.add_listener_with_priority("e", log.stopping_listener("b"), 7)
            .unwrap();
        assert!(d.dispatch("e").unwrap().is_stopped());
    });

    assert!(output.contains("Dispatching event"), "{output}");
    assert!(output.contains("listeners=2"), "{output}");
    assert!(output.contains("Propagation stopped"), "{output}");
    assert!(output.contains("priority=7"), "{output}");
}

#[test]
fn test_decorators_log_inside_span() {
    let output = captured(|| {
        let logging = LoggingInvoker::named(ResolvingInvoker::new(), "audit");
        let d = EventDispatcher::new(TracingInvoker::new(logging, "outer"));
        let needs_db = Callback::new(|_: &Parameters| ()).requires("db");
        d.add_listener("e", CallLog::new().listener("ok"));
        d.add_listener_with_priority("e", needs_db, 1).unwrap();
        assert!(d.dispatch("e").unwrap_err().is_unresolved());
    });

    assert!(output.contains("listener_invoke{invoker=outer"), "{output}");
    assert!(output.contains("Invoking listener"), "{output}");
    assert!(output.contains("Listener returned"), "{output}");
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("Listener failed"), "{output}");
    assert!(output.contains("unresolved parameter `db`"), "{output}");
}
