//! Integration test: rejected checks emit `debug` events

use std::io;
use std::sync::{Arc, Mutex};

use paramguard::prelude::*;
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_rejection_emits_debug_event() {
    let output = capture(|| {
        let _ = validate(5, "limit").is_greater_than(5);
    });

    assert!(output.contains("DEBUG"), "{output}");
    assert!(output.contains("paramguard"), "{output}");
    assert!(output.contains("parameter rejected"), "{output}");
    assert!(output.contains("limit"), "{output}");
    assert!(output.contains("greater_than"), "{output}");
    assert!(output.contains("invalid_value"), "{output}");
}

#[test]
fn test_missing_value_event_kind() {
    let output = capture(|| {
        let _ = validate_option(None::<u8>, "retries").require();
    });
    assert!(output.contains("missing_value"), "{output}");
    assert!(output.contains("not_null"), "{output}");
}

#[test]
fn test_success_is_silent() {
    let output = capture(|| {
        let _ = validate("ok", "s").is_not_empty().and_then(|v| v.has_length(2));
    });
    assert!(output.is_empty(), "{output}");
}

#[test]
fn test_one_event_per_failed_chain() {
    let output = capture(|| {
        let _ = validate(0, "n")
            .is_between(1, 3)
            .and_then(|v| v.is_equal_to(2));
    });
    assert_eq!(output.matches("parameter rejected").count(), 1, "{output}");
}
