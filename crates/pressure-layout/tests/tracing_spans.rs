#![forbid(unsafe_code)]

//! Tracing instrumentation of alignment and packing.
//!
//!   cargo test -p pressure-layout --features tracing --test tracing_spans

#![cfg(feature = "tracing")]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use pressure_layout::{Layout, LayoutConfig};
use tracing_subscriber::layer::SubscriberExt;

#[derive(Debug, Clone)]
struct Captured {
    name: String,
    fields: HashMap<String, String>,
}

/// Records every span and event with its fields.
#[derive(Clone, Default)]
struct Capture {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

struct FieldVisitor(HashMap<String, String>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(HashMap::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(Captured {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0,
        });
    }

    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(HashMap::new());
        event.record(&mut visitor);
        let name = visitor.0.get("message").cloned().unwrap_or_default();
        self.events.lock().unwrap().push(Captured {
            name,
            fields: visitor.0,
        });
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, Capture) {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture)
}

#[test]
fn optimize_emits_span_and_one_event_per_candidate() {
    let (_, capture) = capture(|| {
        Layout::from_elements([(10.0, 10.0); 4], LayoutConfig::default()).unwrap()
    });

    let spans = capture.spans.lock().unwrap();
    let span = spans
        .iter()
        .find(|s| s.name == "layout_optimize")
        .expect("layout_optimize span");
    assert_eq!(span.fields.get("children").map(String::as_str), Some("4"));

    let events = capture.events.lock().unwrap();
    let candidates = events
        .iter()
        .filter(|e| e.name == "packing candidate")
        .count();
    assert_eq!(candidates, 4);
    assert!(events.iter().any(|e| e.name == "packing plan chosen"));
    assert!(events.iter().any(|e| e.name == "optimized layout committed"));
}

#[test]
fn alignment_spans_name_their_direction() {
    let (_, capture) = capture(|| {
        let mut layout =
            Layout::from_elements([(1.0, 1.0), (2.0, 2.0)], LayoutConfig::default()).unwrap();
        layout.align_horizontal();
        layout.align_vertical();
    });

    let spans = capture.spans.lock().unwrap();
    let directions: Vec<&str> = spans
        .iter()
        .filter(|s| s.name == "layout_align")
        .filter_map(|s| s.fields.get("direction").map(String::as_str))
        .collect();
    assert_eq!(directions, vec!["horizontal", "vertical"]);
}

#[test]
fn empty_optimize_skips_candidates() {
    let (_, capture) = capture(|| {
        let mut layout: Layout<(f64, f64)> = Layout::empty(LayoutConfig::default()).unwrap();
        layout.optimize();
    });
    let events = capture.events.lock().unwrap();
    assert!(events.iter().all(|e| e.name != "packing candidate"));
}
