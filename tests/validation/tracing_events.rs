//! Events emitted under the `tracing` feature.

use std::fmt;
use std::sync::{Arc, Mutex};

use rule_rail::rules::{AlwaysFail, AlwaysPass, Even, MinLength};
use rule_rail::types::Validated;
use rule_rail::validation::Validation;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl Recorder {
    fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().unwrap().clone()
    }
}

struct Message(String);

impl Visit for Message {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl Subscriber for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut message = Message(String::new());
        event.record(&mut message);
        self.events.lock().unwrap().push((*event.metadata().level(), message.0));
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[test]
fn each_failed_rule_emits_a_trace_event() {
    let recorder = Recorder::default();

    tracing::subscriber::with_default(recorder.clone(), || {
        let _ = Validation::identity("ab")
            .fold_rule(&MinLength::new(5))
            .fold_rule(&AlwaysPass::new())
            .fold_rule(&AlwaysFail::new(rule_rail::rules::StringReason::Empty));
    });

    let failures: Vec<_> =
        recorder.events().into_iter().filter(|(_, message)| message == "rule failed").collect();
    assert_eq!(failures.len(), 2);
    assert!(failures.iter().all(|(level, _)| *level == Level::TRACE));
}

#[test]
fn passing_rules_emit_nothing() {
    let recorder = Recorder::default();

    tracing::subscriber::with_default(recorder.clone(), || {
        let _ = Validation::<&str, _>::identity(4).fold_rule(&AlwaysPass::new());
    });

    assert!(recorder.events().is_empty());
}

#[test]
fn holder_writes_emit_a_debug_event() {
    let recorder = Recorder::default();

    tracing::subscriber::with_default(recorder.clone(), || {
        let mut counter = Validated::new(2_u32, Even);
        counter.set_value(3);
        counter.update(|n| *n += 1);
    });

    let revalidations: Vec<_> = recorder
        .events()
        .into_iter()
        .filter(|(_, message)| message == "re-validated holder value")
        .collect();
    assert_eq!(revalidations.len(), 2);
    assert!(revalidations.iter().all(|(level, _)| *level == Level::DEBUG));
}
