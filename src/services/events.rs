use serde::Serialize;
use serde_json::Value;
use std::sync::Mutex;

pub const EVENT_NAME_TRUNCATED: &str = "compile://name-truncated";
pub const EVENT_NAME_COLLISION: &str = "compile://name-collision";
pub const EVENT_CHANNEL_COMPILED: &str = "compile://channel-compiled";

pub trait EventSink: Send + Sync {
    fn emit(&self, event: &str, payload: Value);
}

pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &str, _payload: Value) {}
}

/// Keeps every emitted event in memory, in order
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<(String, Value)>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, Value)> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(e) => {
                log::warn!("Event recorder lock poisoned, recovering: {}", e);
                e.into_inner().clone()
            }
        }
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: &str, payload: Value) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(e) => e.into_inner(),
        };
        events.push((event.to_string(), payload));
    }
}

pub fn emit_event<T: Serialize>(sink: &dyn EventSink, event: &str, payload: &T) {
    if let Ok(value) = serde_json::to_value(payload) {
        sink.emit(event, value);
    }
}
