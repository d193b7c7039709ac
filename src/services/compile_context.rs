// Compile Context
// Per-call state shared by the builders: id allocation, name limits, warnings

use std::collections::HashSet;
use crate::services::{
    emit_event, CompileWarning, EventSink, IdAllocator, NoopEventSink, EVENT_NAME_COLLISION,
    EVENT_NAME_TRUNCATED,
};

/// Platform limit for group, output and description names
pub const MAX_NAME_LENGTH: usize = 32;

static NOOP_SINK: NoopEventSink = NoopEventSink;

/// Prefix of `name` holding at most `max` characters
pub fn limit_name(name: &str, max: usize) -> &str {
    match name.char_indices().nth(max) {
        Some((cut, _)) => &name[..cut],
        None => name,
    }
}

/// Scoped to a single compile call; never shared between calls
pub struct CompileContext<'a> {
    allocator: IdAllocator,
    warnings: Vec<CompileWarning>,
    truncated: HashSet<String>,
    collisions: HashSet<(&'static str, String)>,
    events: &'a dyn EventSink,
}

impl<'a> CompileContext<'a> {
    pub fn new(events: &'a dyn EventSink) -> Self {
        Self::with_allocator(IdAllocator::new(), events)
    }

    pub fn with_allocator(allocator: IdAllocator, events: &'a dyn EventSink) -> Self {
        Self {
            allocator,
            warnings: Vec::new(),
            truncated: HashSet::new(),
            collisions: HashSet::new(),
            events,
        }
    }

    /// Fit a generated name to [`MAX_NAME_LENGTH`], recording a warning when it is cut
    pub fn name(&mut self, raw: String) -> String {
        let limited = limit_name(&raw, MAX_NAME_LENGTH);
        if limited.len() == raw.len() {
            return raw;
        }

        let truncated = limited.to_string();
        log::warn!(
            "Generated name '{}' exceeds {} characters, truncated to '{}'",
            raw,
            MAX_NAME_LENGTH,
            truncated
        );
        let warning = CompileWarning::NameTruncated {
            original: raw,
            truncated: truncated.clone(),
        };
        emit_event(self.events, EVENT_NAME_TRUNCATED, &warning);
        self.warnings.push(warning);
        self.truncated.insert(truncated.clone());
        truncated
    }

    /// True if `name` is the result of a truncation in this compile
    pub fn is_truncated(&self, name: &str) -> bool {
        self.truncated.contains(name)
    }

    /// Accept a repeated `entity` name when truncation produced it, recording one
    /// `NameCollision` warning per name. Returns false for any other duplicate.
    pub fn tolerate_collision(&mut self, entity: &'static str, name: &str) -> bool {
        if !self.is_truncated(name) {
            return false;
        }
        if !self.collisions.insert((entity, name.to_string())) {
            return true;
        }

        log::warn!(
            "Truncated {} name '{}' is shared by several entities; references resolve to the first",
            entity,
            name
        );
        let warning = CompileWarning::NameCollision {
            entity: entity.to_string(),
            name: name.to_string(),
        };
        emit_event(self.events, EVENT_NAME_COLLISION, &warning);
        self.warnings.push(warning);
        true
    }

    pub fn allocate_id(&mut self, length: usize) -> String {
        self.allocator.new_id(length)
    }

    pub fn reserve_id(&mut self, id: &str) -> bool {
        self.allocator.reserve(id)
    }

    pub fn warnings(&self) -> &[CompileWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<CompileWarning> {
        self.warnings
    }
}

impl Default for CompileContext<'static> {
    fn default() -> Self {
        Self::new(&NOOP_SINK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::RecordingEventSink;

    #[test]
    fn test_limit_name_is_prefix() {
        let long = "a-very-long-channel-name-for-testing-limits";
        assert_eq!(limit_name(long, 32), &long[..32]);
        assert_eq!(limit_name("short", 32), "short");
        assert_eq!(limit_name("", 32), "");
    }

    #[test]
    fn test_limit_name_counts_characters() {
        let name = "채널".repeat(20);
        let limited = limit_name(&name, 32);
        assert_eq!(limited.chars().count(), 32);
        assert!(name.starts_with(limited));
    }

    #[test]
    fn test_name_within_limit_has_no_warning() {
        let mut ctx = CompileContext::default();
        let exact = "x".repeat(MAX_NAME_LENGTH);
        assert_eq!(ctx.name(exact.clone()), exact);
        assert!(ctx.warnings().is_empty());
    }

    #[test]
    fn test_truncation_records_warning_and_event() {
        let sink = RecordingEventSink::new();
        let mut ctx = CompileContext::new(&sink);

        let raw = "championship-final-broadcast-youtube-video".to_string();
        let name = ctx.name(raw.clone());

        assert_eq!(name, "championship-final-broadcast-you");
        assert_eq!(
            ctx.warnings(),
            &[CompileWarning::NameTruncated {
                original: raw.clone(),
                truncated: name.clone(),
            }]
        );

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, EVENT_NAME_TRUNCATED);
        assert_eq!(events[0].1["original"], raw);
        assert_eq!(events[0].1["kind"], "nameTruncated");
    }

    #[test]
    fn test_collision_tolerated_only_for_truncated_names() {
        let sink = RecordingEventSink::new();
        let mut ctx = CompileContext::new(&sink);
        let name = ctx.name("championship-final-broadcast-youtube-video".to_string());

        assert!(ctx.is_truncated(&name));
        assert!(!ctx.is_truncated("show1-video"));
        assert!(!ctx.tolerate_collision("video description", "show1-video"));

        assert!(ctx.tolerate_collision("video description", &name));
        assert!(ctx.tolerate_collision("video description", &name));
        assert!(ctx.tolerate_collision("output", &name));

        let collisions: Vec<&CompileWarning> = ctx
            .warnings()
            .iter()
            .filter(|w| matches!(w, CompileWarning::NameCollision { .. }))
            .collect();
        assert_eq!(
            collisions,
            vec![
                &CompileWarning::NameCollision {
                    entity: "video description".to_string(),
                    name: name.clone(),
                },
                &CompileWarning::NameCollision {
                    entity: "output".to_string(),
                    name: name.clone(),
                },
            ]
        );

        let events = sink.events();
        let collision_events: Vec<_> = events
            .iter()
            .filter(|(event, _)| event == EVENT_NAME_COLLISION)
            .collect();
        assert_eq!(collision_events.len(), 2);
        assert_eq!(collision_events[0].1["kind"], "nameCollision");
        assert_eq!(collision_events[0].1["entity"], "video description");
        assert_eq!(collision_events[0].1["name"], name);
    }
}
