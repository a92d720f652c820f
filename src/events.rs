// src/events.rs
//! Engine event publishing.
//!
//! Events are telemetry: fire-and-forget, at-most-once, and safe with zero
//! subscribers. The bundled JSONL sink appends to `.vitals/events.jsonl`.

use anyhow::Result;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::types::{CounterSnapshot, HealthSummary, ScanSummary};
use crate::utils::now_millis;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    FileAnalyzed {
        path: String,
        issues: usize,
    },
    FileRemoved {
        path: String,
    },
    CriticalIssues {
        count: usize,
    },
    HealthCheck {
        summary: HealthSummary,
    },
    MetricsUpdated {
        counters: CounterSnapshot,
    },
    ScanCompleted {
        summary: ScanSummary,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct EngineEvent {
    pub timestamp: u64,
    pub kind: EventKind,
}

/// A destination for engine events. Implementations must not panic and
/// should swallow their own I/O failures.
pub trait EventSink: Send {
    fn accept(&self, event: &EngineEvent);
}

/// Fans events out to registered sinks. Works fine with none.
#[derive(Default)]
pub struct EventBus {
    sinks: Vec<Box<dyn EventSink>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn publish(&self, kind: EventKind) {
        if self.sinks.is_empty() {
            return;
        }
        let event = EngineEvent {
            timestamp: now_millis(),
            kind,
        };
        for sink in &self.sinks {
            sink.accept(&event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

/// Appends events to `.vitals/events.jsonl` under the project root.
pub struct JsonlSink {
    log_path: PathBuf,
}

impl JsonlSink {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        let log_path = root.join(".vitals").join("events.jsonl");
        Self { log_path }
    }

    fn append(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

impl EventSink for JsonlSink {
    fn accept(&self, event: &EngineEvent) {
        // Best-effort; a failed append never disturbs analysis.
        if let Ok(json) = serde_json::to_string(event) {
            let _ = self.append(&json);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Capture(Arc<Mutex<Vec<String>>>);

    impl EventSink for Capture {
        fn accept(&self, event: &EngineEvent) {
            self.0
                .lock()
                .unwrap()
                .push(serde_json::to_string(&event.kind).unwrap());
        }
    }

    #[test]
    fn publish_with_no_sinks_is_a_noop() {
        let bus = EventBus::new();
        bus.publish(EventKind::CriticalIssues { count: 3 });
        assert_eq!(bus.sink_count(), 0);
    }

    #[test]
    fn publish_reaches_every_sink() {
        let seen_a = Arc::new(Mutex::new(Vec::new()));
        let seen_b = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.register(Box::new(Capture(Arc::clone(&seen_a))));
        bus.register(Box::new(Capture(Arc::clone(&seen_b))));

        bus.publish(EventKind::FileRemoved {
            path: String::from("src/old.js"),
        });

        assert_eq!(seen_a.lock().unwrap().len(), 1);
        assert_eq!(seen_b.lock().unwrap().len(), 1);
        assert!(seen_a.lock().unwrap()[0].contains("file_removed"));
    }

    #[test]
    fn jsonl_sink_appends_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonlSink::new(dir.path());
        let mut bus = EventBus::new();
        bus.register(Box::new(sink));

        bus.publish(EventKind::CriticalIssues { count: 1 });
        bus.publish(EventKind::FileAnalyzed {
            path: String::from("a.js"),
            issues: 2,
        });

        let log = fs::read_to_string(dir.path().join(".vitals/events.jsonl")).unwrap();
        let lines: Vec<_> = log.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("critical_issues"));
        assert!(lines[1].contains("file_analyzed"));
    }
}
