// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log.

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{DiagnosticEvent, DiagnosticEventKind, UserAction};

/// Central collector for diagnostic events.
///
/// Events are stored in a memory-bounded circular buffer; old events are
/// evicted once the buffer reaches capacity. Warnings are always echoed to
/// stderr; user actions only in verbose mode.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    verbose: bool,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity, verbose: bool) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            verbose,
        }
    }

    /// Records a user action.
    pub fn log_action(&mut self, action: UserAction) {
        self.record(DiagnosticEventKind::UserAction { action });
    }

    /// Records a recoverable problem.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.record(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    fn record(&mut self, kind: DiagnosticEventKind) {
        let event = DiagnosticEvent::new(kind);
        if self.verbose || matches!(event.kind, DiagnosticEventKind::Warning { .. }) {
            eprintln!("{event}");
        }
        self.buffer.push(event);
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEvent> {
        self.buffer.last()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Number of stored warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.buffer
            .iter()
            .filter(|event| matches!(event.kind, DiagnosticEventKind::Warning { .. }))
            .count()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_action_stores_event() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::OpenLightbox { index: 3 });

        assert_eq!(collector.len(), 1);
        assert!(matches!(
            collector.last().map(|event| &event.kind),
            Some(DiagnosticEventKind::UserAction {
                action: UserAction::OpenLightbox { index: 3 }
            })
        ));
    }

    #[test]
    fn warnings_are_counted() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_warning("settings unreadable");
        collector.log_action(UserAction::ScrollToTop);
        collector.log_warning("asset folder missing");

        assert_eq!(collector.len(), 3);
        assert_eq!(collector.warning_count(), 2);
    }

    #[test]
    fn oldest_events_are_evicted() {
        let capacity = BufferCapacity::new(0);
        let mut collector = DiagnosticsCollector::new(capacity, false);
        for index in 0..capacity.value() + 5 {
            collector.log_action(UserAction::OpenLightbox { index });
        }

        assert_eq!(collector.len(), capacity.value());
        let first = collector.iter().next().map(|event| event.kind.clone());
        assert_eq!(
            first,
            Some(DiagnosticEventKind::UserAction {
                action: UserAction::OpenLightbox { index: 5 }
            })
        );
    }

    #[test]
    fn events_are_chronological() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::PanStarted);
        collector.log_action(UserAction::PanEnded);

        let stamps: Vec<_> = collector.iter().map(|event| event.timestamp).collect();
        assert!(stamps[0] <= stamps[1]);
    }

    #[test]
    fn verbose_flag_is_kept() {
        assert!(DiagnosticsCollector::new(BufferCapacity::default(), true).is_verbose());
        assert!(!DiagnosticsCollector::default().is_verbose());
    }
}
