// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module recording a bounded in-memory activity log.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds
//! - [`DiagnosticEvent`]: Timestamped user action or warning
//! - [`DiagnosticsCollector`]: Owns the buffer and echoes events to stderr
//!
//! Nothing is written to disk or sent anywhere.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
