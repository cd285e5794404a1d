// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting in-memory activity events.
//!
//! This module provides infrastructure for capturing diagnostic events during
//! application usage and storing them in a memory-bounded circular buffer.
//! Error toasts and form submissions feed it, so a crash report or a support
//! session can show what the user was doing last.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Enum representing different types of diagnostic events
//! - [`DiagnosticsHandle`]: Clone-able writer/reader handle shared across the app

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsHandle;
pub use events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction};
