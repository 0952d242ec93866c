//! Core systems for Ribbon.
//!
//! This crate provides the foundational pieces the Ribbon list adapter is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe change notifications
//! - **Thread Affinity**: Verification that an adapter stays on its widget's thread
//! - **Logging**: `tracing` targets, span names and perf spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use ribbon_core::Signal;
//!
//! // Create a signal that notifies when a row count changes
//! let rows_changed = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = rows_changed.connect(|count| {
//!     println!("Row count is now: {}", count);
//! });
//!
//! // Emit the signal
//! rows_changed.emit(42);
//!
//! // Disconnect when done
//! rows_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;
pub mod thread_check;

pub use error::SignalError;
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
