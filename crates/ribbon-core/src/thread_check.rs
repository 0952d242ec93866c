//! Thread affinity checks for Ribbon.
//!
//! A list adapter belongs to the thread that owns its widget. Incremental
//! updates are bracketed (begin/end) and not reentrant, so calling into an
//! adapter from another thread is a bug even when the types involved are
//! `Send`.
//!
//! [`ThreadAffinity`] remembers the thread it was created on. Owners call
//! [`debug_check`](ThreadAffinity::debug_check) at the top of every mutating
//! operation:
//!
//! ```
//! use ribbon_core::thread_check::ThreadAffinity;
//!
//! struct Rows {
//!     affinity: ThreadAffinity,
//!     rows: Vec<String>,
//! }
//!
//! impl Rows {
//!     fn push(&mut self, row: String) {
//!         self.affinity.debug_check("push");
//!         self.rows.push(row);
//!     }
//! }
//!
//! let mut rows = Rows { affinity: ThreadAffinity::current(), rows: Vec::new() };
//! rows.push("first".into());
//! ```
//!
//! `debug_check` is active when [`are_thread_checks_enabled`] returns `true`:
//! by default in debug builds only.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, ThreadId};

use crate::logging::targets;

static CHECKS_ENABLED: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

/// Turns [`ThreadAffinity::debug_check`] on or off for the whole process.
pub fn set_thread_checks_enabled(enabled: bool) {
    CHECKS_ENABLED.store(enabled, Ordering::SeqCst);
}

/// Returns `true` if [`ThreadAffinity::debug_check`] verifies the thread.
#[inline]
pub fn are_thread_checks_enabled() -> bool {
    CHECKS_ENABLED.load(Ordering::Relaxed)
}

/// The thread an object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    owner: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Binds to the calling thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            owner: thread::current().id(),
        }
    }

    /// Returns the owning thread's ID.
    #[inline]
    pub fn owner(&self) -> ThreadId {
        self.owner
    }

    /// Returns `true` when called on the owning thread.
    #[inline]
    pub fn is_owner_thread(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Verifies that `operation` runs on the owning thread, in every build.
    ///
    /// # Panics
    ///
    /// Panics when called from any other thread.
    pub fn check(&self, operation: &str) {
        if !self.is_owner_thread() {
            self.violation(operation);
        }
    }

    /// Like [`check`](Self::check), but only while thread checks are enabled.
    #[inline]
    pub fn debug_check(&self, operation: &str) {
        if are_thread_checks_enabled() {
            self.check(operation);
        }
    }

    #[cold]
    #[inline(never)]
    fn violation(&self, operation: &str) -> ! {
        let current = thread::current();
        let name = current.name().unwrap_or("<unnamed>");

        tracing::error!(
            target: targets::THREAD,
            operation,
            owner = ?self.owner,
            current = ?current.id(),
            "called from a thread that does not own the list"
        );

        panic!(
            "`{operation}` called on thread \"{name}\" ({:?}), but the list belongs to thread {:?}; \
             adapters and their widgets must stay on the thread that owns the widget",
            current.id(),
            self.owner
        )
    }
}
