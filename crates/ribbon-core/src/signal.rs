//! Change notifications for Ribbon.
//!
//! A [`Signal`] is a list of callbacks ("slots") sharing one argument type.
//! The list adapter owns one signal per kind of change it makes (rows
//! inserted, row removed, row selected, ...) and emits it right after the
//! matching widget call, so observers never see the adapter ahead of the
//! widget.
//!
//! Delivery is always direct: slots run on the emitting thread, in the order
//! they were connected, before `emit` returns. There is no queued delivery;
//! an adapter never leaves the thread that owns its widget.
//!
//! # Example
//!
//! ```
//! use ribbon_core::Signal;
//!
//! let row_count_changed = Signal::<usize>::new();
//! let id = row_count_changed.connect(|count| println!("{count} rows"));
//!
//! row_count_changed.emit(12);
//! row_count_changed.disconnect(id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::SignalError;
use crate::logging::targets;

new_key_type! {
    /// Identifies one slot connected to a [`Signal`].
    ///
    /// Keys are never reused, so a stale ID cannot disconnect a newer slot.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

struct SignalState<Args> {
    slots: SlotMap<ConnectionId, Slot<Args>>,
    blocked: bool,
}

/// A typed notification with any number of connected slots.
///
/// `Args` is what every slot receives by reference: `()` for a bare
/// notification, a value or a tuple otherwise.
///
/// The slot table is unlocked while slots run, so a slot may connect to or
/// disconnect from this signal. Such changes apply from the next emission.
pub struct Signal<Args> {
    state: Mutex<SignalState<Args>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Signal")
            .field("connections", &state.slots.len())
            .field("blocked", &state.blocked)
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Creates a signal without slots.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SignalState {
                slots: SlotMap::with_key(),
                blocked: false,
            }),
        }
    }

    /// Connects `slot` and returns its ID.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.state.lock().slots.insert(Arc::new(slot))
    }

    /// Connects `slot` for as long as the returned guard lives.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    /// use ribbon_core::Signal;
    ///
    /// let rows_removed = Signal::<usize>::new();
    /// let removed = Arc::new(AtomicUsize::new(0));
    /// {
    ///     let removed = removed.clone();
    ///     let _guard = rows_removed.connect_scoped(move |_| {
    ///         removed.fetch_add(1, Ordering::SeqCst);
    ///     });
    ///     rows_removed.emit(3);
    /// }
    /// rows_removed.emit(4); // the guard is gone, nobody listens
    /// assert_eq!(removed.load(Ordering::SeqCst), 1);
    /// ```
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            id: self.connect(slot),
            signal: self,
        }
    }

    /// Disconnects a slot. Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.state.lock().slots.remove(id).is_some()
    }

    /// Disconnects a slot, reporting an unknown ID as an error.
    pub fn try_disconnect(&self, id: ConnectionId) -> Result<(), SignalError> {
        if self.disconnect(id) {
            Ok(())
        } else {
            Err(SignalError::InvalidConnection)
        }
    }

    /// Disconnects every slot.
    pub fn disconnect_all(&self) {
        self.state.lock().slots.clear();
    }

    /// Returns the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.state.lock().slots.len()
    }

    /// Suppresses (or resumes) emission. Emitting a blocked signal does nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.state.lock().blocked = blocked;
    }

    /// Returns `true` while emission is suppressed.
    pub fn is_blocked(&self) -> bool {
        self.state.lock().blocked
    }

    /// Runs every connected slot with `args`, in connection order.
    #[tracing::instrument(skip_all, target = "ribbon_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let slots: Vec<Slot<Args>> = {
            let state = self.state.lock();
            if state.blocked {
                tracing::trace!(target: targets::SIGNAL, "blocked, emission skipped");
                return;
            }
            state.slots.values().cloned().collect()
        };
        tracing::trace!(target: targets::SIGNAL, slots = slots.len(), "emit");

        for slot in &slots {
            slot(&args);
        }
    }
}

/// Keeps a slot connected until dropped.
///
/// Created by [`Signal::connect_scoped`]; borrows the signal so it cannot
/// outlive it.
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// Returns the ID of the guarded slot.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> std::fmt::Debug for ConnectionGuard<'_, Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ConnectionGuard").field(&self.id).finish()
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
static_assertions::assert_impl_all!(Signal<Vec<usize>>: Send, Sync);
