//! Notifications emitted by a list adapter.

use ribbon_core::Signal;

use crate::model::IndexPath;

/// Signals emitted by a [`ListAdapter`](super::ListAdapter).
///
/// Each signal fires after the matching widget call has been issued, so a
/// slot observes the adapter and the widget in agreement.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use parking_lot::Mutex;
/// use ribbon::adapter::AdapterSignals;
/// use ribbon::model::IndexPath;
///
/// let signals = AdapterSignals::default();
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let recv = seen.clone();
/// signals.rows_inserted.connect(move |paths: &Vec<IndexPath>| {
///     recv.lock().extend(paths.iter().copied());
/// });
///
/// signals.rows_inserted.emit(vec![IndexPath::new(0, 0)]);
/// assert_eq!(seen.lock().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AdapterSignals {
    /// Emitted after a full widget reload.
    pub reloaded: Signal<()>,

    /// Emitted after rows were inserted in one batch.
    /// Args: inserted index paths, in ascending order
    pub rows_inserted: Signal<Vec<IndexPath>>,

    /// Emitted after a row was deleted through an incremental update.
    pub rows_removed: Signal<IndexPath>,

    /// Emitted after a single row was reloaded in place.
    pub row_reloaded: Signal<IndexPath>,

    /// Emitted when a row is tapped, before it is deselected.
    pub row_selected: Signal<IndexPath>,

    /// Emitted when a list provider reports a failed fetch.
    /// Args: the error message
    pub fetch_failed: Signal<String>,
}

impl AdapterSignals {
    /// Creates signals with no connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks or unblocks every signal at once.
    pub fn set_blocked(&self, blocked: bool) {
        self.reloaded.set_blocked(blocked);
        self.rows_inserted.set_blocked(blocked);
        self.rows_removed.set_blocked(blocked);
        self.row_reloaded.set_blocked(blocked);
        self.row_selected.set_blocked(blocked);
        self.fetch_failed.set_blocked(blocked);
    }
}

static_assertions::assert_impl_all!(AdapterSignals: Send, Sync);
