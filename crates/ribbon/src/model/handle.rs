//! Stable handles for rows owned by a list adapter.

use slotmap::new_key_type;

new_key_type! {
    /// An opaque, stable handle to a row held by a [`ListAdapter`](crate::ListAdapter).
    ///
    /// Handles are assigned when rows are added and stay valid, unaffected by
    /// inserts and removals around them, until the row itself is removed or
    /// the adapter is cleared. A handle whose row is gone never resolves again,
    /// even if a later row reuses its slot.
    pub struct ItemHandle;
}
