//! Capability interfaces between an adapter, its host widget and its owner.

use std::sync::Arc;

use crate::model::{IndexPath, RowAction, RowHeight, RowItem};
use crate::view::ReusableView;

/// Receives row-level events from a [`ListAdapter`](super::ListAdapter).
///
/// Injected with [`ListAdapter::with_delegate`](super::ListAdapter::with_delegate).
/// Both methods default to doing nothing.
pub trait ListAdapterDelegate: Send + Sync {
    /// Called when the row at `path` is tapped, before it is deselected.
    fn did_select(&self, item: &Arc<dyn RowItem>, path: IndexPath) {
        let _ = (item, path);
    }

    /// Called every time a cell is dequeued and bound for `item`.
    ///
    /// Fires whether or not the dequeued view is loadable.
    fn row_bound(&self, item: &Arc<dyn RowItem>, path: IndexPath) {
        let _ = (item, path);
    }
}

/// Structure queries a host widget makes while laying out and drawing.
///
/// Queries never fail: a position that does not exist answers with zero,
/// `None` or `false` and logs a warning.
pub trait ListDataSource {
    /// Returns the number of sections.
    fn number_of_sections(&self) -> usize;

    /// Returns the number of rows in `section`.
    fn number_of_rows(&self, section: usize) -> usize;

    /// Dequeues the cell for the row at `path` and binds it if it is loadable.
    fn cell_for_row(&mut self, path: IndexPath) -> Option<Box<dyn ReusableView>>;

    /// Dequeues the header view for `section`, if the section has a header.
    fn header_for_section(&mut self, section: usize) -> Option<Box<dyn ReusableView>>;

    /// Returns whether the row at `path` can be edited.
    fn can_edit_row(&self, path: IndexPath) -> bool;

    /// Returns the edit actions of the row at `path`.
    fn edit_actions_for_row(&self, path: IndexPath) -> Option<Vec<RowAction>>;
}

/// Appearance and interaction queries a host widget makes.
pub trait ListDelegate {
    /// Returns the height of the row at `path`.
    fn height_for_row(&self, path: IndexPath) -> RowHeight;

    /// Returns the header height of `section`, `0.0` when it has none.
    fn height_for_header(&self, section: usize) -> f32;

    /// Handles a tap on the row at `path`.
    fn did_select_row(&mut self, path: IndexPath);
}
