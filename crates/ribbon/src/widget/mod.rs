//! The host widget contract.
//!
//! [`ListWidget`] is the set of calls a list adapter issues to the scrollable
//! list it drives: template registration, full reloads, begin/end bracketed
//! incremental updates, dequeue by reuse identifier and visual deselection.
//! Layout, rendering, diffing and animation stay on the widget's side.
//!
//! Bindings to a native toolkit implement this trait over the toolkit's list
//! view. [`HeadlessListWidget`] implements it in memory for hosts that draw
//! rows themselves, and for tests.

mod headless;

use serde::{Deserialize, Serialize};

use crate::config::AdapterConfig;
use crate::model::IndexPath;
use crate::registry::ViewTemplate;
use crate::view::ReusableView;

pub use headless::{HeadlessListWidget, WidgetEvent};

/// Animation used by the widget for an incremental row update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowAnimation {
    /// Let the widget pick a suitable animation.
    #[default]
    Automatic,
    /// Cross-fade the rows.
    Fade,
    /// Slide from/to the right.
    Right,
    /// Slide from/to the left.
    Left,
    /// Slide from/to the top.
    Top,
    /// Slide from/to the bottom.
    Bottom,
    /// Update without animation.
    None,
}

/// A scrollable list that recycles row and header views.
///
/// Insert, delete and reload calls are always issued between
/// [`begin_updates`](ListWidget::begin_updates) and
/// [`end_updates`](ListWidget::end_updates), after the adapter's model already
/// reflects the change. Implementations may apply them immediately or at
/// `end_updates`.
pub trait ListWidget {
    /// Applies appearance settings. Called once, when an adapter attaches.
    fn configure(&mut self, config: &AdapterConfig);

    /// Registers a template for row cells under its identifier.
    fn register_cell(&mut self, template: ViewTemplate);

    /// Registers a template for section headers under its identifier.
    fn register_header(&mut self, template: ViewTemplate);

    /// Discards all displayed rows and queries the data source again.
    fn reload_data(&mut self);

    /// Opens an incremental update batch.
    fn begin_updates(&mut self);

    /// Closes an incremental update batch and animates its changes.
    fn end_updates(&mut self);

    /// Inserts rows at the given paths.
    fn insert_rows(&mut self, paths: &[IndexPath], animation: RowAnimation);

    /// Deletes rows at the given paths.
    fn delete_rows(&mut self, paths: &[IndexPath], animation: RowAnimation);

    /// Re-renders rows in place.
    fn reload_rows(&mut self, paths: &[IndexPath], animation: RowAnimation);

    /// Returns a recycled or fresh cell for `identifier`.
    ///
    /// Returns `None` if no cell template is registered under `identifier`.
    fn dequeue_cell(&mut self, identifier: &str) -> Option<Box<dyn ReusableView>>;

    /// Returns a recycled or fresh header view for `identifier`.
    ///
    /// Returns `None` if no header template is registered under `identifier`.
    fn dequeue_header(&mut self, identifier: &str) -> Option<Box<dyn ReusableView>>;

    /// Clears the selection highlight of a row.
    fn deselect_row(&mut self, path: IndexPath, animated: bool);
}
