//! Ribbon - a sectioned list adapter.
//!
//! Ribbon binds an ordered list of sections, each holding heterogeneous row
//! view models, to a scrollable list widget that recycles its row and header
//! views. The adapter answers the widget's structure queries, dequeues and
//! binds reusable views by reuse identifier, and pairs every mutation of its
//! sections with the matching incremental widget update or a full reload.
//! Layout, rendering and animation stay with the widget.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ribbon::prelude::*;
//!
//! #[derive(Default)]
//! struct MessageCell {
//!     text: String,
//! }
//!
//! impl ReusableView for MessageCell {
//!     fn as_loadable_cell(&mut self) -> Option<&mut dyn LoadableCell> {
//!         Some(self)
//!     }
//! }
//!
//! impl LoadableCell for MessageCell {
//!     fn load_row(&mut self, item: &dyn RowItem, _path: IndexPath) {
//!         if let Some(text) = item.context().and_then(|c| c.downcast_ref::<String>().cloned()) {
//!             self.text = text;
//!         }
//!     }
//! }
//!
//! let registry = Arc::new(ViewRegistry::new());
//! registry.register_view::<MessageCell>("Chat.MessageCell").unwrap();
//!
//! let mut adapter = ListAdapter::attach(HeadlessListWidget::new(), registry);
//! adapter.append_items(vec![
//!     Arc::new(BasicRow::new("Chat.MessageCell").with_context(String::from("hi"))),
//! ]);
//!
//! let cell = adapter.cell_for_row(IndexPath::new(0, 0)).unwrap();
//! assert_eq!(cell.downcast_ref::<MessageCell>().unwrap().text, "hi");
//! ```

pub mod adapter;
pub mod config;
mod error;
pub mod model;
pub mod prelude;
pub mod provider;
pub mod registry;
pub mod view;
pub mod widget;

pub use adapter::{AdapterSignals, ListAdapter, ListAdapterDelegate, ListDataSource, ListDelegate};
pub use config::{AdapterConfig, SeparatorStyle};
pub use error::{AdapterError, Result};
pub use widget::RowAnimation;

pub use ribbon_core::{
    logging, signal, thread_check, ConnectionGuard, ConnectionId, PerfSpan, Signal, SignalError,
    ThreadAffinity,
};
