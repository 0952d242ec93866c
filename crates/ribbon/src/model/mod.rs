//! Row and section model for Ribbon.
//!
//! The model is what a list adapter holds and a widget displays: an ordered
//! list of [`Section`]s, each an ordered list of [`RowItem`]s. Rows are
//! addressed positionally by [`IndexPath`] and stably by [`ItemHandle`].
//!
//! # Core Types
//!
//! - `RowItem`: The trait row view models implement
//! - `Section`: Ordered rows plus an optional header
//! - `IndexPath`: (row, section) position
//! - `ItemHandle`: Stable identity of a row inside an adapter
//! - `RowAction`: Swipe/edit action offered by a row
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐  queries   ┌─────────────┐  dequeue/bind  ┌─────────────┐
//! │   Widget    │──────────> │ ListAdapter │──────────────> │ Reusable    │
//! │ (ListWidget)│ <──────────│  Sections   │                │ views       │
//! └─────────────┘  updates   └─────────────┘                └─────────────┘
//!                                   │
//!                                   └──> RowItem / IndexPath / ItemHandle
//! ```

mod debug;
mod handle;
mod index;
mod item;
mod section;

pub use debug::{SectionTreeDebug, TreeFormatOptions, TreeStyle};
pub use handle::ItemHandle;
pub use index::IndexPath;
pub use item::{BasicRow, RowAction, RowActionHandler, RowActionStyle, RowContext, RowHeight, RowItem};
pub use section::Section;
