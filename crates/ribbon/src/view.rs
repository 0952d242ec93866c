//! Reusable views: the cells and headers a list widget recycles.
//!
//! A widget keeps a pool of views per reuse identifier and hands one back on
//! dequeue. Views that want to render a row (or a section header) opt into
//! binding by implementing [`LoadableCell`] (or [`LoadableHeader`]) and
//! exposing it through [`ReusableView::as_loadable_cell`]. The adapter checks
//! for that capability on every dequeue; a view without it is returned
//! untouched.
//!
//! # Example
//!
//! ```
//! use ribbon::model::{IndexPath, RowItem};
//! use ribbon::view::{LoadableCell, ReusableView};
//!
//! #[derive(Default)]
//! struct TitleCell {
//!     text: String,
//! }
//!
//! impl ReusableView for TitleCell {
//!     fn prepare_for_reuse(&mut self) {
//!         self.text.clear();
//!     }
//!
//!     fn as_loadable_cell(&mut self) -> Option<&mut dyn LoadableCell> {
//!         Some(self)
//!     }
//! }
//!
//! impl LoadableCell for TitleCell {
//!     fn load_row(&mut self, item: &dyn RowItem, path: IndexPath) {
//!         self.text = format!("{} at {}", item.reuse_identifier(), path);
//!     }
//! }
//! ```

use std::any::Any;
use std::fmt;

use crate::model::{IndexPath, RowItem, Section};

/// Which role a reusable view plays in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// A row cell.
    Cell,
    /// A section header.
    Header,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell => write!(f, "cell"),
            Self::Header => write!(f, "header"),
        }
    }
}

/// A view instance that a list widget can recycle.
pub trait ReusableView: Any + Send {
    /// Resets transient state before the view is handed out again.
    fn prepare_for_reuse(&mut self) {}

    /// Returns the row-binding capability, if this view has one.
    fn as_loadable_cell(&mut self) -> Option<&mut dyn LoadableCell> {
        None
    }

    /// Returns the header-binding capability, if this view has one.
    fn as_loadable_header(&mut self) -> Option<&mut dyn LoadableHeader> {
        None
    }
}

impl dyn ReusableView {
    /// Downcasts the view to its concrete type.
    pub fn downcast_ref<T: ReusableView>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Downcasts the view to its concrete type, mutably.
    pub fn downcast_mut<T: ReusableView>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }
}

impl fmt::Debug for dyn ReusableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReusableView").finish_non_exhaustive()
    }
}

/// A cell that renders itself from a row item.
pub trait LoadableCell {
    /// Binds the cell to `item`, displayed at `path`.
    fn load_row(&mut self, item: &dyn RowItem, path: IndexPath);
}

/// A header view that renders itself from its section.
pub trait LoadableHeader {
    /// Binds the header to `section`, displayed at index `section_index`.
    fn load_section(&mut self, section: &Section, section_index: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BasicRow;

    #[derive(Default)]
    struct Inert;

    impl ReusableView for Inert {}

    #[derive(Default)]
    struct Bound {
        loaded: Vec<IndexPath>,
    }

    impl ReusableView for Bound {
        fn as_loadable_cell(&mut self) -> Option<&mut dyn LoadableCell> {
            Some(self)
        }
    }

    impl LoadableCell for Bound {
        fn load_row(&mut self, _item: &dyn RowItem, path: IndexPath) {
            self.loaded.push(path);
        }
    }

    #[test]
    fn test_capability_presence() {
        let mut inert: Box<dyn ReusableView> = Box::new(Inert);
        assert!(inert.as_loadable_cell().is_none());
        assert!(inert.as_loadable_header().is_none());

        let mut bound: Box<dyn ReusableView> = Box::new(Bound::default());
        let row = BasicRow::new("A.Cell");
        bound
            .as_loadable_cell()
            .expect("bound view is loadable")
            .load_row(&row, IndexPath::new(1, 0));

        let bound = bound.downcast_ref::<Bound>().unwrap();
        assert_eq!(bound.loaded, vec![IndexPath::new(1, 0)]);
    }

    #[test]
    fn test_view_kind_display() {
        assert_eq!(ViewKind::Cell.to_string(), "cell");
        assert_eq!(ViewKind::Header.to_string(), "header");
    }
}
