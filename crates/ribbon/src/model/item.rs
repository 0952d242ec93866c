//! Row items: the view models rendered by list cells.
//!
//! A row item tells the adapter which reusable view renders it (its reuse
//! identifier) and, optionally, how tall it is, whether it can be edited and
//! which swipe actions it offers. Everything else about the item is opaque to
//! the adapter and only meaningful to the cell that binds it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::index::IndexPath;

/// Opaque, caller-defined payload carried by a row item.
pub type RowContext = Arc<dyn Any + Send + Sync>;

/// Trait for values that can be displayed as a list row.
///
/// Only [`reuse_identifier`](RowItem::reuse_identifier) is required; the other
/// capabilities have defaults matching a plain, non-editable, self-sizing row.
///
/// # Example
///
/// ```
/// use ribbon::model::{RowHeight, RowItem};
///
/// struct Headline {
///     title: String,
/// }
///
/// impl RowItem for Headline {
///     fn reuse_identifier(&self) -> &str {
///         "Feed.HeadlineCell"
///     }
///
///     fn height(&self) -> RowHeight {
///         RowHeight::Fixed(44.0)
///     }
/// }
/// ```
pub trait RowItem: Any + Send + Sync {
    /// Returns the reuse identifier of the view that renders this row.
    fn reuse_identifier(&self) -> &str;

    /// Returns the display height of this row.
    fn height(&self) -> RowHeight {
        RowHeight::Automatic
    }

    /// Returns `true` if the row can be edited (swiped for actions).
    fn can_edit(&self) -> bool {
        false
    }

    /// Returns the edit actions offered for this row.
    fn actions(&self) -> Option<Vec<RowAction>> {
        None
    }

    /// Returns the caller-defined context payload, if any.
    fn context(&self) -> Option<RowContext> {
        None
    }
}

impl dyn RowItem {
    /// Returns `true` if the row is of type `T`.
    pub fn is<T: RowItem>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Downcasts the row to its concrete type.
    ///
    /// Loadable cells use this to get at the fields of the view model they
    /// were dequeued for.
    pub fn downcast_ref<T: RowItem>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn RowItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowItem")
            .field("reuse_identifier", &self.reuse_identifier())
            .field("height", &self.height())
            .field("can_edit", &self.can_edit())
            .finish_non_exhaustive()
    }
}

/// Height of a row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RowHeight {
    /// Let the host widget size the row from its content.
    ///
    /// Hosts use [`AdapterConfig::estimated_row_height`](crate::AdapterConfig)
    /// as the initial estimate.
    #[default]
    Automatic,
    /// A fixed height in logical pixels.
    Fixed(f32),
}

impl RowHeight {
    /// Returns the fixed height, or `None` for automatic sizing.
    pub fn fixed(self) -> Option<f32> {
        match self {
            Self::Automatic => None,
            Self::Fixed(height) => Some(height),
        }
    }

    /// Returns `true` for automatic sizing.
    pub fn is_automatic(self) -> bool {
        matches!(self, Self::Automatic)
    }
}

/// Visual style of a row action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RowActionStyle {
    /// A regular action.
    #[default]
    Normal,
    /// A destructive action (typically rendered in red).
    Destructive,
}

/// Handler invoked when a row action is triggered.
pub type RowActionHandler = Arc<dyn Fn(IndexPath) + Send + Sync>;

/// An edit action offered by a row, such as "Delete" or "Archive".
#[derive(Clone)]
pub struct RowAction {
    title: String,
    style: RowActionStyle,
    handler: RowActionHandler,
}

impl RowAction {
    /// Creates a new row action.
    pub fn new<F>(title: impl Into<String>, style: RowActionStyle, handler: F) -> Self
    where
        F: Fn(IndexPath) + Send + Sync + 'static,
    {
        Self {
            title: title.into(),
            style,
            handler: Arc::new(handler),
        }
    }

    /// Creates a normal-style action.
    pub fn normal<F>(title: impl Into<String>, handler: F) -> Self
    where
        F: Fn(IndexPath) + Send + Sync + 'static,
    {
        Self::new(title, RowActionStyle::Normal, handler)
    }

    /// Creates a destructive-style action.
    pub fn destructive<F>(title: impl Into<String>, handler: F) -> Self
    where
        F: Fn(IndexPath) + Send + Sync + 'static,
    {
        Self::new(title, RowActionStyle::Destructive, handler)
    }

    /// Returns the action title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the action style.
    pub fn style(&self) -> RowActionStyle {
        self.style
    }

    /// Invokes the action handler for the row at `path`.
    pub fn invoke(&self, path: IndexPath) {
        (self.handler)(path);
    }
}

impl fmt::Debug for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("title", &self.title)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// A general-purpose row item configured through builder methods.
///
/// Useful when a row needs no fields of its own beyond a context payload.
///
/// # Example
///
/// ```
/// use ribbon::model::{BasicRow, RowHeight, RowItem};
///
/// let row = BasicRow::new("Settings.ToggleCell")
///     .with_height(RowHeight::Fixed(52.0))
///     .with_context(String::from("wifi"));
///
/// assert_eq!(row.reuse_identifier(), "Settings.ToggleCell");
/// let context = row.context().unwrap();
/// assert_eq!(context.downcast_ref::<String>().map(String::as_str), Some("wifi"));
/// ```
pub struct BasicRow {
    reuse_identifier: String,
    height: RowHeight,
    editable: bool,
    actions: Vec<RowAction>,
    context: RwLock<Option<RowContext>>,
}

impl BasicRow {
    /// Creates a row rendered by the view registered under `reuse_identifier`.
    pub fn new(reuse_identifier: impl Into<String>) -> Self {
        Self {
            reuse_identifier: reuse_identifier.into(),
            height: RowHeight::Automatic,
            editable: false,
            actions: Vec::new(),
            context: RwLock::new(None),
        }
    }

    /// Sets the row height.
    pub fn with_height(mut self, height: RowHeight) -> Self {
        self.height = height;
        self
    }

    /// Sets whether the row can be edited.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Adds an edit action. Adding an action also marks the row editable.
    pub fn with_action(mut self, action: RowAction) -> Self {
        self.actions.push(action);
        self.editable = true;
        self
    }

    /// Sets the context payload.
    pub fn with_context<T: Any + Send + Sync>(self, context: T) -> Self {
        *self.context.write() = Some(Arc::new(context));
        self
    }

    /// Replaces the context payload of a row that is already shared.
    pub fn set_context(&self, context: Option<RowContext>) {
        *self.context.write() = context;
    }
}

impl RowItem for BasicRow {
    fn reuse_identifier(&self) -> &str {
        &self.reuse_identifier
    }

    fn height(&self) -> RowHeight {
        self.height
    }

    fn can_edit(&self) -> bool {
        self.editable
    }

    fn actions(&self) -> Option<Vec<RowAction>> {
        if self.actions.is_empty() {
            None
        } else {
            Some(self.actions.clone())
        }
    }

    fn context(&self) -> Option<RowContext> {
        self.context.read().clone()
    }
}

impl fmt::Debug for BasicRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicRow")
            .field("reuse_identifier", &self.reuse_identifier)
            .field("height", &self.height)
            .field("editable", &self.editable)
            .field("actions", &self.actions)
            .field("has_context", &self.context.read().is_some())
            .finish()
    }
}
