//! Sections: ordered groups of rows with an optional header.

use std::sync::Arc;

use super::item::RowItem;

/// An ordered group of rows, optionally introduced by a header view.
///
/// Sections are built by the caller and handed to
/// [`ListAdapter::add_section`](crate::ListAdapter::add_section). Row order
/// within the section is display order.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ribbon::model::{BasicRow, RowItem, Section};
///
/// let section = Section::new()
///     .with_header("Feed.DayHeader", 28.0)
///     .with_item(Arc::new(BasicRow::new("Feed.PostCell")))
///     .with_item(Arc::new(BasicRow::new("Feed.PostCell")));
///
/// assert_eq!(section.len(), 2);
/// assert_eq!(section.header_reuse_identifier(), Some("Feed.DayHeader"));
/// ```
#[derive(Clone, Default, Debug)]
pub struct Section {
    items: Vec<Arc<dyn RowItem>>,
    header_reuse_identifier: Option<String>,
    header_height: Option<f32>,
}

impl Section {
    /// Creates an empty section without a header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a header-less section holding `items`.
    pub fn with_items(items: Vec<Arc<dyn RowItem>>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Sets the header view and its fixed height.
    pub fn with_header(mut self, reuse_identifier: impl Into<String>, height: f32) -> Self {
        self.header_reuse_identifier = Some(reuse_identifier.into());
        self.header_height = Some(height);
        self
    }

    /// Sets the header view, leaving the height unset.
    pub fn with_header_identifier(mut self, reuse_identifier: impl Into<String>) -> Self {
        self.header_reuse_identifier = Some(reuse_identifier.into());
        self
    }

    /// Sets the fixed header height.
    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = Some(height);
        self
    }

    /// Appends a row.
    pub fn with_item(mut self, item: Arc<dyn RowItem>) -> Self {
        self.items.push(item);
        self
    }

    /// Returns the rows in display order.
    pub fn items(&self) -> &[Arc<dyn RowItem>] {
        &self.items
    }

    /// Returns the row at `row`.
    pub fn item(&self, row: usize) -> Option<&Arc<dyn RowItem>> {
        self.items.get(row)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the section has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the header's reuse identifier, if the section has a header.
    pub fn header_reuse_identifier(&self) -> Option<&str> {
        self.header_reuse_identifier.as_deref()
    }

    /// Returns the fixed header height, if set.
    pub fn header_height(&self) -> Option<f32> {
        self.header_height
    }

    pub(crate) fn append(&mut self, items: Vec<Arc<dyn RowItem>>) {
        self.items.extend(items);
    }

    /// Inserts `items` starting at `at`, preserving their order.
    pub(crate) fn insert_run(&mut self, at: usize, items: Vec<Arc<dyn RowItem>>) {
        self.items.splice(at..at, items);
    }

    pub(crate) fn remove(&mut self, row: usize) -> Arc<dyn RowItem> {
        self.items.remove(row)
    }
}
