//! The list adapter.
//!
//! [`ListAdapter`] owns a [`ListWidget`] and the sections it displays. Every
//! mutation of the section list is paired with either one batched incremental
//! widget update (inside `begin_updates`/`end_updates`) or a full
//! `reload_data`, so the widget never queries a model it has not been told
//! about.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ribbon::prelude::*;
//!
//! #[derive(Default)]
//! struct PostCell;
//! impl ReusableView for PostCell {}
//!
//! let registry = Arc::new(ViewRegistry::new());
//! registry.register_view::<PostCell>("Feed.PostCell").unwrap();
//!
//! let mut adapter = ListAdapter::attach(HeadlessListWidget::new(), registry);
//!
//! // First append creates a section and reloads.
//! adapter.append_items(vec![Arc::new(BasicRow::new("Feed.PostCell"))]);
//! // Later appends insert incrementally.
//! adapter.append_items(vec![
//!     Arc::new(BasicRow::new("Feed.PostCell")),
//!     Arc::new(BasicRow::new("Feed.PostCell")),
//! ]);
//!
//! assert_eq!(adapter.number_of_sections(), 1);
//! assert_eq!(adapter.number_of_rows(0), 3);
//! assert!(adapter.cell_for_row(IndexPath::new(2, 0)).is_some());
//! ```

mod delegate;
mod signals;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use ribbon_core::logging::{span_names, targets, PerfSpan};
use ribbon_core::ThreadAffinity;
use slotmap::SlotMap;

use crate::config::AdapterConfig;
use crate::error::{AdapterError, Result};
use crate::model::{IndexPath, ItemHandle, RowAction, RowHeight, RowItem, Section, SectionTreeDebug};
use crate::provider::{FetchError, ListProvider, ListProviderDelegate};
use crate::registry::ViewRegistry;
use crate::view::{ReusableView, ViewKind};
use crate::widget::ListWidget;

pub use delegate::{ListAdapterDelegate, ListDataSource, ListDelegate};
pub use signals::AdapterSignals;

/// Binds a sectioned list of row items to a [`ListWidget`].
///
/// The adapter lives on the thread that owns its widget; mutations check this
/// in debug builds.
pub struct ListAdapter<W: ListWidget> {
    widget: W,
    registry: Arc<ViewRegistry>,
    config: AdapterConfig,
    sections: Vec<Section>,
    /// Handles parallel to each section's rows.
    row_handles: Vec<Vec<ItemHandle>>,
    /// Handle to the row's current position, kept in step with `row_handles`.
    handles: SlotMap<ItemHandle, IndexPath>,
    registered_cells: HashSet<String>,
    registered_headers: HashSet<String>,
    delegate: Option<Arc<dyn ListAdapterDelegate>>,
    signals: AdapterSignals,
    fetching: bool,
    affinity: ThreadAffinity,
}

impl<W: ListWidget> ListAdapter<W> {
    /// Attaches a new adapter to `widget` with the default configuration.
    pub fn attach(widget: W, registry: Arc<ViewRegistry>) -> Self {
        Self::attach_with_config(widget, registry, AdapterConfig::default())
    }

    /// Attaches a new adapter to `widget`, applying `config` to it.
    pub fn attach_with_config(mut widget: W, registry: Arc<ViewRegistry>, config: AdapterConfig) -> Self {
        widget.configure(&config);
        tracing::debug!(target: targets::ADAPTER, ?config, "adapter attached");
        Self {
            widget,
            registry,
            config,
            sections: Vec::new(),
            row_handles: Vec::new(),
            handles: SlotMap::with_key(),
            registered_cells: HashSet::new(),
            registered_headers: HashSet::new(),
            delegate: None,
            signals: AdapterSignals::new(),
            fetching: false,
            affinity: ThreadAffinity::current(),
        }
    }

    /// Attaches a new adapter and pre-registers cell reuse identifiers.
    ///
    /// Identifiers the registry cannot resolve are skipped.
    pub fn attach_with_identifiers<I, S>(widget: W, registry: Arc<ViewRegistry>, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::attach(widget, registry).with_reuse_identifiers(identifiers)
    }

    /// Pre-registers cell reuse identifiers.
    pub fn with_reuse_identifiers<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for identifier in identifiers {
            self.register_cell_identifier(identifier.as_ref());
        }
        self
    }

    /// Sets the delegate notified of selections and cell binds.
    pub fn with_delegate(mut self, delegate: Arc<dyn ListAdapterDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Replaces or removes the delegate.
    pub fn set_delegate(&mut self, delegate: Option<Arc<dyn ListAdapterDelegate>>) {
        self.delegate = delegate;
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Registers the cell template for `identifier` with the widget.
    ///
    /// Returns `true` if the identifier is registered afterwards. Registering
    /// an identifier twice is a no-op; an identifier the registry cannot
    /// resolve is skipped and returns `false`.
    pub fn register_cell_identifier(&mut self, identifier: &str) -> bool {
        self.register_identifier(ViewKind::Cell, identifier)
    }

    /// Registers the header template for `identifier` with the widget.
    ///
    /// Same rules as [`register_cell_identifier`](Self::register_cell_identifier).
    pub fn register_header_identifier(&mut self, identifier: &str) -> bool {
        self.register_identifier(ViewKind::Header, identifier)
    }

    fn register_identifier(&mut self, kind: ViewKind, identifier: &str) -> bool {
        let registered = match kind {
            ViewKind::Cell => &mut self.registered_cells,
            ViewKind::Header => &mut self.registered_headers,
        };
        if registered.contains(identifier) {
            return true;
        }

        let Some(template) = self.registry.resolve(identifier) else {
            tracing::warn!(target: targets::REGISTRY, %kind, identifier, "unresolvable reuse identifier");
            return false;
        };

        match kind {
            ViewKind::Cell => self.widget.register_cell(template),
            ViewKind::Header => self.widget.register_header(template),
        }
        registered.insert(identifier.to_string());
        tracing::trace!(target: targets::REGISTRY, %kind, identifier, "registered with widget");
        true
    }

    /// Returns `true` if a cell template was registered for `identifier`.
    pub fn is_registered_cell(&self, identifier: &str) -> bool {
        self.registered_cells.contains(identifier)
    }

    /// Returns `true` if a header template was registered for `identifier`.
    pub fn is_registered_header(&self, identifier: &str) -> bool {
        self.registered_headers.contains(identifier)
    }

    fn register_items(&mut self, items: &[Arc<dyn RowItem>]) {
        for item in items {
            self.register_cell_identifier(item.reuse_identifier());
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Appends a section and reloads the widget.
    ///
    /// If the section names a header identifier the registry cannot resolve,
    /// nothing is added and `None` is returned. A section without a header
    /// identifier is added as a header-less section.
    ///
    /// Returns the index of the new section.
    pub fn add_section(&mut self, section: Section) -> Option<usize> {
        self.affinity.debug_check("add_section");

        if let Some(header) = section.header_reuse_identifier()
            && !self.register_header_identifier(header)
        {
            tracing::warn!(
                target: targets::ADAPTER,
                header,
                "section not added: header identifier cannot be resolved"
            );
            return None;
        }
        self.register_items(section.items());

        let index = self.sections.len();
        let handles = self.allocate_handles(index, 0, section.len());
        tracing::debug!(target: targets::ADAPTER, section = index, rows = section.len(), "section added");
        self.sections.push(section);
        self.row_handles.push(handles);
        self.reload();
        Some(index)
    }

    /// Appends rows to the last section.
    ///
    /// With no section yet, a header-less section is created and the widget
    /// reloaded. Otherwise the rows are inserted with one batched update at
    /// the end of the last section. Empty input does nothing.
    ///
    /// Returns the handles of the new rows, in order.
    pub fn append_items(&mut self, items: Vec<Arc<dyn RowItem>>) -> Vec<ItemHandle> {
        self.affinity.debug_check("append_items");

        if items.is_empty() {
            tracing::trace!(target: targets::ADAPTER, "append_items: nothing to append");
            return Vec::new();
        }
        self.register_items(&items);

        let count = items.len();
        let Some(section) = self.sections.len().checked_sub(1) else {
            let handles = self.allocate_handles(0, 0, count);
            self.sections.push(Section::with_items(items));
            self.row_handles.push(handles.clone());
            self.reload();
            return handles;
        };

        let first = self.sections[section].len();
        let handles = self.allocate_handles(section, first, count);
        self.sections[section].append(items);
        self.row_handles[section].extend_from_slice(&handles);

        let paths = IndexPath::contiguous(first, count, section);
        let animation = self.config.append_animation;
        self.batch(|widget| widget.insert_rows(&paths, animation));
        self.signals.rows_inserted.emit(paths);
        handles
    }

    /// Inserts rows into `section` starting at row `at`.
    ///
    /// The rows keep their relative order; rows previously at `at` or later
    /// move down. Empty input does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::SectionOutOfBounds`] for a missing section and
    /// [`AdapterError::InsertOutOfBounds`] if `at` is past the section's end.
    pub fn insert_items(&mut self, items: Vec<Arc<dyn RowItem>>, at: usize, section: usize) -> Result<Vec<ItemHandle>> {
        self.affinity.debug_check("insert_items");

        if items.is_empty() {
            tracing::trace!(target: targets::ADAPTER, "insert_items: nothing to insert");
            return Ok(Vec::new());
        }
        let len = self.section_len(section)?;
        if at > len {
            return Err(AdapterError::InsertOutOfBounds {
                path: IndexPath::new(at, section),
                count: len,
            });
        }
        self.register_items(&items);

        let count = items.len();
        let handles = self.allocate_handles(section, at, count);
        self.sections[section].insert_run(at, items);
        self.row_handles[section].splice(at..at, handles.iter().copied());
        self.reindex(section, at + count);

        let paths = IndexPath::contiguous(at, count, section);
        let animation = self.config.insert_animation;
        self.batch(|widget| widget.insert_rows(&paths, animation));
        self.signals.rows_inserted.emit(paths);
        Ok(handles)
    }

    /// Removes the row at `row` of `section` with one batched delete.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::SectionOutOfBounds`] or
    /// [`AdapterError::RowOutOfBounds`] if the row does not exist.
    pub fn remove_item_at(&mut self, row: usize, section: usize) -> Result<Arc<dyn RowItem>> {
        self.affinity.debug_check("remove_item_at");

        let path = IndexPath::new(row, section);
        let len = self.section_len(section)?;
        if row >= len {
            return Err(AdapterError::row_out_of_bounds(path, len));
        }

        let item = self.take_row(path);
        let animation = self.config.delete_animation;
        self.batch(|widget| widget.delete_rows(&[path], animation));
        self.signals.rows_removed.emit(path);
        Ok(item)
    }

    /// Removes the row identified by `handle` and reloads the widget.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::ItemNotFound`] if the adapter holds no row
    /// for `handle`.
    pub fn remove_item(&mut self, handle: ItemHandle) -> Result<Arc<dyn RowItem>> {
        self.affinity.debug_check("remove_item");

        let path = self
            .index_path_of(handle)
            .ok_or(AdapterError::ItemNotFound(handle))?;
        let item = self.take_row(path);
        tracing::debug!(target: targets::ADAPTER, %path, "item removed");
        self.reload();
        Ok(item)
    }

    /// Re-renders the row identified by `handle` in place.
    ///
    /// Returns the row's current index path.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::ItemNotFound`] if the adapter holds no row
    /// for `handle`.
    pub fn reload_item(&mut self, handle: ItemHandle) -> Result<IndexPath> {
        self.affinity.debug_check("reload_item");

        let path = self
            .index_path_of(handle)
            .ok_or(AdapterError::ItemNotFound(handle))?;
        let animation = self.config.reload_animation;
        self.batch(|widget| widget.reload_rows(&[path], animation));
        self.signals.row_reloaded.emit(path);
        Ok(path)
    }

    /// Removes every section.
    ///
    /// The widget is not refreshed; the caller reloads it or adds new
    /// content, which does. Registered identifiers stay registered.
    pub fn clear_all(&mut self) {
        self.affinity.debug_check("clear_all");
        tracing::debug!(target: targets::ADAPTER, sections = self.sections.len(), "cleared all sections");
        self.sections.clear();
        self.row_handles.clear();
        self.handles.clear();
    }

    /// Issues a full widget reload.
    pub fn reload(&mut self) {
        self.affinity.debug_check("reload");
        let _span = PerfSpan::new(span_names::RELOAD);
        self.widget.reload_data();
        self.signals.reloaded.emit(());
    }

    /// Asks `provider` for data, with this adapter as its delegate.
    pub fn request_from(&mut self, provider: &mut dyn ListProvider) {
        tracing::trace!(target: targets::PROVIDER, "requesting data");
        provider.request_data(self);
    }

    /// Invokes the handler of the `index`-th edit action of the row at `path`.
    ///
    /// # Errors
    ///
    /// Returns a bounds error if the row does not exist and
    /// [`AdapterError::NoSuchRowAction`] if it has no action at `index`.
    pub fn trigger_row_action(&self, path: IndexPath, index: usize) -> Result<()> {
        let item = self.try_item_at(path)?;
        let action = item
            .actions()
            .and_then(|actions| actions.into_iter().nth(index))
            .ok_or(AdapterError::NoSuchRowAction { path, index })?;
        tracing::debug!(target: targets::ADAPTER, %path, action = action.title(), "row action triggered");
        action.invoke(path);
        Ok(())
    }

    fn batch<R>(&mut self, update: impl FnOnce(&mut W) -> R) -> R {
        let _span = PerfSpan::new(span_names::BATCH_UPDATE);
        self.widget.begin_updates();
        let result = update(&mut self.widget);
        self.widget.end_updates();
        result
    }

    fn allocate_handles(&mut self, section: usize, first: usize, count: usize) -> Vec<ItemHandle> {
        (first..first + count)
            .map(|row| self.handles.insert(IndexPath::new(row, section)))
            .collect()
    }

    /// Rewrites the stored positions of `section`'s rows from `from` onward.
    fn reindex(&mut self, section: usize, from: usize) {
        for (row, handle) in self.row_handles[section].iter().enumerate().skip(from) {
            if let Some(path) = self.handles.get_mut(*handle) {
                *path = IndexPath::new(row, section);
            }
        }
    }

    /// Removes an existing row from the model. `path` must be in bounds.
    fn take_row(&mut self, path: IndexPath) -> Arc<dyn RowItem> {
        let handle = self.row_handles[path.section()].remove(path.row());
        self.handles.remove(handle);
        self.reindex(path.section(), path.row());
        self.sections[path.section()].remove(path.row())
    }

    fn section_len(&self, section: usize) -> Result<usize> {
        self.sections
            .get(section)
            .map(Section::len)
            .ok_or_else(|| AdapterError::section_out_of_bounds(section, self.sections.len()))
    }

    fn try_item_at(&self, path: IndexPath) -> Result<&Arc<dyn RowItem>> {
        let len = self.section_len(path.section())?;
        self.sections[path.section()]
            .item(path.row())
            .ok_or_else(|| AdapterError::row_out_of_bounds(path, len))
    }

    fn lookup(&self, path: IndexPath, query: &'static str) -> Option<&Arc<dyn RowItem>> {
        match self.try_item_at(path) {
            Ok(item) => Some(item),
            Err(error) => {
                tracing::warn!(target: targets::ADAPTER, query, %error, "query for missing row");
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the section at `index`.
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Returns `true` if the adapter holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the number of rows across all sections.
    pub fn total_rows(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Returns the row identified by `handle`.
    pub fn item(&self, handle: ItemHandle) -> Option<&Arc<dyn RowItem>> {
        let path = self.index_path_of(handle)?;
        self.item_at(path)
    }

    /// Returns the row at `path`.
    pub fn item_at(&self, path: IndexPath) -> Option<&Arc<dyn RowItem>> {
        self.sections.get(path.section())?.item(path.row())
    }

    /// Returns the handle of the row at `path`.
    pub fn handle_at(&self, path: IndexPath) -> Option<ItemHandle> {
        self.row_handles.get(path.section())?.get(path.row()).copied()
    }

    /// Returns the handles of the rows in `section`, in display order.
    pub fn handles_in_section(&self, section: usize) -> Option<&[ItemHandle]> {
        self.row_handles.get(section).map(Vec::as_slice)
    }

    /// Returns the current position of the row identified by `handle`.
    pub fn index_path_of(&self, handle: ItemHandle) -> Option<IndexPath> {
        self.handles.get(handle).copied()
    }

    /// Returns `true` while a list provider fetch is in flight.
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Returns the adapter configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Returns the view registry.
    pub fn registry(&self) -> &Arc<ViewRegistry> {
        &self.registry
    }

    /// Returns the widget.
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Returns the widget mutably.
    ///
    /// Issuing row updates directly desynchronizes the widget from the
    /// adapter; use this for host-side state such as reuse pools.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Returns the adapter's signals.
    pub fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    /// Renders the section list as a text tree.
    pub fn debug_tree(&self) -> String {
        SectionTreeDebug::new().format(&self.sections)
    }
}

impl<W: ListWidget> ListDataSource for ListAdapter<W> {
    fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    fn number_of_rows(&self, section: usize) -> usize {
        match self.section_len(section) {
            Ok(len) => len,
            Err(error) => {
                tracing::warn!(target: targets::ADAPTER, %error, "row count for missing section");
                0
            }
        }
    }

    fn cell_for_row(&mut self, path: IndexPath) -> Option<Box<dyn ReusableView>> {
        let item = self.lookup(path, "cell_for_row")?.clone();
        let mut view = self.widget.dequeue_cell(item.reuse_identifier())?;
        if let Some(cell) = view.as_loadable_cell() {
            cell.load_row(item.as_ref(), path);
        }
        if let Some(delegate) = &self.delegate {
            delegate.row_bound(&item, path);
        }
        Some(view)
    }

    fn header_for_section(&mut self, section: usize) -> Option<Box<dyn ReusableView>> {
        let Some(data) = self.sections.get(section) else {
            tracing::warn!(target: targets::ADAPTER, section, "header for missing section");
            return None;
        };
        let identifier = data.header_reuse_identifier()?;
        let mut view = self.widget.dequeue_header(identifier)?;
        if let Some(header) = view.as_loadable_header() {
            header.load_section(data, section);
        }
        Some(view)
    }

    fn can_edit_row(&self, path: IndexPath) -> bool {
        self.lookup(path, "can_edit_row").is_some_and(|item| item.can_edit())
    }

    fn edit_actions_for_row(&self, path: IndexPath) -> Option<Vec<RowAction>> {
        self.lookup(path, "edit_actions_for_row")?.actions()
    }
}

impl<W: ListWidget> ListDelegate for ListAdapter<W> {
    fn height_for_row(&self, path: IndexPath) -> RowHeight {
        self.lookup(path, "height_for_row")
            .map_or(RowHeight::Automatic, |item| item.height())
    }

    fn height_for_header(&self, section: usize) -> f32 {
        self.sections
            .get(section)
            .and_then(Section::header_height)
            .unwrap_or(0.0)
    }

    fn did_select_row(&mut self, path: IndexPath) {
        let Some(item) = self.lookup(path, "did_select_row").cloned() else {
            return;
        };
        if let Some(delegate) = &self.delegate {
            delegate.did_select(&item, path);
        }
        self.signals.row_selected.emit(path);
        self.widget.deselect_row(path, self.config.animate_deselection);
    }
}

impl<W: ListWidget> ListProviderDelegate for ListAdapter<W> {
    fn did_start_fetching(&mut self, available: Option<Vec<Arc<dyn RowItem>>>) {
        self.fetching = true;
        tracing::debug!(target: targets::PROVIDER, "fetch started");
        if let Some(items) = available {
            self.append_items(items);
        }
    }

    fn did_finish_fetching(&mut self, items: Vec<Arc<dyn RowItem>>) {
        self.fetching = false;
        tracing::debug!(target: targets::PROVIDER, rows = items.len(), "fetch finished");
        self.append_items(items);
    }

    fn did_finish_fetching_with_error(&mut self, error: FetchError) {
        self.fetching = false;
        tracing::warn!(target: targets::PROVIDER, %error, "fetch failed");
        self.signals.fetch_failed.emit(error.to_string());
    }
}

impl<W: ListWidget + fmt::Debug> fmt::Debug for ListAdapter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListAdapter")
            .field("widget", &self.widget)
            .field("sections", &self.sections.len())
            .field("rows", &self.total_rows())
            .field("registered_cells", &self.registered_cells.len())
            .field("registered_headers", &self.registered_headers.len())
            .field("fetching", &self.fetching)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
