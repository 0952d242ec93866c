//! An in-memory list widget.
//!
//! `HeadlessListWidget` keeps view templates, per-identifier reuse pools and
//! the update batch depth the way a native list view does. Hosts that draw
//! rows themselves (terminal UIs, immediate-mode renderers) drive it directly.
//!
//! A widget built with [`HeadlessListWidget::recording`] also logs every call
//! it receives as a [`WidgetEvent`]; tests read that log to check which
//! updates an adapter issued. Widgets built with
//! [`HeadlessListWidget::new`] keep no log.

use std::collections::HashMap;

use ribbon_core::logging::targets;

use super::{ListWidget, RowAnimation};
use crate::config::AdapterConfig;
use crate::model::IndexPath;
use crate::registry::ViewTemplate;
use crate::view::{ReusableView, ViewKind};

/// A call received by a [`HeadlessListWidget`].
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// Appearance settings were applied.
    Configured,
    /// A template was registered.
    Registered {
        /// Cell or header.
        kind: ViewKind,
        /// The reuse identifier.
        identifier: String,
    },
    /// All rows were reloaded.
    ReloadData,
    /// An update batch was opened.
    BeginUpdates,
    /// An update batch was closed.
    EndUpdates,
    /// Rows were inserted.
    InsertRows {
        /// Inserted positions.
        paths: Vec<IndexPath>,
        /// Requested animation.
        animation: RowAnimation,
    },
    /// Rows were deleted.
    DeleteRows {
        /// Deleted positions.
        paths: Vec<IndexPath>,
        /// Requested animation.
        animation: RowAnimation,
    },
    /// Rows were reloaded in place.
    ReloadRows {
        /// Reloaded positions.
        paths: Vec<IndexPath>,
        /// Requested animation.
        animation: RowAnimation,
    },
    /// A view was dequeued.
    Dequeued {
        /// Cell or header.
        kind: ViewKind,
        /// The reuse identifier.
        identifier: String,
        /// Whether the view came from the reuse pool rather than its template.
        recycled: bool,
    },
    /// A row's selection highlight was cleared.
    Deselected {
        /// The deselected row.
        path: IndexPath,
        /// Whether the change was animated.
        animated: bool,
    },
}

impl WidgetEvent {
    /// Returns `true` for insert, delete and reload-row events.
    pub fn is_incremental(&self) -> bool {
        matches!(
            self,
            Self::InsertRows { .. } | Self::DeleteRows { .. } | Self::ReloadRows { .. }
        )
    }
}

#[derive(Default)]
struct ViewStore {
    templates: HashMap<String, ViewTemplate>,
    pool: HashMap<String, Vec<Box<dyn ReusableView>>>,
}

impl ViewStore {
    fn dequeue(&mut self, identifier: &str) -> Option<(Box<dyn ReusableView>, bool)> {
        if let Some(view) = self.pool.get_mut(identifier).and_then(Vec::pop) {
            return Some((view, true));
        }
        self.templates
            .get(identifier)
            .map(|template| (template.instantiate(), false))
    }

    fn enqueue(&mut self, identifier: &str, mut view: Box<dyn ReusableView>) -> bool {
        if !self.templates.contains_key(identifier) {
            return false;
        }
        view.prepare_for_reuse();
        self.pool.entry(identifier.to_string()).or_default().push(view);
        true
    }

    fn pooled(&self, identifier: &str) -> usize {
        self.pool.get(identifier).map_or(0, Vec::len)
    }
}

/// A [`ListWidget`] that lives entirely in memory.
///
/// # Example
///
/// ```
/// use ribbon::registry::{ReuseIdentifier, ViewTemplate};
/// use ribbon::view::ReusableView;
/// use ribbon::widget::{HeadlessListWidget, ListWidget};
///
/// #[derive(Default)]
/// struct Cell;
/// impl ReusableView for Cell {}
///
/// let mut widget = HeadlessListWidget::new();
/// let id = ReuseIdentifier::parse("Demo.Cell").unwrap();
/// widget.register_cell(ViewTemplate::new(id, || Box::new(Cell) as Box<dyn ReusableView>));
///
/// let view = widget.dequeue_cell("Demo.Cell").unwrap();
/// assert_eq!(widget.instantiated_views(), 1);
///
/// // Scrolled off screen: hand it back for reuse.
/// widget.enqueue_reusable_cell("Demo.Cell", view);
/// let _again = widget.dequeue_cell("Demo.Cell").unwrap();
/// assert_eq!(widget.instantiated_views(), 1);
/// ```
#[derive(Default)]
pub struct HeadlessListWidget {
    config: Option<AdapterConfig>,
    cells: ViewStore,
    headers: ViewStore,
    update_depth: usize,
    instantiated: usize,
    selected: Option<IndexPath>,
    recording: bool,
    events: Vec<WidgetEvent>,
}

impl HeadlessListWidget {
    /// Creates an empty widget that keeps no event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty widget that logs every call it receives.
    ///
    /// The log grows until [`take_events`](Self::take_events) or
    /// [`clear_events`](Self::clear_events) empties it.
    pub fn recording() -> Self {
        Self {
            recording: true,
            ..Self::default()
        }
    }

    /// Turns the event log on or off. Turning it off discards the log.
    pub fn set_recording(&mut self, recording: bool) {
        self.recording = recording;
        if !recording {
            self.events = Vec::new();
        }
    }

    /// Returns `true` if calls are being logged.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Returns every call logged so far, oldest first.
    pub fn events(&self) -> &[WidgetEvent] {
        &self.events
    }

    /// Returns and clears the event log.
    pub fn take_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }

    /// Clears the event log.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Returns the configuration applied by the attached adapter.
    pub fn config(&self) -> Option<&AdapterConfig> {
        self.config.as_ref()
    }

    /// Returns `true` if a cell template is registered under `identifier`.
    pub fn is_cell_registered(&self, identifier: &str) -> bool {
        self.cells.templates.contains_key(identifier)
    }

    /// Returns `true` if a header template is registered under `identifier`.
    pub fn is_header_registered(&self, identifier: &str) -> bool {
        self.headers.templates.contains_key(identifier)
    }

    /// Returns the current update batch nesting depth.
    pub fn update_depth(&self) -> usize {
        self.update_depth
    }

    /// Returns the number of views created from templates (not recycled).
    pub fn instantiated_views(&self) -> usize {
        self.instantiated
    }

    /// Returns a cell that scrolled out of view to the reuse pool.
    ///
    /// Returns `false` (and drops the view) if `identifier` is not a
    /// registered cell identifier.
    pub fn enqueue_reusable_cell(&mut self, identifier: &str, view: Box<dyn ReusableView>) -> bool {
        self.cells.enqueue(identifier, view)
    }

    /// Returns a header that scrolled out of view to the reuse pool.
    pub fn enqueue_reusable_header(&mut self, identifier: &str, view: Box<dyn ReusableView>) -> bool {
        self.headers.enqueue(identifier, view)
    }

    /// Returns the number of pooled cells waiting for reuse under `identifier`.
    pub fn pooled_cells(&self, identifier: &str) -> usize {
        self.cells.pooled(identifier)
    }

    /// Highlights a row, as a tap would.
    pub fn select_row(&mut self, path: IndexPath) {
        self.selected = Some(path);
    }

    /// Returns the highlighted row.
    pub fn selected_row(&self) -> Option<IndexPath> {
        self.selected
    }

    /// Counts recorded events matching `predicate`.
    pub fn count_events(&self, predicate: impl Fn(&WidgetEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }

    fn record(&mut self, event: WidgetEvent) {
        if self.recording {
            self.record(event);
        }
    }

    fn check_in_batch(&self, call: &str) {
        if self.update_depth == 0 {
            tracing::warn!(target: targets::WIDGET, call, "incremental update outside begin/end batch");
        }
    }

    fn dequeue(&mut self, kind: ViewKind, identifier: &str) -> Option<Box<dyn ReusableView>> {
        let store = match kind {
            ViewKind::Cell => &mut self.cells,
            ViewKind::Header => &mut self.headers,
        };
        let Some((view, recycled)) = store.dequeue(identifier) else {
            tracing::warn!(target: targets::WIDGET, %kind, identifier, "no template registered");
            return None;
        };
        if !recycled {
            self.instantiated += 1;
        }
        self.record(WidgetEvent::Dequeued {
            kind,
            identifier: identifier.to_string(),
            recycled,
        });
        Some(view)
    }

    fn register(&mut self, kind: ViewKind, template: ViewTemplate) {
        let identifier = template.identifier().as_str().to_string();
        let store = match kind {
            ViewKind::Cell => &mut self.cells,
            ViewKind::Header => &mut self.headers,
        };
        store.templates.insert(identifier.clone(), template);
        tracing::trace!(target: targets::WIDGET, %kind, identifier, "template registered");
        self.record(WidgetEvent::Registered { kind, identifier });
    }
}

impl ListWidget for HeadlessListWidget {
    fn configure(&mut self, config: &AdapterConfig) {
        self.config = Some(config.clone());
        self.record(WidgetEvent::Configured);
    }

    fn register_cell(&mut self, template: ViewTemplate) {
        self.register(ViewKind::Cell, template);
    }

    fn register_header(&mut self, template: ViewTemplate) {
        self.register(ViewKind::Header, template);
    }

    fn reload_data(&mut self) {
        self.selected = None;
        self.record(WidgetEvent::ReloadData);
    }

    fn begin_updates(&mut self) {
        self.update_depth += 1;
        self.record(WidgetEvent::BeginUpdates);
    }

    fn end_updates(&mut self) {
        if self.update_depth == 0 {
            tracing::warn!(target: targets::WIDGET, "end_updates without matching begin_updates");
            return;
        }
        self.update_depth -= 1;
        self.record(WidgetEvent::EndUpdates);
    }

    fn insert_rows(&mut self, paths: &[IndexPath], animation: RowAnimation) {
        self.check_in_batch("insert_rows");
        self.record(WidgetEvent::InsertRows {
            paths: paths.to_vec(),
            animation,
        });
    }

    fn delete_rows(&mut self, paths: &[IndexPath], animation: RowAnimation) {
        self.check_in_batch("delete_rows");
        if self.selected.is_some_and(|selected| paths.contains(&selected)) {
            self.selected = None;
        }
        self.record(WidgetEvent::DeleteRows {
            paths: paths.to_vec(),
            animation,
        });
    }

    fn reload_rows(&mut self, paths: &[IndexPath], animation: RowAnimation) {
        self.check_in_batch("reload_rows");
        self.record(WidgetEvent::ReloadRows {
            paths: paths.to_vec(),
            animation,
        });
    }

    fn dequeue_cell(&mut self, identifier: &str) -> Option<Box<dyn ReusableView>> {
        self.dequeue(ViewKind::Cell, identifier)
    }

    fn dequeue_header(&mut self, identifier: &str) -> Option<Box<dyn ReusableView>> {
        self.dequeue(ViewKind::Header, identifier)
    }

    fn deselect_row(&mut self, path: IndexPath, animated: bool) {
        if self.selected == Some(path) {
            self.selected = None;
        }
        self.record(WidgetEvent::Deselected { path, animated });
    }
}

impl std::fmt::Debug for HeadlessListWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessListWidget")
            .field("cell_templates", &self.cells.templates.len())
            .field("header_templates", &self.headers.templates.len())
            .field("update_depth", &self.update_depth)
            .field("instantiated", &self.instantiated)
            .field("recording", &self.recording)
            .field("events", &self.events.len())
            .finish()
    }
}

static_assertions::assert_impl_all!(HeadlessListWidget: Send);
