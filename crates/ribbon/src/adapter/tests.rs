//! Tests for the list adapter.

use parking_lot::Mutex;

use super::*;
use crate::model::{BasicRow, RowAction};
use crate::view::{LoadableCell, LoadableHeader};
use crate::widget::{HeadlessListWidget, RowAnimation, WidgetEvent};

#[derive(Default)]
struct LabelCell {
    text: String,
}

impl ReusableView for LabelCell {
    fn prepare_for_reuse(&mut self) {
        self.text.clear();
    }

    fn as_loadable_cell(&mut self) -> Option<&mut dyn LoadableCell> {
        Some(self)
    }
}

impl LoadableCell for LabelCell {
    fn load_row(&mut self, item: &dyn RowItem, path: IndexPath) {
        let title = item
            .context()
            .and_then(|context| context.downcast_ref::<String>().cloned())
            .unwrap_or_default();
        self.text = format!("{path} {title}");
    }
}

#[derive(Default)]
struct PlainCell;

impl ReusableView for PlainCell {}

#[derive(Default)]
struct TitleHeader {
    rows: usize,
    section: usize,
}

impl ReusableView for TitleHeader {
    fn as_loadable_header(&mut self) -> Option<&mut dyn LoadableHeader> {
        Some(self)
    }
}

impl LoadableHeader for TitleHeader {
    fn load_section(&mut self, section: &Section, section_index: usize) {
        self.rows = section.len();
        self.section = section_index;
    }
}

#[derive(Default)]
struct RecordingDelegate {
    selected: Mutex<Vec<IndexPath>>,
    bound: Mutex<Vec<IndexPath>>,
}

impl ListAdapterDelegate for RecordingDelegate {
    fn did_select(&self, _item: &Arc<dyn RowItem>, path: IndexPath) {
        self.selected.lock().push(path);
    }

    fn row_bound(&self, _item: &Arc<dyn RowItem>, path: IndexPath) {
        self.bound.lock().push(path);
    }
}

fn registry() -> Arc<ViewRegistry> {
    let registry = ViewRegistry::new();
    registry.register_view::<LabelCell>("Test.LabelCell").unwrap();
    registry.register_view::<PlainCell>("Test.PlainCell").unwrap();
    registry.register_view::<TitleHeader>("Test.TitleHeader").unwrap();
    Arc::new(registry)
}

fn adapter() -> ListAdapter<HeadlessListWidget> {
    let mut adapter = ListAdapter::attach(HeadlessListWidget::recording(), registry());
    adapter.widget_mut().clear_events();
    adapter
}

fn label(title: &str) -> Arc<dyn RowItem> {
    Arc::new(BasicRow::new("Test.LabelCell").with_context(title.to_string()))
}

fn labels(titles: &[&str]) -> Vec<Arc<dyn RowItem>> {
    titles.iter().map(|title| label(title)).collect()
}

fn titles(adapter: &ListAdapter<HeadlessListWidget>, section: usize) -> Vec<String> {
    adapter.sections()[section]
        .items()
        .iter()
        .map(|item| {
            item.context()
                .and_then(|context| context.downcast_ref::<String>().cloned())
                .unwrap_or_default()
        })
        .collect()
}

#[test]
fn test_attach_configures_widget() {
    let config = AdapterConfig::default().with_estimated_row_height(60.0);
    let adapter = ListAdapter::attach_with_config(HeadlessListWidget::recording(), registry(), config.clone());
    assert_eq!(adapter.widget().config(), Some(&config));
    assert_eq!(adapter.widget().events(), &[WidgetEvent::Configured]);
    assert!(adapter.is_empty());
}

#[test]
fn test_attach_with_identifiers_skips_unknown() {
    let adapter = ListAdapter::attach_with_identifiers(
        HeadlessListWidget::recording(),
        registry(),
        ["Test.PlainCell", "Test.Missing", "Test.PlainCell"],
    );
    assert!(adapter.is_registered_cell("Test.PlainCell"));
    assert!(!adapter.is_registered_cell("Test.Missing"));
    assert!(adapter.widget().is_cell_registered("Test.PlainCell"));

    let registrations = adapter
        .widget()
        .count_events(|event| matches!(event, WidgetEvent::Registered { .. }));
    assert_eq!(registrations, 1);
}

#[test]
fn test_registration_is_idempotent() {
    let mut adapter = adapter();
    assert!(adapter.register_cell_identifier("Test.LabelCell"));
    assert!(adapter.register_cell_identifier("Test.LabelCell"));
    adapter.append_items(labels(&["a", "b"]));

    let registrations = adapter
        .widget()
        .count_events(|event| matches!(event, WidgetEvent::Registered { .. }));
    assert_eq!(registrations, 1);
}

#[test]
fn test_add_section_registers_and_reloads() {
    let mut adapter = adapter();
    let section = Section::with_items(labels(&["a", "b", "c"])).with_header("Test.TitleHeader", 30.0);

    assert_eq!(adapter.add_section(section), Some(0));
    assert_eq!(adapter.number_of_sections(), 1);
    assert_eq!(adapter.number_of_rows(0), 3);
    assert!(adapter.is_registered_header("Test.TitleHeader"));
    assert!(adapter.is_registered_cell("Test.LabelCell"));
    assert_eq!(adapter.height_for_header(0), 30.0);
    assert_eq!(adapter.widget().events().last(), Some(&WidgetEvent::ReloadData));
}

#[test]
fn test_add_section_with_unresolvable_header_adds_nothing() {
    let mut adapter = adapter();
    adapter.add_section(Section::with_items(labels(&["a"])));
    adapter.widget_mut().clear_events();

    let section = Section::with_items(vec![Arc::new(BasicRow::new("Test.PlainCell")) as Arc<dyn RowItem>])
        .with_header_identifier("Test.MissingHeader");
    assert_eq!(adapter.add_section(section), None);

    assert_eq!(adapter.number_of_sections(), 1);
    assert!(!adapter.is_registered_cell("Test.PlainCell"));
    assert!(adapter.widget().events().is_empty());
}

#[test]
fn test_add_section_without_header() {
    let mut adapter = adapter();
    assert_eq!(adapter.add_section(Section::with_items(labels(&["a"]))), Some(0));
    assert_eq!(adapter.height_for_header(0), 0.0);
    assert!(adapter.header_for_section(0).is_none());
}

#[test]
fn test_append_to_empty_creates_section_and_reloads() {
    let mut adapter = adapter();
    let handles = adapter.append_items(labels(&["a", "b"]));

    assert_eq!(handles.len(), 2);
    assert_eq!(adapter.number_of_sections(), 1);
    assert_eq!(adapter.number_of_rows(0), 2);
    assert!(adapter.section(0).unwrap().header_reuse_identifier().is_none());

    let events = adapter.widget().events();
    assert_eq!(events.last(), Some(&WidgetEvent::ReloadData));
    assert!(!events.iter().any(WidgetEvent::is_incremental));
}

#[test]
fn test_append_inserts_contiguous_paths_in_last_section() {
    let mut adapter = adapter();
    adapter.add_section(Section::with_items(labels(&["x"])));
    adapter.add_section(Section::with_items(labels(&["a", "b"])));
    adapter.widget_mut().clear_events();

    adapter.append_items(labels(&["c", "d", "e"]));

    assert_eq!(
        adapter.widget().events(),
        &[
            WidgetEvent::BeginUpdates,
            WidgetEvent::InsertRows {
                paths: IndexPath::contiguous(2, 3, 1),
                animation: RowAnimation::Automatic,
            },
            WidgetEvent::EndUpdates,
        ]
    );
    assert_eq!(titles(&adapter, 1), vec!["a", "b", "c", "d", "e"]);
    assert_eq!(adapter.number_of_rows(0), 1);
}

#[test]
fn test_empty_inputs_notify_nothing() {
    let mut adapter = adapter();
    assert!(adapter.append_items(Vec::new()).is_empty());
    assert!(adapter.is_empty());

    adapter.append_items(labels(&["a"]));
    adapter.widget_mut().clear_events();

    assert!(adapter.append_items(Vec::new()).is_empty());
    assert!(adapter.insert_items(Vec::new(), 0, 0).unwrap().is_empty());
    assert!(adapter.insert_items(Vec::new(), 9, 9).unwrap().is_empty());
    assert!(adapter.widget().events().is_empty());
    assert_eq!(adapter.total_rows(), 1);
}

#[test]
fn test_insert_preserves_order_and_shifts() {
    let mut adapter = adapter();
    adapter.append_items(labels(&["a", "b", "c"]));
    adapter.widget_mut().clear_events();

    adapter.insert_items(labels(&["x", "y"]), 1, 0).unwrap();

    assert_eq!(titles(&adapter, 0), vec!["a", "x", "y", "b", "c"]);
    assert_eq!(
        adapter.widget().events()[1],
        WidgetEvent::InsertRows {
            paths: vec![IndexPath::new(1, 0), IndexPath::new(2, 0)],
            animation: RowAnimation::Fade,
        }
    );
}

#[test]
fn test_insert_at_end_is_allowed() {
    let mut adapter = adapter();
    adapter.append_items(labels(&["a"]));
    adapter.insert_items(labels(&["b"]), 1, 0).unwrap();
    assert_eq!(titles(&adapter, 0), vec!["a", "b"]);
}

#[test]
fn test_insert_out_of_bounds() {
    let mut adapter = adapter();
    assert!(matches!(
        adapter.insert_items(labels(&["a"]), 0, 0),
        Err(AdapterError::SectionOutOfBounds { section: 0, count: 0 })
    ));

    adapter.append_items(labels(&["a"]));
    adapter.widget_mut().clear_events();
    assert!(matches!(
        adapter.insert_items(labels(&["b"]), 3, 0),
        Err(AdapterError::InsertOutOfBounds { count: 1, .. })
    ));
    assert_eq!(adapter.total_rows(), 1);
    assert!(adapter.widget().events().is_empty());
}

#[test]
fn test_remove_item_at() {
    let mut adapter = adapter();
    adapter.append_items(labels(&["a", "b", "c"]));
    adapter.widget_mut().clear_events();

    let removed = adapter.remove_item_at(1, 0).unwrap();
    assert_eq!(
        removed.context().unwrap().downcast_ref::<String>().map(String::as_str),
        Some("b")
    );
    assert_eq!(titles(&adapter, 0), vec!["a", "c"]);
    assert_eq!(
        adapter.widget().events(),
        &[
            WidgetEvent::BeginUpdates,
            WidgetEvent::DeleteRows {
                paths: vec![IndexPath::new(1, 0)],
                animation: RowAnimation::Fade,
            },
            WidgetEvent::EndUpdates,
        ]
    );
}

#[test]
fn test_remove_item_at_out_of_bounds() {
    let mut adapter = adapter();
    adapter.append_items(labels(&["a"]));

    let err = adapter.remove_item_at(1, 0).unwrap_err();
    assert!(matches!(err, AdapterError::RowOutOfBounds { count: 1, .. }));
    let err = adapter.remove_item_at(0, 2).unwrap_err();
    assert!(matches!(err, AdapterError::SectionOutOfBounds { section: 2, count: 1 }));
    assert_eq!(adapter.total_rows(), 1);
}

#[test]
fn test_handles_follow_rows() {
    let mut adapter = adapter();
    let first = adapter.append_items(labels(&["a", "b"]));
    let inserted = adapter.insert_items(labels(&["x"]), 0, 0).unwrap();

    assert_eq!(adapter.index_path_of(inserted[0]), Some(IndexPath::new(0, 0)));
    assert_eq!(adapter.index_path_of(first[1]), Some(IndexPath::new(2, 0)));
    assert_eq!(adapter.handle_at(IndexPath::new(1, 0)), Some(first[0]));
    assert_eq!(adapter.handles_in_section(0).unwrap().len(), 3);

    adapter.remove_item_at(0, 0).unwrap();
    assert_eq!(adapter.index_path_of(inserted[0]), None);
    assert_eq!(adapter.index_path_of(first[1]), Some(IndexPath::new(1, 0)));
}

#[test]
fn test_handle_positions_stay_per_section() {
    let mut adapter = adapter();
    let top = adapter.append_items(labels(&["a", "b", "c"]));
    adapter.add_section(Section::with_items(labels(&["x", "y"])));
    let bottom = adapter.handles_in_section(1).unwrap().to_vec();

    adapter.insert_items(labels(&["n", "m"]), 1, 0).unwrap();
    adapter.remove_item_at(0, 1).unwrap();
    adapter.remove_item(top[0]).unwrap();

    assert_eq!(titles(&adapter, 0), vec!["n", "m", "b", "c"]);
    assert_eq!(adapter.index_path_of(top[1]), Some(IndexPath::new(2, 0)));
    assert_eq!(adapter.index_path_of(top[2]), Some(IndexPath::new(3, 0)));
    assert_eq!(adapter.index_path_of(bottom[1]), Some(IndexPath::new(0, 1)));
    assert_eq!(adapter.reload_item(top[2]).unwrap(), IndexPath::new(3, 0));
    for handle in [top[0], bottom[0]] {
        assert_eq!(adapter.index_path_of(handle), None);
    }
}

#[test]
fn test_identical_items_have_distinct_handles() {
    let mut adapter = adapter();
    let shared = label("same");
    let handles = adapter.append_items(vec![shared.clone(), shared]);
    assert_ne!(handles[0], handles[1]);

    adapter.remove_item(handles[1]).unwrap();
    assert_eq!(adapter.index_path_of(handles[0]), Some(IndexPath::new(0, 0)));
}

#[test]
fn test_remove_item_reloads() {
    let mut adapter = adapter();
    adapter.add_section(Section::with_items(labels(&["x"])));
    let handles = adapter.append_items(labels(&["a", "b"]));
    adapter.widget_mut().clear_events();

    adapter.remove_item(handles[1]).unwrap();
    assert_eq!(titles(&adapter, 0), vec!["x", "a"]);
    assert_eq!(adapter.widget().events(), &[WidgetEvent::ReloadData]);

    assert!(matches!(
        adapter.remove_item(handles[1]),
        Err(AdapterError::ItemNotFound(h)) if h == handles[1]
    ));
}

#[test]
fn test_reload_item() {
    let mut adapter = adapter();
    adapter.add_section(Section::with_items(labels(&["x"])));
    adapter.add_section(Section::new());
    let handles = adapter.append_items(labels(&["a", "b"]));
    adapter.widget_mut().clear_events();

    assert_eq!(adapter.reload_item(handles[1]).unwrap(), IndexPath::new(1, 1));
    assert_eq!(
        adapter.widget().events()[1],
        WidgetEvent::ReloadRows {
            paths: vec![IndexPath::new(1, 1)],
            animation: RowAnimation::None,
        }
    );

    adapter.clear_all();
    assert!(matches!(adapter.reload_item(handles[0]), Err(AdapterError::ItemNotFound(_))));
}

#[test]
fn test_clear_all_does_not_refresh() {
    let mut adapter = adapter();
    let handles = adapter.append_items(labels(&["a"]));
    adapter.widget_mut().clear_events();

    adapter.clear_all();
    assert!(adapter.is_empty());
    assert_eq!(adapter.total_rows(), 0);
    assert!(adapter.item(handles[0]).is_none());
    assert!(adapter.widget().events().is_empty());
    assert!(adapter.is_registered_cell("Test.LabelCell"));

    // The next append starts a fresh section.
    adapter.append_items(labels(&["b"]));
    assert_eq!(adapter.widget().events(), &[WidgetEvent::ReloadData]);
}

#[test]
fn test_cell_for_row_binds_loadable_and_notifies() {
    let delegate = Arc::new(RecordingDelegate::default());
    let mut adapter = adapter().with_delegate(delegate.clone());
    adapter.append_items(labels(&["hello"]));
    adapter.append_items(vec![Arc::new(BasicRow::new("Test.PlainCell"))]);

    let view = adapter.cell_for_row(IndexPath::new(0, 0)).unwrap();
    assert_eq!(view.downcast_ref::<LabelCell>().unwrap().text, "[0, 0] hello");

    let view = adapter.cell_for_row(IndexPath::new(1, 0)).unwrap();
    assert!(view.downcast_ref::<PlainCell>().is_some());

    assert_eq!(*delegate.bound.lock(), vec![IndexPath::new(0, 0), IndexPath::new(1, 0)]);
}

#[test]
fn test_cell_for_row_reuses_pooled_cell() {
    let mut adapter = adapter();
    adapter.append_items(labels(&["a", "b"]));

    let view = adapter.cell_for_row(IndexPath::new(0, 0)).unwrap();
    adapter.widget_mut().enqueue_reusable_cell("Test.LabelCell", view);
    let view = adapter.cell_for_row(IndexPath::new(1, 0)).unwrap();

    assert_eq!(view.downcast_ref::<LabelCell>().unwrap().text, "[0, 1] b");
    assert_eq!(adapter.widget().instantiated_views(), 1);
}

#[test]
fn test_cell_for_unregistered_row_is_none() {
    let delegate = Arc::new(RecordingDelegate::default());
    let mut adapter = adapter().with_delegate(delegate.clone());
    adapter.append_items(vec![Arc::new(BasicRow::new("Test.Unknown"))]);

    assert_eq!(adapter.number_of_rows(0), 1);
    assert!(adapter.cell_for_row(IndexPath::new(0, 0)).is_none());
    assert!(delegate.bound.lock().is_empty());
}

#[test]
fn test_header_for_section_binds() {
    let mut adapter = adapter();
    adapter.add_section(Section::with_items(labels(&["a", "b"])).with_header("Test.TitleHeader", 20.0));
    adapter.add_section(Section::with_items(labels(&["c"])).with_header("Test.TitleHeader", 20.0));

    let view = adapter.header_for_section(1).unwrap();
    let header = view.downcast_ref::<TitleHeader>().unwrap();
    assert_eq!((header.section, header.rows), (1, 1));
    assert!(adapter.header_for_section(5).is_none());
}

#[test]
fn test_queries_out_of_range_are_lenient() {
    let adapter = adapter();
    let path = IndexPath::new(3, 2);
    assert_eq!(adapter.number_of_rows(2), 0);
    assert_eq!(adapter.height_for_row(path), RowHeight::Automatic);
    assert_eq!(adapter.height_for_header(2), 0.0);
    assert!(!adapter.can_edit_row(path));
    assert!(adapter.edit_actions_for_row(path).is_none());
}

#[test]
fn test_row_capabilities() {
    let mut adapter = adapter();
    adapter.append_items(vec![
        Arc::new(BasicRow::new("Test.PlainCell").with_height(RowHeight::Fixed(48.0))),
        Arc::new(
            BasicRow::new("Test.PlainCell").with_action(RowAction::destructive("Delete", |_| {})),
        ),
    ]);

    let first = IndexPath::new(0, 0);
    let second = IndexPath::new(1, 0);
    assert_eq!(adapter.height_for_row(first), RowHeight::Fixed(48.0));
    assert_eq!(adapter.height_for_row(second), RowHeight::Automatic);
    assert!(!adapter.can_edit_row(first));
    assert!(adapter.can_edit_row(second));
    assert!(adapter.edit_actions_for_row(first).is_none());
    assert_eq!(adapter.edit_actions_for_row(second).unwrap()[0].title(), "Delete");
}

#[test]
fn test_did_select_notifies_then_deselects() {
    let delegate = Arc::new(RecordingDelegate::default());
    let config = AdapterConfig::default().with_animate_deselection(false);
    let mut adapter = ListAdapter::attach_with_config(HeadlessListWidget::recording(), registry(), config)
        .with_delegate(delegate.clone());
    adapter.append_items(labels(&["a", "b"]));

    let selected = Arc::new(Mutex::new(Vec::new()));
    let recv = selected.clone();
    adapter.signals().row_selected.connect(move |path| recv.lock().push(*path));

    let path = IndexPath::new(1, 0);
    adapter.widget_mut().select_row(path);
    adapter.did_select_row(path);

    assert_eq!(*delegate.selected.lock(), vec![path]);
    assert_eq!(*selected.lock(), vec![path]);
    assert_eq!(adapter.widget().selected_row(), None);
    assert_eq!(
        adapter.widget().events().last(),
        Some(&WidgetEvent::Deselected { path, animated: false })
    );
}

#[test]
fn test_did_select_missing_row_does_nothing() {
    let delegate = Arc::new(RecordingDelegate::default());
    let mut adapter = adapter().with_delegate(delegate.clone());
    adapter.did_select_row(IndexPath::new(0, 0));
    assert!(delegate.selected.lock().is_empty());
    assert!(adapter.widget().events().is_empty());
}

#[test]
fn test_trigger_row_action() {
    let invoked = Arc::new(Mutex::new(Vec::new()));
    let recv = invoked.clone();
    let mut adapter = adapter();
    adapter.append_items(vec![Arc::new(
        BasicRow::new("Test.PlainCell")
            .with_action(RowAction::normal("Archive", |_| {}))
            .with_action(RowAction::destructive("Delete", move |path| recv.lock().push(path))),
    )]);

    let path = IndexPath::new(0, 0);
    adapter.trigger_row_action(path, 1).unwrap();
    assert_eq!(*invoked.lock(), vec![path]);

    assert!(matches!(
        adapter.trigger_row_action(path, 2),
        Err(AdapterError::NoSuchRowAction { index: 2, .. })
    ));
    assert!(matches!(
        adapter.trigger_row_action(IndexPath::new(1, 0), 0),
        Err(AdapterError::RowOutOfBounds { .. })
    ));
}

#[test]
fn test_signals_follow_widget_calls() {
    let mut adapter = adapter();
    let log = Arc::new(Mutex::new(Vec::new()));

    let recv = log.clone();
    adapter.signals().reloaded.connect(move |_| recv.lock().push("reloaded".to_string()));
    let recv = log.clone();
    adapter
        .signals()
        .rows_inserted
        .connect(move |paths| recv.lock().push(format!("inserted {}", paths.len())));
    let recv = log.clone();
    adapter
        .signals()
        .rows_removed
        .connect(move |path| recv.lock().push(format!("removed {path}")));
    let recv = log.clone();
    adapter
        .signals()
        .row_reloaded
        .connect(move |path| recv.lock().push(format!("reloaded {path}")));

    let handles = adapter.append_items(labels(&["a"]));
    adapter.append_items(labels(&["b", "c"]));
    adapter.reload_item(handles[0]).unwrap();
    adapter.remove_item_at(2, 0).unwrap();

    assert_eq!(
        *log.lock(),
        vec!["reloaded", "inserted 2", "reloaded [0, 0]", "removed [0, 2]"]
    );
}

#[test]
fn test_provider_delegate_appends_batches() {
    use crate::provider::VecListProvider;

    let mut adapter = adapter();
    let failures = Arc::new(Mutex::new(Vec::new()));
    let recv = failures.clone();
    adapter.signals().fetch_failed.connect(move |message| recv.lock().push(message.clone()));

    let mut provider = VecListProvider::new()
        .with_available(labels(&["cached"]))
        .with_page(labels(&["a", "b"]));

    adapter.request_from(&mut provider);
    assert_eq!(titles(&adapter, 0), vec!["cached", "a", "b"]);
    assert!(!adapter.is_fetching());

    adapter.request_from(&mut provider);
    assert_eq!(*failures.lock(), vec!["No more data to fetch".to_string()]);
    assert_eq!(adapter.total_rows(), 3);
}

#[test]
fn test_fetching_flag_during_fetch() {
    let mut adapter = adapter();
    adapter.did_start_fetching(None);
    assert!(adapter.is_fetching());
    assert!(adapter.is_empty());
    adapter.did_finish_fetching_with_error(FetchError::failed("timeout"));
    assert!(!adapter.is_fetching());
}

#[test]
fn test_debug_tree() {
    let mut adapter = adapter();
    adapter.add_section(Section::with_items(labels(&["a"])).with_header("Test.TitleHeader", 20.0));
    let tree = adapter.debug_tree();
    assert!(tree.starts_with("Sections (1 sections, 1 rows):"));
    assert!(tree.contains("header=Test.TitleHeader"));
    assert!(tree.contains("[0, 0] Test.LabelCell"));
}

#[test]
fn test_reload_checks_owner_thread() {
    ribbon_core::thread_check::set_thread_checks_enabled(true);
    let mut adapter = adapter();
    let result = std::thread::spawn(move || adapter.reload()).join();

    let payload = result.expect_err("reload off the owning thread should panic");
    let message = payload.downcast_ref::<String>().cloned().unwrap_or_default();
    assert!(message.contains("`reload`"), "{message}");
}
