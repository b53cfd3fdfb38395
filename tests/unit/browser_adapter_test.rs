use std::cell::RefCell;
use std::sync::Arc;

use url::Url;
use zeroviewer::app::App;
use zeroviewer::managers::selection_manager::SelectionManagerTrait;
use zeroviewer::services::browser_adapter::{BrowserAdapter, LoadState, PageLoad, RenderSurface};
use zeroviewer::services::external_opener::RecordingOpener;
use zeroviewer::types::errors::AdapterError;
use zeroviewer::ui::content::{is_remote_load, sync_content_pane};

/// Surface that records what it was asked to show.
#[derive(Default)]
struct FakeSurface {
    calls: RefCell<Vec<String>>,
    fail: bool,
}

impl RenderSurface for FakeSurface {
    fn navigate(&self, address: &Url) -> Result<(), AdapterError> {
        if self.fail {
            return Err(AdapterError::Surface("closed".into()));
        }
        self.calls.borrow_mut().push(format!("url:{}", address));
        Ok(())
    }

    fn show_html(&self, _html: &str) -> Result<(), AdapterError> {
        self.calls.borrow_mut().push("placeholder".into());
        Ok(())
    }
}

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

fn adapter() -> (BrowserAdapter, Arc<RecordingOpener>) {
    let opener = Arc::new(RecordingOpener::new());
    (BrowserAdapter::new(opener.clone()), opener)
}

/// Reports a full start/finish cycle for `address`.
fn finish(adapter: &mut BrowserAdapter, address: &str) {
    adapter.on_page_load(&PageLoad::Started(address.into()));
    adapter.on_page_load(&PageLoad::Finished(address.into()));
}

#[test]
fn test_new_adapter_is_idle() {
    let (adapter, _) = adapter();
    assert_eq!(adapter.state(), LoadState::Idle);
    assert!(adapter.address().is_none());
}

#[test]
fn test_load_transitions_to_loading_then_loaded() {
    let (mut adapter, _) = adapter();
    let surface = FakeSurface::default();

    adapter.load(&surface, &url("https://zeropse.xyz/")).unwrap();
    assert_eq!(adapter.state(), LoadState::Loading);
    assert_eq!(adapter.address(), Some(&url("https://zeropse.xyz/")));
    assert_eq!(*surface.calls.borrow(), vec!["url:https://zeropse.xyz/"]);

    adapter.on_page_load(&PageLoad::Started("https://zeropse.xyz/".into()));
    assert_eq!(adapter.state(), LoadState::Loading);
    adapter.on_page_load(&PageLoad::Finished("https://zeropse.xyz/".into()));
    assert_eq!(adapter.state(), LoadState::Loaded);
}

#[test]
fn test_reload_from_loaded_goes_back_to_loading() {
    let (mut adapter, _) = adapter();
    let surface = FakeSurface::default();
    adapter.load(&surface, &url("https://zeropse.xyz/")).unwrap();
    finish(&mut adapter, "https://zeropse.xyz/");

    adapter.load(&surface, &url("https://github.com/zeropse/KnightBot")).unwrap();
    assert_eq!(adapter.state(), LoadState::Loading);
    assert_eq!(adapter.address(), Some(&url("https://github.com/zeropse/KnightBot")));
}

#[test]
fn test_in_app_navigation_restarts_loading() {
    let (mut adapter, _) = adapter();
    let surface = FakeSurface::default();
    adapter.load(&surface, &url("https://zeropse.xyz/")).unwrap();
    finish(&mut adapter, "https://zeropse.xyz/");
    adapter.on_page_load(&PageLoad::Started("https://zeropse.xyz/projects".into()));
    assert_eq!(adapter.state(), LoadState::Loading);
    adapter.on_page_load(&PageLoad::Finished("https://zeropse.xyz/projects".into()));
    assert_eq!(adapter.state(), LoadState::Loaded);
}

#[test]
fn test_stale_finish_after_replacement_keeps_loading() {
    let (mut adapter, _) = adapter();
    let surface = FakeSurface::default();
    adapter.load(&surface, &url("https://zeropse.xyz/")).unwrap();
    adapter.on_page_load(&PageLoad::Started("https://zeropse.xyz/".into()));

    adapter.load(&surface, &url("https://github.com/zeropse/KnightBot")).unwrap();
    adapter.on_page_load(&PageLoad::Finished("https://zeropse.xyz/".into()));
    assert_eq!(adapter.state(), LoadState::Loading);

    finish(&mut adapter, "https://github.com/zeropse/KnightBot");
    assert_eq!(adapter.state(), LoadState::Loaded);
}

#[test]
fn test_stale_start_for_replaced_address_is_ignored() {
    let (mut adapter, _) = adapter();
    let surface = FakeSurface::default();
    adapter.load(&surface, &url("https://zeropse.xyz/")).unwrap();
    adapter.load(&surface, &url("https://valopedia-nine.vercel.app/")).unwrap();

    adapter.on_page_load(&PageLoad::Started("https://zeropse.xyz/".into()));
    adapter.on_page_load(&PageLoad::Finished("https://zeropse.xyz/".into()));
    assert_eq!(adapter.state(), LoadState::Loading);
}

#[test]
fn test_finish_before_start_is_ignored() {
    let (mut adapter, _) = adapter();
    let surface = FakeSurface::default();
    adapter.load(&surface, &url("https://zeropse.xyz/")).unwrap();
    adapter.on_page_load(&PageLoad::Finished("https://zeropse.xyz/".into()));
    assert_eq!(adapter.state(), LoadState::Loading);
}

#[test]
fn test_page_load_events_ignored_while_idle() {
    let (mut adapter, _) = adapter();
    adapter.on_page_load(&PageLoad::Started("https://zeropse.xyz/".into()));
    adapter.on_page_load(&PageLoad::Finished("https://zeropse.xyz/".into()));
    assert_eq!(adapter.state(), LoadState::Idle);
}

#[test]
fn test_surface_failure_leaves_state_untouched() {
    let (mut adapter, _) = adapter();
    let surface = FakeSurface { fail: true, ..Default::default() };
    let result = adapter.load(&surface, &url("https://zeropse.xyz/"));
    assert!(matches!(result, Err(AdapterError::Surface(_))));
    assert_eq!(adapter.state(), LoadState::Idle);
    assert!(adapter.address().is_none());
}

#[test]
fn test_frameless_navigation_opens_externally_once() {
    let (adapter, opener) = adapter();
    let allowed = adapter.on_navigation_request("https://x.com/zer0pse", false);
    assert!(!allowed);
    assert_eq!(opener.opened(), vec![url("https://x.com/zer0pse")]);
}

#[test]
fn test_framed_navigation_stays_in_app() {
    let (adapter, opener) = adapter();
    assert!(adapter.on_navigation_request("https://zeropse.xyz/projects", true));
    assert!(opener.opened().is_empty());
}

#[test]
fn test_navigation_hook_outlives_adapter_borrow() {
    let (adapter, opener) = adapter();
    let hook = adapter.navigation_hook();
    let framed = hook.clone();
    drop(adapter);

    assert!(framed.on_request("https://zeropse.xyz/projects", true));
    assert!(!hook.on_request("https://github.com/zeropse", false));
    assert_eq!(opener.opened(), vec![url("https://github.com/zeropse")]);
}

#[test]
fn test_show_placeholder_resets_to_idle() {
    let (mut adapter, _) = adapter();
    let surface = FakeSurface::default();
    adapter.load(&surface, &url("https://zeropse.xyz/")).unwrap();
    adapter.show_placeholder(&surface, "<p>empty</p>").unwrap();
    assert_eq!(adapter.state(), LoadState::Idle);
    assert!(adapter.address().is_none());
}

// ─── Content pane sync ───

fn app() -> App {
    App::new(None, Arc::new(RecordingOpener::new()))
}

#[test]
fn test_sync_before_selection_does_nothing() {
    let mut app = app();
    let surface = FakeSurface::default();
    sync_content_pane(&mut app, &surface, "<p/>").unwrap();
    assert!(surface.calls.borrow().is_empty());
    assert_eq!(app.adapter.state(), LoadState::Idle);
}

#[test]
fn test_reselect_replaces_target_without_placeholder() {
    let mut app = app();
    let surface = FakeSurface::default();

    app.selection.select("https://zeropse.xyz/");
    sync_content_pane(&mut app, &surface, "<p/>").unwrap();
    app.selection.select("https://valopedia-nine.vercel.app/");
    sync_content_pane(&mut app, &surface, "<p/>").unwrap();

    assert_eq!(
        *surface.calls.borrow(),
        vec![
            "url:https://zeropse.xyz/",
            "url:https://valopedia-nine.vercel.app/"
        ]
    );
    assert_eq!(app.adapter.address(), Some(&url("https://valopedia-nine.vercel.app/")));
}

#[test]
fn test_sync_same_selection_does_not_reload() {
    let mut app = app();
    let surface = FakeSurface::default();
    app.selection.select("https://zeropse.xyz/");
    sync_content_pane(&mut app, &surface, "<p/>").unwrap();
    sync_content_pane(&mut app, &surface, "<p/>").unwrap();
    assert_eq!(surface.calls.borrow().len(), 1);
}

#[test]
fn test_cleared_selection_falls_back_to_placeholder() {
    let mut app = app();
    let surface = FakeSurface::default();
    app.selection.select("https://zeropse.xyz/");
    sync_content_pane(&mut app, &surface, "<p/>").unwrap();
    app.selection.select("::broken");
    sync_content_pane(&mut app, &surface, "<p/>").unwrap();

    assert_eq!(surface.calls.borrow().last().map(String::as_str), Some("placeholder"));
    assert_eq!(app.adapter.state(), LoadState::Idle);
}

#[test]
fn test_is_remote_load() {
    assert!(is_remote_load("https://zeropse.xyz/"));
    assert!(is_remote_load("http://localhost:3000/"));
    assert!(!is_remote_load("about:blank"));
    assert!(!is_remote_load("data:text/html,hi"));
}
