//! ZeroViewer: a link sidebar next to an embedded web view.
//!
//! Entry point: opens the viewer window.
//! When built without the `gui` feature, runs an interactive console demo.

#[cfg(feature = "gui")]
fn main() {
    env_logger::init();
    zeroviewer::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    env_logger::init();

    println!();
    println!("ZeroViewer v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    demo_catalog();
    demo_selection();
    demo_navigation_policy();
    demo_browser_adapter();
    demo_sidebar_ipc();

    println!();
    println!("All components demonstrated.");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_app() -> (zeroviewer::app::App, std::sync::Arc<zeroviewer::services::external_opener::RecordingOpener>) {
    use std::sync::Arc;
    use zeroviewer::app::App;
    use zeroviewer::services::external_opener::RecordingOpener;

    let opener = Arc::new(RecordingOpener::new());
    let mut app = App::new(None, opener.clone());
    app.startup();
    (app, opener)
}

/// Stand-in for a webview: prints what it was asked to show.
#[cfg(not(feature = "gui"))]
struct ConsoleSurface;

#[cfg(not(feature = "gui"))]
impl zeroviewer::services::browser_adapter::RenderSurface for ConsoleSurface {
    fn navigate(&self, address: &url::Url) -> Result<(), zeroviewer::types::errors::AdapterError> {
        println!("    [surface] navigate -> {}", address);
        Ok(())
    }

    fn show_html(&self, html: &str) -> Result<(), zeroviewer::types::errors::AdapterError> {
        println!("    [surface] show local page ({} bytes)", html.len());
        Ok(())
    }
}

#[cfg(not(feature = "gui"))]
fn demo_catalog() {
    use zeroviewer::types::link;
    section("Catalog");

    let profile = link::profile();
    println!("  {} — {}", profile.name, profile.bio);
    for row in &profile.info {
        println!("    [{}] {}", row.icon, row.text);
    }
    for item in link::project_links() {
        println!("  project: {:<10} {}", item.title, item.url);
    }
    for social in link::social_links() {
        println!("  social:  {:<10} {}", social.label, social.url);
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_selection() {
    use zeroviewer::managers::selection_manager::SelectionManagerTrait;
    section("Selection State");

    let (mut app, _) = demo_app();
    println!("  Initial pane: {:?}", app.selection.content_pane());

    app.selection.hover_changed("https://zeropse.xyz/", true);
    let view = app.selection.sidebar_view(&app.links);
    println!("  Hovered rows: {}", view.highlighted_count());

    app.selection.hover_changed("https://zeropse.xyz/", false);
    app.selection.select("https://github.com/zeropse/KnightBot");
    println!("  After select: {:?}", app.selection.content_pane());
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_navigation_policy() {
    use zeroviewer::services::navigation_policy::decide;
    section("Navigation Policy");

    for (url, framed) in [
        ("https://zeropse.xyz/about", true),
        ("https://github.com/zeropse", false),
        ("not a url", false),
    ] {
        println!("  {:<28} framed={:<5} -> {:?}", url, framed, decide(url, framed));
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_browser_adapter() {
    use zeroviewer::managers::selection_manager::SelectionManagerTrait;
    use zeroviewer::services::browser_adapter::PageLoad;
    use zeroviewer::ui::content::sync_content_pane;
    use zeroviewer::ui::pages;
    section("Embedded Browser Adapter");

    let (mut app, opener) = demo_app();
    let placeholder = pages::placeholder_html(&app.theme_engine);

    for item in app.links.clone() {
        app.selection.select(&item.url);
        if let Err(e) = sync_content_pane(&mut app, &ConsoleSurface, &placeholder) {
            println!("  load failed: {}", e);
        }
        app.adapter.on_page_load(&PageLoad::Started(item.url.clone()));
        app.adapter.on_page_load(&PageLoad::Finished(item.url.clone()));
        println!("  {} -> {:?}", item.title, app.adapter.state());
    }

    let allowed = app.adapter.on_navigation_request("https://x.com/zer0pse", false);
    println!("  New-window request allowed in-app: {}", allowed);
    println!("  Sent to system browser: {:?}", opener.opened());
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_sidebar_ipc() {
    use zeroviewer::ui::{ipc, pages};
    section("Sidebar IPC");

    let (mut app, opener) = demo_app();
    println!("  Sidebar page: {} bytes", pages::sidebar_html(&app).len());
    for body in [
        r#"{"cmd":"ui_ready"}"#,
        r#"{"cmd":"hover","url":"https://zeropse.xyz/","hovered":true}"#,
        r#"{"cmd":"select","url":"https://zeropse.xyz/"}"#,
        r#"{"cmd":"open_external","url":"https://github.com/zeropse"}"#,
        r#"{"cmd":"bogus"}"#,
    ] {
        match ipc::parse_message(body) {
            Some(cmd) => {
                let label = format!("{:?}", cmd);
                let rerender = ipc::handle_command(&mut app, cmd);
                println!("  {} (forced render: {})", label, rerender);
            }
            None => println!("  ignored: {}", body),
        }
    }
    println!("  Sent to system browser: {:?}", opener.opened());
}
