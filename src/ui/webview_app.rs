//! Two-pane viewer window using `wry` + `tao`.
//!
//! Architecture:
//! - One `tao` window hosting two child webviews: the sidebar on the left and
//!   the content pane filling the rest. Bounds are recomputed on every resize.
//! - Sidebar → Rust via `window.ipc.postMessage()`; Rust → sidebar via
//!   `evaluate_script(__zv_render(...))`.
//! - Selection changes notify a listener that posts `UserEvent::Render` to
//!   the event loop, which re-renders from state.
//! - The content webview's new-window handler is the "no target frame"
//!   case of the navigation policy; its navigation handler is the framed case.

use std::sync::{Arc, Mutex};

use tao::dpi::{LogicalSize, PhysicalPosition};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::{Window, WindowBuilder};
use url::Url;
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::app::App;
use crate::managers::selection_manager::SelectionManagerTrait;
use crate::services::browser_adapter::{PageLoad, RenderSurface};
use crate::services::external_opener::SystemOpener;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::errors::AdapterError;

use super::content::{is_remote_load, sync_content_pane};
use super::ipc;
use super::layout::{centered_origin, split_panes, PaneRect};
use super::pages;

#[derive(Debug)]
enum UserEvent {
    /// Selection or hover changed, or the sidebar asked for a fresh render.
    Render,
    /// Page-load progress from the content webview.
    PageLoad(PageLoad),
    /// One-shot resize and center after the first layout pass.
    SettleWindow,
}

impl RenderSurface for WebView {
    fn navigate(&self, address: &Url) -> Result<(), AdapterError> {
        self.load_url(address.as_str())
            .map_err(|e| AdapterError::Surface(e.to_string()))
    }

    fn show_html(&self, html: &str) -> Result<(), AdapterError> {
        self.load_html(html)
            .map_err(|e| AdapterError::Surface(e.to_string()))
    }
}

fn to_rect(pane: PaneRect) -> Rect {
    Rect {
        position: wry::dpi::LogicalPosition::new(pane.x, pane.y).into(),
        size: wry::dpi::LogicalSize::new(pane.width, pane.height).into(),
    }
}

fn layout_webviews(window: &Window, sidebar: &WebView, content: &WebView, sidebar_width: f64) {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    let (left, right) = split_panes(size.width, size.height, sidebar_width);
    if let Err(e) = sidebar.set_bounds(to_rect(left)) {
        log::warn!("Failed to resize sidebar: {}", e);
    }
    if let Err(e) = content.set_bounds(to_rect(right)) {
        log::warn!("Failed to resize content pane: {}", e);
    }
}

fn settle_window(window: &Window, width: f64, height: f64) {
    let size = LogicalSize::new(width, height);
    window.set_inner_size(size);
    let Some(monitor) = window.current_monitor() else {
        return;
    };
    let physical = size.to_physical::<u32>(window.scale_factor());
    let origin = monitor.position();
    let extent = monitor.size();
    let (x, y) = centered_origin(
        (origin.x, origin.y),
        (extent.width, extent.height),
        (physical.width, physical.height),
    );
    window.set_outer_position(PhysicalPosition::new(x, y));
}

// ─── Main entry point ───

pub fn run() {
    let mut app = App::new(None, Arc::new(SystemOpener));
    app.startup();
    let settings = app.settings_engine.get_settings().clone();

    let sidebar_html = pages::sidebar_html(&app);
    let placeholder_html = pages::placeholder_html(&app.theme_engine);
    let navigation_hook = app.adapter.navigation_hook();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let render_proxy = proxy.clone();
    app.selection.subscribe(Box::new(move |_state| {
        let _ = render_proxy.send_event(UserEvent::Render);
    }));
    let state = Arc::new(Mutex::new(app));

    let window = WindowBuilder::new()
        .with_title(&settings.window.title)
        .with_inner_size(LogicalSize::new(
            settings.window.launch_width,
            settings.window.launch_height,
        ))
        .with_min_inner_size(LogicalSize::new(
            settings.window.min_width,
            settings.window.min_height,
        ))
        .build(&event_loop)
        .expect("Failed to create window");

    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    let (left, right) = split_panes(size.width, size.height, settings.sidebar_width);

    #[cfg(target_os = "linux")]
    let fixed = {
        use gtk::prelude::*;
        use tao::platform::unix::WindowExtUnix;
        let fixed = gtk::Fixed::new();
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        vbox.pack_start(&fixed, true, true, 0);
        fixed.show_all();
        fixed
    };

    let build_child = |builder: WebViewBuilder<'_>| -> wry::Result<WebView> {
        #[cfg(target_os = "linux")]
        {
            use wry::WebViewBuilderExtUnix;
            builder.build_gtk(&fixed)
        }
        #[cfg(not(target_os = "linux"))]
        {
            builder.build_as_child(&window)
        }
    };

    let ipc_state = state.clone();
    let sidebar = build_child(
        WebViewBuilder::new()
            .with_bounds(to_rect(left))
            .with_html(sidebar_html)
            .with_ipc_handler(move |msg: wry::http::Request<String>| {
                let body = msg.body().as_str();
                log::debug!("[IPC] {}", body.chars().take(200).collect::<String>());
                let Some(cmd) = ipc::parse_message(body) else {
                    return;
                };
                let force_render = match ipc_state.lock() {
                    Ok(mut app) => ipc::handle_command(&mut app, cmd),
                    Err(e) => {
                        log::error!("State lock poisoned: {}", e);
                        return;
                    }
                };
                if force_render {
                    let _ = proxy.send_event(UserEvent::Render);
                }
            }),
    )
    .expect("Failed to create sidebar WebView");

    let framed_hook = navigation_hook.clone();
    let load_proxy = event_loop.create_proxy();
    let content = build_child(
        WebViewBuilder::new()
            .with_bounds(to_rect(right))
            .with_html(placeholder_html.clone())
            .with_navigation_handler(move |url| framed_hook.on_request(&url, true))
            .with_new_window_req_handler(move |url, _features| {
                log::debug!("[NW] {}", url);
                // Never allowed in-app: the policy hands it to the system browser.
                navigation_hook.on_request(&url, false);
                wry::NewWindowResponse::Deny
            })
            .with_on_page_load_handler(move |event, url| {
                if !is_remote_load(&url) {
                    return;
                }
                let event = match event {
                    PageLoadEvent::Started => PageLoad::Started(url),
                    PageLoadEvent::Finished => PageLoad::Finished(url),
                };
                let _ = load_proxy.send_event(UserEvent::PageLoad(event));
            })
            .with_devtools(settings.devtools),
    )
    .expect("Failed to create content WebView");

    let _ = event_loop.create_proxy().send_event(UserEvent::SettleWindow);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                log::info!("Window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                layout_webviews(&window, &sidebar, &content, settings.sidebar_width);
            }

            Event::UserEvent(user_event) => {
                let Ok(mut app) = state.lock() else {
                    log::error!("State lock poisoned; dropping {:?}", user_event);
                    return;
                };
                match user_event {
                    UserEvent::Render => {
                        let view = app.selection.sidebar_view(&app.links);
                        if let Err(e) = sidebar.evaluate_script(&pages::render_script(&view)) {
                            log::warn!("Failed to update sidebar: {}", e);
                        }
                        if let Err(e) = sync_content_pane(&mut app, &content, &placeholder_html) {
                            log::warn!("{}", e);
                        }
                    }
                    UserEvent::PageLoad(event) => {
                        app.adapter.on_page_load(&event);
                        log::debug!("[LOAD] {:?} -> {:?}", event, app.adapter.state());
                    }
                    UserEvent::SettleWindow => {
                        settle_window(
                            &window,
                            settings.window.settled_width,
                            settings.window.settled_height,
                        );
                        layout_webviews(&window, &sidebar, &content, settings.sidebar_width);
                    }
                }
            }

            _ => {}
        }
    });
}
