//! ZeroViewer UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The window hosts two child webviews: the sidebar (local HTML, talks to
//! Rust over wry IPC) and the content pane (the selected link, or a local
//! placeholder page). Everything except the `wry`/`tao` shell itself is
//! plain Rust and builds without the `gui` feature.

pub mod content;
pub mod ipc;
pub mod layout;
pub mod pages;

#[cfg(feature = "gui")]
pub mod webview_app;
