//! Window geometry: how the sidebar and content webviews share the window,
//! and where a centered window goes.

/// A rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Splits the window into a fixed-width sidebar on the left and the content
/// pane filling the rest. The sidebar never exceeds the window width.
pub fn split_panes(width: f64, height: f64, sidebar_width: f64) -> (PaneRect, PaneRect) {
    let width = width.max(0.0);
    let height = height.max(0.0);
    let sidebar_width = sidebar_width.clamp(0.0, width);
    let sidebar = PaneRect { x: 0.0, y: 0.0, width: sidebar_width, height };
    let content = PaneRect {
        x: sidebar_width,
        y: 0.0,
        width: width - sidebar_width,
        height,
    };
    (sidebar, content)
}

/// Top-left corner that centers a `window` sized box on a monitor.
/// All values are physical pixels.
pub fn centered_origin(
    monitor_origin: (i32, i32),
    monitor_size: (u32, u32),
    window_size: (u32, u32),
) -> (i32, i32) {
    let dx = (i64::from(monitor_size.0) - i64::from(window_size.0)) / 2;
    let dy = (i64::from(monitor_size.1) - i64::from(window_size.1)) / 2;
    (
        monitor_origin.0 + dx.max(0) as i32,
        monitor_origin.1 + dy.max(0) as i32,
    )
}
