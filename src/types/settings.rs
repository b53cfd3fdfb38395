use serde::{Deserialize, Serialize};

/// Top-level viewer settings. Every field falls back to its default when
/// missing from the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerSettings {
    pub window: WindowSettings,
    pub sidebar_width: f64,
    pub devtools: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            sidebar_width: 300.0,
            devtools: cfg!(debug_assertions),
        }
    }
}

/// Window geometry in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    /// Size the window is created with.
    pub launch_width: f64,
    pub launch_height: f64,
    /// Size applied (and then centered) once the first layout pass is done.
    pub settled_width: f64,
    pub settled_height: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "ZeroViewer".to_string(),
            launch_width: 1200.0,
            launch_height: 900.0,
            settled_width: 1024.0,
            settled_height: 768.0,
            min_width: 640.0,
            min_height: 480.0,
        }
    }
}
