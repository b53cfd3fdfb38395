// ZeroViewer platform abstraction
// Resolves where the optional settings file lives on Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for ZeroViewer.
///
/// - **Linux**: `~/.config/zeroviewer` (or `$XDG_CONFIG_HOME/zeroviewer`)
/// - **macOS**: `~/Library/Application Support/ZeroViewer`
/// - **Windows**: `%APPDATA%/ZeroViewer`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Full path of the settings file inside [`get_config_dir`].
pub fn get_settings_path() -> PathBuf {
    get_config_dir().join("settings.json")
}
