// ZeroViewer config path for Linux: $XDG_CONFIG_HOME/zeroviewer or ~/.config/zeroviewer

use std::env;
use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("zeroviewer"),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("zeroviewer")
        }
    }
}
