//! Sidebar IPC: messages posted by the sidebar page through
//! `window.ipc.postMessage()` and how they mutate the app.

use serde::Deserialize;

use crate::app::App;
use crate::managers::selection_manager::SelectionManagerTrait;
use crate::services::external_opener;
use crate::types::errors::OpenError;

/// A decoded sidebar message. The JSON shape is `{"cmd": "...", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum SidebarCommand {
    /// The sidebar script finished loading and wants the current state.
    UiReady,
    /// A project row was activated.
    Select { url: String },
    /// The cursor entered or left a project row.
    Hover { url: String, hovered: bool },
    /// A social button was pressed.
    OpenExternal { url: String },
}

/// Decodes a raw IPC body. Unknown commands and malformed JSON yield `None`.
pub fn parse_message(body: &str) -> Option<SidebarCommand> {
    match serde_json::from_str(body) {
        Ok(cmd) => Some(cmd),
        Err(e) => {
            let preview: String = body.chars().take(200).collect();
            log::debug!("Ignoring IPC message ({}): {}", e, preview);
            None
        }
    }
}

/// Applies a command. Returns `true` when the sidebar must be re-rendered
/// even though the selection state did not change.
pub fn handle_command(app: &mut App, cmd: SidebarCommand) -> bool {
    match cmd {
        SidebarCommand::UiReady => true,
        SidebarCommand::Select { url } => {
            app.selection.select(&url);
            false
        }
        SidebarCommand::Hover { url, hovered } => {
            app.selection.hover_changed(&url, hovered);
            false
        }
        SidebarCommand::OpenExternal { url } => {
            match external_opener::open_address(app.opener.as_ref(), &url) {
                Ok(()) => {}
                Err(OpenError::InvalidAddress(addr)) => {
                    log::debug!("Skipping malformed social address: {}", addr)
                }
                Err(e) => log::warn!("{}", e),
            }
            false
        }
    }
}
