//! Keeps the content pane in step with the selection.

use crate::app::App;
use crate::managers::selection_manager::SelectionManagerTrait;
use crate::services::browser_adapter::RenderSurface;
use crate::types::errors::AdapterError;
use crate::types::selection::ContentPane;

/// Brings `surface` in line with the current [`ContentPane`]. A new address
/// is loaded straight over the previous page; the placeholder is only shown
/// when nothing is selected.
pub fn sync_content_pane(
    app: &mut App,
    surface: &dyn RenderSurface,
    placeholder_html: &str,
) -> Result<(), AdapterError> {
    match app.selection.content_pane() {
        ContentPane::Browser(url) => {
            if app.adapter.address() == Some(&url) {
                return Ok(());
            }
            app.adapter.load(surface, &url)
        }
        ContentPane::Placeholder => {
            if app.adapter.address().is_none() {
                return Ok(());
            }
            app.adapter.show_placeholder(surface, placeholder_html)
        }
    }
}

/// True for page-load callbacks that belong to remote content rather than
/// the locally rendered placeholder.
pub fn is_remote_load(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
