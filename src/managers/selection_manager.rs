use url::Url;

use crate::types::link::LinkItem;
use crate::types::selection::{ContentPane, RowView, SelectionState, SidebarView};

/// Callback run after every state change.
pub type SelectionListener = Box<dyn FnMut(&SelectionState) + Send>;

/// Trait defining the selection/hover state interface.
pub trait SelectionManagerTrait {
    fn select(&mut self, address: &str);
    fn set_hovered(&mut self, id: Option<&str>);
    fn hover_changed(&mut self, id: &str, is_hovered: bool);
    fn state(&self) -> &SelectionState;
    fn content_pane(&self) -> ContentPane;
    fn sidebar_view(&self, links: &[LinkItem]) -> SidebarView;
    fn subscribe(&mut self, listener: SelectionListener);
}

/// Observable container for [`SelectionState`].
pub struct SelectionManager {
    state: SelectionState,
    listeners: Vec<SelectionListener>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self {
            state: SelectionState::default(),
            listeners: Vec::new(),
        }
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionManagerTrait for SelectionManager {
    /// Overwrites the selection. No check against the catalog; a malformed
    /// address parses to nothing and clears the selection.
    fn select(&mut self, address: &str) {
        let parsed = match Url::parse(address) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("Ignoring malformed address {:?}: {}", address, e);
                None
            }
        };
        if parsed == self.state.selected_url {
            return;
        }
        self.state.selected_url = parsed;
        self.notify();
    }

    fn set_hovered(&mut self, id: Option<&str>) {
        if self.state.hovered_id.as_deref() == id {
            return;
        }
        self.state.hovered_id = id.map(str::to_string);
        self.notify();
    }

    /// Row-level hover hook: entering a row highlights it, leaving any row
    /// clears the highlight.
    fn hover_changed(&mut self, id: &str, is_hovered: bool) {
        if is_hovered {
            self.set_hovered(Some(id));
        } else {
            self.set_hovered(None);
        }
    }

    fn state(&self) -> &SelectionState {
        &self.state
    }

    fn content_pane(&self) -> ContentPane {
        self.state.content_pane()
    }

    fn sidebar_view(&self, links: &[LinkItem]) -> SidebarView {
        let rows = links
            .iter()
            .map(|link| RowView {
                id: link.id().to_string(),
                title: link.title.clone(),
                highlighted: self.state.is_hovered(link.id()),
                selected: self.state.is_selected(&link.url),
            })
            .collect();
        SidebarView { rows }
    }

    fn subscribe(&mut self, listener: SelectionListener) {
        self.listeners.push(listener);
    }
}
