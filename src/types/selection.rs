use serde::Serialize;
use url::Url;

/// What the UI is currently pointing at: the active link and the row under the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_url: Option<Url>,
    pub hovered_id: Option<String>,
}

impl SelectionState {
    /// The content pane is a pure function of the selection.
    pub fn content_pane(&self) -> ContentPane {
        match &self.selected_url {
            Some(url) => ContentPane::Browser(url.clone()),
            None => ContentPane::Placeholder,
        }
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered_id.as_deref() == Some(id)
    }

    /// Compares against the parsed form so "https://a.b" matches "https://a.b/".
    pub fn is_selected(&self, url: &str) -> bool {
        match (&self.selected_url, Url::parse(url)) {
            (Some(selected), Ok(candidate)) => *selected == candidate,
            _ => false,
        }
    }
}

/// Right-hand side of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPane {
    Placeholder,
    Browser(Url),
}

/// Render model for one sidebar row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: String,
    pub title: String,
    pub highlighted: bool,
    pub selected: bool,
}

/// Render model handed to the sidebar page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub rows: Vec<RowView>,
}

impl SidebarView {
    pub fn highlighted_count(&self) -> usize {
        self.rows.iter().filter(|r| r.highlighted).count()
    }
}
