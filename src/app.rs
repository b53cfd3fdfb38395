//! App Core for ZeroViewer.
//!
//! Central struct holding the catalog, managers and services.

use std::sync::Arc;

use crate::managers::selection_manager::SelectionManager;
use crate::services::browser_adapter::BrowserAdapter;
use crate::services::external_opener::ExternalOpener;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::theme_engine::ThemeEngine;
use crate::types::link::{self, LinkItem, Profile, SocialLink};

pub struct App {
    pub profile: Profile,
    pub links: Vec<LinkItem>,
    pub socials: Vec<SocialLink>,
    pub selection: SelectionManager,
    pub adapter: BrowserAdapter,
    pub opener: Arc<dyn ExternalOpener>,
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
}

impl App {
    /// Creates a new App. `settings_path` overrides the platform settings
    /// location; `opener` is where external navigations are sent.
    pub fn new(settings_path: Option<String>, opener: Arc<dyn ExternalOpener>) -> Self {
        Self {
            profile: link::profile(),
            links: link::project_links(),
            socials: link::social_links(),
            selection: SelectionManager::new(),
            adapter: BrowserAdapter::new(Arc::clone(&opener)),
            opener,
            settings_engine: SettingsEngine::new(settings_path),
            theme_engine: ThemeEngine::new(),
        }
    }

    /// Startup sequence: load settings, falling back to defaults on a bad file.
    pub fn startup(&mut self) {
        if let Err(e) = self.settings_engine.load() {
            log::warn!(
                "{} ({}); continuing with defaults",
                e,
                self.settings_engine.get_config_path()
            );
        }
        log::info!(
            "ZeroViewer {} started with {} project links",
            env!("CARGO_PKG_VERSION"),
            self.links.len()
        );
    }
}
