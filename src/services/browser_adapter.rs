//! Embedded Browser Adapter: drives a render surface for the selected link.
//!
//! The adapter owns the load state machine (`Idle → Loading → Loaded`) and
//! routes navigation decisions through the navigation policy. Engine-level
//! failures (DNS, TLS, timeouts) are rendered by the engine's own error page
//! and never reach this layer.

use std::sync::Arc;

use url::Url;

use crate::types::errors::AdapterError;

use super::external_opener::ExternalOpener;
use super::navigation_policy;

/// Something that can be told to navigate to an address, such as a webview.
pub trait RenderSurface {
    fn navigate(&self, address: &Url) -> Result<(), AdapterError>;
    /// Replaces the content with a local document.
    fn show_html(&self, html: &str) -> Result<(), AdapterError>;
}

/// Load progress as reported by the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
}

/// Page-load callbacks from the engine, with the URL it reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLoad {
    Started(String),
    Finished(String),
}

/// Cloneable navigation decision hook. Engine callbacks hold one of these so
/// they never need the adapter itself.
#[derive(Clone)]
pub struct NavigationHook {
    opener: Arc<dyn ExternalOpener>,
}

impl NavigationHook {
    /// Returns `true` to let the embedded view proceed.
    pub fn on_request(&self, requested_url: &str, has_target_frame: bool) -> bool {
        navigation_policy::handle_navigation(self.opener.as_ref(), requested_url, has_target_frame)
    }
}

pub struct BrowserAdapter {
    hook: NavigationHook,
    address: Option<Url>,
    state: LoadState,
    /// Set by `load` until the engine reports the start of that load.
    awaiting_start: bool,
}

impl BrowserAdapter {
    pub fn new(opener: Arc<dyn ExternalOpener>) -> Self {
        Self {
            hook: NavigationHook { opener },
            address: None,
            state: LoadState::Idle,
            awaiting_start: false,
        }
    }

    /// Starts loading `address`, replacing whatever was shown before.
    pub fn load(&mut self, surface: &dyn RenderSurface, address: &Url) -> Result<(), AdapterError> {
        log::info!("Loading {}", address);
        surface.navigate(address)?;
        self.address = Some(address.clone());
        self.state = LoadState::Loading;
        self.awaiting_start = true;
        Ok(())
    }

    /// Decision hook invoked before each navigation. Returns `true` to let
    /// the embedded view proceed.
    pub fn on_navigation_request(&self, requested_url: &str, has_target_frame: bool) -> bool {
        self.hook.on_request(requested_url, has_target_frame)
    }

    pub fn navigation_hook(&self) -> NavigationHook {
        self.hook.clone()
    }

    /// Engine callback. Ignored while idle. After `load`, events belonging to
    /// the replaced page are dropped until the new address reports `Started`.
    pub fn on_page_load(&mut self, event: &PageLoad) {
        if self.state == LoadState::Idle {
            return;
        }
        match event {
            PageLoad::Started(url) => {
                if self.awaiting_start {
                    if !self.is_current(url) {
                        log::debug!("Ignoring stale start of {}", url);
                        return;
                    }
                    self.awaiting_start = false;
                }
                self.state = LoadState::Loading;
            }
            PageLoad::Finished(url) => {
                if self.awaiting_start {
                    log::debug!("Ignoring stale finish of {}", url);
                    return;
                }
                self.state = LoadState::Loaded;
            }
        }
    }

    fn is_current(&self, reported: &str) -> bool {
        match (&self.address, Url::parse(reported)) {
            (Some(address), Ok(reported)) => *address == reported,
            _ => false,
        }
    }

    /// Drops the current target and shows `html` instead.
    pub fn show_placeholder(&mut self, surface: &dyn RenderSurface, html: &str) -> Result<(), AdapterError> {
        self.address = None;
        self.state = LoadState::Idle;
        self.awaiting_start = false;
        surface.show_html(html)
    }

    pub fn address(&self) -> Option<&Url> {
        self.address.as_ref()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }
}
