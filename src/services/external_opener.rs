//! External Opener: hands addresses to the operating system's default browser.

use std::sync::Mutex;

use url::Url;

use crate::types::errors::OpenError;

/// Trait defining the OS URL-opening facility.
pub trait ExternalOpener: Send + Sync {
    fn open(&self, address: &Url) -> Result<(), OpenError>;
}

/// Opens addresses with the platform launcher (`xdg-open`, `open`, `start`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, address: &Url) -> Result<(), OpenError> {
        log::info!("Opening {} in the default browser", address);
        // Detached so the UI thread never waits on the launcher.
        open::that_detached(address.as_str())
            .map_err(|e| OpenError::LaunchFailed(format!("{}: {}", address, e)))
    }
}

/// Records requests instead of launching anything. Used by demo mode and tests.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<Url>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every address requested so far, oldest first.
    pub fn opened(&self) -> Vec<Url> {
        self.opened
            .lock()
            .map(|list| list.clone())
            .unwrap_or_default()
    }
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, address: &Url) -> Result<(), OpenError> {
        log::debug!("Recorded external open: {}", address);
        self.opened
            .lock()
            .map_err(|e| OpenError::LaunchFailed(e.to_string()))?
            .push(address.clone());
        Ok(())
    }
}

/// Parses `raw` and opens it. A malformed string yields `InvalidAddress`
/// and the opener is never called.
pub fn open_address(opener: &dyn ExternalOpener, raw: &str) -> Result<(), OpenError> {
    let address = Url::parse(raw).map_err(|_| OpenError::InvalidAddress(raw.to_string()))?;
    opener.open(&address)
}
