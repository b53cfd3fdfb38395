//! Navigation Policy: decides, before each navigation, whether the embedded
//! view renders it or the system browser takes it.
//!
//! The only discriminator is whether the navigation has a target frame. A
//! navigation without one is asking for a new top-level window, so it is
//! cancelled in-app and the address goes to the external opener. Scheme and
//! domain play no part in the decision.

use url::Url;

use super::external_opener::ExternalOpener;

/// Verdict returned for a single navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Render in the embedded view.
    Allow,
    /// Cancel in-app and open this address externally.
    OpenExternally(Url),
    /// Cancel in-app; the address could not be parsed so nothing is opened.
    Cancel,
}

impl NavigationDecision {
    pub fn allows_in_app(&self) -> bool {
        matches!(self, NavigationDecision::Allow)
    }
}

/// Pure decision, no side effects.
pub fn decide(requested_url: &str, has_target_frame: bool) -> NavigationDecision {
    if has_target_frame {
        return NavigationDecision::Allow;
    }
    match Url::parse(requested_url) {
        Ok(url) => NavigationDecision::OpenExternally(url),
        Err(_) => NavigationDecision::Cancel,
    }
}

/// Applies [`decide`] and performs its side effect. Returns `true` when the
/// embedded view may proceed with the navigation.
pub fn handle_navigation(
    opener: &dyn ExternalOpener,
    requested_url: &str,
    has_target_frame: bool,
) -> bool {
    match decide(requested_url, has_target_frame) {
        NavigationDecision::Allow => true,
        NavigationDecision::OpenExternally(url) => {
            if let Err(e) = opener.open(&url) {
                log::warn!("{}", e);
            }
            false
        }
        NavigationDecision::Cancel => {
            log::debug!("Dropped new-window request with malformed address: {}", requested_url);
            false
        }
    }
}
