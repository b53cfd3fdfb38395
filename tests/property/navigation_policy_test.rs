//! Property-based tests for the navigation policy.
//!
//! The target-frame flag alone decides the outcome: framed navigations stay
//! in-app and never reach the opener; frameless ones are cancelled and open
//! exactly once, whatever the scheme or host.

use std::sync::Arc;

use proptest::prelude::*;
use url::Url;
use zeroviewer::services::browser_adapter::BrowserAdapter;
use zeroviewer::services::external_opener::RecordingOpener;
use zeroviewer::services::navigation_policy::{decide, handle_navigation, NavigationDecision};

/// Absolute URLs across several schemes and hosts.
fn arb_address() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just("https"),
            Just("http"),
            Just("mailto"),
            Just("ftp"),
            Just("zv")
        ],
        "[a-z]{1,12}(\\.[a-z]{2,6}){1,2}",
        "(/[a-zA-Z0-9_-]{0,10}){0,3}",
    )
        .prop_map(|(scheme, host, path)| format!("{}://{}{}", scheme, host, path))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn frameless_navigation_opens_exactly_once(address in arb_address()) {
        let opener = RecordingOpener::new();
        let allowed = handle_navigation(&opener, &address, false);

        prop_assert!(!allowed);
        let opened = opener.opened();
        prop_assert_eq!(opened.len(), 1);
        prop_assert_eq!(&opened[0], &Url::parse(&address).unwrap());
    }

    #[test]
    fn framed_navigation_never_opens(address in arb_address()) {
        let opener = RecordingOpener::new();
        let allowed = handle_navigation(&opener, &address, true);

        prop_assert!(allowed);
        prop_assert!(opener.opened().is_empty());
        prop_assert_eq!(decide(&address, true), NavigationDecision::Allow);
    }

    #[test]
    fn adapter_routes_through_policy(
        requests in prop::collection::vec((arb_address(), any::<bool>()), 1..20)
    ) {
        let opener = Arc::new(RecordingOpener::new());
        let adapter = BrowserAdapter::new(opener.clone());

        let mut expected = Vec::new();
        for (address, framed) in &requests {
            let allowed = adapter.on_navigation_request(address, *framed);
            prop_assert_eq!(allowed, *framed);
            if !framed {
                expected.push(Url::parse(address).unwrap());
            }
        }
        prop_assert_eq!(opener.opened(), expected);
    }

    #[test]
    fn navigation_hook_matches_adapter(
        requests in prop::collection::vec((arb_address(), any::<bool>()), 1..20)
    ) {
        let via_adapter = Arc::new(RecordingOpener::new());
        let via_hook = Arc::new(RecordingOpener::new());
        let adapter = BrowserAdapter::new(via_adapter.clone());
        let hook = BrowserAdapter::new(via_hook.clone()).navigation_hook();

        for (address, framed) in &requests {
            prop_assert_eq!(
                hook.on_request(address, *framed),
                adapter.on_navigation_request(address, *framed)
            );
        }
        prop_assert_eq!(via_hook.opened(), via_adapter.opened());
    }

    #[test]
    fn arbitrary_strings_never_allowed_without_frame(raw in ".{0,40}") {
        let decision = decide(&raw, false);
        prop_assert!(!decision.allows_in_app());
    }
}
