// ZeroViewer services
// Services wrap the outside world: the embedded browser, the OS opener, the
// navigation policy between them, settings, and the color theme.

pub mod browser_adapter;
pub mod external_opener;
pub mod navigation_policy;
pub mod settings_engine;
pub mod theme_engine;
