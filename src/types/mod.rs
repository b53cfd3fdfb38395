// ZeroViewer shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod link;
pub mod selection;
pub mod settings;
