// ZeroViewer state managers
// Managers hold the UI state that event handlers mutate and renderers read.

pub mod selection_manager;
