// Library crate: exposes testable modules for unit and integration tests.
// GUI-specific modules (app, ui, viewport rendering) remain in the binary crate.

pub mod fixtures;
pub mod geometry;
pub mod graph;
pub mod scene;
pub mod state;
