// Library entry so integration tests and external tools can reference internal modules.
// Re-export the same modules used by the binary (`main.rs`).
pub mod api;
pub mod commands;
pub mod constants;
pub mod dialogue;
pub mod handler;
pub mod model;
pub mod publisher;
pub mod router;
pub mod session;
pub mod web;

pub use model::AppState;
