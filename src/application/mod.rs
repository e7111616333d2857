// src/application/mod.rs
//
// Application Layer - user-facing boundary

pub mod menu;
pub mod state;

pub use menu::Menu;
pub use state::AppState;
