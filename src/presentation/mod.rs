// src/presentation/mod.rs
//
// Read-only renderings of a catalog snapshot.

pub mod console;
pub mod html;

pub use html::{escape_html, generate_website, render_page, PLACEHOLDER_POSTER};
