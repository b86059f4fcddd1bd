// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. image::ImageAsset)
    clippy::module_name_repetitions
)]

//! # Wisata
//!
//! A terminal guide to tourist destinations around Yogyakarta.
//!
//! Wisata shows a fixed list of ten destination cards with:
//! - A title, short description and picture per card
//! - A detail dialog opened from each card's button
//! - A search field in the top bar
//! - Image support (Kitty, Sixel, iTerm2, half-block fallback)
//!
//! ## Architecture
//!
//! Wisata uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop, state and input mapping
//! - [`catalog`]: The destination records
//! - [`config`]: Flag files and effective settings
//! - [`image`]: Asset loading and terminal graphics
//! - [`logging`]: Tracing setup and timing scopes
//! - [`search`]: The search field
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod catalog;
pub mod config;
pub mod image;
pub mod logging;
pub mod search;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, DetailVisibility, Message, Model, update};
    pub use crate::catalog::{Destination, ImageAsset};
    pub use crate::ui::viewport::Viewport;
}
