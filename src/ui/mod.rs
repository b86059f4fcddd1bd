//! Terminal UI components.
//!
//! - [`layout`]: Screen split and card geometry
//! - [`viewport`]: Scroll position over the card list
//! - [`style`]: Theming and colors

pub mod layout;
pub mod style;
pub mod viewport;

mod cards;
mod overlays;
mod render;
mod status;
mod text;

pub use overlays::{detail_dialog_rect, detail_dismiss_rect};
pub use render::render;
pub use text::{truncate_to_width, wrap_words};

#[cfg(test)]
mod tests;
