//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{DetailVisibility, Model};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::{DEFAULT_ASSET_DIR, DEFAULT_IMAGE_ROWS, ThemeMode};

/// Main application struct that owns the terminal and runs the event loop.
#[derive(Debug, Clone)]
pub struct App {
    assets_dir: PathBuf,
    images_enabled: bool,
    force_half_cell: bool,
    image_rows: u16,
    theme: ThemeMode,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create an application with default settings.
    pub fn new() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            images_enabled: true,
            force_half_cell: false,
            image_rows: DEFAULT_IMAGE_ROWS,
            theme: ThemeMode::Auto,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Directory searched for destination images.
    #[must_use]
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Enable or disable inline image rendering.
    #[must_use]
    pub const fn with_images_enabled(mut self, enabled: bool) -> Self {
        self.images_enabled = enabled;
        self
    }

    /// Skip the terminal graphics query and draw images with half cells.
    #[must_use]
    pub const fn with_force_half_cell(mut self, force: bool) -> Self {
        self.force_half_cell = force;
        self
    }

    /// Height of each card's image area, in rows.
    #[must_use]
    pub const fn with_image_rows(mut self, rows: u16) -> Self {
        self.image_rows = rows;
        self
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Set config paths to show in help.
    #[must_use]
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
